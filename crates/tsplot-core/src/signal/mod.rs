//! Signal processing module
//!
//! Stateless transforms over a single numeric sequence: moving average,
//! direct DFT/IDFT, log transforms and cepstrum, plus the display pipeline
//! that chains them.

pub mod cepstrum;
pub mod dft;
pub mod moving_average;
pub mod pipeline;

pub use cepstrum::{cepstrum, log_spectrum, log_transform, real_cepstrum, LogType};
pub use dft::{dft, dft_abs, idft, idft_real, idft_spectrum, Spectrum};
pub use moving_average::moving_average;
pub use pipeline::{
    process_all, process_series, with_moving_average, PostProcess, ProcessMode, ProcessParams,
    Stage,
};
