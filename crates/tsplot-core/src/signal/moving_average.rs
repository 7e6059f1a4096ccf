//! Centered moving average

/// Centered moving average over `values`.
///
/// For index `i` the window is `[i - w/2, i + w/2)` for even `w` and
/// `[i - w/2, i + w/2]` for odd `w`, clamped to the sequence. An even window
/// cut at the right edge is shifted left to stay `w` wide when possible.
/// Windows shrink at the boundaries; they never wrap or pad.
///
/// The output has the same length as the input. A window of 0 or 1 returns
/// the input unchanged.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.to_vec();
    }

    let len = values.len();
    let half = window / 2;
    let odd = window % 2 == 1;

    (0..len)
        .map(|i| {
            let mut start = i.saturating_sub(half);
            let end = (i + half + usize::from(odd)).min(len);
            if !odd && end - start < window {
                start = end.saturating_sub(window);
            }
            let slice = &values[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_one_is_identity() {
        let x = [1.5, -2.0, 3.25, 0.0, 7.0];
        assert_eq!(moving_average(&x, 1), x.to_vec());
        assert_eq!(moving_average(&x, 0), x.to_vec());
    }

    #[test]
    fn test_length_preserved() {
        let x: Vec<f64> = (0..17).map(|i| (i as f64).sin()).collect();
        for w in 1..=x.len() {
            assert_eq!(moving_average(&x, w).len(), x.len());
        }
    }

    #[test]
    fn test_odd_window() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = moving_average(&x, 3);
        // Edges shrink to two elements
        assert_relative_eq!(y[0], 1.5);
        assert_relative_eq!(y[1], 2.0);
        assert_relative_eq!(y[2], 3.0);
        assert_relative_eq!(y[3], 4.0);
        assert_relative_eq!(y[4], 4.5);
    }

    #[test]
    fn test_even_window_shifts_left_at_right_edge() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = moving_average(&x, 2);
        // i=0: [0, 1) -> shifted to [0, 1) (cannot grow left)
        assert_relative_eq!(y[0], 1.0);
        // i=1: [0, 2)
        assert_relative_eq!(y[1], 1.5);
        // i=4: [3, 5)
        assert_relative_eq!(y[4], 4.5);

        let y = moving_average(&x, 4);
        // i=4: [2, 5) is 3 wide, shifted to [1, 5)
        assert_relative_eq!(y[4], 3.5);
        // i=0: [0, 2) cannot be widened
        assert_relative_eq!(y[0], 1.5);
    }

    #[test]
    fn test_constant_sequence() {
        let x = vec![2.0; 10];
        for w in 1..=10 {
            for v in moving_average(&x, w) {
                assert_relative_eq!(v, 2.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_empty() {
        assert!(moving_average(&[], 5).is_empty());
    }
}
