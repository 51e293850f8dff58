use super::error::DataError;

// ---------------------------------------------------------------------------
// Fixed arithmetic applied to recorded results before plotting
// ---------------------------------------------------------------------------

/// Reverse the order of table rows (last measured row ends up on top).
pub fn reverse_rows<T>(mut rows: Vec<T>) -> Vec<T> {
    rows.reverse();
    rows
}

/// Divide every value by `divisor`, e.g. milliseconds → seconds with 1000.
pub fn scale(values: &[f64], divisor: f64) -> Vec<f64> {
    values.iter().map(|v| v / divisor).collect()
}

/// Element-wise `left[i] - right[i]`.
pub fn difference(left: &[f64], right: &[f64]) -> Result<Vec<f64>, DataError> {
    if left.len() != right.len() {
        return Err(DataError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.iter().zip(right).map(|(l, r)| l - r).collect())
}

/// `start + step * i` for `i in 0..n`.
pub fn arithmetic_ticks(start: i64, step: i64, n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| start + step * i).collect()
}

/// `0, 1, …, n - 1` as plot positions.
pub fn index_ticks(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_rows() {
        assert_eq!(reverse_rows(vec![1, 2, 3]), vec![3, 2, 1]);
        assert!(reverse_rows(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(&[247469.0, 1000.0], 1000.0), vec![247.469, 1.0]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[51.0, 49.0], &[17.0, 23.0]).unwrap(), vec![34.0, 26.0]);
        assert_eq!(
            difference(&[1.0], &[1.0, 2.0]).unwrap_err(),
            DataError::LengthMismatch { left: 1, right: 2 }
        );
    }

    #[test]
    fn test_arithmetic_ticks() {
        assert_eq!(
            arithmetic_ticks(1000, 1000, 8),
            vec![1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000]
        );
        assert_eq!(arithmetic_ticks(10, -1, 9), vec![10, 9, 8, 7, 6, 5, 4, 3, 2]);
        assert!(arithmetic_ticks(0, 1, 0).is_empty());
    }

    #[test]
    fn test_index_ticks() {
        assert_eq!(index_ticks(3), vec![0.0, 1.0, 2.0]);
    }
}
