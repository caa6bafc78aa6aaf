/// Day-over-day differences of a cumulative series.
///
/// The result has the same length as the input; element 0 is 0 and element
/// `i` is `series[i] - series[i - 1]`.
pub fn daily_deltas(series: &[f64]) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(series.len());
    let mut prev = None;
    for &value in series {
        deltas.push(match prev {
            None => 0.0,
            Some(p) => value - p,
        });
        prev = Some(value);
    }
    deltas
}

/// Reconstruct a cumulative series from its deltas and starting value.
///
/// Inverse of [`daily_deltas`] when `start` is the first cumulative value.
pub fn cumulative_from_deltas(start: f64, deltas: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(deltas.len());
    let mut running = start;
    for (i, &d) in deltas.iter().enumerate() {
        if i > 0 {
            running += d;
        }
        out.push(running);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deltas_basic() {
        assert_eq!(
            daily_deltas(&[10.0, 20.0, 40.0, 80.0]),
            vec![0.0, 10.0, 20.0, 40.0]
        );
    }

    #[test]
    fn test_deltas_first_element_zero() {
        let deltas = daily_deltas(&[5.0, 7.0]);
        assert_eq!(deltas[0], 0.0);
    }

    #[test]
    fn test_deltas_empty() {
        assert!(daily_deltas(&[]).is_empty());
    }

    #[test]
    fn test_deltas_single_element() {
        assert_eq!(daily_deltas(&[42.0]), vec![0.0]);
    }

    #[test]
    fn test_deltas_length_matches_input() {
        let series = vec![1.0; 17];
        assert_eq!(daily_deltas(&series).len(), 17);
    }

    #[test]
    fn test_deltas_can_be_negative() {
        // Corrections in reported data produce negative deltas
        assert_eq!(daily_deltas(&[10.0, 8.0]), vec![0.0, -2.0]);
    }

    #[test]
    fn test_roundtrip_basic() {
        let series = vec![10.0, 20.0, 40.0, 80.0, 85.0];
        let deltas = daily_deltas(&series);
        assert_eq!(cumulative_from_deltas(series[0], &deltas), series);
    }

    #[test]
    fn test_cumulative_empty() {
        assert!(cumulative_from_deltas(0.0, &[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_reconstructs_exactly(
            series in proptest::collection::vec(-1.0e6f64..1.0e6, 1..100)
        ) {
            let deltas = daily_deltas(&series);
            prop_assert_eq!(deltas.len(), series.len());
            prop_assert_eq!(deltas[0], 0.0);
            let rebuilt = cumulative_from_deltas(series[0], &deltas);
            for (orig, back) in series.iter().zip(rebuilt.iter()) {
                prop_assert!((orig - back).abs() < 1e-6);
            }
        }
    }
}
