use super::types::Domain;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Min/max of a series of counts. Returns `[0, 0]` for empty input.
pub fn count_domain(counts: impl IntoIterator<Item = usize>) -> Domain<usize> {
    counts
        .into_iter()
        .fold(None, |acc: Option<Domain<usize>>, c| match acc {
            None => Some(Domain { min: c, max: c }),
            Some(d) => Some(Domain {
                min: d.min.min(c),
                max: d.max.max(c),
            }),
        })
        .unwrap_or(Domain { min: 0, max: 0 })
}

/// Min/max of a series of values, skipping NaN and infinities. Returns
/// `[0, 0]` when no finite value remains.
pub fn value_domain(values: impl IntoIterator<Item = f64>) -> Domain<f64> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<Domain<f64>>, v| match acc {
            None => Some(Domain { min: v, max: v }),
            Some(d) => Some(Domain {
                min: d.min.min(v),
                max: d.max.max(v),
            }),
        })
        .unwrap_or(Domain { min: 0.0, max: 0.0 })
}
