use crate::model::ScoredDf;
use crate::{Error, Result, INDEX_COL, NORMALIZED_COL};
use polars::prelude::*;

/// Rescales the raw index column so the maximum value maps to 100 and sorts
/// non-increasing by the rescaled column. Max-only scaling: the lowest score
/// does not map to 0.
pub fn normalize_indexes(scored: ScoredDf) -> Result<ScoredDf> {
    if scored.height() == 0 {
        return Err(Error::EmptyDataset);
    }
    let max = scored
        .column(INDEX_COL)?
        .cast(&DataType::Float64)?
        .f64()?
        .max()
        .ok_or(Error::NonPositiveIndex)?;
    if max <= 0.0 {
        return Err(Error::NonPositiveIndex);
    }

    let df = scored
        .0
        .lazy()
        .with_column((col(INDEX_COL) / lit(max) * lit(100.0)).alias(NORMALIZED_COL))
        .sort(
            [NORMALIZED_COL],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    Ok(ScoredDf(df))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NAME_COL;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn scored(values: &[f64]) -> ScoredDf {
        let names: Vec<String> = (0..values.len()).map(|i| format!("P{i}")).collect();
        ScoredDf(
            DataFrame::new(vec![
                Series::new(NAME_COL, names),
                Series::new(INDEX_COL, values.to_vec()),
            ])
            .unwrap(),
        )
    }

    fn normalized_values(df: &ScoredDf) -> Vec<f64> {
        df.column(NORMALIZED_COL)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn maximum_row_maps_to_exactly_one_hundred() {
        let normalized = normalize_indexes(scored(&[850.0, 750.0, 650.0])).unwrap();
        let values = normalized_values(&normalized);
        assert!(approx_eq(values[0], 100.0, 1e-10));
        assert!(approx_eq(values[1], 750.0 / 850.0 * 100.0, 1e-10));
        assert!(approx_eq(values[2], 650.0 / 850.0 * 100.0, 1e-10));
    }

    #[test]
    fn range_is_zero_exclusive_to_one_hundred_inclusive() {
        let normalized = normalize_indexes(scored(&[12.5, 420.0, 37.0, 199.9])).unwrap();
        for value in normalized_values(&normalized) {
            assert!(value > 0.0 && value <= 100.0, "out of range: {value}");
        }
    }

    #[test]
    fn output_is_sorted_non_increasing() {
        let normalized = normalize_indexes(scored(&[10.0, 90.0, 40.0])).unwrap();
        let values = normalized_values(&normalized);
        for pair in values.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_indexes(scored(&[500.0, 250.0, 100.0])).unwrap();
        // Re-normalize using the already-normalized column as the raw index
        let again = ScoredDf(
            once.0
                .clone()
                .lazy()
                .with_column(col(NORMALIZED_COL).alias(INDEX_COL))
                .collect()
                .unwrap(),
        );
        let twice = normalize_indexes(again).unwrap();
        for (a, b) in normalized_values(&once)
            .iter()
            .zip(normalized_values(&twice).iter())
        {
            assert!(approx_eq(*a, *b, 1e-10));
        }
    }

    #[test]
    fn all_zero_scores_are_an_error() {
        assert!(matches!(
            normalize_indexes(scored(&[0.0, 0.0])),
            Err(Error::NonPositiveIndex)
        ));
    }

    #[test]
    fn empty_frame_is_an_error() {
        assert!(matches!(
            normalize_indexes(scored(&[])),
            Err(Error::EmptyDataset)
        ));
    }
}
