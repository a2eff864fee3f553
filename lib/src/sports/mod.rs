//! Declarative sport definitions: one module per sport, each exposing a
//! `spec()` with the scoring model and the curated all-time roster.

pub mod american_football;
pub mod badminton;
pub mod cricket;
pub mod field_hockey;
pub mod mens_boxing;
pub mod mens_golf;
pub mod mens_hockey;
pub mod mens_soccer;
pub mod mens_swimming;
pub mod mens_table_tennis;
pub mod mens_tennis;
pub mod mens_ufc;
pub mod mlb;
pub mod nba;
pub mod rugby;
pub mod volleyball;
pub mod wnba;
pub mod womens_boxing;
pub mod womens_golf;
pub mod womens_hockey;
pub mod womens_soccer;
pub mod womens_swimming;
pub mod womens_tennis;
pub mod womens_ufc;

#[cfg(test)]
mod tests {
    use crate::normalize::normalize_indexes;
    use crate::{Sport, NORMALIZED_COL};
    use itertools::Itertools;

    /// Every sport definition must be internally coherent: each athlete stat
    /// refers to a scored column, the materialized dataset carries every
    /// model column, and the full score-then-normalize pipeline runs with the
    /// top athlete at exactly 100.
    #[test]
    fn every_sport_spec_is_coherent() {
        for sport in Sport::ALL {
            let spec = sport.spec();
            assert_eq!(spec.sport, sport);
            assert!(spec.athletes.len() >= 2, "{sport}: roster too small");

            let model_columns = spec.model.columns();
            assert!(!model_columns.is_empty(), "{sport}: empty model");
            for athlete in &spec.athletes {
                for column in athlete.stat_columns() {
                    assert!(
                        model_columns.contains(&column),
                        "{sport}: {} has unscored stat {column}",
                        athlete.name
                    );
                }
            }

            let unique_names = spec.athletes.iter().map(|a| a.name).unique().count();
            assert_eq!(
                unique_names,
                spec.athletes.len(),
                "{sport}: duplicate athlete names"
            );

            let dataset = spec.dataset().unwrap();
            for column in &model_columns {
                assert!(
                    dataset.column(column).is_ok(),
                    "{sport}: dataset missing {column}"
                );
            }

            let scored = dataset.score(&spec.model).unwrap();
            let normalized = normalize_indexes(scored).unwrap();
            let values: Vec<f64> = normalized
                .column(NORMALIZED_COL)
                .unwrap()
                .f64()
                .unwrap()
                .into_no_null_iter()
                .collect();
            assert!(
                (values[0] - 100.0).abs() < 1e-9,
                "{sport}: top score is {} not 100",
                values[0]
            );
            for pair in values.windows(2) {
                assert!(pair[0] >= pair[1], "{sport}: not sorted non-increasing");
            }
        }
    }
}
