use crate::dataset::DatasetDf;
use crate::{Error, Result, INDEX_COL};
use derive_deref::Deref;
use itertools::Itertools;
use polars::prelude::*;
use std::path::Path;

/// One term of a sport's scoring model.
#[derive(Debug, Clone, Copy)]
enum Term {
    /// `weight * value`
    Linear { column: &'static str, weight: f64 },
    /// `+bonus` once `value > threshold`
    BonusOver {
        column: &'static str,
        threshold: f64,
        bonus: f64,
    },
    /// `weight * min(value, cap)`
    Capped {
        column: &'static str,
        cap: f64,
        weight: f64,
    },
}

impl Term {
    fn column(&self) -> &'static str {
        match self {
            Term::Linear { column, .. }
            | Term::BonusOver { column, .. }
            | Term::Capped { column, .. } => column,
        }
    }

    fn expr(&self) -> Expr {
        match *self {
            Term::Linear { column, weight } => col(column).fill_null(lit(0.0)) * lit(weight),
            Term::BonusOver {
                column,
                threshold,
                bonus,
            } => when(col(column).fill_null(lit(0.0)).gt(lit(threshold)))
                .then(lit(bonus))
                .otherwise(lit(0.0)),
            Term::Capped {
                column,
                cap,
                weight,
            } => when(col(column).fill_null(lit(0.0)).gt(lit(cap)))
                .then(lit(cap))
                .otherwise(col(column).fill_null(lit(0.0)))
                * lit(weight),
        }
    }
}

/// A sport's index score as a declarative table of weighted terms.
///
/// The index is the sum of every term evaluated against one athlete row.
/// Null cells score as zero; columns absent from the dataset altogether are
/// rejected by [`DatasetDf::score`] before anything is computed.
#[derive(Debug, Clone, Default)]
pub struct ScoringModel {
    terms: Vec<Term>,
}

impl ScoringModel {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Adds `weight * value` to the index.
    pub fn weight(mut self, column: &'static str, weight: f64) -> Self {
        self.terms.push(Term::Linear { column, weight });
        self
    }

    /// Adds a flat `bonus` when the column exceeds `threshold`.
    pub fn bonus_over(mut self, column: &'static str, threshold: f64, bonus: f64) -> Self {
        self.terms.push(Term::BonusOver {
            column,
            threshold,
            bonus,
        });
        self
    }

    /// Adds `weight * value` with the value clamped to `cap`. Used for the
    /// retirement penalties: years since retirement count at most 30 times.
    pub fn capped(mut self, column: &'static str, cap: f64, weight: f64) -> Self {
        self.terms.push(Term::Capped {
            column,
            cap,
            weight,
        });
        self
    }

    /// Columns referenced by the model, in declaration order, deduplicated.
    pub fn columns(&self) -> Vec<&'static str> {
        self.terms.iter().map(Term::column).unique().collect()
    }

    /// Compiles the whole model into a single scoring expression.
    pub(crate) fn expr(&self) -> Expr {
        self.terms
            .iter()
            .map(Term::expr)
            .reduce(|acc, term| acc + term)
            .unwrap_or_else(|| lit(0.0))
    }
}

#[derive(Debug, Clone, Deref)]
pub struct ScoredDf(pub(crate) DataFrame);

impl ScoredDf {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(ScoredDf(crate::load_csv(path)?))
    }

    pub fn write_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        crate::write_csv(&mut self.0, path)
    }
}

impl DatasetDf {
    /// Validates the model's schema against the dataset, computes the
    /// weighted index, and sorts non-increasing by it.
    pub fn score(&self, model: &ScoringModel) -> Result<ScoredDf> {
        let missing: Vec<String> = model
            .columns()
            .into_iter()
            .filter(|column| self.column(column).is_err())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        let df = self
            .0
            .clone()
            .lazy()
            .with_column(model.expr().alias(INDEX_COL))
            .sort(
                [INDEX_COL],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .collect()?;
        log::debug!("scored {} athletes", df.height());
        Ok(ScoredDf(df))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NAME_COL;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn dataset(columns: &[(&str, Vec<f64>)], names: &[&str]) -> DatasetDf {
        let mut series = vec![Series::new(NAME_COL, names)];
        for (name, values) in columns {
            series.push(Series::new(name, values.clone()));
        }
        DatasetDf::new(DataFrame::new(series).unwrap())
    }

    fn indexes(scored: &ScoredDf) -> Vec<f64> {
        scored
            .column(INDEX_COL)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn badminton_scenario_scores_one_hundred() {
        // 2 Olympic medals and a Hall of Fame induction, everything else zero
        let model = ScoringModel::new()
            .weight("olympic_medals", 35.0)
            .weight("hall_of_fame_inducted", 30.0)
            .weight("years_active", 1.0);
        let df = dataset(
            &[
                ("olympic_medals", vec![2.0]),
                ("hall_of_fame_inducted", vec![1.0]),
                ("years_active", vec![0.0]),
            ],
            &["Lin Dan"],
        );
        let scored = df.score(&model).unwrap();
        assert!(approx_eq(indexes(&scored)[0], 100.0, 1e-10));
    }

    #[test]
    fn scoring_is_deterministic() {
        let model = ScoringModel::new()
            .weight("wins", 3.0)
            .weight("losses", -2.0);
        let df = dataset(
            &[("wins", vec![50.0, 30.0]), ("losses", vec![5.0, 0.0])],
            &["A", "B"],
        );
        let first = indexes(&df.score(&model).unwrap());
        let second = indexes(&df.score(&model).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn scoring_is_linear_in_each_column() {
        let model = ScoringModel::new()
            .weight("goals", 2.0)
            .weight("assists", 1.0);
        let base = dataset(
            &[("goals", vec![10.0]), ("assists", vec![4.0])],
            &["A"],
        );
        let doubled = dataset(
            &[("goals", vec![20.0]), ("assists", vec![4.0])],
            &["A"],
        );
        let base_score = indexes(&base.score(&model).unwrap())[0];
        let doubled_score = indexes(&doubled.score(&model).unwrap())[0];
        // Doubling one stat doubles exactly that stat's contribution
        assert!(approx_eq(doubled_score - base_score, 10.0 * 2.0, 1e-10));
    }

    #[test]
    fn bonus_applies_only_over_threshold() {
        let model = ScoringModel::new().bonus_over("hall_of_fame", 0.5, 20.0);
        let df = dataset(&[("hall_of_fame", vec![1.0, 0.0])], &["In", "Out"]);
        let scores = indexes(&df.score(&model).unwrap());
        assert!(approx_eq(scores[0], 20.0, 1e-10));
        assert!(approx_eq(scores[1], 0.0, 1e-10));
    }

    #[test]
    fn capped_term_clamps_value() {
        let model = ScoringModel::new().capped("years_since_retirement", 30.0, -0.5);
        let df = dataset(
            &[("years_since_retirement", vec![45.0, 10.0, 0.0])],
            &["Long Retired", "Recent", "Active"],
        );
        let scored = df.score(&model).unwrap();
        let by_name: Vec<(String, f64)> = scored
            .column(NAME_COL)
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .map(String::from)
            .zip(indexes(&scored))
            .collect();
        for (name, score) in by_name {
            let expected = match name.as_str() {
                "Long Retired" => -15.0, // clamped to 30 years
                "Recent" => -5.0,
                _ => 0.0,
            };
            assert!(approx_eq(score, expected, 1e-10), "{name}: {score}");
        }
    }

    #[test]
    fn missing_column_is_an_error() {
        let model = ScoringModel::new().weight("wins", 3.0).weight("kos", 1.5);
        let df = dataset(&[("wins", vec![10.0])], &["A"]);
        match df.score(&model) {
            Err(Error::MissingColumns(columns)) => assert_eq!(columns, vec!["kos".to_string()]),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn scored_rows_are_non_increasing() {
        let model = ScoringModel::new().weight("points", 1.0);
        let df = dataset(
            &[("points", vec![10.0, 90.0, 40.0, 70.0])],
            &["D", "A", "C", "B"],
        );
        let scores = indexes(&df.score(&model).unwrap());
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "not sorted: {pair:?}");
        }
    }

    #[test]
    fn columns_are_deduplicated_in_order() {
        let model = ScoringModel::new()
            .weight("wins", 3.0)
            .capped("wins", 100.0, 0.1)
            .weight("losses", -2.0);
        assert_eq!(model.columns(), vec!["wins", "losses"]);
    }
}
