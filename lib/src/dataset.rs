use crate::model::ScoringModel;
use crate::{Error, Result, Sport, COUNTRY_COL, NAME_COL};
use derive_deref::Deref;
use polars::prelude::*;
use std::path::Path;

/// One athlete authored as a literal. Stats left unset score as zero, the
/// same convention the source rosters use for older athletes with incomplete
/// advanced metrics.
#[derive(Debug, Clone)]
pub struct Athlete {
    pub name: &'static str,
    pub country: &'static str,
    stats: Vec<(&'static str, f64)>,
}

impl Athlete {
    pub fn new(
        name: &'static str,
        country: &'static str,
        stats: &[(&'static str, f64)],
    ) -> Self {
        Self {
            name,
            country,
            stats: stats.to_vec(),
        }
    }

    pub fn stat(&self, column: &str) -> f64 {
        self.stats
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    pub fn stat_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stats.iter().map(|(name, _)| *name)
    }
}

/// A sport's declarative definition: display title, scoring model, and the
/// curated all-time roster the index is computed over.
#[derive(Debug, Clone)]
pub struct SportSpec {
    pub sport: Sport,
    pub title: &'static str,
    pub model: ScoringModel,
    pub athletes: Vec<Athlete>,
}

impl SportSpec {
    /// Materializes the athlete literals into a dataframe: `player_name`,
    /// `country`, then one f64 column per model column.
    pub fn dataset(&self) -> Result<DatasetDf> {
        if self.athletes.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let names: Vec<&str> = self.athletes.iter().map(|a| a.name).collect();
        let countries: Vec<&str> = self.athletes.iter().map(|a| a.country).collect();
        let mut series = vec![
            Series::new(NAME_COL, names),
            Series::new(COUNTRY_COL, countries),
        ];
        for column in self.model.columns() {
            let values: Vec<f64> = self.athletes.iter().map(|a| a.stat(column)).collect();
            series.push(Series::new(column, values));
        }
        Ok(DatasetDf(DataFrame::new(series)?))
    }
}

#[derive(Debug, Clone, Deref)]
pub struct DatasetDf(pub(crate) DataFrame);

impl DatasetDf {
    pub fn new(df: DataFrame) -> Self {
        DatasetDf(df)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(DatasetDf(crate::load_csv(path)?))
    }

    pub fn write_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        crate::write_csv(&mut self.0, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INDEX_COL;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn spec() -> SportSpec {
        SportSpec {
            sport: Sport::Badminton,
            title: "Badminton",
            model: ScoringModel::new()
                .weight("olympic_medals", 35.0)
                .weight("hall_of_fame_inducted", 30.0),
            athletes: vec![
                Athlete::new("A", "X", &[("olympic_medals", 2.0), ("hall_of_fame_inducted", 1.0)]),
                Athlete::new("B", "Y", &[("olympic_medals", 1.0)]),
            ],
        }
    }

    #[test]
    fn unset_stats_materialize_as_zero() {
        let df = spec().dataset().unwrap();
        let hof: Vec<f64> = df
            .column("hall_of_fame_inducted")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(hof, vec![1.0, 0.0]);
    }

    #[test]
    fn empty_roster_is_an_error() {
        let mut empty = spec();
        empty.athletes.clear();
        assert!(matches!(empty.dataset(), Err(Error::EmptyDataset)));
    }

    #[test]
    fn csv_round_trip_preserves_scores() {
        let spec = spec();
        let dir = std::env::temp_dir().join(format!("goat-roundtrip-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("badminton_dataset.csv");

        let mut dataset = spec.dataset().unwrap();
        let in_memory = dataset.score(&spec.model).unwrap();
        dataset.write_csv(&path).unwrap();

        let reloaded = DatasetDf::load(&path).unwrap().score(&spec.model).unwrap();
        let a: Vec<f64> = in_memory
            .column(INDEX_COL)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        let b: Vec<f64> = reloaded
            .column(INDEX_COL)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!(approx_eq(*x, *y, 1e-9));
        }
        std::fs::remove_dir_all(&dir).ok();
    }
}
