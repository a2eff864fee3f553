use crate::{Error, Result, NAME_COL, NORMALIZED_COL};
use itertools::Itertools;
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Gap between the top two athletes of one sport's scored output.
#[derive(Debug, Clone, Serialize)]
pub struct GoatGap {
    pub sport: String,
    pub goat: String,
    pub gap: f64,
}

/// Scans `dir` for `<sport>/<sport>_index_scored.csv` files and computes the
/// gap between the top two normalized scores of each. Directories without a
/// scored csv, or with one missing the expected columns, are skipped with a
/// warning. Returns the gaps sorted largest first.
pub fn collect_goat_gaps<P: AsRef<Path>>(dir: P) -> Result<Vec<GoatGap>> {
    let mut gaps = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let csv = entry.path().join(format!("{name}_index_scored.csv"));
        if !csv.exists() {
            log::warn!("{name}: no scored csv, skipping");
            continue;
        }
        match sport_gap(&csv, &name) {
            Ok(gap) => gaps.push(gap),
            Err(err) => log::warn!("{name}: {err}, skipping"),
        }
    }
    gaps.sort_by(|a, b| b.gap.partial_cmp(&a.gap).unwrap_or(std::cmp::Ordering::Equal));
    log::debug!("computed gaps for {} sports", gaps.len());
    Ok(gaps)
}

/// Mean gap across sports.
pub fn mean_gap(gaps: &[GoatGap]) -> f64 {
    if gaps.is_empty() {
        return 0.0;
    }
    gaps.iter().map(|g| g.gap).sum::<f64>() / gaps.len() as f64
}

fn sport_gap(path: &Path, dir_name: &str) -> Result<GoatGap> {
    let df = crate::load_csv(path)?;
    if df.height() < 2 {
        return Err(Error::NotEnoughRows);
    }
    // Scored csvs are written sorted non-increasing, so rank 1 and 2 are the
    // first two rows.
    let scores = df.column(NORMALIZED_COL)?.cast(&DataType::Float64)?;
    let scores = scores.f64()?;
    let names = df.column(NAME_COL)?.str()?;
    let (first, second, goat) = match (scores.get(0), scores.get(1), names.get(0)) {
        (Some(first), Some(second), Some(goat)) => (first, second, goat.to_string()),
        _ => return Err(Error::NotEnoughRows),
    };
    Ok(GoatGap {
        sport: title_case(dir_name),
        goat,
        gap: first - second,
    })
}

fn title_case(dir_name: &str) -> String {
    dir_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn write_scored(dir: &Path, sport: &str, names: &[&str], scores: &[f64]) {
        let sport_dir = dir.join(sport);
        std::fs::create_dir_all(&sport_dir).unwrap();
        let mut df = DataFrame::new(vec![
            Series::new(NAME_COL, names),
            Series::new(NORMALIZED_COL, scores.to_vec()),
        ])
        .unwrap();
        crate::write_csv(&mut df, sport_dir.join(format!("{sport}_index_scored.csv"))).unwrap();
    }

    #[test]
    fn gaps_are_computed_from_the_top_two_rows() {
        let dir = std::env::temp_dir().join(format!("goat-gaps-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        write_scored(&dir, "badminton", &["A", "B", "C"], &[100.0, 92.5, 80.0]);
        write_scored(&dir, "mens_boxing", &["D", "E"], &[100.0, 70.0]);

        let gaps = collect_goat_gaps(&dir).unwrap();
        assert_eq!(gaps.len(), 2);
        // Sorted largest gap first
        assert_eq!(gaps[0].sport, "Mens Boxing");
        assert_eq!(gaps[0].goat, "D");
        assert!(approx_eq(gaps[0].gap, 30.0, 1e-10));
        assert_eq!(gaps[1].sport, "Badminton");
        assert!(approx_eq(gaps[1].gap, 7.5, 1e-10));
        assert!(approx_eq(mean_gap(&gaps), 18.75, 1e-10));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn malformed_and_short_outputs_are_skipped() {
        let dir = std::env::temp_dir().join(format!("goat-gaps-skip-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        write_scored(&dir, "volleyball", &["Only One"], &[100.0]);
        // Directory without a scored csv at all
        std::fs::create_dir_all(dir.join("cricket")).unwrap();
        write_scored(&dir, "nba", &["A", "B"], &[100.0, 95.0]);

        let gaps = collect_goat_gaps(&dir).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].sport, "Nba");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn title_case_formats_sport_directories() {
        assert_eq!(title_case("womens_table_tennis"), "Womens Table Tennis");
        assert_eq!(title_case("mlb"), "Mlb");
    }
}
