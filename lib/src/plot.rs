use crate::compare::GoatGap;
use crate::model::ScoredDf;
use crate::{Error, Result, NAME_COL, NORMALIZED_COL};
use plotters::prelude::*;
use plotters::style::FontTransform;
use polars::prelude::DataType;
use std::path::Path;

/// Renders the top 10 normalized scores as a 1-D annotated point plot: 10th
/// place on the left, the GOAT on the right at (or near) 100.
pub fn plot_top_indexes<P: AsRef<Path>>(scored: &ScoredDf, title: &str, path: P) -> Result<()> {
    let top = top_scores(scored, 10)?;
    if top.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let min = top.iter().map(|(_, s)| *s).fold(f64::INFINITY, f64::min);

    let root = BitMapBackend::new(path.as_ref(), (1200, 400)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d((min - 2.0)..105.0, 0.0..30.0)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_desc("Normalized Index Score (0-100)")
        .draw()
        .map_err(plot_err)?;

    // Baseline the points sit on
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(min, 0.0), (100.0, 0.0)],
            BLACK.mix(0.3),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(
            top.iter()
                .map(|(_, score)| Circle::new((*score, 0.0), 4, BLACK.filled())),
        )
        .map_err(plot_err)?;

    // Names rise vertically from their points so neighbors don't collide
    let label_style = TextStyle::from(("sans-serif", 15)).transform(FontTransform::Rotate270);
    chart
        .draw_series(
            top.iter()
                .map(|(name, score)| Text::new(name.clone(), (*score, 1.5), label_style.clone())),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("saved plot to {}", path.as_ref().display());
    Ok(())
}

/// Horizontal bar chart of GOAT gaps across sports, smallest gap at the
/// bottom, annotated with the gap value and the GOAT's name.
pub fn plot_goat_gaps<P: AsRef<Path>>(gaps: &[GoatGap], path: P) -> Result<()> {
    if gaps.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let mut ordered: Vec<&GoatGap> = gaps.iter().collect();
    ordered.sort_by(|a, b| a.gap.partial_cmp(&b.gap).unwrap_or(std::cmp::Ordering::Equal));
    let max_gap = ordered.last().map(|g| g.gap).unwrap_or(1.0).max(1.0);

    let root = BitMapBackend::new(path.as_ref(), (1500, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Gap Between GOAT and Second-Best Player Across Sports",
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d(0.0..(max_gap * 1.3), 0..ordered.len() as i32)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Gap in Normalized Index Score (0-100 scale)")
        .y_labels(ordered.len())
        .y_label_formatter(&|rank: &i32| {
            ordered
                .get(*rank as usize)
                .map(|g| g.sport.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(ordered.iter().enumerate().map(|(rank, gap)| {
            Rectangle::new([(0.0, rank as i32), (gap.gap, rank as i32 + 1)], BLUE.filled())
        }))
        .map_err(plot_err)?;
    chart
        .draw_series(ordered.iter().enumerate().map(|(rank, gap)| {
            Text::new(
                format!("  {:.1} ({})", gap.gap, gap.goat),
                (gap.gap, rank as i32),
                ("sans-serif", 16),
            )
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("saved gap chart to {}", path.as_ref().display());
    Ok(())
}

fn top_scores(scored: &ScoredDf, n: usize) -> Result<Vec<(String, f64)>> {
    let names = scored.column(NAME_COL)?.str()?.clone();
    let scores = scored.column(NORMALIZED_COL)?.cast(&DataType::Float64)?;
    let scores = scores.f64()?;
    let mut top: Vec<(String, f64)> = names
        .iter()
        .zip(scores.iter())
        .take(n)
        .filter_map(|(name, score)| Some((name?.to_string(), score?)))
        .collect();
    // Reverse so the 10th player sits on the left and the GOAT on the right
    top.reverse();
    Ok(top)
}

fn plot_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn scored(names: &[&str], values: &[f64]) -> ScoredDf {
        ScoredDf(
            DataFrame::new(vec![
                Series::new(NAME_COL, names),
                Series::new(NORMALIZED_COL, values.to_vec()),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn top_scores_reverses_into_plot_order() {
        let df = scored(&["A", "B", "C"], &[100.0, 90.0, 80.0]);
        let top = top_scores(&df, 10).unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0, "C");
        assert_eq!(top[2].0, "A");
    }

    #[test]
    fn top_scores_takes_at_most_n_rows() {
        let names: Vec<String> = (0..15).map(|i| format!("P{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let values: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let df = scored(&name_refs, &values);
        let top = top_scores(&df, 10).unwrap();
        assert_eq!(top.len(), 10);
        // GOAT last after the reverse
        assert_eq!(top[9].0, "P0");
    }

    #[test]
    fn empty_inputs_error_before_rendering() {
        let df = ScoredDf(
            DataFrame::new(vec![
                Series::new(NAME_COL, Vec::<String>::new()),
                Series::new(NORMALIZED_COL, Vec::<f64>::new()),
            ])
            .unwrap(),
        );
        assert!(matches!(
            plot_top_indexes(&df, "Empty", "unused.png"),
            Err(Error::EmptyDataset)
        ));
        assert!(matches!(
            plot_goat_gaps(&[], "unused.png"),
            Err(Error::EmptyDataset)
        ));
    }
}
