use anyhow::{bail, Context, Result};
use clap::Parser;
use goat::{compare, normalize, plot, DatasetDf, ScoredDf, Sport, INDEX_COL, NAME_COL};
use itertools::Itertools;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Score a single sport instead of the whole catalog
    #[arg(short = 's', long = "sport")]
    sport: Option<String>,

    /// Directory for datasets, scored CSVs, and plots
    #[arg(short = 'o', long = "out-dir", default_value = "out")]
    out_dir: PathBuf,

    /// Only run the cross-sport GOAT gap comparison over an existing out dir
    #[arg(long)]
    compare: bool,

    /// List the supported sports and exit
    #[arg(long)]
    list: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the default level based on verbosity
    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().add_filter_allow_str("goat").build();

    // Initialize the logger with the custom configuration
    TermLogger::init(
        default_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    log::trace!("Args {:#?}", args);

    if args.list {
        println!("{}", Sport::ALL.iter().join("\n"));
        return Ok(());
    }

    if args.compare {
        return run_comparison(&args.out_dir);
    }

    let sports: Vec<Sport> = match &args.sport {
        Some(name) => match name.parse::<Sport>() {
            Ok(sport) => vec![sport],
            Err(_) => bail!(
                "Unsupported sport '{}'. Use one of: {}",
                name,
                Sport::ALL.iter().join(", ")
            ),
        },
        None => Sport::ALL.to_vec(),
    };

    for sport in &sports {
        run_sport(*sport, &args.out_dir).with_context(|| format!("scoring {sport}"))?;
    }

    // The gap chart only makes sense over the full catalog
    if args.sport.is_none() {
        run_comparison(&args.out_dir)?;
    }

    Ok(())
}

/// One sport's full pipeline: materialize the roster, round-trip it through
/// its dataset csv, score, rank, normalize, save, and plot.
fn run_sport(sport: Sport, out_dir: &Path) -> Result<()> {
    let spec = sport.spec();
    let dir = out_dir.join(sport.to_string());
    std::fs::create_dir_all(&dir)?;

    let dataset_path = dir.join(format!("{sport}_dataset.csv"));
    let mut dataset = spec.dataset()?;
    dataset.write_csv(&dataset_path)?;

    let dataset = DatasetDf::load(&dataset_path)?;
    log::info!("{sport}: loaded {} athletes", dataset.height());

    let scored = dataset.score(&spec.model)?;
    print_ranking(spec.title, &scored)?;

    let mut normalized = normalize::normalize_indexes(scored)?;
    let scored_path = dir.join(format!("{sport}_index_scored.csv"));
    normalized.write_csv(&scored_path)?;

    plot::plot_top_indexes(
        &normalized,
        &format!("Top 10 {} Athletes by Normalized Index", spec.title),
        dir.join(format!("{sport}_index_plot.png")),
    )?;

    println!("\nResults saved to '{}'.", scored_path.display());
    Ok(())
}

fn print_ranking(title: &str, scored: &ScoredDf) -> Result<()> {
    log::debug!("\n{}", scored.select([NAME_COL, INDEX_COL])?);

    println!("\n====== {} INDEX RANKING ======", title.to_uppercase());
    let names = scored.column(NAME_COL)?.str()?.clone();
    let indexes = scored.column(INDEX_COL)?.f64()?.clone();
    for (rank, (name, index)) in names.iter().zip(indexes.iter()).enumerate() {
        if let (Some(name), Some(index)) = (name, index) {
            println!("{}. {} - Index: {:.1}", rank + 1, name, index);
        }
    }
    Ok(())
}

fn run_comparison(out_dir: &Path) -> Result<()> {
    let gaps = compare::collect_goat_gaps(out_dir)?;
    if gaps.is_empty() {
        log::warn!("no scored sports found under {}", out_dir.display());
        return Ok(());
    }

    plot::plot_goat_gaps(&gaps, out_dir.join("goat_gaps.png"))?;
    let json = serde_json::to_string_pretty(&gaps)?;
    std::fs::write(out_dir.join("goat_gaps.json"), json)?;

    let (Some(largest), Some(smallest)) = (gaps.first(), gaps.last()) else {
        return Ok(());
    };
    println!(
        "\nLargest gap: {} - {:.1} ({})",
        largest.sport, largest.gap, largest.goat
    );
    println!(
        "Smallest gap: {} - {:.1} ({})",
        smallest.sport, smallest.gap, smallest.goat
    );
    println!("Average gap: {:.1}", compare::mean_gap(&gaps));

    Ok(())
}
