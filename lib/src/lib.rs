use parse_display::{Display, FromStr};
use polars::prelude::*;
use std::path::Path;

mod error;
pub mod compare;
pub mod dataset;
pub mod model;
pub mod normalize;
pub mod plot;
pub mod sports;

pub use dataset::{Athlete, DatasetDf, SportSpec};
pub use error::Error;
pub use model::{ScoredDf, ScoringModel};

type Result<T> = std::result::Result<T, error::Error>;

/// Athlete name column, shared by every sport's dataset and scored output.
pub const NAME_COL: &str = "player_name";
pub const COUNTRY_COL: &str = "country";
/// Raw weighted-sum score column added by [`DatasetDf::score`].
pub const INDEX_COL: &str = "index";
/// 0-100 rescaled score column added by [`normalize::normalize_indexes`].
pub const NORMALIZED_COL: &str = "normalized_index";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Display, FromStr)]
#[display(style = "snake_case")]
pub enum Sport {
    AmericanFootball,
    Badminton,
    Cricket,
    FieldHockey,
    MensBoxing,
    MensGolf,
    MensHockey,
    MensSoccer,
    MensSwimming,
    MensTableTennis,
    MensTennis,
    MensUfc,
    Mlb,
    Nba,
    Rugby,
    Volleyball,
    Wnba,
    WomensBoxing,
    WomensGolf,
    WomensHockey,
    WomensSoccer,
    WomensSwimming,
    WomensTennis,
    WomensUfc,
}

impl Sport {
    pub const ALL: [Sport; 24] = [
        Sport::AmericanFootball,
        Sport::Badminton,
        Sport::Cricket,
        Sport::FieldHockey,
        Sport::MensBoxing,
        Sport::MensGolf,
        Sport::MensHockey,
        Sport::MensSoccer,
        Sport::MensSwimming,
        Sport::MensTableTennis,
        Sport::MensTennis,
        Sport::MensUfc,
        Sport::Mlb,
        Sport::Nba,
        Sport::Rugby,
        Sport::Volleyball,
        Sport::Wnba,
        Sport::WomensBoxing,
        Sport::WomensGolf,
        Sport::WomensHockey,
        Sport::WomensSoccer,
        Sport::WomensSwimming,
        Sport::WomensTennis,
        Sport::WomensUfc,
    ];

    /// The sport's declarative definition: scoring model plus athlete roster.
    pub fn spec(self) -> SportSpec {
        match self {
            Sport::AmericanFootball => sports::american_football::spec(),
            Sport::Badminton => sports::badminton::spec(),
            Sport::Cricket => sports::cricket::spec(),
            Sport::FieldHockey => sports::field_hockey::spec(),
            Sport::MensBoxing => sports::mens_boxing::spec(),
            Sport::MensGolf => sports::mens_golf::spec(),
            Sport::MensHockey => sports::mens_hockey::spec(),
            Sport::MensSoccer => sports::mens_soccer::spec(),
            Sport::MensSwimming => sports::mens_swimming::spec(),
            Sport::MensTableTennis => sports::mens_table_tennis::spec(),
            Sport::MensTennis => sports::mens_tennis::spec(),
            Sport::MensUfc => sports::mens_ufc::spec(),
            Sport::Mlb => sports::mlb::spec(),
            Sport::Nba => sports::nba::spec(),
            Sport::Rugby => sports::rugby::spec(),
            Sport::Volleyball => sports::volleyball::spec(),
            Sport::Wnba => sports::wnba::spec(),
            Sport::WomensBoxing => sports::womens_boxing::spec(),
            Sport::WomensGolf => sports::womens_golf::spec(),
            Sport::WomensHockey => sports::womens_hockey::spec(),
            Sport::WomensSoccer => sports::womens_soccer::spec(),
            Sport::WomensSwimming => sports::womens_swimming::spec(),
            Sport::WomensTennis => sports::womens_tennis::spec(),
            Sport::WomensUfc => sports::womens_ufc::spec(),
        }
    }
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

pub fn write_csv<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).finish(df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_names_round_trip() {
        for sport in Sport::ALL {
            let name = sport.to_string();
            assert_eq!(name.parse::<Sport>().unwrap(), sport);
        }
    }

    #[test]
    fn sport_names_are_snake_case() {
        assert_eq!(Sport::AmericanFootball.to_string(), "american_football");
        assert_eq!(Sport::MensUfc.to_string(), "mens_ufc");
        assert_eq!(Sport::Mlb.to_string(), "mlb");
    }
}
