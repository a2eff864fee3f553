use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensBoxing,
        title: "Womens Boxing",
        model: model(),
        athletes: athletes(),
    }
}

// Same shape as the men's model: championship pedigree, ring record,
// recognition, and the capped retirement fade.
fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("world_titles_held", 3.0)
        .weight("undisputed_titles", 5.0)
        .weight("lineal_titles", 2.0)
        .weight("total_fights", 0.2)
        .weight("wins", 3.0)
        .weight("losses", -2.0)
        .weight("draws", 0.5)
        .weight("kos", 1.5)
        .weight("ko_percentage", 2.0)
        .weight("title_defenses", 1.0)
        .weight("years_as_champion", 1.5)
        .weight("hall_of_fame", 5.0)
        .weight("major_awards", 2.0)
        .weight("ppv_buys_millions", 2.0)
        .weight("career_earnings_million_usd", 1.0)
        .capped("years_since_retirement", 30.0, -0.5)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Claressa Shields", "USA", &[
            ("world_titles_held", 12.0), ("undisputed_titles", 3.0),
            ("total_fights", 16.0), ("wins", 16.0), ("kos", 3.0),
            ("ko_percentage", 18.8), ("title_defenses", 8.0),
            ("years_as_champion", 8.0), ("major_awards", 3.0),
            ("ppv_buys_millions", 0.5), ("career_earnings_million_usd", 5.0),
        ]),
        Athlete::new("Katie Taylor", "Ireland", &[
            ("world_titles_held", 8.0), ("undisputed_titles", 2.0),
            ("lineal_titles", 1.0), ("total_fights", 25.0), ("wins", 24.0),
            ("losses", 1.0), ("kos", 6.0), ("ko_percentage", 25.0),
            ("title_defenses", 9.0), ("years_as_champion", 7.0),
            ("major_awards", 3.0), ("ppv_buys_millions", 1.0),
            ("career_earnings_million_usd", 10.0),
        ]),
        Athlete::new("Amanda Serrano", "Puerto Rico", &[
            ("world_titles_held", 9.0), ("undisputed_titles", 1.0),
            ("total_fights", 51.0), ("wins", 47.0), ("losses", 3.0),
            ("draws", 1.0), ("kos", 31.0), ("ko_percentage", 66.0),
            ("title_defenses", 10.0), ("years_as_champion", 12.0),
            ("major_awards", 2.0), ("career_earnings_million_usd", 8.0),
        ]),
        Athlete::new("Laila Ali", "USA", &[
            ("world_titles_held", 4.0), ("total_fights", 24.0), ("wins", 24.0),
            ("kos", 21.0), ("ko_percentage", 87.5), ("title_defenses", 5.0),
            ("years_as_champion", 5.0), ("major_awards", 1.0),
            ("career_earnings_million_usd", 10.0), ("years_since_retirement", 16.0),
        ]),
        Athlete::new("Cecilia Braekhus", "Norway", &[
            ("world_titles_held", 5.0), ("undisputed_titles", 1.0),
            ("lineal_titles", 1.0), ("total_fights", 39.0), ("wins", 37.0),
            ("losses", 2.0), ("kos", 9.0), ("ko_percentage", 24.0),
            ("title_defenses", 25.0), ("years_as_champion", 13.0),
            ("major_awards", 2.0), ("career_earnings_million_usd", 3.0),
            ("years_since_retirement", 2.0),
        ]),
        Athlete::new("Christy Martin", "USA", &[
            ("world_titles_held", 2.0), ("total_fights", 59.0), ("wins", 49.0),
            ("losses", 7.0), ("draws", 3.0), ("kos", 31.0),
            ("ko_percentage", 63.0), ("years_as_champion", 6.0),
            ("hall_of_fame", 1.0), ("major_awards", 1.0),
            ("career_earnings_million_usd", 3.0), ("years_since_retirement", 11.0),
        ]),
        Athlete::new("Lucia Rijker", "Netherlands", &[
            ("world_titles_held", 2.0), ("total_fights", 17.0), ("wins", 17.0),
            ("kos", 14.0), ("ko_percentage", 82.0), ("years_as_champion", 4.0),
            ("hall_of_fame", 1.0), ("major_awards", 1.0),
            ("career_earnings_million_usd", 1.0), ("years_since_retirement", 19.0),
        ]),
        Athlete::new("Ann Wolfe", "USA", &[
            ("world_titles_held", 3.0), ("total_fights", 25.0), ("wins", 24.0),
            ("losses", 1.0), ("kos", 16.0), ("ko_percentage", 66.0),
            ("years_as_champion", 5.0), ("major_awards", 1.0),
            ("career_earnings_million_usd", 1.0), ("years_since_retirement", 17.0),
        ]),
        Athlete::new("Regina Halmich", "Germany", &[
            ("world_titles_held", 2.0), ("total_fights", 56.0), ("wins", 54.0),
            ("losses", 1.0), ("draws", 1.0), ("kos", 16.0),
            ("ko_percentage", 29.0), ("title_defenses", 25.0),
            ("years_as_champion", 12.0), ("major_awards", 2.0),
            ("career_earnings_million_usd", 4.0), ("years_since_retirement", 16.0),
        ]),
        Athlete::new("Jessica McCaskill", "USA", &[
            ("world_titles_held", 4.0), ("undisputed_titles", 1.0),
            ("total_fights", 17.0), ("wins", 12.0), ("losses", 4.0),
            ("draws", 1.0), ("kos", 5.0), ("ko_percentage", 29.0),
            ("title_defenses", 3.0), ("years_as_champion", 4.0),
            ("career_earnings_million_usd", 1.0),
        ]),
    ]
}
