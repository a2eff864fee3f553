use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensBoxing,
        title: "Mens Boxing",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Championship pedigree
        .weight("world_titles_held", 3.0)
        .weight("undisputed_titles", 5.0)
        .weight("lineal_titles", 2.0)
        // Ring record
        .weight("total_fights", 0.2)
        .weight("wins", 3.0)
        .weight("losses", -2.0)
        .weight("draws", 0.5)
        .weight("kos", 1.5)
        .weight("ko_percentage", 2.0)
        .weight("title_defenses", 1.0)
        .weight("years_as_champion", 1.5)
        // Recognition and drawing power
        .weight("hall_of_fame", 5.0)
        .weight("major_awards", 2.0)
        .weight("ppv_buys_millions", 2.0)
        .weight("career_earnings_million_usd", 1.0)
        // Long-retired champions fade, capped at 30 years
        .capped("years_since_retirement", 30.0, -0.5)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Muhammad Ali", "USA", &[
            ("world_titles_held", 3.0), ("undisputed_titles", 2.0), ("lineal_titles", 3.0),
            ("total_fights", 61.0), ("wins", 56.0), ("losses", 5.0),
            ("kos", 37.0), ("ko_percentage", 60.7), ("title_defenses", 19.0),
            ("years_as_champion", 8.0), ("hall_of_fame", 1.0), ("major_awards", 6.0),
            ("career_earnings_million_usd", 60.0), ("years_since_retirement", 42.0),
        ]),
        Athlete::new("Sugar Ray Robinson", "USA", &[
            ("world_titles_held", 6.0), ("lineal_titles", 2.0),
            ("total_fights", 200.0), ("wins", 174.0), ("losses", 19.0), ("draws", 6.0),
            ("kos", 109.0), ("ko_percentage", 54.5), ("title_defenses", 10.0),
            ("years_as_champion", 10.0), ("hall_of_fame", 1.0), ("major_awards", 4.0),
            ("career_earnings_million_usd", 4.0), ("years_since_retirement", 58.0),
        ]),
        Athlete::new("Floyd Mayweather Jr", "USA", &[
            ("world_titles_held", 15.0), ("undisputed_titles", 1.0), ("lineal_titles", 4.0),
            ("total_fights", 50.0), ("wins", 50.0), ("kos", 27.0),
            ("ko_percentage", 54.0), ("title_defenses", 23.0), ("years_as_champion", 18.0),
            ("hall_of_fame", 1.0), ("major_awards", 5.0), ("ppv_buys_millions", 24.0),
            ("career_earnings_million_usd", 1000.0), ("years_since_retirement", 6.0),
        ]),
        Athlete::new("Mike Tyson", "USA", &[
            ("world_titles_held", 3.0), ("undisputed_titles", 1.0), ("lineal_titles", 1.0),
            ("total_fights", 58.0), ("wins", 50.0), ("losses", 6.0),
            ("kos", 44.0), ("ko_percentage", 75.9), ("title_defenses", 9.0),
            ("years_as_champion", 4.0), ("hall_of_fame", 1.0), ("major_awards", 2.0),
            ("ppv_buys_millions", 16.0), ("career_earnings_million_usd", 400.0),
            ("years_since_retirement", 18.0),
        ]),
        Athlete::new("Joe Louis", "USA", &[
            ("world_titles_held", 1.0), ("lineal_titles", 1.0),
            ("total_fights", 69.0), ("wins", 66.0), ("losses", 3.0),
            ("kos", 52.0), ("ko_percentage", 75.4), ("title_defenses", 25.0),
            ("years_as_champion", 12.0), ("hall_of_fame", 1.0), ("major_awards", 4.0),
            ("career_earnings_million_usd", 5.0), ("years_since_retirement", 72.0),
        ]),
        Athlete::new("Rocky Marciano", "USA", &[
            ("world_titles_held", 1.0), ("lineal_titles", 1.0),
            ("total_fights", 49.0), ("wins", 49.0), ("kos", 43.0),
            ("ko_percentage", 87.8), ("title_defenses", 6.0), ("years_as_champion", 4.0),
            ("hall_of_fame", 1.0), ("major_awards", 3.0),
            ("career_earnings_million_usd", 4.0), ("years_since_retirement", 68.0),
        ]),
        Athlete::new("Manny Pacquiao", "Philippines", &[
            ("world_titles_held", 12.0), ("lineal_titles", 5.0),
            ("total_fights", 72.0), ("wins", 62.0), ("losses", 8.0), ("draws", 2.0),
            ("kos", 39.0), ("ko_percentage", 54.2), ("title_defenses", 10.0),
            ("years_as_champion", 12.0), ("major_awards", 7.0),
            ("ppv_buys_millions", 20.0), ("career_earnings_million_usd", 500.0),
            ("years_since_retirement", 2.0),
        ]),
        Athlete::new("Roberto Duran", "Panama", &[
            ("world_titles_held", 4.0), ("lineal_titles", 2.0),
            ("total_fights", 119.0), ("wins", 103.0), ("losses", 16.0),
            ("kos", 70.0), ("ko_percentage", 58.8), ("title_defenses", 12.0),
            ("years_as_champion", 10.0), ("hall_of_fame", 1.0), ("major_awards", 3.0),
            ("career_earnings_million_usd", 20.0), ("years_since_retirement", 22.0),
        ]),
        Athlete::new("Sugar Ray Leonard", "USA", &[
            ("world_titles_held", 5.0), ("undisputed_titles", 1.0), ("lineal_titles", 3.0),
            ("total_fights", 40.0), ("wins", 36.0), ("losses", 3.0), ("draws", 1.0),
            ("kos", 25.0), ("ko_percentage", 62.5), ("years_as_champion", 6.0),
            ("hall_of_fame", 1.0), ("major_awards", 4.0), ("ppv_buys_millions", 2.0),
            ("career_earnings_million_usd", 120.0), ("years_since_retirement", 26.0),
        ]),
        Athlete::new("Julio Cesar Chavez", "Mexico", &[
            ("world_titles_held", 6.0), ("lineal_titles", 2.0),
            ("total_fights", 115.0), ("wins", 107.0), ("losses", 6.0), ("draws", 2.0),
            ("kos", 86.0), ("ko_percentage", 74.8), ("title_defenses", 27.0),
            ("years_as_champion", 10.0), ("hall_of_fame", 1.0), ("major_awards", 2.0),
            ("career_earnings_million_usd", 30.0), ("years_since_retirement", 18.0),
        ]),
    ]
}
