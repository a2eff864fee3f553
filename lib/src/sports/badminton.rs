use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Badminton,
        title: "Badminton",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Major accolades
        .weight("olympic_medals", 35.0)
        .weight("world_championship_titles", 30.0)
        .weight("asian_games_medals", 20.0)
        .weight("commonwealth_medals", 15.0)
        .weight("bwf_super_series_titles", 25.0)
        // Awards and honors
        .weight("best_player_awards", 20.0)
        .weight("hall_of_fame_inducted", 30.0)
        // Career metrics
        .weight("years_active", 1.0)
        .weight("international_titles_won", 2.0)
        // Financials and trophies
        .weight("career_earnings_million_usd", 0.05)
        .weight("total_trophies_won", 20.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Lin Dan", "China", &[
            ("olympic_medals", 2.0), ("world_championship_titles", 5.0),
            ("asian_games_medals", 2.0), ("bwf_super_series_titles", 28.0),
            ("best_player_awards", 6.0), ("hall_of_fame_inducted", 1.0),
            ("years_active", 20.0), ("international_titles_won", 66.0),
            ("career_earnings_million_usd", 3.5), ("total_trophies_won", 66.0),
        ]),
        Athlete::new("Lee Chong Wei", "Malaysia", &[
            ("olympic_medals", 3.0), ("asian_games_medals", 1.0),
            ("commonwealth_medals", 3.0), ("bwf_super_series_titles", 46.0),
            ("best_player_awards", 5.0), ("hall_of_fame_inducted", 1.0),
            ("years_active", 19.0), ("international_titles_won", 69.0),
            ("career_earnings_million_usd", 4.1), ("total_trophies_won", 69.0),
        ]),
        Athlete::new("Taufik Hidayat", "Indonesia", &[
            ("olympic_medals", 1.0), ("world_championship_titles", 1.0),
            ("asian_games_medals", 4.0), ("bwf_super_series_titles", 2.0),
            ("years_active", 16.0), ("international_titles_won", 27.0),
            ("career_earnings_million_usd", 1.2), ("total_trophies_won", 27.0),
        ]),
        Athlete::new("Chen Long", "China", &[
            ("olympic_medals", 3.0), ("world_championship_titles", 2.0),
            ("asian_games_medals", 2.0), ("bwf_super_series_titles", 13.0),
            ("best_player_awards", 2.0), ("years_active", 15.0),
            ("international_titles_won", 23.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 23.0),
        ]),
        Athlete::new("Viktor Axelsen", "Denmark", &[
            ("olympic_medals", 3.0), ("world_championship_titles", 2.0),
            ("bwf_super_series_titles", 14.0), ("best_player_awards", 2.0),
            ("years_active", 14.0), ("international_titles_won", 26.0),
            ("career_earnings_million_usd", 2.4), ("total_trophies_won", 26.0),
        ]),
        Athlete::new("Peter Gade", "Denmark", &[
            ("bwf_super_series_titles", 5.0), ("best_player_awards", 1.0),
            ("years_active", 18.0), ("international_titles_won", 22.0),
            ("career_earnings_million_usd", 1.0), ("total_trophies_won", 22.0),
        ]),
        Athlete::new("Morten Frost", "Denmark", &[
            ("hall_of_fame_inducted", 1.0), ("years_active", 15.0),
            ("international_titles_won", 50.0), ("career_earnings_million_usd", 0.6),
            ("total_trophies_won", 50.0),
        ]),
        Athlete::new("Rudy Hartono", "Indonesia", &[
            ("world_championship_titles", 1.0), ("asian_games_medals", 2.0),
            ("hall_of_fame_inducted", 1.0), ("years_active", 15.0),
            ("international_titles_won", 35.0), ("career_earnings_million_usd", 0.3),
            ("total_trophies_won", 35.0),
        ]),
        Athlete::new("Liem Swie King", "Indonesia", &[
            ("asian_games_medals", 3.0), ("years_active", 14.0),
            ("international_titles_won", 20.0), ("career_earnings_million_usd", 0.2),
            ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Prakash Padukone", "India", &[
            ("commonwealth_medals", 1.0), ("years_active", 15.0),
            ("international_titles_won", 15.0), ("career_earnings_million_usd", 0.2),
            ("total_trophies_won", 15.0),
        ]),
    ]
}
