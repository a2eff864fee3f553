use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Volleyball,
        title: "Volleyball",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("olympic_medals", 35.0)
        .weight("world_championship_titles", 30.0)
        .weight("total_medals_won", 25.0)
        .weight("best_player_awards", 20.0)
        .weight("mvp_awards", 25.0)
        // Position awards
        .weight("best_spiker_awards", 15.0)
        .weight("best_server_awards", 15.0)
        .weight("best_setter_awards", 10.0)
        .weight("best_digger_awards", 10.0)
        // Career volume
        .weight("years_active", 1.0)
        .weight("international_matches_played", 0.5)
        .weight("international_serves_aces", 1.5)
        .weight("international_digs", 1.5)
        // Efficiency
        .weight("kill_success_rate", 2.0)
        .weight("serve_efficiency", 1.5)
        .weight("reception_accuracy_percent", 1.0)
        .weight("career_earnings_million_usd", 0.05)
        .weight("total_trophies_won", 20.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Karch Kiraly", "USA", &[
            ("olympic_medals", 3.0), ("world_championship_titles", 1.0),
            ("total_medals_won", 8.0), ("best_player_awards", 2.0),
            ("mvp_awards", 3.0), ("years_active", 24.0),
            ("international_matches_played", 300.0), ("international_serves_aces", 350.0),
            ("kill_success_rate", 60.0), ("serve_efficiency", 58.0),
            ("reception_accuracy_percent", 62.0), ("career_earnings_million_usd", 4.0),
            ("total_trophies_won", 25.0),
        ]),
        Athlete::new("Giba", "Brazil", &[
            ("olympic_medals", 3.0), ("world_championship_titles", 3.0),
            ("total_medals_won", 12.0), ("best_player_awards", 3.0),
            ("mvp_awards", 2.0), ("best_spiker_awards", 1.0),
            ("years_active", 17.0), ("international_matches_played", 330.0),
            ("international_serves_aces", 280.0), ("kill_success_rate", 52.0),
            ("serve_efficiency", 50.0), ("career_earnings_million_usd", 3.0),
            ("total_trophies_won", 30.0),
        ]),
        Athlete::new("Lorenzo Bernardi", "Italy", &[
            ("olympic_medals", 1.0), ("world_championship_titles", 2.0),
            ("total_medals_won", 10.0), ("best_player_awards", 2.0),
            ("mvp_awards", 2.0), ("best_spiker_awards", 1.0),
            ("years_active", 18.0), ("international_matches_played", 280.0),
            ("kill_success_rate", 54.0), ("serve_efficiency", 52.0),
            ("career_earnings_million_usd", 5.0), ("total_trophies_won", 28.0),
        ]),
        Athlete::new("Ivan Zaytsev", "Italy", &[
            ("olympic_medals", 2.0), ("total_medals_won", 6.0),
            ("best_server_awards", 2.0), ("years_active", 15.0),
            ("international_matches_played", 250.0), ("international_serves_aces", 300.0),
            ("kill_success_rate", 50.0), ("serve_efficiency", 55.0),
            ("career_earnings_million_usd", 4.0), ("total_trophies_won", 10.0),
        ]),
        Athlete::new("Saeid Marouf", "Iran", &[
            ("total_medals_won", 4.0), ("best_setter_awards", 3.0),
            ("years_active", 14.0), ("international_matches_played", 260.0),
            ("serve_efficiency", 45.0), ("career_earnings_million_usd", 1.5),
            ("total_trophies_won", 8.0),
        ]),
        Athlete::new("Wilfredo Leon", "Poland", &[
            ("olympic_medals", 1.0), ("total_medals_won", 5.0),
            ("best_spiker_awards", 2.0), ("best_server_awards", 2.0),
            ("years_active", 14.0), ("international_matches_played", 240.0),
            ("international_serves_aces", 380.0), ("kill_success_rate", 55.0),
            ("serve_efficiency", 57.0), ("career_earnings_million_usd", 6.0),
            ("total_trophies_won", 12.0),
        ]),
        Athlete::new("Earvin Ngapeth", "France", &[
            ("olympic_medals", 2.0), ("total_medals_won", 5.0),
            ("mvp_awards", 1.0), ("best_spiker_awards", 1.0),
            ("years_active", 15.0), ("international_matches_played", 270.0),
            ("international_serves_aces", 250.0), ("kill_success_rate", 51.0),
            ("serve_efficiency", 49.0), ("career_earnings_million_usd", 5.0),
            ("total_trophies_won", 10.0),
        ]),
        Athlete::new("Maxim Mikhaylov", "Russia", &[
            ("olympic_medals", 1.0), ("total_medals_won", 7.0),
            ("best_player_awards", 1.0), ("best_server_awards", 1.0),
            ("years_active", 17.0), ("international_matches_played", 290.0),
            ("international_serves_aces", 320.0), ("kill_success_rate", 53.0),
            ("serve_efficiency", 51.0), ("career_earnings_million_usd", 4.0),
            ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Sergio Santos", "Brazil", &[
            ("olympic_medals", 4.0), ("world_championship_titles", 3.0),
            ("total_medals_won", 6.0), ("best_digger_awards", 3.0),
            ("years_active", 17.0), ("international_matches_played", 330.0),
            ("international_digs", 700.0), ("reception_accuracy_percent", 65.0),
            ("career_earnings_million_usd", 2.0), ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Ricardo Garcia", "Brazil", &[
            ("olympic_medals", 2.0), ("world_championship_titles", 2.0),
            ("total_medals_won", 8.0), ("best_setter_awards", 2.0),
            ("years_active", 15.0), ("international_matches_played", 300.0),
            ("serve_efficiency", 44.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 18.0),
        ]),
    ]
}
