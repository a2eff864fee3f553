use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Wnba,
        title: "WNBA",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("championships", 25.0)
        .weight("finals_mvp_awards", 15.0)
        .weight("mvp_awards", 25.0)
        .weight("dpoy_awards", 10.0)
        .weight("all_wnba_teams", 3.0)
        .weight("all_star_selections", 2.0)
        .weight("scoring_titles", 5.0)
        // Box score volume
        .weight("points", 0.003)
        .weight("rebounds", 0.002)
        .weight("assists", 0.002)
        .weight("steals", 0.01)
        .weight("blocks", 0.01)
        // Advanced profile
        .weight("ts_percent", 3.0)
        .weight("efg_percent", 2.0)
        .weight("player_per", 2.0)
        .weight("win_shares", 1.5)
        .weight("triple_doubles", 1.0)
        .weight("double_doubles", 0.2)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Diana Taurasi", "USA", &[
            ("championships", 3.0), ("finals_mvp_awards", 2.0), ("mvp_awards", 1.0),
            ("all_wnba_teams", 14.0), ("all_star_selections", 11.0),
            ("scoring_titles", 5.0), ("points", 10646.0), ("rebounds", 1450.0),
            ("assists", 2200.0), ("steals", 460.0), ("blocks", 210.0),
            ("ts_percent", 55.8), ("efg_percent", 49.5), ("player_per", 21.5),
            ("win_shares", 74.0), ("triple_doubles", 1.0), ("double_doubles", 25.0),
        ]),
        Athlete::new("Sue Bird", "USA", &[
            ("championships", 4.0), ("all_wnba_teams", 8.0),
            ("all_star_selections", 13.0), ("points", 6803.0),
            ("rebounds", 1580.0), ("assists", 3234.0), ("steals", 720.0),
            ("ts_percent", 54.0), ("efg_percent", 50.0), ("player_per", 15.9),
            ("win_shares", 46.0), ("double_doubles", 8.0),
        ]),
        Athlete::new("Lisa Leslie", "USA", &[
            ("championships", 2.0), ("finals_mvp_awards", 2.0), ("mvp_awards", 3.0),
            ("dpoy_awards", 2.0), ("all_wnba_teams", 12.0),
            ("all_star_selections", 8.0), ("scoring_titles", 1.0),
            ("points", 6263.0), ("rebounds", 3307.0), ("assists", 700.0),
            ("steals", 450.0), ("blocks", 822.0), ("ts_percent", 52.5),
            ("efg_percent", 47.0), ("player_per", 23.5), ("win_shares", 56.0),
            ("triple_doubles", 2.0), ("double_doubles", 150.0),
        ]),
        Athlete::new("Lauren Jackson", "Australia", &[
            ("championships", 2.0), ("finals_mvp_awards", 1.0), ("mvp_awards", 3.0),
            ("all_wnba_teams", 8.0), ("all_star_selections", 7.0),
            ("scoring_titles", 3.0), ("points", 6007.0), ("rebounds", 2447.0),
            ("blocks", 586.0), ("ts_percent", 56.0), ("efg_percent", 50.5),
            ("player_per", 24.4), ("win_shares", 59.0), ("double_doubles", 110.0),
        ]),
        Athlete::new("Tamika Catchings", "USA", &[
            ("championships", 1.0), ("finals_mvp_awards", 1.0), ("mvp_awards", 1.0),
            ("dpoy_awards", 5.0), ("all_wnba_teams", 11.0),
            ("all_star_selections", 10.0), ("points", 7380.0),
            ("rebounds", 3316.0), ("assists", 1488.0), ("steals", 1074.0),
            ("ts_percent", 53.5), ("efg_percent", 46.5), ("player_per", 22.4),
            ("win_shares", 75.0), ("triple_doubles", 2.0), ("double_doubles", 95.0),
        ]),
        Athlete::new("Maya Moore", "USA", &[
            ("championships", 4.0), ("finals_mvp_awards", 1.0), ("mvp_awards", 1.0),
            ("all_wnba_teams", 6.0), ("all_star_selections", 6.0),
            ("scoring_titles", 1.0), ("points", 6170.0), ("rebounds", 1650.0),
            ("assists", 950.0), ("steals", 450.0), ("ts_percent", 56.0),
            ("efg_percent", 51.0), ("player_per", 21.4), ("win_shares", 50.0),
            ("double_doubles", 35.0),
        ]),
        Athlete::new("Candace Parker", "USA", &[
            ("championships", 3.0), ("finals_mvp_awards", 1.0), ("mvp_awards", 2.0),
            ("dpoy_awards", 1.0), ("all_wnba_teams", 10.0),
            ("all_star_selections", 7.0), ("points", 6574.0),
            ("rebounds", 3467.0), ("assists", 1600.0), ("steals", 500.0),
            ("blocks", 620.0), ("ts_percent", 53.0), ("efg_percent", 48.5),
            ("player_per", 22.5), ("win_shares", 59.0),
            ("triple_doubles", 4.0), ("double_doubles", 140.0),
        ]),
        Athlete::new("Sheryl Swoopes", "USA", &[
            ("championships", 4.0), ("mvp_awards", 3.0), ("dpoy_awards", 3.0),
            ("all_wnba_teams", 7.0), ("all_star_selections", 6.0),
            ("scoring_titles", 2.0), ("points", 4875.0), ("rebounds", 1600.0),
            ("assists", 1100.0), ("steals", 650.0), ("ts_percent", 52.0),
            ("efg_percent", 47.5), ("player_per", 19.8), ("win_shares", 40.0),
            ("triple_doubles", 2.0), ("double_doubles", 22.0),
        ]),
        Athlete::new("Cynthia Cooper", "USA", &[
            ("championships", 4.0), ("finals_mvp_awards", 4.0), ("mvp_awards", 2.0),
            ("all_wnba_teams", 4.0), ("all_star_selections", 2.0),
            ("scoring_titles", 3.0), ("points", 2601.0), ("rebounds", 340.0),
            ("assists", 490.0), ("ts_percent", 57.5), ("efg_percent", 50.0),
            ("player_per", 22.8), ("win_shares", 27.0), ("double_doubles", 6.0),
        ]),
        Athlete::new("Breanna Stewart", "USA", &[
            ("championships", 2.0), ("finals_mvp_awards", 2.0), ("mvp_awards", 2.0),
            ("all_wnba_teams", 6.0), ("all_star_selections", 6.0),
            ("scoring_titles", 1.0), ("points", 5400.0), ("rebounds", 2250.0),
            ("assists", 800.0), ("steals", 350.0), ("blocks", 390.0),
            ("ts_percent", 57.0), ("efg_percent", 51.5), ("player_per", 24.1),
            ("win_shares", 54.0), ("triple_doubles", 2.0), ("double_doubles", 75.0),
        ]),
        Athlete::new("A'ja Wilson", "USA", &[
            ("championships", 2.0), ("finals_mvp_awards", 2.0), ("mvp_awards", 3.0),
            ("dpoy_awards", 2.0), ("all_wnba_teams", 6.0),
            ("all_star_selections", 6.0), ("scoring_titles", 1.0),
            ("points", 5300.0), ("rebounds", 2350.0), ("assists", 550.0),
            ("steals", 330.0), ("blocks", 490.0), ("ts_percent", 55.5),
            ("efg_percent", 49.0), ("player_per", 26.9), ("win_shares", 55.0),
            ("double_doubles", 120.0),
        ]),
    ]
}
