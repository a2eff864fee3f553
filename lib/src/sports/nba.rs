use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Nba,
        title: "NBA",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Rings and MVPs carry equal top billing
        .weight("championships", 30.0)
        .weight("mvp_awards", 30.0)
        .weight("finals_mvp_awards", 15.0)
        .weight("all_nba_teams", 5.0)
        .weight("all_star_appearances", 2.0)
        // Box score volume
        .weight("points", 0.005)
        .weight("rebounds", 0.003)
        .weight("assists", 0.003)
        .weight("steals", 0.01)
        .weight("blocks", 0.01)
        // Advanced profile
        .weight("career_per", 2.0)
        .weight("career_win_shares", 2.0)
        .weight("career_bpm", 2.0)
        .weight("vorp", 1.0)
        .weight("ts_percent", 8.0)
        .weight("triple_doubles", 0.3)
        .weight("forty_point_games", 0.2)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Michael Jordan", "USA", &[
            ("championships", 6.0), ("mvp_awards", 5.0), ("finals_mvp_awards", 6.0),
            ("all_nba_teams", 11.0), ("all_star_appearances", 14.0),
            ("points", 32292.0), ("rebounds", 6672.0), ("assists", 5633.0),
            ("steals", 2514.0), ("blocks", 893.0), ("career_per", 27.9),
            ("career_win_shares", 214.0), ("career_bpm", 9.2), ("vorp", 104.0),
            ("ts_percent", 56.9), ("triple_doubles", 28.0), ("forty_point_games", 173.0),
        ]),
        Athlete::new("LeBron James", "USA", &[
            ("championships", 4.0), ("mvp_awards", 4.0), ("finals_mvp_awards", 4.0),
            ("all_nba_teams", 20.0), ("all_star_appearances", 21.0),
            ("points", 41000.0), ("rebounds", 11200.0), ("assists", 11100.0),
            ("steals", 2290.0), ("blocks", 1130.0), ("career_per", 27.0),
            ("career_win_shares", 270.0), ("career_bpm", 8.5), ("vorp", 147.0),
            ("ts_percent", 58.8), ("triple_doubles", 122.0), ("forty_point_games", 76.0),
        ]),
        Athlete::new("Kareem Abdul-Jabbar", "USA", &[
            ("championships", 6.0), ("mvp_awards", 6.0), ("finals_mvp_awards", 2.0),
            ("all_nba_teams", 15.0), ("all_star_appearances", 19.0),
            ("points", 38387.0), ("rebounds", 17440.0), ("assists", 5660.0),
            ("steals", 1160.0), ("blocks", 3189.0), ("career_per", 24.6),
            ("career_win_shares", 273.0), ("career_bpm", 4.5), ("vorp", 83.0),
            ("ts_percent", 59.2), ("triple_doubles", 21.0), ("forty_point_games", 71.0),
        ]),
        Athlete::new("Bill Russell", "USA", &[
            ("championships", 11.0), ("mvp_awards", 5.0),
            ("all_nba_teams", 11.0), ("all_star_appearances", 12.0),
            ("points", 14522.0), ("rebounds", 21620.0), ("assists", 4100.0),
            ("career_per", 18.9), ("career_win_shares", 163.0),
            ("ts_percent", 49.0), ("forty_point_games", 2.0),
        ]),
        Athlete::new("Magic Johnson", "USA", &[
            ("championships", 5.0), ("mvp_awards", 3.0), ("finals_mvp_awards", 3.0),
            ("all_nba_teams", 10.0), ("all_star_appearances", 12.0),
            ("points", 17707.0), ("rebounds", 6559.0), ("assists", 10141.0),
            ("steals", 1724.0), ("career_per", 24.1),
            ("career_win_shares", 156.0), ("career_bpm", 7.0), ("vorp", 81.0),
            ("ts_percent", 61.0), ("triple_doubles", 138.0), ("forty_point_games", 4.0),
        ]),
        Athlete::new("Larry Bird", "USA", &[
            ("championships", 3.0), ("mvp_awards", 3.0), ("finals_mvp_awards", 2.0),
            ("all_nba_teams", 10.0), ("all_star_appearances", 12.0),
            ("points", 21791.0), ("rebounds", 8974.0), ("assists", 5695.0),
            ("steals", 1556.0), ("blocks", 755.0), ("career_per", 23.5),
            ("career_win_shares", 145.0), ("career_bpm", 6.6), ("vorp", 88.0),
            ("ts_percent", 56.4), ("triple_doubles", 59.0), ("forty_point_games", 24.0),
        ]),
        Athlete::new("Wilt Chamberlain", "USA", &[
            ("championships", 2.0), ("mvp_awards", 4.0), ("finals_mvp_awards", 1.0),
            ("all_nba_teams", 10.0), ("all_star_appearances", 13.0),
            ("points", 31419.0), ("rebounds", 23924.0), ("assists", 4643.0),
            ("career_per", 26.1), ("career_win_shares", 247.0),
            ("ts_percent", 54.0), ("triple_doubles", 78.0), ("forty_point_games", 271.0),
        ]),
        Athlete::new("Tim Duncan", "USA", &[
            ("championships", 5.0), ("mvp_awards", 2.0), ("finals_mvp_awards", 3.0),
            ("all_nba_teams", 15.0), ("all_star_appearances", 15.0),
            ("points", 26496.0), ("rebounds", 15091.0), ("assists", 4225.0),
            ("steals", 1025.0), ("blocks", 3020.0), ("career_per", 24.2),
            ("career_win_shares", 206.0), ("career_bpm", 5.4), ("vorp", 90.0),
            ("ts_percent", 55.1), ("triple_doubles", 30.0), ("forty_point_games", 8.0),
        ]),
        Athlete::new("Kobe Bryant", "USA", &[
            ("championships", 5.0), ("mvp_awards", 1.0), ("finals_mvp_awards", 2.0),
            ("all_nba_teams", 15.0), ("all_star_appearances", 18.0),
            ("points", 33643.0), ("rebounds", 7047.0), ("assists", 6306.0),
            ("steals", 1944.0), ("blocks", 640.0), ("career_per", 22.9),
            ("career_win_shares", 172.0), ("career_bpm", 4.6), ("vorp", 80.0),
            ("ts_percent", 55.0), ("triple_doubles", 21.0), ("forty_point_games", 122.0),
        ]),
        Athlete::new("Shaquille O'Neal", "USA", &[
            ("championships", 4.0), ("mvp_awards", 1.0), ("finals_mvp_awards", 3.0),
            ("all_nba_teams", 14.0), ("all_star_appearances", 15.0),
            ("points", 28596.0), ("rebounds", 13099.0), ("assists", 3026.0),
            ("blocks", 2732.0), ("career_per", 26.4),
            ("career_win_shares", 181.0), ("career_bpm", 5.1), ("vorp", 84.0),
            ("ts_percent", 58.6), ("triple_doubles", 3.0), ("forty_point_games", 59.0),
        ]),
    ]
}
