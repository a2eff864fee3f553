use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::AmericanFootball,
        title: "American Football",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Win-loss record
        .weight("wins", 8.0)
        .weight("losses", -4.0)
        // Passing production
        .weight("passing_yards", 0.15)
        .weight("passing_touchdowns", 8.0)
        .weight("passing_interceptions", -4.0)
        .weight("passer_rating", 3.0)
        // Honors; titles dominate by design
        .weight("pro_bowls", 2.0)
        .weight("all_pro_selections", 5.0)
        .weight("mvp_awards", 12.0)
        .weight("super_bowl_titles", 75.0)
        .weight("super_bowl_appearances", 25.0)
        .weight("career_earnings_million_usd", 0.2)
        .weight("total_trophies_won", 5.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Tom Brady", "USA", &[
            ("wins", 251.0), ("losses", 82.0), ("passing_yards", 89214.0),
            ("passing_touchdowns", 649.0), ("passing_interceptions", 212.0),
            ("passer_rating", 97.2), ("pro_bowls", 15.0), ("all_pro_selections", 3.0),
            ("mvp_awards", 3.0), ("super_bowl_titles", 7.0), ("super_bowl_appearances", 10.0),
            ("career_earnings_million_usd", 332.0), ("total_trophies_won", 7.0),
        ]),
        Athlete::new("Peyton Manning", "USA", &[
            ("wins", 186.0), ("losses", 79.0), ("passing_yards", 71940.0),
            ("passing_touchdowns", 539.0), ("passing_interceptions", 251.0),
            ("passer_rating", 96.5), ("pro_bowls", 14.0), ("all_pro_selections", 7.0),
            ("mvp_awards", 5.0), ("super_bowl_titles", 2.0), ("super_bowl_appearances", 4.0),
            ("career_earnings_million_usd", 250.0), ("total_trophies_won", 2.0),
        ]),
        Athlete::new("Joe Montana", "USA", &[
            ("wins", 117.0), ("losses", 47.0), ("passing_yards", 40551.0),
            ("passing_touchdowns", 273.0), ("passing_interceptions", 139.0),
            ("passer_rating", 92.3), ("pro_bowls", 8.0), ("all_pro_selections", 3.0),
            ("mvp_awards", 2.0), ("super_bowl_titles", 4.0), ("super_bowl_appearances", 4.0),
            ("career_earnings_million_usd", 25.0), ("total_trophies_won", 4.0),
        ]),
        Athlete::new("Patrick Mahomes", "USA", &[
            ("wins", 89.0), ("losses", 26.0), ("passing_yards", 32352.0),
            ("passing_touchdowns", 245.0), ("passing_interceptions", 63.0),
            ("passer_rating", 103.0), ("pro_bowls", 6.0), ("all_pro_selections", 2.0),
            ("mvp_awards", 2.0), ("super_bowl_titles", 3.0), ("super_bowl_appearances", 5.0),
            ("career_earnings_million_usd", 220.0), ("total_trophies_won", 3.0),
        ]),
        Athlete::new("Aaron Rodgers", "USA", &[
            ("wins", 147.0), ("losses", 75.0), ("passing_yards", 59055.0),
            ("passing_touchdowns", 475.0), ("passing_interceptions", 105.0),
            ("passer_rating", 103.6), ("pro_bowls", 10.0), ("all_pro_selections", 4.0),
            ("mvp_awards", 4.0), ("super_bowl_titles", 1.0), ("super_bowl_appearances", 1.0),
            ("career_earnings_million_usd", 380.0), ("total_trophies_won", 1.0),
        ]),
        Athlete::new("Drew Brees", "USA", &[
            ("wins", 172.0), ("losses", 114.0), ("passing_yards", 80358.0),
            ("passing_touchdowns", 571.0), ("passing_interceptions", 243.0),
            ("passer_rating", 98.7), ("pro_bowls", 13.0), ("all_pro_selections", 1.0),
            ("super_bowl_titles", 1.0), ("super_bowl_appearances", 1.0),
            ("career_earnings_million_usd", 245.0), ("total_trophies_won", 1.0),
        ]),
        Athlete::new("Dan Marino", "USA", &[
            ("wins", 147.0), ("losses", 93.0), ("passing_yards", 61361.0),
            ("passing_touchdowns", 420.0), ("passing_interceptions", 252.0),
            ("passer_rating", 86.4), ("pro_bowls", 9.0), ("all_pro_selections", 3.0),
            ("mvp_awards", 1.0), ("super_bowl_appearances", 1.0),
            ("career_earnings_million_usd", 50.0),
        ]),
        Athlete::new("John Elway", "USA", &[
            ("wins", 148.0), ("losses", 82.0), ("passing_yards", 51475.0),
            ("passing_touchdowns", 300.0), ("passing_interceptions", 226.0),
            ("passer_rating", 79.9), ("pro_bowls", 9.0), ("mvp_awards", 1.0),
            ("super_bowl_titles", 2.0), ("super_bowl_appearances", 5.0),
            ("career_earnings_million_usd", 47.0), ("total_trophies_won", 2.0),
        ]),
        Athlete::new("Brett Favre", "USA", &[
            ("wins", 186.0), ("losses", 112.0), ("passing_yards", 71838.0),
            ("passing_touchdowns", 508.0), ("passing_interceptions", 336.0),
            ("passer_rating", 86.0), ("pro_bowls", 11.0), ("all_pro_selections", 3.0),
            ("mvp_awards", 3.0), ("super_bowl_titles", 1.0), ("super_bowl_appearances", 2.0),
            ("career_earnings_million_usd", 140.0), ("total_trophies_won", 1.0),
        ]),
        Athlete::new("Johnny Unitas", "USA", &[
            ("wins", 118.0), ("losses", 63.0), ("passing_yards", 40239.0),
            ("passing_touchdowns", 290.0), ("passing_interceptions", 253.0),
            ("passer_rating", 78.2), ("pro_bowls", 10.0), ("all_pro_selections", 5.0),
            ("mvp_awards", 3.0), ("super_bowl_titles", 1.0), ("super_bowl_appearances", 2.0),
            ("career_earnings_million_usd", 4.0), ("total_trophies_won", 4.0),
        ]),
    ]
}
