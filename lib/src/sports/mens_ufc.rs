use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensUfc,
        title: "Mens UFC",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("championships_won", 5.0)
        .weight("title_defenses", 2.0)
        .weight("total_fights", 0.2)
        .weight("wins", 3.0)
        .weight("losses", -2.0)
        // Finish profile
        .weight("ko_tko_wins", 2.0)
        .weight("submission_wins", 2.0)
        .weight("decision_wins", 1.0)
        // Output rates
        .weight("sig_strikes_per_minute", 0.5)
        .weight("takedowns_per_15_minutes", 0.5)
        // Bonuses and recognition
        .weight("performance_of_the_night_awards", 1.5)
        .weight("fight_of_the_night_awards", 1.5)
        .weight("hall_of_fame", 5.0)
        .weight("longest_win_streak", 0.5)
        .weight("career_earnings_million_usd", 1.0)
        .capped("years_since_retirement", 30.0, -0.5)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Jon Jones", "USA", &[
            ("championships_won", 3.0), ("title_defenses", 11.0),
            ("total_fights", 30.0), ("wins", 28.0), ("losses", 1.0),
            ("ko_tko_wins", 11.0), ("submission_wins", 7.0), ("decision_wins", 10.0),
            ("sig_strikes_per_minute", 4.3), ("takedowns_per_15_minutes", 1.9),
            ("performance_of_the_night_awards", 7.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 18.0), ("career_earnings_million_usd", 8.0),
        ]),
        Athlete::new("Georges St-Pierre", "Canada", &[
            ("championships_won", 3.0), ("title_defenses", 9.0),
            ("total_fights", 28.0), ("wins", 26.0), ("losses", 2.0),
            ("ko_tko_wins", 8.0), ("submission_wins", 6.0), ("decision_wins", 12.0),
            ("sig_strikes_per_minute", 3.7), ("takedowns_per_15_minutes", 3.9),
            ("performance_of_the_night_awards", 4.0), ("fight_of_the_night_awards", 3.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 13.0),
            ("career_earnings_million_usd", 12.0), ("years_since_retirement", 8.0),
        ]),
        Athlete::new("Anderson Silva", "Brazil", &[
            ("championships_won", 1.0), ("title_defenses", 10.0),
            ("total_fights", 46.0), ("wins", 34.0), ("losses", 11.0),
            ("ko_tko_wins", 23.0), ("submission_wins", 6.0), ("decision_wins", 5.0),
            ("sig_strikes_per_minute", 3.0), ("takedowns_per_15_minutes", 0.6),
            ("performance_of_the_night_awards", 7.0), ("fight_of_the_night_awards", 3.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 16.0),
            ("career_earnings_million_usd", 8.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Khabib Nurmagomedov", "Russia", &[
            ("championships_won", 1.0), ("title_defenses", 3.0),
            ("total_fights", 29.0), ("wins", 29.0),
            ("ko_tko_wins", 8.0), ("submission_wins", 11.0), ("decision_wins", 10.0),
            ("sig_strikes_per_minute", 4.1), ("takedowns_per_15_minutes", 5.3),
            ("performance_of_the_night_awards", 3.0), ("fight_of_the_night_awards", 2.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 29.0),
            ("career_earnings_million_usd", 15.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Demetrious Johnson", "USA", &[
            ("championships_won", 1.0), ("title_defenses", 11.0),
            ("total_fights", 37.0), ("wins", 32.0), ("losses", 4.0),
            ("ko_tko_wins", 8.0), ("submission_wins", 12.0), ("decision_wins", 12.0),
            ("sig_strikes_per_minute", 4.0), ("takedowns_per_15_minutes", 3.5),
            ("performance_of_the_night_awards", 5.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 13.0), ("career_earnings_million_usd", 5.0),
            ("years_since_retirement", 1.0),
        ]),
        Athlete::new("Conor McGregor", "Ireland", &[
            ("championships_won", 2.0), ("total_fights", 28.0),
            ("wins", 22.0), ("losses", 6.0),
            ("ko_tko_wins", 19.0), ("submission_wins", 1.0), ("decision_wins", 2.0),
            ("sig_strikes_per_minute", 5.3), ("takedowns_per_15_minutes", 0.7),
            ("performance_of_the_night_awards", 8.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 15.0), ("career_earnings_million_usd", 200.0),
        ]),
        Athlete::new("Jose Aldo", "Brazil", &[
            ("championships_won", 1.0), ("title_defenses", 9.0),
            ("total_fights", 39.0), ("wins", 31.0), ("losses", 8.0),
            ("ko_tko_wins", 17.0), ("submission_wins", 1.0), ("decision_wins", 13.0),
            ("sig_strikes_per_minute", 3.3), ("takedowns_per_15_minutes", 0.6),
            ("performance_of_the_night_awards", 4.0), ("fight_of_the_night_awards", 3.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 18.0),
            ("career_earnings_million_usd", 6.0), ("years_since_retirement", 1.0),
        ]),
        Athlete::new("Stipe Miocic", "USA", &[
            ("championships_won", 2.0), ("title_defenses", 3.0),
            ("total_fights", 25.0), ("wins", 20.0), ("losses", 5.0),
            ("ko_tko_wins", 15.0), ("decision_wins", 5.0),
            ("sig_strikes_per_minute", 4.8), ("takedowns_per_15_minutes", 1.9),
            ("performance_of_the_night_awards", 3.0), ("fight_of_the_night_awards", 1.0),
            ("longest_win_streak", 6.0), ("career_earnings_million_usd", 6.0),
            ("years_since_retirement", 1.0),
        ]),
        Athlete::new("Daniel Cormier", "USA", &[
            ("championships_won", 2.0), ("title_defenses", 3.0),
            ("total_fights", 26.0), ("wins", 22.0), ("losses", 3.0),
            ("ko_tko_wins", 10.0), ("submission_wins", 5.0), ("decision_wins", 7.0),
            ("sig_strikes_per_minute", 4.0), ("takedowns_per_15_minutes", 1.8),
            ("performance_of_the_night_awards", 3.0), ("fight_of_the_night_awards", 2.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 13.0),
            ("career_earnings_million_usd", 10.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Israel Adesanya", "Nigeria", &[
            ("championships_won", 2.0), ("title_defenses", 6.0),
            ("total_fights", 28.0), ("wins", 24.0), ("losses", 4.0),
            ("ko_tko_wins", 16.0), ("decision_wins", 8.0),
            ("sig_strikes_per_minute", 4.0), ("takedowns_per_15_minutes", 0.1),
            ("performance_of_the_night_awards", 6.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 12.0), ("career_earnings_million_usd", 12.0),
        ]),
    ]
}
