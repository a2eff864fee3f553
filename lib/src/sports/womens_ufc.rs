use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensUfc,
        title: "Womens UFC",
        model: model(),
        athletes: athletes(),
    }
}

// Same shape as the men's model.
fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("championships_won", 5.0)
        .weight("title_defenses", 2.0)
        .weight("total_fights", 0.2)
        .weight("wins", 3.0)
        .weight("losses", -2.0)
        .weight("ko_tko_wins", 2.0)
        .weight("submission_wins", 2.0)
        .weight("decision_wins", 1.0)
        .weight("sig_strikes_per_minute", 0.5)
        .weight("takedowns_per_15_minutes", 0.5)
        .weight("performance_of_the_night_awards", 1.5)
        .weight("fight_of_the_night_awards", 1.5)
        .weight("hall_of_fame", 5.0)
        .weight("longest_win_streak", 0.5)
        .weight("career_earnings_million_usd", 1.0)
        .capped("years_since_retirement", 30.0, -0.5)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Amanda Nunes", "Brazil", &[
            ("championships_won", 2.0), ("title_defenses", 7.0),
            ("total_fights", 28.0), ("wins", 23.0), ("losses", 5.0),
            ("ko_tko_wins", 14.0), ("submission_wins", 4.0), ("decision_wins", 5.0),
            ("sig_strikes_per_minute", 4.6), ("takedowns_per_15_minutes", 2.0),
            ("performance_of_the_night_awards", 5.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 12.0), ("career_earnings_million_usd", 6.0),
            ("years_since_retirement", 2.0),
        ]),
        Athlete::new("Valentina Shevchenko", "Kyrgyzstan", &[
            ("championships_won", 2.0), ("title_defenses", 8.0),
            ("total_fights", 29.0), ("wins", 24.0), ("losses", 4.0),
            ("ko_tko_wins", 8.0), ("submission_wins", 7.0), ("decision_wins", 9.0),
            ("sig_strikes_per_minute", 3.2), ("takedowns_per_15_minutes", 2.4),
            ("performance_of_the_night_awards", 4.0), ("fight_of_the_night_awards", 1.0),
            ("longest_win_streak", 9.0), ("career_earnings_million_usd", 4.0),
        ]),
        Athlete::new("Ronda Rousey", "USA", &[
            ("championships_won", 1.0), ("title_defenses", 6.0),
            ("total_fights", 14.0), ("wins", 12.0), ("losses", 2.0),
            ("ko_tko_wins", 3.0), ("submission_wins", 9.0),
            ("sig_strikes_per_minute", 3.0), ("takedowns_per_15_minutes", 2.8),
            ("performance_of_the_night_awards", 4.0), ("fight_of_the_night_awards", 1.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 12.0),
            ("career_earnings_million_usd", 15.0), ("years_since_retirement", 8.0),
        ]),
        Athlete::new("Cris Cyborg", "Brazil", &[
            ("championships_won", 4.0), ("title_defenses", 4.0),
            ("total_fights", 31.0), ("wins", 27.0), ("losses", 2.0),
            ("ko_tko_wins", 21.0), ("submission_wins", 1.0), ("decision_wins", 5.0),
            ("sig_strikes_per_minute", 4.9), ("takedowns_per_15_minutes", 0.8),
            ("performance_of_the_night_awards", 3.0), ("fight_of_the_night_awards", 1.0),
            ("longest_win_streak", 20.0), ("career_earnings_million_usd", 5.0),
        ]),
        Athlete::new("Joanna Jedrzejczyk", "Poland", &[
            ("championships_won", 1.0), ("title_defenses", 5.0),
            ("total_fights", 21.0), ("wins", 16.0), ("losses", 5.0),
            ("ko_tko_wins", 4.0), ("decision_wins", 12.0),
            ("sig_strikes_per_minute", 6.0), ("takedowns_per_15_minutes", 0.5),
            ("performance_of_the_night_awards", 2.0), ("fight_of_the_night_awards", 4.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 14.0),
            ("career_earnings_million_usd", 3.0), ("years_since_retirement", 3.0),
        ]),
        Athlete::new("Rose Namajunas", "USA", &[
            ("championships_won", 2.0), ("title_defenses", 2.0),
            ("total_fights", 20.0), ("wins", 14.0), ("losses", 6.0),
            ("ko_tko_wins", 3.0), ("submission_wins", 5.0), ("decision_wins", 6.0),
            ("sig_strikes_per_minute", 3.5), ("takedowns_per_15_minutes", 1.2),
            ("performance_of_the_night_awards", 3.0), ("fight_of_the_night_awards", 1.0),
            ("longest_win_streak", 5.0), ("career_earnings_million_usd", 4.0),
        ]),
        Athlete::new("Holly Holm", "USA", &[
            ("championships_won", 1.0), ("total_fights", 22.0),
            ("wins", 15.0), ("losses", 7.0),
            ("ko_tko_wins", 7.0), ("decision_wins", 8.0),
            ("sig_strikes_per_minute", 2.9), ("takedowns_per_15_minutes", 1.1),
            ("performance_of_the_night_awards", 2.0), ("fight_of_the_night_awards", 1.0),
            ("hall_of_fame", 1.0), ("longest_win_streak", 10.0),
            ("career_earnings_million_usd", 5.0),
        ]),
        Athlete::new("Miesha Tate", "USA", &[
            ("championships_won", 1.0), ("total_fights", 27.0),
            ("wins", 19.0), ("losses", 8.0),
            ("ko_tko_wins", 3.0), ("submission_wins", 7.0), ("decision_wins", 9.0),
            ("sig_strikes_per_minute", 2.8), ("takedowns_per_15_minutes", 2.2),
            ("performance_of_the_night_awards", 2.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 5.0), ("career_earnings_million_usd", 3.0),
            ("years_since_retirement", 2.0),
        ]),
        Athlete::new("Zhang Weili", "China", &[
            ("championships_won", 2.0), ("title_defenses", 4.0),
            ("total_fights", 28.0), ("wins", 25.0), ("losses", 3.0),
            ("ko_tko_wins", 11.0), ("submission_wins", 7.0), ("decision_wins", 7.0),
            ("sig_strikes_per_minute", 5.9), ("takedowns_per_15_minutes", 2.4),
            ("performance_of_the_night_awards", 4.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 20.0), ("career_earnings_million_usd", 4.0),
        ]),
        Athlete::new("Julianna Pena", "USA", &[
            ("championships_won", 1.0), ("title_defenses", 1.0),
            ("total_fights", 18.0), ("wins", 13.0), ("losses", 5.0),
            ("ko_tko_wins", 2.0), ("submission_wins", 6.0), ("decision_wins", 5.0),
            ("sig_strikes_per_minute", 3.8), ("takedowns_per_15_minutes", 1.8),
            ("performance_of_the_night_awards", 1.0), ("fight_of_the_night_awards", 2.0),
            ("longest_win_streak", 4.0), ("career_earnings_million_usd", 2.0),
        ]),
    ]
}
