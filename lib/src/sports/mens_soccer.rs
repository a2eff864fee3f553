use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensSoccer,
        title: "Mens Soccer",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Club and international volume
        .weight("club_appearances", 0.02)
        .weight("club_goals", 0.05)
        .weight("club_assists", 0.04)
        .weight("international_caps", 0.03)
        .weight("international_goals", 0.07)
        // Team honors
        .weight("world_cup_titles", 30.0)
        .weight("continental_titles", 15.0)
        .weight("league_titles", 20.0)
        .weight("champions_league_titles", 25.0)
        .weight("domestic_cup_titles", 10.0)
        // Individual honors
        .weight("ballon_dor_awards", 25.0)
        .weight("hat_tricks", 5.0)
        .weight("free_kick_goals", 4.0)
        // Discipline
        .weight("red_cards", -5.0)
        .weight("yellow_cards", -1.0)
        .weight("hall_of_fame_inducted", 15.0)
        .weight("career_earnings_million_usd", 0.05)
        .weight("total_trophies_won", 1.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Lionel Messi", "Argentina", &[
            ("club_appearances", 870.0), ("club_goals", 730.0), ("club_assists", 350.0),
            ("international_caps", 191.0), ("international_goals", 112.0),
            ("world_cup_titles", 1.0), ("continental_titles", 2.0),
            ("league_titles", 12.0), ("champions_league_titles", 4.0),
            ("domestic_cup_titles", 8.0), ("ballon_dor_awards", 8.0),
            ("hat_tricks", 57.0), ("free_kick_goals", 65.0),
            ("red_cards", 3.0), ("yellow_cards", 95.0),
            ("career_earnings_million_usd", 1300.0), ("total_trophies_won", 44.0),
        ]),
        Athlete::new("Cristiano Ronaldo", "Portugal", &[
            ("club_appearances", 950.0), ("club_goals", 750.0), ("club_assists", 230.0),
            ("international_caps", 217.0), ("international_goals", 135.0),
            ("continental_titles", 1.0), ("league_titles", 7.0),
            ("champions_league_titles", 5.0), ("domestic_cup_titles", 4.0),
            ("ballon_dor_awards", 5.0), ("hat_tricks", 64.0), ("free_kick_goals", 60.0),
            ("red_cards", 11.0), ("yellow_cards", 120.0),
            ("career_earnings_million_usd", 1200.0), ("total_trophies_won", 35.0),
        ]),
        Athlete::new("Pele", "Brazil", &[
            ("club_appearances", 660.0), ("club_goals", 643.0), ("club_assists", 240.0),
            ("international_caps", 92.0), ("international_goals", 77.0),
            ("world_cup_titles", 3.0), ("league_titles", 6.0),
            ("domestic_cup_titles", 4.0), ("hat_tricks", 92.0),
            ("free_kick_goals", 70.0), ("hall_of_fame_inducted", 1.0),
            ("career_earnings_million_usd", 15.0), ("total_trophies_won", 26.0),
        ]),
        Athlete::new("Diego Maradona", "Argentina", &[
            ("club_appearances", 588.0), ("club_goals", 259.0), ("club_assists", 160.0),
            ("international_caps", 91.0), ("international_goals", 34.0),
            ("world_cup_titles", 1.0), ("league_titles", 3.0),
            ("domestic_cup_titles", 3.0), ("hat_tricks", 10.0),
            ("free_kick_goals", 62.0), ("red_cards", 4.0), ("yellow_cards", 50.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 50.0),
            ("total_trophies_won", 12.0),
        ]),
        Athlete::new("Johan Cruyff", "Netherlands", &[
            ("club_appearances", 520.0), ("club_goals", 290.0), ("club_assists", 200.0),
            ("international_caps", 48.0), ("international_goals", 33.0),
            ("league_titles", 9.0), ("champions_league_titles", 3.0),
            ("domestic_cup_titles", 6.0), ("ballon_dor_awards", 3.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 10.0),
            ("total_trophies_won", 22.0),
        ]),
        Athlete::new("Franz Beckenbauer", "Germany", &[
            ("club_appearances", 587.0), ("club_goals", 75.0), ("club_assists", 100.0),
            ("international_caps", 103.0), ("international_goals", 14.0),
            ("world_cup_titles", 1.0), ("continental_titles", 1.0),
            ("league_titles", 5.0), ("champions_league_titles", 3.0),
            ("domestic_cup_titles", 4.0), ("ballon_dor_awards", 2.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 8.0),
            ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Zinedine Zidane", "France", &[
            ("club_appearances", 506.0), ("club_goals", 125.0), ("club_assists", 90.0),
            ("international_caps", 108.0), ("international_goals", 31.0),
            ("world_cup_titles", 1.0), ("continental_titles", 1.0),
            ("league_titles", 3.0), ("champions_league_titles", 1.0),
            ("domestic_cup_titles", 1.0), ("ballon_dor_awards", 1.0),
            ("free_kick_goals", 10.0), ("red_cards", 14.0), ("yellow_cards", 70.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 70.0),
            ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Ronaldo Nazario", "Brazil", &[
            ("club_appearances", 518.0), ("club_goals", 352.0), ("club_assists", 100.0),
            ("international_caps", 98.0), ("international_goals", 62.0),
            ("world_cup_titles", 2.0), ("continental_titles", 2.0),
            ("league_titles", 2.0), ("domestic_cup_titles", 3.0),
            ("ballon_dor_awards", 2.0), ("hat_tricks", 20.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 150.0),
            ("total_trophies_won", 14.0),
        ]),
        Athlete::new("Alfredo Di Stefano", "Argentina", &[
            ("club_appearances", 521.0), ("club_goals", 376.0), ("club_assists", 150.0),
            ("international_caps", 41.0), ("international_goals", 29.0),
            ("continental_titles", 1.0), ("league_titles", 13.0),
            ("champions_league_titles", 5.0), ("domestic_cup_titles", 2.0),
            ("ballon_dor_awards", 2.0), ("hat_tricks", 22.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 3.0),
            ("total_trophies_won", 18.0),
        ]),
        Athlete::new("Ferenc Puskas", "Hungary", &[
            ("club_appearances", 529.0), ("club_goals", 514.0), ("club_assists", 120.0),
            ("international_caps", 89.0), ("international_goals", 84.0),
            ("league_titles", 10.0), ("champions_league_titles", 3.0),
            ("domestic_cup_titles", 3.0), ("hat_tricks", 40.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 15.0),
        ]),
    ]
}
