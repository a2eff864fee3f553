use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensSoccer,
        title: "Womens Soccer",
        model: model(),
        athletes: athletes(),
    }
}

// Mirrors the men's model, with Olympic gold added since the Olympic
// tournament carries full-strength squads on the women's side.
fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("club_goals", 0.05)
        .weight("club_assists", 0.04)
        .weight("international_caps", 0.03)
        .weight("international_goals", 0.07)
        .weight("world_cup_titles", 30.0)
        .weight("olympic_gold_medals", 20.0)
        .weight("continental_titles", 15.0)
        .weight("league_titles", 20.0)
        .weight("champions_league_titles", 25.0)
        .weight("world_player_of_year_awards", 20.0)
        .weight("ballon_dor_awards", 25.0)
        .weight("hat_tricks", 5.0)
        .weight("red_cards", -5.0)
        .weight("yellow_cards", -1.0)
        .weight("hall_of_fame_inducted", 15.0)
        .weight("career_earnings_million_usd", 0.05)
        .weight("total_trophies_won", 1.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Marta", "Brazil", &[
            ("club_goals", 300.0), ("club_assists", 90.0),
            ("international_caps", 180.0), ("international_goals", 119.0),
            ("continental_titles", 3.0), ("league_titles", 7.0),
            ("champions_league_titles", 1.0), ("world_player_of_year_awards", 6.0),
            ("hat_tricks", 10.0), ("yellow_cards", 12.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 5.0),
            ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Mia Hamm", "USA", &[
            ("club_goals", 40.0), ("club_assists", 30.0),
            ("international_caps", 276.0), ("international_goals", 158.0),
            ("world_cup_titles", 2.0), ("olympic_gold_medals", 2.0),
            ("continental_titles", 2.0), ("league_titles", 1.0),
            ("world_player_of_year_awards", 2.0), ("hat_tricks", 10.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 8.0),
        ]),
        Athlete::new("Abby Wambach", "USA", &[
            ("club_goals", 35.0), ("club_assists", 15.0),
            ("international_caps", 255.0), ("international_goals", 184.0),
            ("world_cup_titles", 1.0), ("olympic_gold_medals", 2.0),
            ("continental_titles", 2.0), ("world_player_of_year_awards", 1.0),
            ("hat_tricks", 8.0), ("yellow_cards", 8.0),
            ("hall_of_fame_inducted", 1.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 6.0),
        ]),
        Athlete::new("Birgit Prinz", "Germany", &[
            ("club_goals", 250.0), ("club_assists", 60.0),
            ("international_caps", 214.0), ("international_goals", 128.0),
            ("world_cup_titles", 2.0), ("continental_titles", 5.0),
            ("league_titles", 9.0), ("champions_league_titles", 3.0),
            ("world_player_of_year_awards", 3.0), ("hat_tricks", 8.0),
            ("career_earnings_million_usd", 1.0), ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Megan Rapinoe", "USA", &[
            ("club_goals", 50.0), ("club_assists", 60.0),
            ("international_caps", 203.0), ("international_goals", 63.0),
            ("world_cup_titles", 2.0), ("olympic_gold_medals", 1.0),
            ("continental_titles", 1.0), ("league_titles", 1.0),
            ("world_player_of_year_awards", 1.0), ("ballon_dor_awards", 1.0),
            ("yellow_cards", 4.0), ("career_earnings_million_usd", 6.0),
            ("total_trophies_won", 6.0),
        ]),
        Athlete::new("Alex Morgan", "USA", &[
            ("club_goals", 90.0), ("club_assists", 40.0),
            ("international_caps", 224.0), ("international_goals", 123.0),
            ("world_cup_titles", 2.0), ("olympic_gold_medals", 1.0),
            ("continental_titles", 2.0), ("league_titles", 1.0),
            ("hat_tricks", 9.0), ("yellow_cards", 6.0),
            ("career_earnings_million_usd", 10.0), ("total_trophies_won", 7.0),
        ]),
        Athlete::new("Homare Sawa", "Japan", &[
            ("club_goals", 170.0), ("club_assists", 50.0),
            ("international_caps", 205.0), ("international_goals", 83.0),
            ("world_cup_titles", 1.0), ("continental_titles", 2.0),
            ("league_titles", 8.0), ("world_player_of_year_awards", 1.0),
            ("career_earnings_million_usd", 0.5), ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Christine Sinclair", "Canada", &[
            ("club_goals", 140.0), ("club_assists", 50.0),
            ("international_caps", 331.0), ("international_goals", 190.0),
            ("olympic_gold_medals", 1.0), ("continental_titles", 1.0),
            ("league_titles", 2.0), ("hat_tricks", 10.0),
            ("yellow_cards", 5.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 10.0),
        ]),
        Athlete::new("Carli Lloyd", "USA", &[
            ("club_goals", 60.0), ("club_assists", 25.0),
            ("international_caps", 316.0), ("international_goals", 134.0),
            ("world_cup_titles", 2.0), ("olympic_gold_medals", 2.0),
            ("continental_titles", 2.0), ("world_player_of_year_awards", 2.0),
            ("hat_tricks", 6.0), ("yellow_cards", 7.0),
            ("career_earnings_million_usd", 4.0), ("total_trophies_won", 7.0),
        ]),
        Athlete::new("Sam Kerr", "Australia", &[
            ("club_goals", 270.0), ("club_assists", 60.0),
            ("international_caps", 128.0), ("international_goals", 69.0),
            ("continental_titles", 1.0), ("league_titles", 4.0),
            ("hat_tricks", 14.0), ("yellow_cards", 5.0),
            ("career_earnings_million_usd", 8.0), ("total_trophies_won", 12.0),
        ]),
    ]
}
