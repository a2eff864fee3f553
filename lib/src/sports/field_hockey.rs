use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::FieldHockey,
        title: "Field Hockey",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("years_active", 0.5)
        .weight("international_caps", 0.3)
        .weight("international_goals", 2.0)
        .weight("international_assists", 1.5)
        .weight("penalty_corners_scored", 3.0)
        // Discipline
        .weight("yellow_cards", -2.0)
        .weight("red_cards", -5.0)
        // Accolades
        .weight("best_player_awards", 3.0)
        .weight("world_cup_titles", 5.0)
        .weight("olympic_medals", 4.0)
        .weight("hall_of_fame_inducted", 10.0)
        .weight("total_trophies_won", 2.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Dhyan Chand", "India", &[
            ("years_active", 22.0), ("international_caps", 185.0),
            ("international_goals", 400.0), ("olympic_medals", 3.0),
            ("hall_of_fame_inducted", 1.0), ("total_trophies_won", 10.0),
        ]),
        Athlete::new("Sohail Abbas", "Pakistan", &[
            ("years_active", 18.0), ("international_caps", 311.0),
            ("international_goals", 348.0), ("penalty_corners_scored", 300.0),
            ("total_trophies_won", 8.0),
        ]),
        Athlete::new("Jamie Dwyer", "Australia", &[
            ("years_active", 15.0), ("international_caps", 365.0),
            ("international_goals", 216.0), ("international_assists", 120.0),
            ("best_player_awards", 5.0), ("world_cup_titles", 1.0),
            ("olympic_medals", 1.0), ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Teun de Nooijer", "Netherlands", &[
            ("years_active", 18.0), ("international_caps", 453.0),
            ("international_goals", 220.0), ("international_assists", 150.0),
            ("best_player_awards", 2.0), ("olympic_medals", 4.0),
            ("yellow_cards", 6.0), ("total_trophies_won", 18.0),
        ]),
        Athlete::new("Luciana Aymar", "Argentina", &[
            ("years_active", 16.0), ("international_caps", 376.0),
            ("international_goals", 162.0), ("international_assists", 180.0),
            ("best_player_awards", 8.0), ("world_cup_titles", 2.0),
            ("olympic_medals", 4.0), ("hall_of_fame_inducted", 1.0),
            ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Ric Charlesworth", "Australia", &[
            ("years_active", 16.0), ("international_caps", 227.0),
            ("international_goals", 85.0), ("world_cup_titles", 1.0),
            ("olympic_medals", 1.0), ("hall_of_fame_inducted", 1.0),
            ("total_trophies_won", 9.0),
        ]),
        Athlete::new("Hassan Sardar", "Pakistan", &[
            ("years_active", 12.0), ("international_caps", 150.0),
            ("international_goals", 150.0), ("world_cup_titles", 1.0),
            ("olympic_medals", 1.0), ("hall_of_fame_inducted", 1.0),
            ("total_trophies_won", 7.0),
        ]),
        Athlete::new("Floris Jan Bovelander", "Netherlands", &[
            ("years_active", 13.0), ("international_caps", 241.0),
            ("international_goals", 216.0), ("penalty_corners_scored", 190.0),
            ("world_cup_titles", 1.0), ("olympic_medals", 2.0),
            ("yellow_cards", 4.0), ("total_trophies_won", 12.0),
        ]),
        Athlete::new("Natascha Keller", "Germany", &[
            ("years_active", 14.0), ("international_caps", 425.0),
            ("international_goals", 209.0), ("international_assists", 110.0),
            ("olympic_medals", 1.0), ("total_trophies_won", 10.0),
        ]),
        Athlete::new("Moritz Fuerste", "Germany", &[
            ("years_active", 13.0), ("international_caps", 288.0),
            ("international_goals", 71.0), ("international_assists", 90.0),
            ("best_player_awards", 1.0), ("olympic_medals", 2.0),
            ("yellow_cards", 5.0), ("total_trophies_won", 11.0),
        ]),
    ]
}
