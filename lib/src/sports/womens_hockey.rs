use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensHockey,
        title: "Womens Hockey",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("olympic_gold_medals", 10.0)
        .weight("total_olympic_medals", 3.0)
        .weight("world_championship_medals", 2.0)
        // Skater production
        .weight("international_goals", 0.3)
        .weight("international_assists", 0.2)
        .weight("plus_minus", 0.1)
        .weight("powerplay_goals", 0.15)
        .weight("game_winning_goals", 0.25)
        // League and tournament honors
        .weight("championships_won", 5.0)
        .weight("mvp_awards", 3.0)
        .weight("best_forward_awards", 2.5)
        .weight("best_goalie_awards", 3.0)
        .weight("all_star_teams", 1.0)
        // Goaltending
        .weight("career_saves", 0.01)
        .weight("career_shutouts", 3.0)
        .weight("save_percentage", 3.0)
        .weight("hall_of_fame", 5.0)
        .capped("years_since_retirement", 30.0, -0.1)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Hayley Wickenheiser", "Canada", &[
            ("olympic_gold_medals", 4.0), ("total_olympic_medals", 5.0),
            ("world_championship_medals", 13.0), ("international_goals", 168.0),
            ("international_assists", 211.0), ("plus_minus", 80.0),
            ("powerplay_goals", 40.0), ("game_winning_goals", 20.0),
            ("championships_won", 1.0), ("mvp_awards", 2.0),
            ("best_forward_awards", 2.0), ("all_star_teams", 6.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 8.0),
        ]),
        Athlete::new("Cammi Granato", "USA", &[
            ("olympic_gold_medals", 1.0), ("total_olympic_medals", 2.0),
            ("world_championship_medals", 9.0), ("international_goals", 96.0),
            ("international_assists", 90.0), ("mvp_awards", 1.0),
            ("all_star_teams", 5.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 18.0),
        ]),
        Athlete::new("Angela Ruggiero", "USA", &[
            ("olympic_gold_medals", 1.0), ("total_olympic_medals", 4.0),
            ("world_championship_medals", 10.0), ("international_goals", 24.0),
            ("international_assists", 55.0), ("plus_minus", 60.0),
            ("all_star_teams", 6.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 12.0),
        ]),
        Athlete::new("Marie-Philip Poulin", "Canada", &[
            ("olympic_gold_medals", 3.0), ("total_olympic_medals", 4.0),
            ("world_championship_medals", 11.0), ("international_goals", 98.0),
            ("international_assists", 105.0), ("plus_minus", 70.0),
            ("powerplay_goals", 25.0), ("game_winning_goals", 15.0),
            ("championships_won", 1.0), ("mvp_awards", 2.0),
            ("best_forward_awards", 2.0), ("all_star_teams", 5.0),
        ]),
        Athlete::new("Hilary Knight", "USA", &[
            ("olympic_gold_medals", 1.0), ("total_olympic_medals", 4.0),
            ("world_championship_medals", 14.0), ("international_goals", 115.0),
            ("international_assists", 130.0), ("plus_minus", 65.0),
            ("powerplay_goals", 30.0), ("game_winning_goals", 12.0),
            ("championships_won", 1.0), ("mvp_awards", 1.0),
            ("best_forward_awards", 2.0), ("all_star_teams", 7.0),
        ]),
        Athlete::new("Jayna Hefford", "Canada", &[
            ("olympic_gold_medals", 4.0), ("total_olympic_medals", 5.0),
            ("world_championship_medals", 12.0), ("international_goals", 157.0),
            ("international_assists", 134.0), ("powerplay_goals", 35.0),
            ("game_winning_goals", 18.0), ("all_star_teams", 4.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 12.0),
        ]),
        Athlete::new("Caroline Ouellette", "Canada", &[
            ("olympic_gold_medals", 4.0), ("total_olympic_medals", 4.0),
            ("world_championship_medals", 12.0), ("international_goals", 87.0),
            ("international_assists", 123.0), ("championships_won", 4.0),
            ("all_star_teams", 3.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 8.0),
        ]),
        Athlete::new("Manon Rheaume", "Canada", &[
            ("total_olympic_medals", 1.0), ("world_championship_medals", 3.0),
            ("career_saves", 600.0), ("career_shutouts", 5.0),
            ("save_percentage", 90.5), ("best_goalie_awards", 1.0),
            ("years_since_retirement", 23.0),
        ]),
        Athlete::new("Kim Martin", "Sweden", &[
            ("total_olympic_medals", 2.0), ("world_championship_medals", 2.0),
            ("career_saves", 1400.0), ("career_shutouts", 8.0),
            ("save_percentage", 91.5), ("best_goalie_awards", 2.0),
            ("all_star_teams", 2.0), ("years_since_retirement", 10.0),
        ]),
        Athlete::new("Florence Schelling", "Switzerland", &[
            ("total_olympic_medals", 1.0), ("world_championship_medals", 1.0),
            ("career_saves", 1700.0), ("career_shutouts", 10.0),
            ("save_percentage", 92.0), ("best_goalie_awards", 1.0),
            ("mvp_awards", 1.0), ("years_since_retirement", 7.0),
        ]),
    ]
}
