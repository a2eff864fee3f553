use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensHockey,
        title: "Mens Hockey",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Trophy case
        .weight("stanley_cups", 10.0)
        .weight("hart_trophies", 8.0)
        .weight("art_ross_trophies", 5.0)
        .weight("conn_smythe_trophies", 6.0)
        .weight("norris_trophies", 6.0)
        // Production
        .weight("total_goals", 0.7)
        .weight("total_assists", 0.5)
        .weight("plus_minus", 0.2)
        .weight("game_winning_goals", 0.3)
        // International and recognition
        .weight("olympic_medals", 3.0)
        .weight("all_star_teams", 1.5)
        .weight("shooting_percentage", 0.5)
        .weight("faceoff_win_percentage", 1.0)
        .weight("career_shutouts", 3.0)
        .weight("hall_of_fame", 5.0)
        .capped("years_since_retirement", 30.0, -0.1)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Wayne Gretzky", "Canada", &[
            ("stanley_cups", 4.0), ("hart_trophies", 9.0), ("art_ross_trophies", 10.0),
            ("conn_smythe_trophies", 2.0), ("total_goals", 894.0), ("total_assists", 1963.0),
            ("plus_minus", 520.0), ("game_winning_goals", 91.0), ("all_star_teams", 21.0),
            ("shooting_percentage", 17.6), ("faceoff_win_percentage", 49.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 24.0),
        ]),
        Athlete::new("Gordie Howe", "Canada", &[
            ("stanley_cups", 4.0), ("hart_trophies", 6.0), ("art_ross_trophies", 6.0),
            ("total_goals", 801.0), ("total_assists", 1049.0), ("plus_minus", 160.0),
            ("game_winning_goals", 79.0), ("all_star_teams", 21.0),
            ("shooting_percentage", 13.9), ("hall_of_fame", 1.0),
            ("years_since_retirement", 43.0),
        ]),
        Athlete::new("Mario Lemieux", "Canada", &[
            ("stanley_cups", 2.0), ("hart_trophies", 3.0), ("art_ross_trophies", 6.0),
            ("conn_smythe_trophies", 2.0), ("total_goals", 690.0), ("total_assists", 1033.0),
            ("plus_minus", 115.0), ("game_winning_goals", 74.0), ("olympic_medals", 1.0),
            ("all_star_teams", 10.0), ("shooting_percentage", 18.9),
            ("hall_of_fame", 1.0), ("years_since_retirement", 17.0),
        ]),
        Athlete::new("Bobby Orr", "Canada", &[
            ("stanley_cups", 2.0), ("hart_trophies", 3.0), ("art_ross_trophies", 2.0),
            ("conn_smythe_trophies", 2.0), ("norris_trophies", 8.0),
            ("total_goals", 270.0), ("total_assists", 645.0), ("plus_minus", 597.0),
            ("game_winning_goals", 26.0), ("all_star_teams", 9.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 44.0),
        ]),
        Athlete::new("Sidney Crosby", "Canada", &[
            ("stanley_cups", 3.0), ("hart_trophies", 2.0), ("art_ross_trophies", 2.0),
            ("conn_smythe_trophies", 2.0), ("total_goals", 600.0), ("total_assists", 1000.0),
            ("plus_minus", 190.0), ("game_winning_goals", 84.0), ("olympic_medals", 2.0),
            ("all_star_teams", 8.0), ("shooting_percentage", 14.4),
            ("faceoff_win_percentage", 52.5),
        ]),
        Athlete::new("Alex Ovechkin", "Russia", &[
            ("stanley_cups", 1.0), ("hart_trophies", 3.0), ("art_ross_trophies", 1.0),
            ("conn_smythe_trophies", 1.0), ("total_goals", 897.0), ("total_assists", 720.0),
            ("plus_minus", 80.0), ("game_winning_goals", 135.0),
            ("all_star_teams", 13.0), ("shooting_percentage", 12.7),
        ]),
        Athlete::new("Maurice Richard", "Canada", &[
            ("stanley_cups", 8.0), ("hart_trophies", 1.0), ("total_goals", 544.0),
            ("total_assists", 421.0), ("game_winning_goals", 78.0),
            ("all_star_teams", 14.0), ("shooting_percentage", 16.2),
            ("hall_of_fame", 1.0), ("years_since_retirement", 63.0),
        ]),
        Athlete::new("Jean Beliveau", "Canada", &[
            ("stanley_cups", 10.0), ("hart_trophies", 2.0), ("art_ross_trophies", 1.0),
            ("conn_smythe_trophies", 1.0), ("total_goals", 507.0), ("total_assists", 712.0),
            ("all_star_teams", 10.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 52.0),
        ]),
        Athlete::new("Patrick Roy", "Canada", &[
            ("stanley_cups", 4.0), ("conn_smythe_trophies", 3.0),
            ("career_shutouts", 66.0), ("all_star_teams", 6.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 20.0),
        ]),
        Athlete::new("Jaromir Jagr", "Czechia", &[
            ("stanley_cups", 2.0), ("hart_trophies", 1.0), ("art_ross_trophies", 5.0),
            ("total_goals", 766.0), ("total_assists", 1155.0), ("plus_minus", 322.0),
            ("game_winning_goals", 135.0), ("olympic_medals", 2.0),
            ("all_star_teams", 8.0), ("shooting_percentage", 13.9),
            ("hall_of_fame", 1.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Nicklas Lidstrom", "Sweden", &[
            ("stanley_cups", 4.0), ("conn_smythe_trophies", 1.0), ("norris_trophies", 7.0),
            ("total_goals", 264.0), ("total_assists", 878.0), ("plus_minus", 450.0),
            ("olympic_medals", 1.0), ("all_star_teams", 12.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 11.0),
        ]),
    ]
}
