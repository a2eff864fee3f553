use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Rugby,
        title: "Rugby",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("world_cup_titles", 40.0)
        .weight("international_championships", 15.0)
        .weight("club_championships", 5.0)
        .weight("international_player_of_year_awards", 20.0)
        .weight("man_of_the_match_awards", 1.0)
        // Attacking output
        .weight("tries_scored", 3.0)
        .weight("total_points_scored", 0.5)
        .weight("conversions", 1.0)
        .weight("penalty_goals", 2.0)
        .weight("drop_goals", 3.0)
        // Defensive work rate
        .weight("tackles_made", 0.2)
        .weight("tackle_success_percent", 1.5)
        .weight("turnovers_won", 1.0)
        .weight("lineouts_won", 0.5)
        // Discipline
        .weight("red_cards", -5.0)
        .weight("yellow_cards", -2.0)
        .weight("test_caps", 0.2)
        .weight("career_length_years", 1.0)
        .weight("captained_matches", 0.3)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Richie McCaw", "New Zealand", &[
            ("world_cup_titles", 2.0), ("international_championships", 10.0),
            ("club_championships", 4.0), ("international_player_of_year_awards", 3.0),
            ("man_of_the_match_awards", 12.0), ("tries_scored", 27.0),
            ("total_points_scored", 135.0), ("tackles_made", 1900.0),
            ("tackle_success_percent", 94.0), ("turnovers_won", 180.0),
            ("yellow_cards", 3.0), ("test_caps", 148.0),
            ("career_length_years", 15.0), ("captained_matches", 110.0),
        ]),
        Athlete::new("Dan Carter", "New Zealand", &[
            ("world_cup_titles", 2.0), ("international_championships", 9.0),
            ("club_championships", 3.0), ("international_player_of_year_awards", 3.0),
            ("man_of_the_match_awards", 14.0), ("tries_scored", 29.0),
            ("total_points_scored", 1598.0), ("conversions", 293.0),
            ("penalty_goals", 281.0), ("drop_goals", 8.0),
            ("tackles_made", 750.0), ("tackle_success_percent", 88.0),
            ("yellow_cards", 2.0), ("test_caps", 112.0),
            ("career_length_years", 13.0), ("captained_matches", 2.0),
        ]),
        Athlete::new("Jonah Lomu", "New Zealand", &[
            ("international_championships", 2.0), ("man_of_the_match_awards", 10.0),
            ("tries_scored", 37.0), ("total_points_scored", 185.0),
            ("tackles_made", 300.0), ("tackle_success_percent", 80.0),
            ("yellow_cards", 1.0), ("test_caps", 63.0),
            ("career_length_years", 9.0),
        ]),
        Athlete::new("Jonny Wilkinson", "England", &[
            ("world_cup_titles", 1.0), ("international_championships", 4.0),
            ("club_championships", 2.0), ("international_player_of_year_awards", 1.0),
            ("man_of_the_match_awards", 10.0), ("tries_scored", 7.0),
            ("total_points_scored", 1179.0), ("conversions", 162.0),
            ("penalty_goals", 255.0), ("drop_goals", 36.0),
            ("tackles_made", 900.0), ("tackle_success_percent", 90.0),
            ("yellow_cards", 1.0), ("test_caps", 97.0),
            ("career_length_years", 14.0), ("captained_matches", 6.0),
        ]),
        Athlete::new("Brian O'Driscoll", "Ireland", &[
            ("international_championships", 2.0), ("club_championships", 3.0),
            ("man_of_the_match_awards", 13.0), ("tries_scored", 47.0),
            ("total_points_scored", 245.0), ("tackles_made", 1400.0),
            ("tackle_success_percent", 91.0), ("turnovers_won", 100.0),
            ("yellow_cards", 2.0), ("test_caps", 141.0),
            ("career_length_years", 15.0), ("captained_matches", 83.0),
        ]),
        Athlete::new("Martin Johnson", "England", &[
            ("world_cup_titles", 1.0), ("international_championships", 3.0),
            ("club_championships", 2.0), ("man_of_the_match_awards", 5.0),
            ("tries_scored", 2.0), ("total_points_scored", 10.0),
            ("tackles_made", 1100.0), ("tackle_success_percent", 89.0),
            ("lineouts_won", 700.0), ("yellow_cards", 2.0),
            ("test_caps", 92.0), ("career_length_years", 12.0),
            ("captained_matches", 45.0),
        ]),
        Athlete::new("David Pocock", "Australia", &[
            ("international_championships", 1.0), ("man_of_the_match_awards", 8.0),
            ("tries_scored", 12.0), ("total_points_scored", 60.0),
            ("tackles_made", 1200.0), ("tackle_success_percent", 92.0),
            ("turnovers_won", 220.0), ("yellow_cards", 3.0),
            ("test_caps", 83.0), ("career_length_years", 12.0),
            ("captained_matches", 20.0),
        ]),
        Athlete::new("Sergio Parisse", "Italy", &[
            ("club_championships", 2.0), ("man_of_the_match_awards", 10.0),
            ("tries_scored", 16.0), ("total_points_scored", 80.0),
            ("tackles_made", 1600.0), ("tackle_success_percent", 90.0),
            ("lineouts_won", 400.0), ("yellow_cards", 4.0),
            ("test_caps", 142.0), ("career_length_years", 17.0),
            ("captained_matches", 90.0),
        ]),
        Athlete::new("George Gregan", "Australia", &[
            ("world_cup_titles", 1.0), ("international_championships", 3.0),
            ("club_championships", 1.0), ("man_of_the_match_awards", 8.0),
            ("tries_scored", 18.0), ("total_points_scored", 99.0),
            ("tackles_made", 1500.0), ("tackle_success_percent", 88.0),
            ("yellow_cards", 2.0), ("test_caps", 139.0),
            ("career_length_years", 14.0), ("captained_matches", 59.0),
        ]),
        Athlete::new("Bryan Habana", "South Africa", &[
            ("world_cup_titles", 1.0), ("international_championships", 2.0),
            ("club_championships", 2.0), ("international_player_of_year_awards", 1.0),
            ("man_of_the_match_awards", 12.0), ("tries_scored", 67.0),
            ("total_points_scored", 335.0), ("tackles_made", 600.0),
            ("tackle_success_percent", 85.0), ("yellow_cards", 2.0),
            ("test_caps", 124.0), ("career_length_years", 14.0),
        ]),
    ]
}
