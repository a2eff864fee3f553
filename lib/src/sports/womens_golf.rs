use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensGolf,
        title: "Womens Golf",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("lpga_wins", 3.0)
        .weight("let_wins", 1.5)
        .weight("major_wins", 6.0)
        .weight("times_world_no1", 2.0)
        .weight("weeks_world_no1", 0.1)
        .weight("cme_titles", 3.0)
        .weight("runner_up_majors", 1.0)
        .weight("solheim_cup_appearances", 1.0)
        .weight("scoring_average", -2.0)
        .weight("driving_distance_yards", 0.02)
        .weight("leading_money_list_titles", 2.0)
        .weight("lpga_player_of_year_awards", 3.0)
        .weight("vare_trophies", 1.5)
        .weight("hall_of_fame", 5.0)
        .weight("career_earnings_million_usd", 0.3)
        .capped("years_since_retirement", 30.0, -0.2)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Annika Sorenstam", "Sweden", &[
            ("lpga_wins", 72.0), ("let_wins", 17.0), ("major_wins", 10.0),
            ("times_world_no1", 1.0), ("weeks_world_no1", 60.0),
            ("runner_up_majors", 8.0), ("solheim_cup_appearances", 8.0),
            ("scoring_average", 70.2), ("driving_distance_yards", 265.0),
            ("leading_money_list_titles", 8.0), ("lpga_player_of_year_awards", 8.0),
            ("vare_trophies", 6.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 22.5), ("years_since_retirement", 15.0),
        ]),
        Athlete::new("Mickey Wright", "USA", &[
            ("lpga_wins", 82.0), ("major_wins", 13.0), ("runner_up_majors", 10.0),
            ("scoring_average", 73.0), ("leading_money_list_titles", 4.0),
            ("vare_trophies", 5.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 0.4), ("years_since_retirement", 43.0),
        ]),
        Athlete::new("Kathy Whitworth", "USA", &[
            ("lpga_wins", 88.0), ("major_wins", 6.0), ("runner_up_majors", 9.0),
            ("scoring_average", 72.8), ("leading_money_list_titles", 8.0),
            ("lpga_player_of_year_awards", 7.0), ("vare_trophies", 7.0),
            ("hall_of_fame", 1.0), ("career_earnings_million_usd", 1.7),
            ("years_since_retirement", 38.0),
        ]),
        Athlete::new("Lorena Ochoa", "Mexico", &[
            ("lpga_wins", 27.0), ("let_wins", 2.0), ("major_wins", 2.0),
            ("times_world_no1", 1.0), ("weeks_world_no1", 158.0),
            ("runner_up_majors", 5.0), ("scoring_average", 70.0),
            ("driving_distance_yards", 270.0), ("leading_money_list_titles", 4.0),
            ("lpga_player_of_year_awards", 4.0), ("vare_trophies", 4.0),
            ("hall_of_fame", 1.0), ("career_earnings_million_usd", 14.9),
            ("years_since_retirement", 13.0),
        ]),
        Athlete::new("Inbee Park", "South Korea", &[
            ("lpga_wins", 21.0), ("let_wins", 2.0), ("major_wins", 7.0),
            ("times_world_no1", 4.0), ("weeks_world_no1", 106.0),
            ("runner_up_majors", 4.0),
            ("scoring_average", 70.4), ("leading_money_list_titles", 1.0),
            ("lpga_player_of_year_awards", 1.0), ("vare_trophies", 1.0),
            ("hall_of_fame", 1.0), ("career_earnings_million_usd", 18.8),
            ("years_since_retirement", 2.0),
        ]),
        Athlete::new("Karrie Webb", "Australia", &[
            ("lpga_wins", 41.0), ("let_wins", 15.0), ("major_wins", 7.0),
            ("runner_up_majors", 6.0), ("scoring_average", 70.5),
            ("leading_money_list_titles", 3.0), ("lpga_player_of_year_awards", 2.0),
            ("vare_trophies", 2.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 20.2), ("years_since_retirement", 6.0),
        ]),
        Athlete::new("Nancy Lopez", "USA", &[
            ("lpga_wins", 48.0), ("major_wins", 3.0), ("runner_up_majors", 5.0),
            ("solheim_cup_appearances", 1.0), ("scoring_average", 71.2),
            ("leading_money_list_titles", 3.0), ("lpga_player_of_year_awards", 4.0),
            ("vare_trophies", 3.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 5.3), ("years_since_retirement", 20.0),
        ]),
        Athlete::new("Se-ri Pak", "South Korea", &[
            ("lpga_wins", 25.0), ("major_wins", 5.0), ("runner_up_majors", 3.0),
            ("scoring_average", 71.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 12.5), ("years_since_retirement", 7.0),
        ]),
        Athlete::new("Juli Inkster", "USA", &[
            ("lpga_wins", 31.0), ("major_wins", 7.0), ("runner_up_majors", 4.0),
            ("solheim_cup_appearances", 9.0), ("scoring_average", 71.5),
            ("hall_of_fame", 1.0), ("career_earnings_million_usd", 13.7),
            ("years_since_retirement", 7.0),
        ]),
        Athlete::new("Lydia Ko", "New Zealand", &[
            ("lpga_wins", 22.0), ("let_wins", 3.0), ("major_wins", 3.0),
            ("times_world_no1", 3.0), ("weeks_world_no1", 130.0),
            ("cme_titles", 1.0), ("runner_up_majors", 3.0),
            ("scoring_average", 69.9), ("driving_distance_yards", 250.0),
            ("leading_money_list_titles", 1.0), ("lpga_player_of_year_awards", 2.0),
            ("vare_trophies", 2.0), ("hall_of_fame", 1.0),
            ("career_earnings_million_usd", 20.0),
        ]),
    ]
}
