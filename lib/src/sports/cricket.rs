use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Cricket,
        title: "Cricket",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Test career
        .weight("test_runs", 0.05)
        .weight("test_batting_average", 2.0)
        .weight("test_double_centuries", 4.0)
        .weight("test_wickets", 0.05)
        // ODI career
        .weight("odi_runs", 0.03)
        .weight("odi_batting_average", 1.5)
        .weight("odi_wickets", 0.03)
        // Fielding and accolades
        .weight("catches", 0.01)
        .weight("player_of_match_awards", 0.1)
        .weight("world_cup_wins", 3.0)
        .weight("hall_of_fame", 5.0)
        .weight("notable_awards", 1.0)
        .weight("career_earnings_million_usd", 0.05)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Sachin Tendulkar", "India", &[
            ("test_runs", 15921.0), ("test_batting_average", 53.8),
            ("test_double_centuries", 6.0), ("test_wickets", 46.0),
            ("odi_runs", 18426.0), ("odi_batting_average", 44.8), ("odi_wickets", 154.0),
            ("catches", 255.0), ("player_of_match_awards", 76.0),
            ("world_cup_wins", 1.0), ("hall_of_fame", 1.0), ("notable_awards", 10.0),
            ("career_earnings_million_usd", 170.0),
        ]),
        Athlete::new("Don Bradman", "Australia", &[
            ("test_runs", 6996.0), ("test_batting_average", 99.94),
            ("test_double_centuries", 12.0), ("catches", 32.0),
            ("hall_of_fame", 1.0), ("notable_awards", 5.0),
            ("career_earnings_million_usd", 0.1),
        ]),
        Athlete::new("Virat Kohli", "India", &[
            ("test_runs", 9230.0), ("test_batting_average", 49.3),
            ("test_double_centuries", 7.0), ("odi_runs", 14181.0),
            ("odi_batting_average", 58.2), ("odi_wickets", 4.0),
            ("catches", 130.0), ("player_of_match_awards", 65.0),
            ("world_cup_wins", 1.0), ("notable_awards", 8.0),
            ("career_earnings_million_usd", 130.0),
        ]),
        Athlete::new("Ricky Ponting", "Australia", &[
            ("test_runs", 13378.0), ("test_batting_average", 51.9),
            ("test_double_centuries", 6.0), ("test_wickets", 5.0),
            ("odi_runs", 13704.0), ("odi_batting_average", 42.0), ("odi_wickets", 3.0),
            ("catches", 360.0), ("player_of_match_awards", 50.0),
            ("world_cup_wins", 3.0), ("hall_of_fame", 1.0), ("notable_awards", 6.0),
            ("career_earnings_million_usd", 25.0),
        ]),
        Athlete::new("Jacques Kallis", "South Africa", &[
            ("test_runs", 13289.0), ("test_batting_average", 55.4),
            ("test_double_centuries", 2.0), ("test_wickets", 292.0),
            ("odi_runs", 11579.0), ("odi_batting_average", 44.4), ("odi_wickets", 273.0),
            ("catches", 262.0), ("player_of_match_awards", 55.0),
            ("hall_of_fame", 1.0), ("notable_awards", 5.0),
            ("career_earnings_million_usd", 20.0),
        ]),
        Athlete::new("Shane Warne", "Australia", &[
            ("test_runs", 3154.0), ("test_batting_average", 17.3),
            ("test_wickets", 708.0), ("odi_runs", 1018.0),
            ("odi_batting_average", 13.0), ("odi_wickets", 293.0),
            ("catches", 125.0), ("player_of_match_awards", 28.0),
            ("world_cup_wins", 1.0), ("hall_of_fame", 1.0), ("notable_awards", 6.0),
            ("career_earnings_million_usd", 15.0),
        ]),
        Athlete::new("Muttiah Muralitharan", "Sri Lanka", &[
            ("test_runs", 1261.0), ("test_batting_average", 11.7),
            ("test_wickets", 800.0), ("odi_runs", 674.0),
            ("odi_batting_average", 6.8), ("odi_wickets", 534.0),
            ("catches", 72.0), ("player_of_match_awards", 32.0),
            ("hall_of_fame", 1.0), ("notable_awards", 5.0),
            ("career_earnings_million_usd", 8.0),
        ]),
        Athlete::new("Brian Lara", "West Indies", &[
            ("test_runs", 11953.0), ("test_batting_average", 52.9),
            ("test_double_centuries", 9.0), ("odi_runs", 10405.0),
            ("odi_batting_average", 40.5), ("odi_wickets", 4.0),
            ("catches", 164.0), ("player_of_match_awards", 40.0),
            ("hall_of_fame", 1.0), ("notable_awards", 7.0),
            ("career_earnings_million_usd", 12.0),
        ]),
        Athlete::new("Kumar Sangakkara", "Sri Lanka", &[
            ("test_runs", 12400.0), ("test_batting_average", 57.4),
            ("test_double_centuries", 11.0), ("odi_runs", 14234.0),
            ("odi_batting_average", 41.9), ("catches", 200.0),
            ("player_of_match_awards", 45.0), ("hall_of_fame", 1.0),
            ("notable_awards", 5.0), ("career_earnings_million_usd", 15.0),
        ]),
        Athlete::new("MS Dhoni", "India", &[
            ("test_runs", 4876.0), ("test_batting_average", 38.1),
            ("odi_runs", 10773.0), ("odi_batting_average", 50.6),
            ("catches", 330.0), ("player_of_match_awards", 50.0),
            ("world_cup_wins", 2.0), ("notable_awards", 6.0),
            ("career_earnings_million_usd", 110.0),
        ]),
    ]
}
