use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensTennis,
        title: "Womens Tennis",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("grand_slam_singles_titles", 15.0)
        .weight("grand_slam_doubles_titles", 3.0)
        .weight("weeks_at_no1", 0.1)
        .weight("year_end_no1_finishes", 2.0)
        .weight("olympic_gold_medals", 2.0)
        .weight("fed_cup_titles", 1.5)
        .weight("wta_1000_titles", 0.5)
        .weight("wta_finals_titles", 2.0)
        .weight("hall_of_fame_inducted", 5.0)
        .weight("career_singles_titles", 0.5)
        .weight("career_match_wins", 0.01)
        .weight("match_win_percentage", 3.0)
        .weight("years_active", 0.2)
        .weight("prize_money_million_usd", 0.5)
        .weight("big_titles_count", 1.0)
        .capped("years_since_retirement", 30.0, -1.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Serena Williams", "USA", &[
            ("grand_slam_singles_titles", 23.0), ("grand_slam_doubles_titles", 14.0),
            ("weeks_at_no1", 319.0), ("year_end_no1_finishes", 5.0),
            ("olympic_gold_medals", 4.0), ("fed_cup_titles", 1.0),
            ("wta_1000_titles", 23.0), ("wta_finals_titles", 5.0),
            ("career_singles_titles", 73.0), ("career_match_wins", 858.0),
            ("match_win_percentage", 84.6), ("years_active", 27.0),
            ("prize_money_million_usd", 94.8), ("big_titles_count", 51.0),
            ("years_since_retirement", 3.0),
        ]),
        Athlete::new("Steffi Graf", "Germany", &[
            ("grand_slam_singles_titles", 22.0), ("grand_slam_doubles_titles", 1.0),
            ("weeks_at_no1", 377.0), ("year_end_no1_finishes", 8.0),
            ("olympic_gold_medals", 1.0), ("fed_cup_titles", 2.0),
            ("wta_1000_titles", 21.0), ("wta_finals_titles", 5.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 107.0),
            ("career_match_wins", 900.0), ("match_win_percentage", 88.7),
            ("years_active", 17.0), ("prize_money_million_usd", 21.9),
            ("big_titles_count", 48.0), ("years_since_retirement", 26.0),
        ]),
        Athlete::new("Martina Navratilova", "USA", &[
            ("grand_slam_singles_titles", 18.0), ("grand_slam_doubles_titles", 31.0),
            ("weeks_at_no1", 332.0), ("year_end_no1_finishes", 7.0),
            ("fed_cup_titles", 4.0), ("wta_finals_titles", 8.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 167.0),
            ("career_match_wins", 1442.0), ("match_win_percentage", 86.8),
            ("years_active", 31.0), ("prize_money_million_usd", 21.6),
            ("big_titles_count", 40.0), ("years_since_retirement", 19.0),
        ]),
        Athlete::new("Chris Evert", "USA", &[
            ("grand_slam_singles_titles", 18.0), ("grand_slam_doubles_titles", 3.0),
            ("weeks_at_no1", 260.0), ("year_end_no1_finishes", 5.0),
            ("fed_cup_titles", 8.0), ("wta_finals_titles", 4.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 157.0),
            ("career_match_wins", 1309.0), ("match_win_percentage", 89.9),
            ("years_active", 18.0), ("prize_money_million_usd", 8.9),
            ("big_titles_count", 40.0), ("years_since_retirement", 34.0),
        ]),
        Athlete::new("Margaret Court", "Australia", &[
            ("grand_slam_singles_titles", 24.0), ("grand_slam_doubles_titles", 19.0),
            ("year_end_no1_finishes", 7.0), ("fed_cup_titles", 4.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 192.0),
            ("career_match_wins", 1180.0), ("match_win_percentage", 91.6),
            ("years_active", 17.0), ("prize_money_million_usd", 0.5),
            ("big_titles_count", 24.0), ("years_since_retirement", 46.0),
        ]),
        Athlete::new("Billie Jean King", "USA", &[
            ("grand_slam_singles_titles", 12.0), ("grand_slam_doubles_titles", 16.0),
            ("year_end_no1_finishes", 5.0), ("fed_cup_titles", 7.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 129.0),
            ("career_match_wins", 700.0), ("match_win_percentage", 81.8),
            ("years_active", 24.0), ("prize_money_million_usd", 1.9),
            ("big_titles_count", 12.0), ("years_since_retirement", 40.0),
        ]),
        Athlete::new("Monica Seles", "USA", &[
            ("grand_slam_singles_titles", 9.0), ("weeks_at_no1", 178.0),
            ("year_end_no1_finishes", 2.0), ("fed_cup_titles", 3.0),
            ("wta_finals_titles", 3.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 53.0), ("career_match_wins", 595.0),
            ("match_win_percentage", 82.9), ("years_active", 14.0),
            ("prize_money_million_usd", 14.9), ("big_titles_count", 17.0),
            ("years_since_retirement", 22.0),
        ]),
        Athlete::new("Venus Williams", "USA", &[
            ("grand_slam_singles_titles", 7.0), ("grand_slam_doubles_titles", 14.0),
            ("weeks_at_no1", 11.0), ("olympic_gold_medals", 4.0),
            ("fed_cup_titles", 1.0), ("wta_1000_titles", 9.0),
            ("wta_finals_titles", 1.0), ("career_singles_titles", 49.0),
            ("career_match_wins", 820.0), ("match_win_percentage", 74.9),
            ("years_active", 30.0), ("prize_money_million_usd", 42.6),
            ("big_titles_count", 17.0),
        ]),
        Athlete::new("Justine Henin", "Belgium", &[
            ("grand_slam_singles_titles", 7.0), ("weeks_at_no1", 117.0),
            ("year_end_no1_finishes", 3.0), ("olympic_gold_medals", 1.0),
            ("fed_cup_titles", 1.0), ("wta_1000_titles", 10.0),
            ("wta_finals_titles", 2.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 43.0), ("career_match_wins", 525.0),
            ("match_win_percentage", 82.3), ("years_active", 12.0),
            ("prize_money_million_usd", 20.8), ("big_titles_count", 19.0),
            ("years_since_retirement", 14.0),
        ]),
        Athlete::new("Iga Swiatek", "Poland", &[
            ("grand_slam_singles_titles", 6.0), ("weeks_at_no1", 125.0),
            ("year_end_no1_finishes", 2.0), ("wta_1000_titles", 11.0),
            ("wta_finals_titles", 1.0), ("career_singles_titles", 24.0),
            ("career_match_wins", 350.0), ("match_win_percentage", 80.4),
            ("years_active", 7.0), ("prize_money_million_usd", 35.0),
            ("big_titles_count", 18.0),
        ]),
    ]
}
