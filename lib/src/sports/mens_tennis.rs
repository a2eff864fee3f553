use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensTennis,
        title: "Mens Tennis",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("grand_slam_singles_titles", 15.0)
        .weight("grand_slam_doubles_titles", 5.0)
        .weight("olympic_gold_medals", 2.0)
        .weight("davis_cup_titles", 2.0)
        .weight("atp_finals_titles", 2.0)
        .weight("masters_1000_titles", 1.0)
        .weight("hall_of_fame_inducted", 5.0)
        .weight("career_singles_titles", 0.5)
        .weight("career_match_wins", 0.01)
        .weight("match_win_percentage", 3.0)
        .weight("years_active", 0.2)
        .weight("prize_money_million_usd", 0.5)
        .weight("big_titles_count", 1.0)
        // Era fade for long-retired players, capped at 30 years
        .capped("years_since_retirement", 30.0, -1.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Novak Djokovic", "Serbia", &[
            ("grand_slam_singles_titles", 24.0), ("olympic_gold_medals", 1.0),
            ("davis_cup_titles", 1.0), ("atp_finals_titles", 7.0),
            ("masters_1000_titles", 40.0), ("career_singles_titles", 100.0),
            ("career_match_wins", 1130.0), ("match_win_percentage", 83.5),
            ("years_active", 22.0), ("prize_money_million_usd", 185.0),
            ("big_titles_count", 71.0),
        ]),
        Athlete::new("Rafael Nadal", "Spain", &[
            ("grand_slam_singles_titles", 22.0), ("olympic_gold_medals", 2.0),
            ("davis_cup_titles", 5.0), ("masters_1000_titles", 36.0),
            ("career_singles_titles", 92.0), ("career_match_wins", 1080.0),
            ("match_win_percentage", 83.0), ("years_active", 22.0),
            ("prize_money_million_usd", 135.0), ("big_titles_count", 58.0),
            ("years_since_retirement", 1.0),
        ]),
        Athlete::new("Roger Federer", "Switzerland", &[
            ("grand_slam_singles_titles", 20.0), ("olympic_gold_medals", 1.0),
            ("davis_cup_titles", 1.0), ("atp_finals_titles", 6.0),
            ("masters_1000_titles", 28.0), ("career_singles_titles", 103.0),
            ("career_match_wins", 1251.0), ("match_win_percentage", 82.0),
            ("years_active", 24.0), ("prize_money_million_usd", 131.0),
            ("big_titles_count", 54.0), ("years_since_retirement", 3.0),
        ]),
        Athlete::new("Pete Sampras", "USA", &[
            ("grand_slam_singles_titles", 14.0), ("davis_cup_titles", 2.0),
            ("atp_finals_titles", 5.0), ("masters_1000_titles", 11.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 64.0),
            ("career_match_wins", 762.0), ("match_win_percentage", 77.4),
            ("years_active", 14.0), ("prize_money_million_usd", 43.0),
            ("big_titles_count", 30.0), ("years_since_retirement", 21.0),
        ]),
        Athlete::new("Rod Laver", "Australia", &[
            ("grand_slam_singles_titles", 11.0), ("grand_slam_doubles_titles", 6.0),
            ("davis_cup_titles", 5.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 198.0), ("career_match_wins", 1000.0),
            ("match_win_percentage", 79.7), ("years_active", 23.0),
            ("prize_money_million_usd", 1.5), ("big_titles_count", 11.0),
            ("years_since_retirement", 47.0),
        ]),
        Athlete::new("Bjorn Borg", "Sweden", &[
            ("grand_slam_singles_titles", 11.0), ("davis_cup_titles", 1.0),
            ("atp_finals_titles", 2.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 66.0), ("career_match_wins", 654.0),
            ("match_win_percentage", 82.3), ("years_active", 10.0),
            ("prize_money_million_usd", 3.6), ("big_titles_count", 13.0),
            ("years_since_retirement", 42.0),
        ]),
        Athlete::new("Andre Agassi", "USA", &[
            ("grand_slam_singles_titles", 8.0), ("olympic_gold_medals", 1.0),
            ("davis_cup_titles", 3.0), ("atp_finals_titles", 1.0),
            ("masters_1000_titles", 17.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 60.0), ("career_match_wins", 870.0),
            ("match_win_percentage", 76.0), ("years_active", 20.0),
            ("prize_money_million_usd", 31.0), ("big_titles_count", 26.0),
            ("years_since_retirement", 17.0),
        ]),
        Athlete::new("Ivan Lendl", "Czechia", &[
            ("grand_slam_singles_titles", 8.0), ("davis_cup_titles", 1.0),
            ("atp_finals_titles", 5.0), ("masters_1000_titles", 22.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 94.0),
            ("career_match_wins", 1068.0), ("match_win_percentage", 81.8),
            ("years_active", 16.0), ("prize_money_million_usd", 21.0),
            ("big_titles_count", 35.0), ("years_since_retirement", 29.0),
        ]),
        Athlete::new("Jimmy Connors", "USA", &[
            ("grand_slam_singles_titles", 8.0), ("davis_cup_titles", 1.0),
            ("atp_finals_titles", 1.0), ("hall_of_fame_inducted", 1.0),
            ("career_singles_titles", 109.0), ("career_match_wins", 1274.0),
            ("match_win_percentage", 81.8), ("years_active", 24.0),
            ("prize_money_million_usd", 8.6), ("big_titles_count", 9.0),
            ("years_since_retirement", 27.0),
        ]),
        Athlete::new("John McEnroe", "USA", &[
            ("grand_slam_singles_titles", 7.0), ("grand_slam_doubles_titles", 9.0),
            ("davis_cup_titles", 5.0), ("atp_finals_titles", 3.0),
            ("hall_of_fame_inducted", 1.0), ("career_singles_titles", 77.0),
            ("career_match_wins", 883.0), ("match_win_percentage", 81.5),
            ("years_active", 15.0), ("prize_money_million_usd", 12.5),
            ("big_titles_count", 10.0), ("years_since_retirement", 31.0),
        ]),
    ]
}
