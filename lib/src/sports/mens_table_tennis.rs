use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensTableTennis,
        title: "Mens Table Tennis",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("olympic_medals", 35.0)
        .weight("world_championships", 30.0)
        .weight("world_cup_titles", 25.0)
        .weight("asian_games_medals", 20.0)
        // Career grand slam: Olympic, World Championship, and World Cup gold
        .weight("grand_slam_achieved", 20.0)
        .weight("best_player_awards", 20.0)
        .weight("hall_of_fame_inducted", 30.0)
        .weight("years_active", 1.0)
        .weight("seasons_ranked_world_no1", 15.0)
        .weight("international_titles_won", 2.0)
        .weight("career_earnings_million_usd", 0.05)
        .weight("total_trophies_won", 20.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Ma Long", "China", &[
            ("olympic_medals", 5.0), ("world_championships", 3.0),
            ("world_cup_titles", 2.0), ("asian_games_medals", 4.0),
            ("grand_slam_achieved", 1.0), ("best_player_awards", 4.0),
            ("years_active", 18.0), ("seasons_ranked_world_no1", 6.0),
            ("international_titles_won", 28.0), ("career_earnings_million_usd", 2.0),
            ("total_trophies_won", 30.0),
        ]),
        Athlete::new("Jan-Ove Waldner", "Sweden", &[
            ("olympic_medals", 2.0), ("world_championships", 2.0),
            ("world_cup_titles", 1.0), ("grand_slam_achieved", 1.0),
            ("best_player_awards", 3.0), ("hall_of_fame_inducted", 1.0),
            ("years_active", 25.0), ("seasons_ranked_world_no1", 3.0),
            ("international_titles_won", 18.0), ("career_earnings_million_usd", 1.5),
            ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Zhang Jike", "China", &[
            ("olympic_medals", 3.0), ("world_championships", 2.0),
            ("world_cup_titles", 2.0), ("asian_games_medals", 2.0),
            ("grand_slam_achieved", 1.0), ("years_active", 12.0),
            ("seasons_ranked_world_no1", 2.0), ("international_titles_won", 15.0),
            ("career_earnings_million_usd", 1.8), ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Liu Guoliang", "China", &[
            ("olympic_medals", 2.0), ("world_championships", 1.0),
            ("world_cup_titles", 1.0), ("asian_games_medals", 2.0),
            ("grand_slam_achieved", 1.0), ("hall_of_fame_inducted", 1.0),
            ("years_active", 10.0), ("international_titles_won", 12.0),
            ("career_earnings_million_usd", 0.8), ("total_trophies_won", 12.0),
        ]),
        Athlete::new("Wang Liqin", "China", &[
            ("olympic_medals", 3.0), ("world_championships", 3.0),
            ("asian_games_medals", 3.0), ("years_active", 16.0),
            ("seasons_ranked_world_no1", 4.0), ("international_titles_won", 18.0),
            ("career_earnings_million_usd", 1.0), ("total_trophies_won", 18.0),
        ]),
        Athlete::new("Ma Lin", "China", &[
            ("olympic_medals", 3.0), ("world_cup_titles", 4.0),
            ("asian_games_medals", 3.0), ("years_active", 15.0),
            ("international_titles_won", 16.0), ("career_earnings_million_usd", 1.0),
            ("total_trophies_won", 16.0),
        ]),
        Athlete::new("Xu Xin", "China", &[
            ("olympic_medals", 2.0), ("world_cup_titles", 1.0),
            ("asian_games_medals", 3.0), ("years_active", 14.0),
            ("seasons_ranked_world_no1", 1.0), ("international_titles_won", 14.0),
            ("career_earnings_million_usd", 1.2), ("total_trophies_won", 14.0),
        ]),
        Athlete::new("Fan Zhendong", "China", &[
            ("olympic_medals", 4.0), ("world_championships", 2.0),
            ("world_cup_titles", 4.0), ("asian_games_medals", 3.0),
            ("grand_slam_achieved", 1.0), ("years_active", 12.0),
            ("seasons_ranked_world_no1", 5.0), ("international_titles_won", 20.0),
            ("career_earnings_million_usd", 1.6), ("total_trophies_won", 20.0),
        ]),
        Athlete::new("Timo Boll", "Germany", &[
            ("olympic_medals", 3.0), ("world_cup_titles", 2.0),
            ("best_player_awards", 1.0), ("years_active", 24.0),
            ("seasons_ranked_world_no1", 1.0), ("international_titles_won", 15.0),
            ("career_earnings_million_usd", 1.4), ("total_trophies_won", 15.0),
        ]),
        Athlete::new("Vladimir Samsonov", "Belarus", &[
            ("world_cup_titles", 1.0), ("years_active", 26.0),
            ("international_titles_won", 10.0), ("career_earnings_million_usd", 0.7),
            ("total_trophies_won", 10.0),
        ]),
    ]
}
