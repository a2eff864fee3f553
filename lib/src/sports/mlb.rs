use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::Mlb,
        title: "MLB",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Flat bonus rather than a weight: induction is all or nothing
        .bonus_over("hall_of_fame", 0.5, 20.0)
        .weight("world_series_titles", 10.0)
        .weight("mvp_awards", 15.0)
        .weight("gold_gloves", 3.0)
        .weight("silver_sluggers", 2.0)
        .weight("all_star_selections", 2.0)
        .weight("triple_crowns", 5.0)
        // Counting stats
        .weight("hits", 0.001)
        .weight("home_runs", 0.05)
        .weight("rbi", 0.01)
        .weight("runs", 0.01)
        .weight("stolen_bases", 0.01)
        // Rate stats
        .weight("batting_average", 25.0)
        .weight("on_base_percentage", 25.0)
        .weight("slugging_percentage", 20.0)
        // Advanced value
        .weight("war", 4.0)
        .weight("jaws", 2.0)
        .weight("career_postseason_war", 2.0)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Babe Ruth", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 7.0), ("mvp_awards", 1.0),
            ("all_star_selections", 2.0), ("hits", 2873.0), ("home_runs", 714.0),
            ("rbi", 2214.0), ("runs", 2174.0), ("stolen_bases", 123.0),
            ("batting_average", 0.342), ("on_base_percentage", 0.474),
            ("slugging_percentage", 0.690), ("war", 182.5), ("jaws", 123.0),
            ("career_postseason_war", 3.0),
        ]),
        Athlete::new("Willie Mays", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 1.0), ("mvp_awards", 2.0),
            ("gold_gloves", 12.0), ("all_star_selections", 24.0),
            ("hits", 3293.0), ("home_runs", 660.0), ("rbi", 1909.0),
            ("runs", 2068.0), ("stolen_bases", 338.0),
            ("batting_average", 0.301), ("on_base_percentage", 0.384),
            ("slugging_percentage", 0.557), ("war", 156.2), ("jaws", 115.0),
        ]),
        Athlete::new("Barry Bonds", "USA", &[
            ("mvp_awards", 7.0), ("gold_gloves", 8.0), ("silver_sluggers", 12.0),
            ("all_star_selections", 14.0), ("hits", 2935.0), ("home_runs", 762.0),
            ("rbi", 1996.0), ("runs", 2227.0), ("stolen_bases", 514.0),
            ("batting_average", 0.298), ("on_base_percentage", 0.444),
            ("slugging_percentage", 0.607), ("war", 162.8), ("jaws", 118.0),
        ]),
        Athlete::new("Hank Aaron", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 1.0), ("mvp_awards", 1.0),
            ("gold_gloves", 3.0), ("all_star_selections", 25.0),
            ("hits", 3771.0), ("home_runs", 755.0), ("rbi", 2297.0),
            ("runs", 2174.0), ("stolen_bases", 240.0),
            ("batting_average", 0.305), ("on_base_percentage", 0.374),
            ("slugging_percentage", 0.555), ("war", 143.0), ("jaws", 104.0),
        ]),
        Athlete::new("Ted Williams", "USA", &[
            ("hall_of_fame", 1.0), ("mvp_awards", 2.0), ("all_star_selections", 19.0),
            ("triple_crowns", 2.0), ("hits", 2654.0), ("home_runs", 521.0),
            ("rbi", 1839.0), ("runs", 1798.0), ("stolen_bases", 24.0),
            ("batting_average", 0.344), ("on_base_percentage", 0.482),
            ("slugging_percentage", 0.634), ("war", 121.9), ("jaws", 98.0),
        ]),
        Athlete::new("Lou Gehrig", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 6.0), ("mvp_awards", 2.0),
            ("all_star_selections", 7.0), ("triple_crowns", 1.0),
            ("hits", 2721.0), ("home_runs", 493.0), ("rbi", 1995.0),
            ("runs", 1888.0), ("batting_average", 0.340),
            ("on_base_percentage", 0.447), ("slugging_percentage", 0.632),
            ("war", 114.0), ("jaws", 90.0), ("career_postseason_war", 2.0),
        ]),
        Athlete::new("Mickey Mantle", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 7.0), ("mvp_awards", 3.0),
            ("all_star_selections", 20.0), ("triple_crowns", 1.0),
            ("hits", 2415.0), ("home_runs", 536.0), ("rbi", 1509.0),
            ("runs", 1676.0), ("stolen_bases", 153.0),
            ("batting_average", 0.298), ("on_base_percentage", 0.421),
            ("slugging_percentage", 0.557), ("war", 110.0), ("jaws", 87.0),
            ("career_postseason_war", 2.5),
        ]),
        Athlete::new("Ty Cobb", "USA", &[
            ("hall_of_fame", 1.0), ("mvp_awards", 1.0), ("triple_crowns", 1.0),
            ("hits", 4189.0), ("home_runs", 117.0), ("rbi", 1944.0),
            ("runs", 2246.0), ("stolen_bases", 897.0),
            ("batting_average", 0.366), ("on_base_percentage", 0.433),
            ("slugging_percentage", 0.512), ("war", 151.0), ("jaws", 110.0),
        ]),
        Athlete::new("Stan Musial", "USA", &[
            ("hall_of_fame", 1.0), ("world_series_titles", 3.0), ("mvp_awards", 3.0),
            ("all_star_selections", 24.0), ("hits", 3630.0), ("home_runs", 475.0),
            ("rbi", 1951.0), ("runs", 1949.0),
            ("batting_average", 0.331), ("on_base_percentage", 0.417),
            ("slugging_percentage", 0.559), ("war", 128.6), ("jaws", 100.0),
        ]),
        Athlete::new("Mike Trout", "USA", &[
            ("mvp_awards", 3.0), ("silver_sluggers", 9.0), ("all_star_selections", 11.0),
            ("hits", 1650.0), ("home_runs", 390.0), ("rbi", 980.0),
            ("runs", 1130.0), ("stolen_bases", 212.0),
            ("batting_average", 0.296), ("on_base_percentage", 0.408),
            ("slugging_percentage", 0.578), ("war", 86.0), ("jaws", 76.0),
        ]),
    ]
}
