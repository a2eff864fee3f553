use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::WomensSwimming,
        title: "Womens Swimming",
        model: model(),
        athletes: athletes(),
    }
}

// Same medal-centric shape as the men's model.
fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("total_olympic_medals", 2.0)
        .weight("olympic_gold", 5.0)
        .weight("olympic_silver", 2.5)
        .weight("olympic_bronze", 1.5)
        .weight("total_world_championship_medals", 1.0)
        .weight("world_championship_gold", 3.0)
        .weight("world_record_count", 4.0)
        .weight("fina_swimmer_of_year_awards", 3.0)
        .weight("years_active", 0.5)
        .weight("pan_pacific_medals", 0.3)
        .weight("commonwealth_medals", 0.3)
        .weight("prize_money_million_usd", 1.0)
        .weight("hall_of_fame", 5.0)
        .capped("years_since_retirement", 30.0, -0.5)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Katie Ledecky", "USA", &[
            ("total_olympic_medals", 14.0), ("olympic_gold", 9.0),
            ("olympic_silver", 4.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 26.0), ("world_championship_gold", 21.0),
            ("world_record_count", 16.0), ("fina_swimmer_of_year_awards", 5.0),
            ("years_active", 13.0), ("pan_pacific_medals", 10.0),
            ("prize_money_million_usd", 3.0),
        ]),
        Athlete::new("Jenny Thompson", "USA", &[
            ("total_olympic_medals", 12.0), ("olympic_gold", 8.0),
            ("olympic_silver", 3.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 14.0), ("world_championship_gold", 10.0),
            ("world_record_count", 4.0), ("years_active", 12.0),
            ("pan_pacific_medals", 12.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 19.0),
        ]),
        Athlete::new("Dara Torres", "USA", &[
            ("total_olympic_medals", 12.0), ("olympic_gold", 4.0),
            ("olympic_silver", 4.0), ("olympic_bronze", 4.0),
            ("total_world_championship_medals", 6.0), ("world_championship_gold", 2.0),
            ("world_record_count", 3.0), ("years_active", 24.0),
            ("pan_pacific_medals", 8.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 15.0),
        ]),
        Athlete::new("Krisztina Egerszegi", "Hungary", &[
            ("total_olympic_medals", 7.0), ("olympic_gold", 5.0),
            ("olympic_silver", 1.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 3.0), ("world_championship_gold", 1.0),
            ("world_record_count", 2.0), ("years_active", 10.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 27.0),
        ]),
        Athlete::new("Janet Evans", "USA", &[
            ("total_olympic_medals", 5.0), ("olympic_gold", 4.0),
            ("olympic_silver", 1.0), ("total_world_championship_medals", 6.0),
            ("world_championship_gold", 3.0), ("world_record_count", 7.0),
            ("years_active", 10.0), ("pan_pacific_medals", 8.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 27.0),
        ]),
        Athlete::new("Missy Franklin", "USA", &[
            ("total_olympic_medals", 6.0), ("olympic_gold", 5.0),
            ("olympic_bronze", 1.0), ("total_world_championship_medals", 16.0),
            ("world_championship_gold", 11.0), ("world_record_count", 2.0),
            ("fina_swimmer_of_year_awards", 2.0), ("years_active", 8.0),
            ("pan_pacific_medals", 6.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Sarah Sjostrom", "Sweden", &[
            ("total_olympic_medals", 6.0), ("olympic_gold", 3.0),
            ("olympic_silver", 2.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 21.0), ("world_championship_gold", 13.0),
            ("world_record_count", 8.0), ("fina_swimmer_of_year_awards", 2.0),
            ("years_active", 17.0), ("prize_money_million_usd", 2.0),
        ]),
        Athlete::new("Katinka Hosszu", "Hungary", &[
            ("total_olympic_medals", 4.0), ("olympic_gold", 3.0),
            ("olympic_silver", 1.0), ("total_world_championship_medals", 15.0),
            ("world_championship_gold", 9.0), ("world_record_count", 4.0),
            ("fina_swimmer_of_year_awards", 2.0), ("years_active", 18.0),
            ("prize_money_million_usd", 2.5), ("years_since_retirement", 1.0),
        ]),
        Athlete::new("Tracy Caulkins", "USA", &[
            ("total_olympic_medals", 3.0), ("olympic_gold", 3.0),
            ("total_world_championship_medals", 6.0), ("world_championship_gold", 5.0),
            ("world_record_count", 5.0), ("years_active", 8.0),
            ("pan_pacific_medals", 3.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 39.0),
        ]),
        Athlete::new("Emma McKeon", "Australia", &[
            ("total_olympic_medals", 14.0), ("olympic_gold", 6.0),
            ("olympic_silver", 2.0), ("olympic_bronze", 6.0),
            ("total_world_championship_medals", 16.0), ("world_championship_gold", 8.0),
            ("world_record_count", 2.0), ("years_active", 12.0),
            ("commonwealth_medals", 20.0), ("prize_money_million_usd", 1.5),
            ("years_since_retirement", 1.0),
        ]),
    ]
}
