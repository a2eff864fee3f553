use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensSwimming,
        title: "Mens Swimming",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        // Olympic haul, golds counted twice via the per-color weights
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
        Athlete::new("Michael Phelps", "USA", &[
            ("total_olympic_medals", 28.0), ("olympic_gold", 23.0),
            ("olympic_silver", 3.0), ("olympic_bronze", 2.0),
            ("total_world_championship_medals", 33.0), ("world_championship_gold", 26.0),
            ("world_record_count", 39.0), ("fina_swimmer_of_year_awards", 8.0),
            ("years_active", 16.0), ("pan_pacific_medals", 9.0),
            ("prize_money_million_usd", 2.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 7.0),
        ]),
        Athlete::new("Mark Spitz", "USA", &[
            ("total_olympic_medals", 11.0), ("olympic_gold", 9.0),
            ("olympic_silver", 1.0), ("olympic_bronze", 1.0),
            ("world_record_count", 33.0), ("years_active", 8.0),
            ("pan_pacific_medals", 2.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 51.0),
        ]),
        Athlete::new("Ian Thorpe", "Australia", &[
            ("total_olympic_medals", 9.0), ("olympic_gold", 5.0),
            ("olympic_silver", 3.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 13.0), ("world_championship_gold", 11.0),
            ("world_record_count", 13.0), ("fina_swimmer_of_year_awards", 4.0),
            ("years_active", 10.0), ("commonwealth_medals", 10.0),
            ("prize_money_million_usd", 1.2), ("hall_of_fame", 1.0),
            ("years_since_retirement", 17.0),
        ]),
        Athlete::new("Ryan Lochte", "USA", &[
            ("total_olympic_medals", 12.0), ("olympic_gold", 6.0),
            ("olympic_silver", 3.0), ("olympic_bronze", 3.0),
            ("total_world_championship_medals", 27.0), ("world_championship_gold", 18.0),
            ("world_record_count", 7.0), ("fina_swimmer_of_year_awards", 2.0),
            ("years_active", 15.0), ("pan_pacific_medals", 12.0),
            ("prize_money_million_usd", 1.0), ("years_since_retirement", 4.0),
        ]),
        Athlete::new("Caeleb Dressel", "USA", &[
            ("total_olympic_medals", 10.0), ("olympic_gold", 9.0),
            ("olympic_silver", 1.0), ("total_world_championship_medals", 20.0),
            ("world_championship_gold", 13.0), ("world_record_count", 5.0),
            ("fina_swimmer_of_year_awards", 2.0), ("years_active", 9.0),
            ("pan_pacific_medals", 6.0), ("prize_money_million_usd", 1.5),
        ]),
        Athlete::new("Matt Biondi", "USA", &[
            ("total_olympic_medals", 11.0), ("olympic_gold", 8.0),
            ("olympic_silver", 2.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 6.0), ("world_championship_gold", 3.0),
            ("world_record_count", 12.0), ("years_active", 10.0),
            ("pan_pacific_medals", 8.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 31.0),
        ]),
        Athlete::new("Johnny Weissmuller", "USA", &[
            ("total_olympic_medals", 5.0), ("olympic_gold", 5.0),
            ("world_record_count", 28.0), ("years_active", 10.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 94.0),
        ]),
        Athlete::new("Grant Hackett", "Australia", &[
            ("total_olympic_medals", 7.0), ("olympic_gold", 3.0),
            ("olympic_silver", 3.0), ("olympic_bronze", 1.0),
            ("total_world_championship_medals", 19.0), ("world_championship_gold", 10.0),
            ("world_record_count", 9.0), ("years_active", 12.0),
            ("commonwealth_medals", 5.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 15.0),
        ]),
        Athlete::new("Aaron Peirsol", "USA", &[
            ("total_olympic_medals", 7.0), ("olympic_gold", 5.0),
            ("olympic_silver", 2.0), ("total_world_championship_medals", 12.0),
            ("world_championship_gold", 8.0), ("world_record_count", 10.0),
            ("years_active", 10.0), ("pan_pacific_medals", 7.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 12.0),
        ]),
        Athlete::new("Adam Peaty", "Great Britain", &[
            ("total_olympic_medals", 5.0), ("olympic_gold", 3.0),
            ("olympic_silver", 2.0), ("total_world_championship_medals", 13.0),
            ("world_championship_gold", 8.0), ("world_record_count", 14.0),
            ("fina_swimmer_of_year_awards", 1.0), ("years_active", 11.0),
            ("commonwealth_medals", 7.0), ("prize_money_million_usd", 0.8),
        ]),
    ]
}
