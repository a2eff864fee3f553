use crate::dataset::Athlete;
use crate::model::ScoringModel;
use crate::{Sport, SportSpec};

pub(crate) fn spec() -> SportSpec {
    SportSpec {
        sport: Sport::MensGolf,
        title: "Mens Golf",
        model: model(),
        athletes: athletes(),
    }
}

fn model() -> ScoringModel {
    ScoringModel::new()
        .weight("pga_tour_wins", 3.0)
        .weight("european_tour_wins", 1.5)
        .weight("major_wins", 6.0)
        .weight("fedex_cup_titles", 3.0)
        .weight("runner_up_majors", 1.0)
        .weight("ryder_cup_appearances", 1.0)
        // Ball striking; lower scoring average is better
        .weight("scoring_average", -2.0)
        .weight("driving_distance_yards", 0.02)
        .weight("sg_off_tee", 1.5)
        .weight("sg_approach", 2.0)
        .weight("sg_putting", 1.0)
        // Season honors
        .weight("leading_money_list_titles", 2.0)
        .weight("pga_player_of_year_awards", 3.0)
        .weight("vardon_trophies", 1.5)
        .weight("hall_of_fame", 5.0)
        .weight("holes_in_one", 0.05)
        .capped("years_since_retirement", 30.0, -0.2)
}

fn athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Jack Nicklaus", "USA", &[
            ("pga_tour_wins", 73.0), ("european_tour_wins", 9.0), ("major_wins", 18.0),
            ("runner_up_majors", 19.0), ("ryder_cup_appearances", 6.0),
            ("scoring_average", 70.8), ("driving_distance_yards", 276.0),
            ("leading_money_list_titles", 8.0), ("pga_player_of_year_awards", 5.0),
            ("hall_of_fame", 1.0), ("holes_in_one", 20.0),
            ("years_since_retirement", 18.0),
        ]),
        Athlete::new("Tiger Woods", "USA", &[
            ("pga_tour_wins", 82.0), ("european_tour_wins", 41.0), ("major_wins", 15.0),
            ("fedex_cup_titles", 2.0), ("runner_up_majors", 7.0),
            ("ryder_cup_appearances", 8.0), ("scoring_average", 68.9),
            ("driving_distance_yards", 298.0), ("sg_off_tee", 0.9),
            ("sg_approach", 1.3), ("sg_putting", 0.5),
            ("leading_money_list_titles", 10.0), ("pga_player_of_year_awards", 11.0),
            ("vardon_trophies", 9.0), ("hall_of_fame", 1.0), ("holes_in_one", 20.0),
        ]),
        Athlete::new("Ben Hogan", "USA", &[
            ("pga_tour_wins", 64.0), ("major_wins", 9.0), ("runner_up_majors", 6.0),
            ("ryder_cup_appearances", 2.0), ("scoring_average", 70.4),
            ("leading_money_list_titles", 5.0), ("pga_player_of_year_awards", 4.0),
            ("vardon_trophies", 3.0), ("hall_of_fame", 1.0),
            ("years_since_retirement", 52.0),
        ]),
        Athlete::new("Arnold Palmer", "USA", &[
            ("pga_tour_wins", 62.0), ("european_tour_wins", 2.0), ("major_wins", 7.0),
            ("runner_up_majors", 10.0), ("ryder_cup_appearances", 6.0),
            ("scoring_average", 70.9), ("leading_money_list_titles", 4.0),
            ("pga_player_of_year_awards", 2.0), ("vardon_trophies", 4.0),
            ("hall_of_fame", 1.0), ("holes_in_one", 19.0),
            ("years_since_retirement", 17.0),
        ]),
        Athlete::new("Sam Snead", "USA", &[
            ("pga_tour_wins", 82.0), ("major_wins", 7.0), ("runner_up_majors", 8.0),
            ("ryder_cup_appearances", 7.0), ("scoring_average", 70.2),
            ("leading_money_list_titles", 3.0), ("vardon_trophies", 4.0),
            ("hall_of_fame", 1.0), ("holes_in_one", 18.0),
            ("years_since_retirement", 44.0),
        ]),
        Athlete::new("Gary Player", "South Africa", &[
            ("pga_tour_wins", 24.0), ("european_tour_wins", 15.0), ("major_wins", 9.0),
            ("runner_up_majors", 6.0), ("scoring_average", 70.6),
            ("leading_money_list_titles", 1.0), ("hall_of_fame", 1.0),
            ("holes_in_one", 19.0), ("years_since_retirement", 15.0),
        ]),
        Athlete::new("Tom Watson", "USA", &[
            ("pga_tour_wins", 39.0), ("european_tour_wins", 3.0), ("major_wins", 8.0),
            ("runner_up_majors", 6.0), ("ryder_cup_appearances", 4.0),
            ("scoring_average", 70.5), ("leading_money_list_titles", 5.0),
            ("pga_player_of_year_awards", 6.0), ("vardon_trophies", 3.0),
            ("hall_of_fame", 1.0), ("years_since_retirement", 5.0),
        ]),
        Athlete::new("Phil Mickelson", "USA", &[
            ("pga_tour_wins", 45.0), ("european_tour_wins", 1.0), ("major_wins", 6.0),
            ("runner_up_majors", 11.0), ("ryder_cup_appearances", 12.0),
            ("scoring_average", 69.7), ("driving_distance_yards", 299.0),
            ("sg_off_tee", 0.4), ("sg_approach", 0.7), ("sg_putting", 0.3),
            ("hall_of_fame", 1.0), ("holes_in_one", 12.0),
        ]),
        Athlete::new("Rory McIlroy", "Northern Ireland", &[
            ("pga_tour_wins", 27.0), ("european_tour_wins", 17.0), ("major_wins", 5.0),
            ("fedex_cup_titles", 3.0), ("runner_up_majors", 7.0),
            ("ryder_cup_appearances", 7.0), ("scoring_average", 68.9),
            ("driving_distance_yards", 326.0), ("sg_off_tee", 1.2),
            ("sg_approach", 0.9), ("sg_putting", 0.3),
            ("leading_money_list_titles", 3.0), ("pga_player_of_year_awards", 3.0),
            ("vardon_trophies", 3.0),
        ]),
        Athlete::new("Walter Hagen", "USA", &[
            ("pga_tour_wins", 45.0), ("major_wins", 11.0), ("runner_up_majors", 6.0),
            ("ryder_cup_appearances", 5.0), ("scoring_average", 72.5),
            ("hall_of_fame", 1.0), ("years_since_retirement", 83.0),
        ]),
    ]
}
