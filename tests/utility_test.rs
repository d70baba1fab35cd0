use std::collections::HashMap;
use std::path::PathBuf;
use approx::assert_relative_eq;
use glob::glob;
use ndarray::array;

use travel_demand_utility::AttractionBalancer;
use travel_demand_utility::BalancingConfig;
use travel_demand_utility::DestinationUtilityFunction;
use travel_demand_utility::FreespeedTravelTime;
use travel_demand_utility::Household;
use travel_demand_utility::Link;
use travel_demand_utility::Mode;
use travel_demand_utility::Person;
use travel_demand_utility::PersonWeights;
use travel_demand_utility::Purpose;
use travel_demand_utility::StreetEnvironmentDisutility;
use travel_demand_utility::TravelDisutility;
use travel_demand_utility::TravelTime;
use travel_demand_utility::UtilityConfig;
use travel_demand_utility::UtilityError;
use travel_demand_utility::Vehicle;
use travel_demand_utility::Zone;


fn config_paths() -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = glob("tests/configs/*.yaml")
        .expect("Failed to read glob pattern")
        .map(|path| path.unwrap())
        .collect();
    assert!(paths.len() > 0);
    paths
}

/// Builds a link allowing `mode` where every configured attribute has the same value.
fn uniform_link(cfg: &UtilityConfig, mode: Mode, value: f64) -> Link {
    let mut link = Link::new("uniform", vec![mode], 300., 6.);
    for attribute in cfg.get_attributes() {
        link.set_attribute(attribute, value);
    }
    link
}

#[test]
fn test_disutility_from_configs() {
    for path in config_paths() {
        println!("Testing {:?}", path);
        let cfg = UtilityConfig::from_file(&path).unwrap();
        let num_attributes = cfg.get_attributes().len();
        let disutility = StreetEnvironmentDisutility::from_config(
            &cfg, FreespeedTravelTime,
            move |person: &Person| if person.get_id() == "indifferent" {
                None
            } else {
                Some(vec![0.5; num_attributes])
            });
        let vehicle = Vehicle::new("v", 20.);
        let link = uniform_link(&cfg, cfg.get_mode(), 0.2);
        let person = Person::new("sensitive", None);
        let travel_time = FreespeedTravelTime.link_travel_time(&link, 0., &person, &vehicle);
        assert_relative_eq!(travel_time, 50.);

        let cost = disutility.link_travel_disutility(&link, 0., &person, &vehicle).unwrap();
        assert_relative_eq!(cost, travel_time * (1. + 0.1 * num_attributes as f64),
                            epsilon = 1e-9);
        assert!(cost >= travel_time);

        let indifferent = Person::new("indifferent", None);
        assert_eq!(disutility.link_travel_disutility(&link, 0., &indifferent, &vehicle).unwrap(),
                   travel_time);

        let car_only = Link::new("motorway", vec![Mode::Car], 300., 30.);
        assert!(disutility.link_travel_disutility(&car_only, 0., &person, &vehicle)
                .unwrap().is_nan());
    }
}

#[test]
fn test_balancing_from_configs() {
    for path in config_paths() {
        println!("Testing {:?}", path);
        let cfg = UtilityConfig::from_file(&path).unwrap();
        let purposes = cfg.get_balance_purposes().clone();

        let mut zones: Vec<Zone> = (0..4)
            .map(|ii| {
                let mut zone = Zone::new(&ii.to_string());
                for purpose in &purposes {
                    zone.set_attraction(*purpose, 10. * (ii + 1) as f64);
                }
                zone
            })
            .collect();
        let before = zones.clone();

        // every purpose except the first gets trips
        let mut household = Household::new("h");
        let mut expected_trips = HashMap::new();
        for (ii, purpose) in purposes.iter().enumerate().skip(1) {
            household.add_trips(*purpose, 3 * ii);
            expected_trips.insert(*purpose, (3 * ii) as f64);
        }

        let balancer = AttractionBalancer::from_config(&cfg);
        let report = balancer.balance_configured(&cfg, &mut zones, &[household]).unwrap();

        assert!(report.was_skipped(purposes[0]));
        for (after, unbalanced) in zones.iter().zip(before.iter()) {
            assert_eq!(after.get_attraction(purposes[0]), unbalanced.get_attraction(purposes[0]));
        }
        for (purpose, trips) in expected_trips {
            let total: f64 = zones.iter().map(|zone| zone.get_attraction(purpose)).sum();
            assert_relative_eq!(total, trips / cfg.get_scale_factor(), max_relative = 1e-12);
            assert!(report.get_ratio(purpose).is_some());
        }
    }
}

#[test]
fn test_two_zone_hbw_scenario() {
    let mut zones = vec![
        Zone::new("Z1").with_attraction(Purpose::HBW, 100.),
        Zone::new("Z2").with_attraction(Purpose::HBW, 300.),
    ];
    let mut hh1 = Household::new("1");
    hh1.add_trips(Purpose::HBW, 22);
    let mut hh2 = Household::new("2");
    hh2.add_trips(Purpose::HBW, 18);
    hh2.add_trips(Purpose::HBO, 5);

    let report = AttractionBalancer::new(1.0)
        .balance(&mut zones, &[hh1, hh2], &[Purpose::HBW])
        .unwrap();
    assert_relative_eq!(report.get_ratio(Purpose::HBW).unwrap(), 0.1);
    assert_relative_eq!(zones[0].get_attraction(Purpose::HBW), 10.);
    assert_relative_eq!(zones[1].get_attraction(Purpose::HBW), 30.);
}

#[test]
fn test_balance_then_distribute() {
    let mut zones = vec![
        Zone::new("A").with_attraction(Purpose::NHBW, 2.),
        Zone::new("B").with_attraction(Purpose::NHBW, 6.),
        Zone::new("C").with_attraction(Purpose::NHBW, 0.),
    ];
    let mut household = Household::new("h");
    household.add_trips(Purpose::NHBW, 4);
    AttractionBalancer::default()
        .balance(&mut zones, &[household], &[Purpose::NHBW])
        .unwrap();

    let distances = array![[1., 3., 9.], [3., 1., 5.], [9., 5., 1.]];
    let func = DestinationUtilityFunction::new(Purpose::NHBW).unwrap();
    let utilities = func.zone_utility_matrix(&zones, distances.view()).unwrap();
    assert!(utilities.iter().all(|uu| uu.is_finite()));
    // the zone with nothing to attract gets no utility from anywhere
    assert!(utilities.column(2).iter().all(|uu| *uu == 0.));
    assert_relative_eq!(utilities[[0, 1]], func.utility(3., 3.));
}

#[test]
fn test_unparameterized_purpose() {
    match DestinationUtilityFunction::new(Purpose::AIRPORT) {
        Err(UtilityError::UnsupportedPurpose(purpose)) => assert_eq!(purpose, Purpose::AIRPORT),
        other => panic!("expected an unsupported purpose, got {:?}", other),
    }
    for purpose in Purpose::parameterized() {
        assert!(DestinationUtilityFunction::new(purpose).is_ok());
    }
}

#[test]
fn test_bicycle_excluded_link() {
    let disutility = StreetEnvironmentDisutility::new(Mode::Bicycle, vec![], FreespeedTravelTime,
                                                      PersonWeights);
    let link = Link::new("no-bikes", vec![Mode::Car, Mode::Walk], 100., 10.);
    let person = Person::new("p", Some(vec![]));
    let cost = disutility.link_travel_disutility(&link, 0., &person, &Vehicle::new("b", 6.))
        .unwrap();
    assert!(cost.is_nan());
}
