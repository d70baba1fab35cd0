// imports of other modules from this crate
mod error;
pub use error::UtilityError;

mod purpose;
pub use purpose::{DestinationParameters, Purpose};

mod network;
pub use network::{FreespeedTravelTime, Link, LinkAttribute, Mode, NetworkLink, TravelTime,
                  Vehicle};

mod population;
pub use population::{trips_by_purpose, Household, Person, PersonWeights, Trip, WeightProvider};

mod zones;
pub use zones::Zone;

mod config_utils;
pub use config_utils::UtilityConfig;

mod link_disutility;
pub use link_disutility::{LinkCost, StreetEnvironmentDisutility, TimeOnlyDisutility,
                          TravelDisutility};

mod destination_utility;
pub use destination_utility::DestinationUtilityFunction;

mod attraction_balancer;
pub use attraction_balancer::{AttractionBalancer, BalanceReport};

#[cfg(test)]
mod test_utils;


/// Defines the configuration the attraction balancer needs.
pub trait BalancingConfig {
    // the fraction of the full population that was simulated
    fn get_scale_factor(&self) -> f64;
    fn get_balance_purposes(&self) -> &Vec<Purpose>;
}
