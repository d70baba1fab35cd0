use rayon::prelude::*;

use super::network::{LinkAttribute, Mode, NetworkLink, TravelTime, Vehicle};
use super::population::{Person, WeightProvider};
use super::UtilityConfig;
use super::UtilityError;


// travel times are always looked up at this instant, not at the link entry time.
static REFERENCE_TIME_S: f64 = 0.;

/// The cost of traversing one link.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum LinkCost {
    Finite(f64),
    // the link can't be used with this mode at all
    Inadmissible,
}

impl LinkCost {
    pub fn is_admissible(&self) -> bool {
        match self {
            LinkCost::Finite(_) => true,
            LinkCost::Inadmissible => false,
        }
    }

    /// Converts to the value handed to routers, which treat NaN as a closed link.
    pub fn to_router_value(&self) -> f64 {
        match self {
            LinkCost::Finite(cost) => *cost,
            LinkCost::Inadmissible => f64::NAN,
        }
    }
}

/// The router-facing cost interface.  A NaN disutility means the link must not be used.
pub trait TravelDisutility {
    fn link_travel_disutility<L: NetworkLink>(&self, link: &L, time_s: f64, person: &Person,
                                              vehicle: &Vehicle) -> Result<f64, UtilityError>;

    /// A lower bound on the disutility of the link, for pruning.
    fn link_minimum_travel_disutility<L: NetworkLink>(&self, _link: &L) -> f64 {
        0.
    }
}

/// Generalized cost of active-mode travel.  Each person weighs a fixed list of
/// street-environment attributes, and the link's travel time is inflated by
/// `1 + sum(weight_i * attribute_i)`.
pub struct StreetEnvironmentDisutility<T, W> {
    mode: Mode,
    attributes: Vec<LinkAttribute>,
    travel_time: T,
    weights: W,
}

impl<T, W> StreetEnvironmentDisutility<T, W> where T: TravelTime, W: WeightProvider {
    pub fn new(mode: Mode, attributes: Vec<LinkAttribute>, travel_time: T, weights: W)
               -> StreetEnvironmentDisutility<T, W> {
        StreetEnvironmentDisutility {mode, attributes, travel_time, weights}
    }

    pub fn from_config(cfg: &UtilityConfig, travel_time: T, weights: W)
                       -> StreetEnvironmentDisutility<T, W> {
        StreetEnvironmentDisutility::new(cfg.get_mode(), cfg.get_attributes().clone(),
                                         travel_time, weights)
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn get_attributes(&self) -> &Vec<LinkAttribute> {
        &self.attributes
    }

    pub fn evaluate<L: NetworkLink>(&self, link: &L, _time_s: f64, person: &Person,
                                    vehicle: &Vehicle) -> Result<LinkCost, UtilityError> {
        if !link.allows_mode(self.mode) {
            return Ok(LinkCost::Inadmissible);
        }

        let travel_time = self.travel_time.link_travel_time(link, REFERENCE_TIME_S, person,
                                                            vehicle);
        let weights = match self.weights.marginal_utilities(person) {
            Some(weights) => weights,
            None => return Ok(LinkCost::Finite(travel_time)),
        };
        self.check_weights(person, &weights)?;

        let mut penalty = 0.;
        for (attribute, weight) in self.attributes.iter().zip(weights.iter()) {
            penalty += weight * attribute.extract(link)?;
        }
        let cost = travel_time * (1. + penalty);
        if !cost.is_finite() {
            return Err(UtilityError::NonFiniteCost {
                link: String::from(link.get_id()),
                person: String::from(person.get_id()),
                travel_time,
                penalty,
            });
        }
        return Ok(LinkCost::Finite(cost));
    }

    fn check_weights(&self, person: &Person, weights: &[f64]) -> Result<(), UtilityError> {
        if weights.len() != self.attributes.len() {
            return Err(UtilityError::AttributeCountMismatch {
                person: String::from(person.get_id()),
                expected: self.attributes.len(),
                found: weights.len(),
            });
        }

        for (index, (weight, attribute)) in weights.iter().zip(&self.attributes).enumerate() {
            if !weight.is_finite() || *weight < 0. {
                return Err(UtilityError::InvalidWeight {
                    person: String::from(person.get_id()),
                    index,
                    attribute: String::from(attribute.name()),
                    weight: *weight,
                });
            }
        }
        Ok(())
    }
}

impl<T, W> StreetEnvironmentDisutility<T, W>
    where T: TravelTime + Sync, W: WeightProvider + Sync
{
    /// Evaluates many links for the same traveller on the rayon thread pool.  Fails on the
    /// first invalid weight vector.
    pub fn evaluate_links<L>(&self, links: &[L], time_s: f64, person: &Person,
                             vehicle: &Vehicle) -> Result<Vec<LinkCost>, UtilityError>
        where L: NetworkLink + Sync
    {
        links.par_iter()
            .map(|link| self.evaluate(link, time_s, person, vehicle))
            .collect()
    }
}

impl<T, W> TravelDisutility for StreetEnvironmentDisutility<T, W>
    where T: TravelTime, W: WeightProvider
{
    fn link_travel_disutility<L: NetworkLink>(&self, link: &L, time_s: f64, person: &Person,
                                              vehicle: &Vehicle) -> Result<f64, UtilityError> {
        let cost = self.evaluate(link, time_s, person, vehicle)?;
        Ok(cost.to_router_value())
    }
}

/// Plain travel time, with the same mode restriction.  Used for modes where nobody has
/// attribute weights.
pub struct TimeOnlyDisutility<T> {
    mode: Mode,
    travel_time: T,
}

impl<T: TravelTime> TimeOnlyDisutility<T> {
    pub fn new(mode: Mode, travel_time: T) -> TimeOnlyDisutility<T> {
        TimeOnlyDisutility {mode, travel_time}
    }
}

impl<T: TravelTime> TravelDisutility for TimeOnlyDisutility<T> {
    fn link_travel_disutility<L: NetworkLink>(&self, link: &L, time_s: f64, person: &Person,
                                              vehicle: &Vehicle) -> Result<f64, UtilityError> {
        if !link.allows_mode(self.mode) {
            return Ok(f64::NAN);
        }
        Ok(self.travel_time.link_travel_time(link, time_s, person, vehicle))
    }
}
