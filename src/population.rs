use std::borrow::Cow;
use std::collections::HashMap;

use itertools::Itertools;

use super::Purpose;


#[derive(PartialEq, Debug, Clone)]
pub struct Person {
    pub id: String,
    // sensitivity to each configured link attribute, in the same order.  None means the
    // person only cares about travel time.
    marginal_utilities: Option<Vec<f64>>,
}

impl Person {
    pub fn new(id: &str, marginal_utilities: Option<Vec<f64>>) -> Person {
        Person {
            id: String::from(id),
            marginal_utilities,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_marginal_utilities(&self) -> Option<&[f64]> {
        self.marginal_utilities.as_deref()
    }
}

/// Supplies each person's link attribute weights.
pub trait WeightProvider {
    fn marginal_utilities<'a>(&self, person: &'a Person) -> Option<Cow<'a, [f64]>>;
}

/// Reads the weights stored on the person.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonWeights;

impl WeightProvider for PersonWeights {
    fn marginal_utilities<'a>(&self, person: &'a Person) -> Option<Cow<'a, [f64]>> {
        person.get_marginal_utilities().map(Cow::Borrowed)
    }
}

impl<F> WeightProvider for F where F: Fn(&Person) -> Option<Vec<f64>> {
    fn marginal_utilities<'a>(&self, person: &'a Person) -> Option<Cow<'a, [f64]>> {
        self(person).map(Cow::Owned)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Trip {
    pub id: String,
    pub purpose: Purpose,
}

impl Trip {
    pub fn new(id: &str, purpose: Purpose) -> Trip {
        Trip {id: String::from(id), purpose}
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Household {
    pub id: String,
    trips: Vec<Trip>,
}

impl Household {
    pub fn new(id: &str) -> Household {
        Household {id: String::from(id), trips: vec![]}
    }

    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Adds `count` trips of the given purpose, with ids derived from the household id.
    pub fn add_trips(&mut self, purpose: Purpose, count: usize) {
        let start = self.trips.len();
        for ii in start..start + count {
            let id = format!("{}_{}", self.id, ii);
            self.trips.push(Trip::new(&id, purpose));
        }
    }

    pub fn get_trips(&self) -> &Vec<Trip> {
        &self.trips
    }

    pub fn count_trips(&self, purpose: Purpose) -> usize {
        self.trips.iter().filter(|trip| trip.purpose == purpose).count()
    }
}

/// Counts the generated trips of every purpose across all households.  Purposes with no
/// trips are absent from the map.
pub fn trips_by_purpose(households: &[Household]) -> HashMap<Purpose, usize> {
    households.iter()
        .flat_map(|hh| hh.get_trips().iter())
        .map(|trip| (trip.purpose, trip))
        .into_group_map()
        .into_iter()
        .map(|(purpose, trips)| (purpose, trips.len()))
        .collect()
}
