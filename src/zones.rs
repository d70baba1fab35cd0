use std::collections::HashMap;

use super::Purpose;


#[derive(PartialEq, Debug, Clone)]
pub struct Zone {
    pub id: String,
    attractions: HashMap<Purpose, f64>,
}

impl Zone {
    pub fn new(id: &str) -> Zone {
        Zone {id: String::from(id), attractions: HashMap::new()}
    }

    pub fn with_attraction(mut self, purpose: Purpose, attraction: f64) -> Zone {
        self.set_attraction(purpose, attraction);
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Zones without a value for a purpose attract nothing for it.
    pub fn get_attraction(&self, purpose: Purpose) -> f64 {
        match self.attractions.get(&purpose) {
            Some(attraction) => *attraction,
            None => 0.,
        }
    }

    pub fn set_attraction(&mut self, purpose: Purpose, attraction: f64) {
        self.attractions.insert(purpose, attraction);
    }
}
