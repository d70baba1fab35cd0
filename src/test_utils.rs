use super::{Household, Link, LinkAttribute, Mode, Purpose};


pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}

pub fn street_attributes() -> Vec<LinkAttribute> {
    vec![LinkAttribute::Gradient, LinkAttribute::LinkStress, LinkAttribute::JunctionStress]
}

/// A 100 m cycle path with a 5 m/s freespeed, so 20 s to cross at full speed.
pub fn bike_link(id: &str, gradient: f64, link_stress: f64, junction_stress: f64) -> Link {
    Link::new(id, vec![Mode::Bicycle, Mode::Walk], 100., 5.)
        .with_attribute(&LinkAttribute::Gradient, gradient)
        .with_attribute(&LinkAttribute::LinkStress, link_stress)
        .with_attribute(&LinkAttribute::JunctionStress, junction_stress)
}

/// One household per entry of `trip_counts`, each with that many trips of `purpose`.
pub fn households_with_trips(purpose: Purpose, trip_counts: &[usize]) -> Vec<Household> {
    trip_counts.iter()
        .enumerate()
        .map(|(ii, count)| {
            let mut household = Household::new(&format!("{}_{}", purpose, ii));
            household.add_trips(purpose, *count);
            household
        })
        .collect()
}
