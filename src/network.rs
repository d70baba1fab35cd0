use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::Person;
use super::UtilityError;


#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Mode {
    Car,
    Bicycle,
    Walk,
    Pt,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Car => "car",
            Mode::Bicycle => "bike",
            Mode::Walk => "walk",
            Mode::Pt => "pt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = UtilityError;

    fn from_str(ss: &str) -> Result<Mode, UtilityError> {
        match ss.trim().to_lowercase().as_str() {
            "car" => Ok(Mode::Car),
            "bike" | "bicycle" => Ok(Mode::Bicycle),
            "walk" => Ok(Mode::Walk),
            "pt" | "bus" => Ok(Mode::Pt),
            _ => Err(UtilityError::UnknownMode(String::from(ss))),
        }
    }
}

/// A street-environment attribute that can make a link less pleasant to travel on.
/// Every attribute evaluates to a non-negative penalty: values below 0 are clamped, so a
/// pleasant link is never cheaper than its travel time.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum LinkAttribute {
    Gradient,
    LinkStress,
    JunctionStress,
    Discomfort,
    Custom(String),
}

impl LinkAttribute {
    pub fn name(&self) -> &str {
        match self {
            LinkAttribute::Gradient => "gradient",
            LinkAttribute::LinkStress => "link_stress",
            LinkAttribute::JunctionStress => "junction_stress",
            LinkAttribute::Discomfort => "discomfort",
            LinkAttribute::Custom(name) => name.as_str(),
        }
    }

    /// Parses an attribute name.  Names not in the built-in set are accepted as custom
    /// attributes, which are read from the link by the same name.  A warning is logged for
    /// them, since a misspelled built-in name would otherwise silently read 0 everywhere.
    pub fn from_name(name: &str) -> Result<LinkAttribute, UtilityError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UtilityError::UnknownAttribute(String::from(name)));
        }
        let attribute = match name {
            "gradient" => LinkAttribute::Gradient,
            "link_stress" => LinkAttribute::LinkStress,
            "junction_stress" => LinkAttribute::JunctionStress,
            "discomfort" => LinkAttribute::Discomfort,
            _ => {
                log::warn!("{} is not a built-in link attribute, reading it as a custom one",
                           name);
                LinkAttribute::Custom(String::from(name))
            },
        };
        Ok(attribute)
    }

    /// The value of this attribute on a link.  Missing attributes count as 0, and negative
    /// values (such as a downhill gradient) count as no penalty.
    pub fn extract<L: NetworkLink + ?Sized>(&self, link: &L) -> Result<f64, UtilityError> {
        let value = link.get_attribute(self.name()).unwrap_or(0.);
        if !value.is_finite() {
            return Err(UtilityError::NonFiniteAttribute {
                link: String::from(link.get_id()),
                attribute: String::from(self.name()),
                value,
            });
        }
        Ok(value.max(0.))
    }
}

impl fmt::Display for LinkAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The read-only view of a network link that the cost functions need.
pub trait NetworkLink {
    fn get_id(&self) -> &str;
    fn allows_mode(&self, mode: Mode) -> bool;
    fn get_length_m(&self) -> f64;
    fn get_freespeed_mps(&self) -> f64;
    fn get_attribute(&self, name: &str) -> Option<f64>;
}

#[derive(PartialEq, Debug, Clone)]
pub struct Link {
    id: String,
    modes: Vec<Mode>,
    length_m: f64,
    freespeed_mps: f64,
    attributes: HashMap<String, f64>,
}

impl Link {
    pub fn new(id: &str, modes: Vec<Mode>, length_m: f64, freespeed_mps: f64) -> Link {
        Link {
            id: String::from(id),
            modes,
            length_m,
            freespeed_mps,
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: &LinkAttribute, value: f64) -> Link {
        self.set_attribute(attribute, value);
        self
    }

    pub fn set_attribute(&mut self, attribute: &LinkAttribute, value: f64) {
        self.attributes.insert(String::from(attribute.name()), value);
    }
}

impl NetworkLink for Link {
    fn get_id(&self) -> &str {
        &self.id
    }

    fn allows_mode(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    fn get_length_m(&self) -> f64 {
        self.length_m
    }

    fn get_freespeed_mps(&self) -> f64 {
        self.freespeed_mps
    }

    fn get_attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).cloned()
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Vehicle {
    pub id: String,
    pub max_speed_mps: f64,
}

impl Vehicle {
    pub fn new(id: &str, max_speed_mps: f64) -> Vehicle {
        Vehicle {id: String::from(id), max_speed_mps}
    }
}

/// Supplies the time in seconds needed to traverse a link.
pub trait TravelTime {
    fn link_travel_time<L: NetworkLink>(&self, link: &L, time_s: f64, person: &Person,
                                        vehicle: &Vehicle) -> f64;
}

/// Uncongested travel times: the link length at the lower of the link's freespeed and the
/// vehicle's maximum speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreespeedTravelTime;

impl TravelTime for FreespeedTravelTime {
    fn link_travel_time<L: NetworkLink>(&self, link: &L, _time_s: f64, _person: &Person,
                                        vehicle: &Vehicle) -> f64 {
        let speed = link.get_freespeed_mps().min(vehicle.max_speed_mps);
        return link.get_length_m() / speed;
    }
}
