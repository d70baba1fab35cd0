use std::fmt;
use std::str::FromStr;

use super::UtilityError;


/// Trip purposes.  HB = home-based, NHB = non-home-based.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum Purpose {
    // home-based work
    HBW,
    // home-based education (school)
    HBE,
    // home-based shopping
    HBS,
    // home-based other
    HBO,
    // non-home-based work
    NHBW,
    // non-home-based other
    NHBO,
    AIRPORT,
}

/// Calibrated distance-decay parameters for one purpose.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct DestinationParameters {
    pub distance_decay: f64,
    pub impedance_scale: f64,
}

impl Purpose {
    pub const ALL: [Purpose; 7] = [
        Purpose::HBW,
        Purpose::HBE,
        Purpose::HBS,
        Purpose::HBO,
        Purpose::NHBW,
        Purpose::NHBO,
        Purpose::AIRPORT,
    ];

    /// The purposes that have destination parameters.
    pub fn parameterized() -> Vec<Purpose> {
        Purpose::ALL.iter()
            .cloned()
            .filter(|pp| pp.destination_parameters().is_ok())
            .collect()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Purpose::HBW => "HBW",
            Purpose::HBE => "HBE",
            Purpose::HBS => "HBS",
            Purpose::HBO => "HBO",
            Purpose::NHBW => "NHBW",
            Purpose::NHBO => "NHBO",
            Purpose::AIRPORT => "AIRPORT",
        }
    }

    /// Looks up the destination utility parameters of this purpose.  These are calibrated
    /// values and must not be changed without re-estimating the distribution model.
    pub fn destination_parameters(&self) -> Result<DestinationParameters, UtilityError> {
        let (distance_decay, impedance_scale) = match self {
            Purpose::HBW => (-0.07, 9.),
            Purpose::HBE => (-0.149, 28.3),
            Purpose::HBS => (-0.01, -10.),
            Purpose::HBO => (-0.0107, 53.),
            Purpose::NHBW => (-0.0071, 16.1),
            Purpose::NHBO => (-0.0147, 16.6),
            Purpose::AIRPORT => return Err(UtilityError::UnsupportedPurpose(*self)),
        };
        Ok(DestinationParameters {distance_decay, impedance_scale})
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Purpose {
    type Err = UtilityError;

    fn from_str(ss: &str) -> Result<Purpose, UtilityError> {
        Purpose::ALL.iter()
            .find(|pp| pp.code().eq_ignore_ascii_case(ss.trim()))
            .cloned()
            .ok_or_else(|| UtilityError::UnknownPurpose(String::from(ss)))
    }
}
