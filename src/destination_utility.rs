use ndarray::prelude::*;
use ndarray::Zip;

use super::purpose::{DestinationParameters, Purpose};
use super::zones::Zone;
use super::UtilityError;


/// Purpose-specific attractiveness of a destination zone.
///
/// The impedance decays exponentially with distance, and the utility is exponential in the
/// impedance:
///
/// `utility = exp(impedance_scale * exp(distance_decay * distance_km)) * attraction`
///
/// With a positive impedance scale this decreases with distance.  A negative scale (HBS)
/// makes it increase towards `attraction` as distance grows; the calibrated values are used
/// as they are.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct DestinationUtilityFunction {
    purpose: Purpose,
    parameters: DestinationParameters,
}

impl DestinationUtilityFunction {
    pub fn new(purpose: Purpose) -> Result<DestinationUtilityFunction, UtilityError> {
        let parameters = purpose.destination_parameters()?;
        Ok(DestinationUtilityFunction {purpose, parameters})
    }

    pub fn get_purpose(&self) -> Purpose {
        self.purpose
    }

    pub fn get_parameters(&self) -> &DestinationParameters {
        &self.parameters
    }

    pub fn utility(&self, attraction: f64, distance_km: f64) -> f64 {
        if attraction == 0. {
            return 0.;
        }
        let impedance = self.parameters.impedance_scale *
            (self.parameters.distance_decay * distance_km).exp();
        return impedance.exp() * attraction;
    }

    /// Computes the utility of every destination from every origin.  `distances_km` has one
    /// row per origin and one column per destination; `attractions` has one entry per
    /// destination.
    pub fn utility_matrix(&self, attractions: ArrayView1<f64>, distances_km: ArrayView2<f64>)
                          -> Result<Array2<f64>, UtilityError> {
        if attractions.len() != distances_km.ncols() {
            return Err(UtilityError::ShapeMismatch {
                attractions: attractions.len(),
                destinations: distances_km.ncols(),
            });
        }

        let mut utilities: Array2<f64> = Array2::zeros(distances_km.raw_dim());
        Zip::from(&mut utilities)
            .and(&distances_km)
            .and_broadcast(&attractions)
            .par_for_each(|utility, &distance, &attraction| {
                *utility = self.utility(attraction, distance);
            });
        Ok(utilities)
    }

    /// Like `utility_matrix`, with the attractions read from the zones for this purpose.
    pub fn zone_utility_matrix(&self, zones: &[Zone], distances_km: ArrayView2<f64>)
                               -> Result<Array2<f64>, UtilityError> {
        let attractions: Array1<f64> = zones.iter()
            .map(|zone| zone.get_attraction(self.purpose))
            .collect();
        self.utility_matrix(attractions.view(), distances_km)
    }
}
