use itertools::Itertools;

use super::population::{trips_by_purpose, Household};
use super::zones::Zone;
use super::BalancingConfig;
use super::Purpose;
use super::UtilityError;


/// What a balancing run did for each purpose.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct BalanceReport {
    // the ratio every zone's attraction was multiplied by
    pub ratios: Vec<(Purpose, f64)>,
    // purposes with no generated trips, whose zones were left untouched
    pub skipped: Vec<Purpose>,
}

impl BalanceReport {
    pub fn get_ratio(&self, purpose: Purpose) -> Option<f64> {
        self.ratios.iter()
            .find(|(pp, _)| *pp == purpose)
            .map(|(_, ratio)| *ratio)
    }

    pub fn was_skipped(&self, purpose: Purpose) -> bool {
        self.skipped.contains(&purpose)
    }
}

/// Rescales zone attractions so that, for each purpose, the attractions sum to the number
/// of generated trips divided by the scale factor.  Every zone gets the same ratio.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct AttractionBalancer {
    scale_factor: f64,
}

impl Default for AttractionBalancer {
    fn default() -> AttractionBalancer {
        AttractionBalancer::new(1.)
    }
}

impl AttractionBalancer {
    pub fn new(scale_factor: f64) -> AttractionBalancer {
        AttractionBalancer {scale_factor}
    }

    pub fn from_config<CC: BalancingConfig>(cfg: &CC) -> AttractionBalancer {
        AttractionBalancer::new(cfg.get_scale_factor())
    }

    pub fn get_scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Balances each of `purposes` independently.  A purpose that fails leaves its own
    /// attractions unchanged, but purposes balanced before it keep their new values.
    pub fn balance(&self, zones: &mut [Zone], households: &[Household], purposes: &[Purpose])
                   -> Result<BalanceReport, UtilityError> {
        let trip_counts = trips_by_purpose(households);
        let mut report = BalanceReport::default();
        for purpose in purposes {
            let trips = trip_counts.get(purpose).cloned().unwrap_or(0);
            match self.balance_purpose(zones, *purpose, trips as f64)? {
                Some(ratio) => report.ratios.push((*purpose, ratio)),
                None => report.skipped.push(*purpose),
            }
        }

        let summary = report.ratios.iter()
            .map(|(pp, ratio)| format!("{} x{:.4}", pp, ratio))
            .join(", ");
        log::info!("Balanced attractions: {}", summary);
        Ok(report)
    }

    /// Balances the purposes listed in the config.
    pub fn balance_configured<CC: BalancingConfig>(&self, cfg: &CC, zones: &mut [Zone],
                                                   households: &[Household])
                                                   -> Result<BalanceReport, UtilityError> {
        self.balance(zones, households, cfg.get_balance_purposes())
    }

    /// Balances one purpose against a trip count.  Returns the applied ratio, or None if
    /// there were no trips to balance against.
    pub fn balance_purpose(&self, zones: &mut [Zone], purpose: Purpose, trips: f64)
                           -> Result<Option<f64>, UtilityError> {
        if trips == 0. {
            log::warn!("No {} trips were generated, so {} attractions can't be balanced",
                       purpose, purpose);
            return Ok(None);
        }

        let attraction_sum: f64 = zones.iter().map(|zone| zone.get_attraction(purpose)).sum();
        let ratio = trips / self.scale_factor / attraction_sum;
        if ratio.is_infinite() {
            return Err(UtilityError::NonFiniteRatio {
                purpose,
                trips,
                scale_factor: self.scale_factor,
                attraction_sum,
                ratio,
            });
        }

        // compute and check every zone before writing any of them
        let balanced = zones.iter()
            .map(|zone| {
                let old_attraction = zone.get_attraction(purpose);
                let new_attraction = old_attraction * ratio;
                if new_attraction.is_finite() {
                    Ok(new_attraction)
                } else {
                    Err(UtilityError::NonFiniteAttraction {
                        zone: String::from(zone.get_id()),
                        purpose,
                        old_attraction,
                        ratio,
                    })
                }
            })
            .collect::<Result<Vec<f64>, UtilityError>>()?;

        for (zone, attraction) in zones.iter_mut().zip(balanced) {
            zone.set_attraction(purpose, attraction);
        }
        log::debug!("{}: {} trips, attraction sum {}, ratio {}", purpose, trips, attraction_sum,
                    ratio);
        Ok(Some(ratio))
    }
}
