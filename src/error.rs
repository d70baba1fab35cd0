use super::Purpose;


#[derive(thiserror::Error, Debug)]
pub enum UtilityError {
    #[error("person {person} has {found} attribute weights but {expected} link attributes are configured")]
    AttributeCountMismatch {
        person: String,
        expected: usize,
        found: usize,
    },
    #[error("person {person} has weight {weight} for attribute {index} ({attribute}); weights must be finite and non-negative")]
    InvalidWeight {
        person: String,
        index: usize,
        attribute: String,
        weight: f64,
    },
    #[error("link {link} has non-finite value {value} for attribute {attribute}")]
    NonFiniteAttribute {
        link: String,
        attribute: String,
        value: f64,
    },
    #[error("disutility of link {link} for person {person} is not finite (travel time {travel_time}, penalty {penalty})")]
    NonFiniteCost {
        link: String,
        person: String,
        travel_time: f64,
        penalty: f64,
    },
    #[error("destination utility is not implemented for purpose {0}")]
    UnsupportedPurpose(Purpose),
    #[error("balancing ratio for purpose {purpose} is {ratio} ({trips} trips / scale factor {scale_factor} / attraction sum {attraction_sum})")]
    NonFiniteRatio {
        purpose: Purpose,
        trips: f64,
        scale_factor: f64,
        attraction_sum: f64,
        ratio: f64,
    },
    #[error("zone {zone} has a non-finite attraction for purpose {purpose} after balancing (old value {old_attraction}, ratio {ratio})")]
    NonFiniteAttraction {
        zone: String,
        purpose: Purpose,
        old_attraction: f64,
        ratio: f64,
    },
    #[error("{attractions} destination attractions given for a distance matrix with {destinations} destinations")]
    ShapeMismatch {
        attractions: usize,
        destinations: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown mode {0}")]
    UnknownMode(String),
    #[error("unknown purpose {0}")]
    UnknownPurpose(String),
    #[error("unknown link attribute {0}")]
    UnknownAttribute(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] yaml_rust::ScanError),
}
