use std::collections::HashSet;
use std::path::Path;

use yaml_rust::Yaml;
use yaml_rust::YamlLoader;

use super::BalancingConfig;
use super::LinkAttribute;
use super::Mode;
use super::Purpose;
use super::UtilityError;


/// Configuration of the utility components, read from a yaml file like:
///
/// ```yaml
/// scale_factor: 0.05
/// disutility:
///   mode: bike
///   attributes: [gradient, link_stress, junction_stress]
/// balancing:
///   purposes: [HBW, HBE, HBS, HBO, NHBW, NHBO]
/// ```
///
/// Every key is optional.
#[derive(PartialEq, Debug, Clone)]
pub struct UtilityConfig {
    scale_factor: f64,
    // the mode whose links the street environment disutility applies to
    mode: Mode,
    // order matters: person weights are matched to attributes by position
    attributes: Vec<LinkAttribute>,
    balance_purposes: Vec<Purpose>,
}

impl Default for UtilityConfig {
    fn default() -> UtilityConfig {
        UtilityConfig {
            scale_factor: 1.0,
            mode: Mode::Bicycle,
            attributes: vec![],
            balance_purposes: Purpose::parameterized(),
        }
    }
}

impl BalancingConfig for UtilityConfig {
    fn get_scale_factor(&self) -> f64 {
        return self.scale_factor;
    }

    fn get_balance_purposes(&self) -> &Vec<Purpose> {
        return &self.balance_purposes;
    }
}

impl UtilityConfig {
    pub fn from_file(path: &Path) -> Result<UtilityConfig, UtilityError> {
        let file_contents = std::fs::read_to_string(path)?;
        let cfg = UtilityConfig::from_yaml_str(&file_contents)?;
        log::info!("Loaded utility config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<UtilityConfig, UtilityError> {
        let yaml_cfgs = YamlLoader::load_from_str(yaml)?;
        let yaml_cfg = match yaml_cfgs.get(0) {
            Some(yaml_cfg) => yaml_cfg,
            None => return Ok(UtilityConfig::default()),
        };
        let defaults = UtilityConfig::default();

        let scale_factor = match optional_f64(&yaml_cfg["scale_factor"], "scale_factor")? {
            Some(sf) => sf,
            None => defaults.scale_factor,
        };
        if !scale_factor.is_finite() || scale_factor <= 0. {
            return Err(UtilityError::InvalidConfig(
                format!("scale_factor must be positive, got {}", scale_factor)));
        }

        let disutility_cfg = &yaml_cfg["disutility"];
        let mode = match optional_str(&disutility_cfg["mode"], "disutility.mode")? {
            Some(mode) => mode.parse()?,
            None => defaults.mode,
        };

        let attributes = match optional_str_list(&disutility_cfg["attributes"],
                                                 "disutility.attributes")? {
            Some(names) => names.iter()
                .map(|name| LinkAttribute::from_name(name))
                .collect::<Result<Vec<LinkAttribute>, UtilityError>>()?,
            None => defaults.attributes,
        };
        let mut seen = HashSet::new();
        for attribute in &attributes {
            if !seen.insert(attribute) {
                return Err(UtilityError::InvalidConfig(
                    format!("link attribute {} is listed more than once", attribute)));
            }
        }

        let balance_purposes = match optional_str_list(&yaml_cfg["balancing"]["purposes"],
                                                       "balancing.purposes")? {
            Some(codes) => codes.iter()
                .map(|code| code.parse())
                .collect::<Result<Vec<Purpose>, UtilityError>>()?,
            None => defaults.balance_purposes,
        };

        Ok(UtilityConfig {scale_factor, mode, attributes, balance_purposes})
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn get_attributes(&self) -> &Vec<LinkAttribute> {
        &self.attributes
    }
}

fn optional_f64(node: &Yaml, key: &str) -> Result<Option<f64>, UtilityError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Integer(value) => Ok(Some(*value as f64)),
        Yaml::Real(_) => match node.as_f64() {
            Some(value) => Ok(Some(value)),
            None => Err(UtilityError::InvalidConfig(format!("{} is not a number", key))),
        },
        _ => Err(UtilityError::InvalidConfig(format!("{} must be a number", key))),
    }
}

fn optional_str<'a>(node: &'a Yaml, key: &str) -> Result<Option<&'a str>, UtilityError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(value) => Ok(Some(value.as_str())),
        _ => Err(UtilityError::InvalidConfig(format!("{} must be a string", key))),
    }
}

fn optional_str_list(node: &Yaml, key: &str) -> Result<Option<Vec<String>>, UtilityError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Array(items) => {
            let mut values = vec![];
            for item in items {
                match item.as_str() {
                    Some(value) => values.push(String::from(value)),
                    None => return Err(UtilityError::InvalidConfig(
                        format!("{} must only contain strings", key))),
                }
            }
            Ok(Some(values))
        },
        _ => Err(UtilityError::InvalidConfig(format!("{} must be a list", key))),
    }
}
