use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{GenResult, UfuncGenError};

/// Settings that shape the generated header.
///
/// Every field has a default, so an empty JSON object is a valid config and
/// reproduces the stock numpy header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Written as a comment on the first line of the output.
    #[serde(default = "default_provenance")]
    pub provenance: String,

    #[serde(default = "default_includes")]
    pub includes: Vec<String>,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    #[serde(default)]
    pub markers: ArityMarkers,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provenance: default_provenance(),
            includes: default_includes(),
            namespace: default_namespace(),
            banner_width: default_banner_width(),
            markers: ArityMarkers::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GenResult<Self> {
        let config: Self = from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(UfuncGenError::config("namespace must not be empty"));
        }
        if self.markers.unary.is_empty() || self.markers.binary.is_empty() {
            return Err(UfuncGenError::config("arity markers must not be empty"));
        }
        if self.banner_width == 0 {
            return Err(UfuncGenError::config("banner_width must be positive"));
        }
        Ok(())
    }
}

/// Substrings of a signature's parameter list that decide its arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArityMarkers {
    #[serde(default = "default_unary_marker")]
    pub unary: String,

    #[serde(default = "default_binary_marker")]
    pub binary: String,
}

impl Default for ArityMarkers {
    fn default() -> Self {
        Self {
            unary: default_unary_marker(),
            binary: default_binary_marker(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> GenResult<T> {
    let file = File::open(path)
        .map_err(|e| UfuncGenError::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| UfuncGenError::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> GenResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| UfuncGenError::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_provenance() -> String {
    "https://numpy.org/doc/stable/reference/ufuncs.html".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["cmath".to_string(), "numeric".to_string()]
}

fn default_namespace() -> String {
    "numpy".to_string()
}

fn default_banner_width() -> usize {
    80
}

fn default_unary_marker() -> String {
    "x".to_string()
}

fn default_binary_marker() -> String {
    "x1, x2".to_string()
}
