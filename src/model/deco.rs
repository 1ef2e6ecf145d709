//! Decompression-model parameter sets
//!
//! The parameters are carried as opaque numbers; nothing here computes
//! decompression.

use serde::{Deserialize, Serialize};

use crate::decode::scalar::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecoModel {
    #[serde(rename = "buehlmann", default)]
    pub buehlmann: Vec<Buehlmann>,
    #[serde(rename = "rgbm", default)]
    pub rgbm: Vec<Rgbm>,
    #[serde(rename = "vpm", default)]
    pub vpm: Vec<Vpm>,
}

/// Bühlmann parameter set. Gradient factors satisfy
/// `0.0 <= low <= high <= 1.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buehlmann {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "gradientfactorhigh", default, deserialize_with = "de::number")]
    pub gradient_factor_high: Option<f64>,
    #[serde(rename = "gradientfactorlow", default, deserialize_with = "de::number")]
    pub gradient_factor_low: Option<f64>,
    #[serde(rename = "tissue", default)]
    pub tissues: Vec<Tissue>,
}

/// Reduced Gradient Bubble Model parameter set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgbm {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "tissue", default)]
    pub tissues: Vec<Tissue>,
}

/// Varying Permeability Model parameter set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vpm {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// Ratio, 42% is `0.42`
    #[serde(default, deserialize_with = "de::number")]
    pub conservatism: Option<f64>,
    /// Skin tension of bubble nuclei, kg/s^2
    #[serde(default, deserialize_with = "de::number")]
    pub gamma: Option<f64>,
    /// Nuclear crushing tension, kg/s^2
    #[serde(default, deserialize_with = "de::number")]
    pub gc: Option<f64>,
    /// kg/m/s
    #[serde(default, deserialize_with = "de::number")]
    pub lambda: Option<f64>,
    /// Minimum bubble radius excitable into growth, metres
    #[serde(default, deserialize_with = "de::number")]
    pub r0: Option<f64>,
    #[serde(rename = "tissue", default)]
    pub tissues: Vec<Tissue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tissue {
    /// h2, he or n2
    #[serde(rename = "@gas")]
    pub gas: Option<String>,
    /// Seconds
    #[serde(rename = "@halflife", default, deserialize_with = "de::number")]
    pub half_life: Option<f64>,
    #[serde(rename = "@number", default, deserialize_with = "de::integer")]
    pub number: Option<i64>,
    #[serde(rename = "@a", default, deserialize_with = "de::number")]
    pub a: Option<f64>,
    #[serde(rename = "@b", default, deserialize_with = "de::number")]
    pub b: Option<f64>,
}
