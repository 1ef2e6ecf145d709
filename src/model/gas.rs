//! Breathing gas definitions

use serde::{Deserialize, Serialize};

use super::common::Price;
use crate::decode::scalar::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasDefinitions {
    #[serde(rename = "mix", default)]
    pub mixes: Vec<Mix>,
}

/// One breathing gas.
///
/// Component fractions are ratios in `[0, 1]` (21% oxygen is `0.21`), not
/// display percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mix {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub ar: Option<f64>,
    /// Metres
    #[serde(rename = "equivalentairdepth", default, deserialize_with = "de::number")]
    pub equivalent_air_depth: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub h2: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub he: Option<f64>,
    /// Metres
    #[serde(rename = "maximumoperationdepth", default, deserialize_with = "de::number")]
    pub maximum_operation_depth: Option<f64>,
    /// Oxygen partial pressure at which this gas becomes toxic
    #[serde(rename = "maximumpo2", default, deserialize_with = "de::number")]
    pub maximum_po2: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub n2: Option<f64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub o2: Option<f64>,
    #[serde(rename = "priceperlitre")]
    pub price_per_litre: Option<Price>,
}

impl Mix {
    /// Nitrogen fraction, explicit or implied by the other components.
    pub fn nitrogen_fraction(&self) -> Option<f64> {
        if self.n2.is_some() {
            return self.n2;
        }
        let o2 = self.o2?;
        let rest = [self.he, self.ar, self.h2]
            .iter()
            .map(|f| f.unwrap_or(0.0))
            .sum::<f64>();
        Some(1.0 - o2 - rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_nitrogen_wins() {
        let mix = Mix {
            o2: Some(0.32),
            n2: Some(0.68),
            ..Default::default()
        };
        assert_eq!(mix.nitrogen_fraction(), Some(0.68));
    }

    #[test]
    fn test_nitrogen_implied_by_trimix() {
        let mix = Mix {
            o2: Some(0.21),
            he: Some(0.35),
            ..Default::default()
        };
        let n2 = mix.nitrogen_fraction().unwrap();
        assert!((n2 - 0.44).abs() < 1e-9);
    }

    #[test]
    fn test_nitrogen_unknown_without_oxygen() {
        assert_eq!(Mix::default().nitrogen_fraction(), None);
    }
}
