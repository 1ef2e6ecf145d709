//! Document entity model
//!
//! One record per UDDF element. Field-to-tag bindings are declared with
//! serde attributes:
//! - `@name` binds an attribute, `$text` binds character data, anything
//!   else binds a child element
//! - every scalar leaf is optional; numeric leaves go through the lenient
//!   numeric decoder, temporal leaves through the temporal decoder
//! - repeated children bind to `Vec`, in source order
//!
//! Mandatory leaves are not enforced here. They are Required rules of the
//! validation engine, so that a missing value never prevents decoding.

#[macro_use]
mod macros;

pub mod common;
pub mod dcc;
pub mod deco;
pub mod diver;
pub mod equipment;
pub mod gas;
pub mod media;
pub mod profile;
pub mod site;
pub mod tables;
pub mod trip;

pub use common::{Generator, Link, Notes};
pub use gas::{GasDefinitions, Mix};
pub use profile::{Dive, ProfileData, RepetitionGroup, Waypoint};

use serde::{Deserialize, Serialize};

/// Root of a decoded UDDF document.
///
/// Built once per decode and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uddf {
    /// Schema version as written by the producer; not checked
    #[serde(rename = "@version", default)]
    pub version: String,
    pub generator: Option<Generator>,
    #[serde(rename = "mediadata")]
    pub media_data: Option<media::MediaData>,
    pub maker: Option<common::Maker>,
    pub business: Option<common::Business>,
    pub diver: Option<diver::Diver>,
    #[serde(rename = "divesite")]
    pub dive_site: Option<site::DiveSite>,
    #[serde(rename = "divetrip")]
    pub dive_trip: Option<trip::DiveTrip>,
    #[serde(rename = "gasdefinitions")]
    pub gas_definitions: Option<GasDefinitions>,
    #[serde(rename = "decomodel")]
    pub deco_model: Option<deco::DecoModel>,
    #[serde(rename = "profiledata")]
    pub profile_data: Option<ProfileData>,
    #[serde(rename = "tablegeneration")]
    pub table_generation: Option<tables::TableGeneration>,
    #[serde(rename = "divecomputercontrol")]
    pub dive_computer_control: Option<dcc::DiveComputerControl>,
}

impl Uddf {
    /// All dives of all repetition groups, in source order.
    pub fn dives(&self) -> impl Iterator<Item = &Dive> {
        self.profile_data
            .iter()
            .flat_map(|p| p.repetition_groups.iter())
            .flat_map(|g| g.dives.iter())
    }

    pub fn mixes(&self) -> &[Mix] {
        self.gas_definitions
            .as_ref()
            .map(|g| g.mixes.as_slice())
            .unwrap_or_default()
    }

    /// Resolves a mix by identifier, as referenced by `switchmix` or `link`.
    pub fn mix(&self, id: &str) -> Option<&Mix> {
        self.mixes().iter().find(|m| m.id.as_deref() == Some(id))
    }

    pub fn has_gas_definitions(&self) -> bool {
        self.gas_definitions.is_some()
    }

    pub fn has_profile_data(&self) -> bool {
        self.profile_data.is_some()
    }
}
