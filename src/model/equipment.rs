//! Equipment owned by a diver
//!
//! Every piece of equipment carries the same part fields; the kinds that
//! need more add their own on top.

use serde::{Deserialize, Serialize};

use super::common::{Link, Notes};
use crate::decode::scalar::de;

equipment_content_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Equipment {
        #[serde(rename = "compressor", default)]
        pub compressors: Vec<EquipmentPart>,
        #[serde(rename = "equipmentconfiguration", default)]
        pub equipment_configurations: Vec<EquipmentConfiguration>,
    }
}

equipment_content_record! {
    /// A named set of equipment used together.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct EquipmentConfiguration {
        #[serde(rename = "aliasname")]
        pub alias_name: Option<String>,
        #[serde(rename = "link", default)]
        pub links: Vec<Link>,
        pub name: Option<String>,
        pub notes: Option<Notes>,
    }
}

equipment_part_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct EquipmentPart {}
}

equipment_part_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Tank {
        /// aluminium, carbon or steel
        #[serde(rename = "tankmaterial")]
        pub tank_material: Option<String>,
        /// Cubic metres, not litres
        #[serde(rename = "tankvolume", default, deserialize_with = "de::number")]
        pub tank_volume: Option<f64>,
    }
}

equipment_part_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Suit {
        #[serde(rename = "suittype")]
        pub suit_type: Option<String>,
    }
}

equipment_part_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Rebreather {
        #[serde(rename = "o2sensor", default)]
        pub o2_sensors: Vec<EquipmentPart>,
    }
}

equipment_part_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Lead {
        /// Kilograms
        #[serde(rename = "leadquantity", default, deserialize_with = "de::number")]
        pub lead_quantity: Option<f64>,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub body: Option<EquipmentPart>,
    #[serde(rename = "flash", default)]
    pub flashes: Vec<EquipmentPart>,
    pub housing: Option<EquipmentPart>,
    pub lens: Option<EquipmentPart>,
}
