//! Table generation
//!
//! Input for decompression tables and planned profiles. The document only
//! carries the parameters; nothing here is computed.

use serde::{Deserialize, Serialize};

use super::common::Link;
use super::deco::Tissue;
use super::profile::Waypoint;
use crate::decode::scalar::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableGeneration {
    #[serde(rename = "calculatebottomtimetable")]
    pub calculate_bottom_time_table: Option<CalculateBottomTimeTable>,
    #[serde(rename = "calculateprofile")]
    pub calculate_profile: Option<CalculateProfile>,
    #[serde(rename = "calculatetable")]
    pub calculate_table: Option<CalculateTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateBottomTimeTable {
    #[serde(rename = "bottomtimetable", default)]
    pub bottom_time_tables: Vec<BottomTimeTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomTimeTable {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "applicationdata")]
    pub application_data: Option<ApplicationData>,
    #[serde(rename = "bottomtimetablescope")]
    pub bottom_time_table_scope: Option<BottomTimeTableScope>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub output: Option<Output>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomTimeTableScope {
    #[serde(
        rename = "breathingconsumptionvolumebegin",
        default,
        deserialize_with = "de::number"
    )]
    pub breathing_consumption_volume_begin: Option<f64>,
    #[serde(
        rename = "breathingconsumptionvolumeend",
        default,
        deserialize_with = "de::number"
    )]
    pub breathing_consumption_volume_end: Option<f64>,
    #[serde(
        rename = "breathingconsumptionvolumestep",
        default,
        deserialize_with = "de::number"
    )]
    pub breathing_consumption_volume_step: Option<f64>,
    #[serde(rename = "divedepthbegin", default, deserialize_with = "de::number")]
    pub dive_depth_begin: Option<f64>,
    #[serde(rename = "divedepthend", default, deserialize_with = "de::number")]
    pub dive_depth_end: Option<f64>,
    #[serde(rename = "divedepthstep", default, deserialize_with = "de::number")]
    pub dive_depth_step: Option<f64>,
    #[serde(rename = "tankpressurebegin", default, deserialize_with = "de::number")]
    pub tank_pressure_begin: Option<f64>,
    #[serde(rename = "tankpressurereserve", default, deserialize_with = "de::number")]
    pub tank_pressure_reserve: Option<f64>,
    #[serde(rename = "tankvolumebegin", default, deserialize_with = "de::number")]
    pub tank_volume_begin: Option<f64>,
    #[serde(rename = "tankvolumeend", default, deserialize_with = "de::number")]
    pub tank_volume_end: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateProfile {
    #[serde(rename = "profile", default)]
    pub profiles: Vec<Profile>,
}

profile_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Profile {}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateTable {
    #[serde(rename = "table", default)]
    pub tables: Vec<Table>,
}

profile_record! {
    /// A profile calculation repeated over a depth and bottom-time grid.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Table {
        #[serde(rename = "tablescope")]
        pub table_scope: Option<TableScope>,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableScope {
    #[serde(default, deserialize_with = "de::number")]
    pub altitude: Option<f64>,
    #[serde(rename = "bottomtimemaximum", default, deserialize_with = "de::number")]
    pub bottom_time_maximum: Option<f64>,
    #[serde(rename = "bottomtimeminimum", default, deserialize_with = "de::number")]
    pub bottom_time_minimum: Option<f64>,
    #[serde(rename = "bottomtimestepbegin", default, deserialize_with = "de::number")]
    pub bottom_time_step_begin: Option<f64>,
    #[serde(rename = "bottomtimestepend", default, deserialize_with = "de::number")]
    pub bottom_time_step_end: Option<f64>,
    #[serde(rename = "divedepthbegin", default, deserialize_with = "de::number")]
    pub dive_depth_begin: Option<f64>,
    #[serde(rename = "divedepthend", default, deserialize_with = "de::number")]
    pub dive_depth_end: Option<f64>,
    #[serde(rename = "divedepthstep", default, deserialize_with = "de::number")]
    pub dive_depth_step: Option<f64>,
}

/// Depths at which the mix is switched on the way down and up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MixChange {
    pub ascent: Option<WaypointSequence>,
    pub descent: Option<WaypointSequence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointSequence {
    #[serde(rename = "waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputProfile {
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    #[serde(rename = "waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub lingo: Option<String>,
    #[serde(rename = "fileformat")]
    pub file_format: Option<String>,
    #[serde(rename = "filename")]
    pub file_name: Option<String>,
    pub headline: Option<String>,
    pub remark: Option<String>,
}

/// Vendor-specific payload attached to a dive or a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationData {
    #[serde(rename = "decotrainer")]
    pub deco_trainer: Option<String>,
    pub hargikas: Option<Hargikas>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hargikas {
    /// Celsius, at 1.25 m when the dive starts
    #[serde(default, deserialize_with = "de::number")]
    pub ambient: Option<f64>,
    #[serde(rename = "tissue", default)]
    pub tissues: Vec<Tissue>,
    /// 0 to 7
    #[serde(
        rename = "arterialmicrobubblelevel",
        default,
        deserialize_with = "de::integer"
    )]
    pub arterial_micro_bubble_level: Option<i64>,
    #[serde(
        rename = "intrapulmonaryrightleftshunt",
        default,
        deserialize_with = "de::number"
    )]
    pub intrapulmonary_right_left_shunt: Option<f64>,
    /// 0 to 7
    #[serde(rename = "estimatedskincoollevel", default, deserialize_with = "de::integer")]
    pub estimated_skin_cool_level: Option<i64>,
}
