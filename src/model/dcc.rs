//! Dive computer control
//!
//! Requests sent to a dive computer (read or write its settings) and raw
//! memory dumps read from it. The empty `getdc*` and `setdc*data` elements
//! are flags: present means requested.

use serde::{Deserialize, Serialize};

use super::common::Link;
use super::tables::ApplicationData;
use crate::decode::scalar::de;
use crate::decode::UddfTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveComputerControl {
    #[serde(rename = "divecomputerdump", default)]
    pub dive_computer_dumps: Vec<DiveComputerDump>,
    #[serde(rename = "getdcdata")]
    pub get_dc_data: Option<GetDcData>,
    #[serde(rename = "setdcdata")]
    pub set_dc_data: Option<SetDcData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcData {
    #[serde(rename = "setdcalarmtime", default, deserialize_with = "de::time")]
    pub alarm_time: Option<UddfTime>,
    #[serde(rename = "setdcaltitude", default, deserialize_with = "de::number")]
    pub altitude: Option<f64>,
    #[serde(rename = "setdcbuddydata")]
    pub buddy_data: Option<SetDcBuddyData>,
    #[serde(rename = "setdcdatetime", default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    #[serde(rename = "setdcdecomodel")]
    pub deco_model: Option<SetDcDecoModel>,
    #[serde(rename = "setdcdivedepthalarm")]
    pub dive_depth_alarm: Option<SetDcDiveDepthAlarm>,
    #[serde(rename = "setdcdivepo2alarm")]
    pub dive_po2_alarm: Option<SetDcDivePo2Alarm>,
    #[serde(rename = "setdcdivesitedata", default)]
    pub dive_site_data: Vec<SetDcDiveSiteData>,
    #[serde(rename = "setdcdivetimealarm")]
    pub dive_time_alarm: Option<SetDcDiveTimeAlarm>,
    #[serde(rename = "setdcendndtalarm")]
    pub end_ndt_alarm: Option<SetDcEndNdtAlarm>,
    #[serde(rename = "setdcgasdefinitionsdata", default, deserialize_with = "de::flag")]
    pub gas_definitions_data: bool,
    #[serde(rename = "setdcgeneratordata", default, deserialize_with = "de::flag")]
    pub generator_data: bool,
    #[serde(rename = "setdcownerdata", default, deserialize_with = "de::flag")]
    pub owner_data: bool,
    #[serde(rename = "setdcpassword")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcEndNdtAlarm {
    #[serde(rename = "dcalarm")]
    pub dc_alarm: Option<DcAlarm>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcDiveTimeAlarm {
    #[serde(rename = "dcalarm")]
    pub dc_alarm: Option<DcAlarm>,
    /// Seconds
    #[serde(default, deserialize_with = "de::number")]
    pub timespan: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcDiveSiteData {
    #[serde(rename = "@divesite")]
    pub dive_site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcDivePo2Alarm {
    #[serde(rename = "dcalarm")]
    pub dc_alarm: Option<DcAlarm>,
    #[serde(rename = "maximumpo2", default, deserialize_with = "de::number")]
    pub maximum_po2: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcDiveDepthAlarm {
    #[serde(rename = "dcalarm")]
    pub dc_alarm: Option<DcAlarm>,
    /// Metres
    #[serde(rename = "dcalarmdepth", default, deserialize_with = "de::number")]
    pub dc_alarm_depth: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DcAlarm {
    #[serde(default, deserialize_with = "de::flag")]
    pub acknowledge: bool,
    #[serde(rename = "alarmtype", default, deserialize_with = "de::integer")]
    pub alarm_type: Option<i64>,
    /// Seconds
    #[serde(default, deserialize_with = "de::number")]
    pub period: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcDecoModel {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    #[serde(rename = "applicationdata")]
    pub application_data: Option<ApplicationData>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDcBuddyData {
    #[serde(rename = "@buddy")]
    pub buddy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDcData {
    #[serde(rename = "getdcalldata", default, deserialize_with = "de::flag")]
    pub all_data: bool,
    #[serde(rename = "getdcgeneratordata", default, deserialize_with = "de::flag")]
    pub generator_data: bool,
    #[serde(rename = "getdcownerdata", default, deserialize_with = "de::flag")]
    pub owner_data: bool,
    #[serde(rename = "getdcbuddydata", default, deserialize_with = "de::flag")]
    pub buddy_data: bool,
    #[serde(rename = "getdcgasdefinitionsdata", default, deserialize_with = "de::flag")]
    pub gas_definitions_data: bool,
    #[serde(rename = "getdcdivesitedata", default, deserialize_with = "de::flag")]
    pub dive_site_data: bool,
    #[serde(rename = "getdcdivetripdata", default, deserialize_with = "de::flag")]
    pub dive_trip_data: bool,
    #[serde(rename = "getdcprofiledata", default, deserialize_with = "de::flag")]
    pub profile_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveComputerDump {
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    /// Opaque memory image as written by the computer
    #[serde(rename = "dcdump")]
    pub dc_dump: Option<String>,
    pub link: Option<Link>,
}
