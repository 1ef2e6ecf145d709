//! Recorded dives
//!
//! `profiledata` groups dives into repetition groups. Within a dive the
//! order of `samples` waypoints is temporal and must be preserved; every
//! other sequence is unordered as far as the domain is concerned.

use serde::{Deserialize, Serialize};

use super::common::{Link, Notes, Price, Rating};
use super::site::{Fauna, Flora};
use crate::decode::scalar::de;
use crate::decode::UddfTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(rename = "repetitiongroup", default)]
    pub repetition_groups: Vec<RepetitionGroup>,
}

/// Dives performed without a full desaturation in between.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepetitionGroup {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "dive", default)]
    pub dives: Vec<Dive>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dive {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "informationbeforedive")]
    pub information_before_dive: Option<InformationBeforeDive>,
    #[serde(rename = "applicationdata")]
    pub application_data: Option<super::tables::ApplicationData>,
    pub samples: Option<Samples>,
    #[serde(rename = "tankdata", default)]
    pub tank_data: Vec<TankData>,
    #[serde(rename = "informationafterdive")]
    pub information_after_dive: Option<InformationAfterDive>,
}

impl Dive {
    /// Recorded waypoints in temporal order.
    pub fn waypoints(&self) -> &[Waypoint] {
        self.samples
            .as_ref()
            .map(|s| s.waypoints.as_slice())
            .unwrap_or_default()
    }

    /// Start of the dive.
    pub fn datetime(&self) -> Option<UddfTime> {
        self.information_before_dive.as_ref()?.datetime
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformationBeforeDive {
    /// Kelvin
    #[serde(rename = "airtemperature", default, deserialize_with = "de::number")]
    pub air_temperature: Option<f64>,
    #[serde(rename = "alcoholbeforedive")]
    pub alcohol_before_dive: Option<AlcoholBeforeDive>,
    /// Metres above sea level
    #[serde(default, deserialize_with = "de::number")]
    pub altitude: Option<f64>,
    pub apparatus: Option<String>,
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    #[serde(rename = "divenumber", default, deserialize_with = "de::integer")]
    pub dive_number: Option<i64>,
    #[serde(rename = "divenumberofday", default, deserialize_with = "de::integer")]
    pub dive_number_of_day: Option<i64>,
    #[serde(rename = "internaldivenumber", default, deserialize_with = "de::integer")]
    pub internal_dive_number: Option<i64>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    #[serde(rename = "medicationbeforedive")]
    pub medication_before_dive: Option<MedicationBeforeDive>,
    #[serde(rename = "nosuit", default, deserialize_with = "de::flag")]
    pub no_suit: bool,
    #[serde(rename = "plannedprofile")]
    pub planned_profile: Option<PlannedProfile>,
    pub platform: Option<String>,
    pub price: Option<Price>,
    pub purpose: Option<String>,
    #[serde(rename = "stateofrestbeforedive")]
    pub state_of_rest_before_dive: Option<String>,
    #[serde(rename = "surfaceintervalbeforedive")]
    pub surface_interval_before_dive: Option<SurfaceInterval>,
    /// Pascal
    #[serde(rename = "surfacepressure", default, deserialize_with = "de::number")]
    pub surface_pressure: Option<f64>,
    #[serde(rename = "tripmembership")]
    pub trip_membership: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlcoholBeforeDive {
    #[serde(rename = "drink", default)]
    pub drinks: Vec<Intake>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationBeforeDive {
    #[serde(rename = "medicine", default)]
    pub medicines: Vec<Intake>,
}

/// A drink or a medicine taken before a dive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intake {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    /// yes or no
    #[serde(rename = "periodicallytaken")]
    pub periodically_taken: Option<String>,
    /// Seconds
    #[serde(rename = "timespanbeforedive", default, deserialize_with = "de::number")]
    pub timespan_before_dive: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedProfile {
    #[serde(rename = "@startdivemode")]
    pub start_dive_mode: Option<String>,
    #[serde(rename = "@startmix")]
    pub start_mix: Option<String>,
    #[serde(rename = "waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

/// Surface interval before or after a dive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInterval {
    #[serde(rename = "exposuretoaltitude")]
    pub exposure_to_altitude: Option<ExposureToAltitude>,
    /// Present when the interval is unbounded (first dive of a series)
    #[serde(default, deserialize_with = "de::flag")]
    pub infinity: bool,
    /// Seconds
    #[serde(rename = "passedtime", default, deserialize_with = "de::number")]
    pub passed_time: Option<f64>,
    #[serde(rename = "wayaltitude", default)]
    pub way_altitudes: Vec<WayAltitude>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureToAltitude {
    #[serde(rename = "altitudeofexposure", default, deserialize_with = "de::number")]
    pub altitude_of_exposure: Option<f64>,
    #[serde(rename = "dateofflight")]
    pub date_of_flight: Option<super::common::Date>,
    #[serde(
        rename = "surfaceintervalbeforealtitudeexposure",
        default,
        deserialize_with = "de::number"
    )]
    pub surface_interval_before_altitude_exposure: Option<f64>,
    #[serde(rename = "totallengthofexposure", default, deserialize_with = "de::number")]
    pub total_length_of_exposure: Option<f64>,
    pub transportation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WayAltitude {
    #[serde(rename = "@waytime", default, deserialize_with = "de::number")]
    pub way_time: Option<f64>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformationAfterDive {
    #[serde(rename = "anysymptoms")]
    pub any_symptoms: Option<AnySymptoms>,
    #[serde(rename = "averagedepth", default, deserialize_with = "de::number")]
    pub average_depth: Option<f64>,
    pub current: Option<String>,
    /// Seconds
    #[serde(rename = "desaturationtime", default, deserialize_with = "de::number")]
    pub desaturation_time: Option<f64>,
    /// Seconds
    #[serde(rename = "diveduration", default, deserialize_with = "de::number")]
    pub dive_duration: Option<f64>,
    #[serde(rename = "diveplan")]
    pub dive_plan: Option<String>,
    #[serde(rename = "divetable")]
    pub dive_table: Option<String>,
    #[serde(rename = "equipmentmalfunction")]
    pub equipment_malfunction: Option<String>,
    #[serde(rename = "equipmentused")]
    pub equipment_used: Option<EquipmentUsed>,
    #[serde(rename = "globalalarmsgiven")]
    pub global_alarms_given: Option<GlobalAlarmsGiven>,
    /// Metres
    #[serde(rename = "greatestdepth", default, deserialize_with = "de::number")]
    pub greatest_depth: Option<f64>,
    #[serde(rename = "highestpo2", default, deserialize_with = "de::number")]
    pub highest_po2: Option<f64>,
    /// Kelvin
    #[serde(rename = "lowesttemperature", default, deserialize_with = "de::number")]
    pub lowest_temperature: Option<f64>,
    /// Seconds
    #[serde(rename = "noflighttime", default, deserialize_with = "de::number")]
    pub no_flight_time: Option<f64>,
    pub notes: Option<Notes>,
    pub observations: Option<Observations>,
    #[serde(rename = "pressuredrop", default, deserialize_with = "de::number")]
    pub pressure_drop: Option<f64>,
    #[serde(default)]
    pub problems: Vec<String>,
    pub program: Option<String>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "surfaceintervalafterdive")]
    pub surface_interval_after_dive: Option<SurfaceInterval>,
    #[serde(rename = "thermalcomfort")]
    pub thermal_comfort: Option<String>,
    /// Metres
    #[serde(default, deserialize_with = "de::number")]
    pub visibility: Option<f64>,
    pub workload: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnySymptoms {
    pub notes: Option<Notes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUsed {
    /// Kilograms
    #[serde(rename = "leadquantity", default, deserialize_with = "de::number")]
    pub lead_quantity: Option<f64>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalAlarmsGiven {
    #[serde(rename = "globalalarm", default)]
    pub global_alarms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    pub fauna: Option<Fauna>,
    pub flora: Option<Flora>,
    pub notes: Option<Notes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    #[serde(rename = "waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

/// One sample of a dive profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "alarm", default)]
    pub alarms: Vec<Alarm>,
    #[serde(rename = "batterychargecondition", default)]
    pub battery_charge_conditions: Vec<BatteryChargeCondition>,
    #[serde(rename = "calculatedpo2", default, deserialize_with = "de::number")]
    pub calculated_po2: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub cns: Option<f64>,
    #[serde(rename = "decostop", default)]
    pub deco_stops: Vec<DecoStop>,
    /// Metres
    #[serde(default, deserialize_with = "de::number")]
    pub depth: Option<f64>,
    #[serde(rename = "divemode")]
    pub dive_mode: Option<DiveMode>,
    /// Seconds since the start of the dive
    #[serde(rename = "divetime", default, deserialize_with = "de::number")]
    pub dive_time: Option<f64>,
    #[serde(rename = "gradientfactor")]
    pub gradient_factor: Option<GradientFactor>,
    /// Degrees
    #[serde(default, deserialize_with = "de::number")]
    pub heading: Option<f64>,
    #[serde(rename = "measuredpo2", default)]
    pub measured_po2s: Vec<MeasuredPo2>,
    /// Seconds
    #[serde(rename = "nodecotime", default, deserialize_with = "de::number")]
    pub no_deco_time: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub otu: Option<f64>,
    #[serde(rename = "remainingbottomtime", default, deserialize_with = "de::number")]
    pub remaining_bottom_time: Option<f64>,
    #[serde(rename = "remainingo2time", default, deserialize_with = "de::number")]
    pub remaining_o2_time: Option<f64>,
    #[serde(rename = "setpo2", default)]
    pub set_po2s: Vec<SetPo2>,
    #[serde(rename = "switchmix")]
    pub switch_mix: Option<SwitchMix>,
    #[serde(rename = "tankpressure", default)]
    pub tank_pressures: Vec<TankPressure>,
    /// Kelvin
    #[serde(default, deserialize_with = "de::number")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankPressure {
    #[serde(rename = "@ref")]
    pub reference: Option<String>,
    /// Pascal
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

/// Switch to the mix named by `reference`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchMix {
    #[serde(rename = "@ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPo2 {
    #[serde(rename = "@setby")]
    pub set_by: Option<String>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredPo2 {
    #[serde(rename = "@ref")]
    pub reference: Option<String>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientFactor {
    #[serde(rename = "@tissue", default, deserialize_with = "de::integer")]
    pub tissue: Option<i64>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveMode {
    /// apnoe, closedcircuit, opencircuit or semiclosedcircuit
    #[serde(rename = "@type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecoStop {
    #[serde(rename = "@kind")]
    pub kind: Option<String>,
    #[serde(rename = "@decodepth", default, deserialize_with = "de::number")]
    pub deco_depth: Option<f64>,
    #[serde(rename = "@duration", default, deserialize_with = "de::number")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryChargeCondition {
    #[serde(rename = "@deviceref")]
    pub device_ref: Option<String>,
    #[serde(rename = "@tankref")]
    pub tank_ref: Option<String>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    #[serde(rename = "@level", default, deserialize_with = "de::number")]
    pub level: Option<f64>,
    #[serde(rename = "@tankref")]
    pub tank_ref: Option<String>,
    #[serde(rename = "$text")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankData {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(
        rename = "breathingconsumptionvolume",
        default,
        deserialize_with = "de::number"
    )]
    pub breathing_consumption_volume: Option<f64>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    /// Pascal
    #[serde(rename = "tankpressurebegin", default, deserialize_with = "de::number")]
    pub tank_pressure_begin: Option<f64>,
    /// Pascal
    #[serde(rename = "tankpressureend", default, deserialize_with = "de::number")]
    pub tank_pressure_end: Option<f64>,
    /// Cubic metres
    #[serde(rename = "tankvolume", default, deserialize_with = "de::number")]
    pub tank_volume: Option<f64>,
}
