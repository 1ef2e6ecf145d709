//! Dive trips

use serde::{Deserialize, Serialize};

use super::common::{Address, Contact, Link, Notes, Price, PriceDivePackage, Rating};
use super::site::{Geography, ShipDimension};
use crate::decode::scalar::de;
use crate::decode::UddfTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveTrip {
    #[serde(rename = "trip", default)]
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "trippart", default)]
    pub trip_parts: Vec<TripPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPart {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    pub accommodation: Option<Accommodation>,
    #[serde(rename = "dateoftrip")]
    pub date_of_trip: Option<DateOfTrip>,
    pub geography: Option<Geography>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    pub operator: Option<Operator>,
    #[serde(rename = "pricedivepackage")]
    pub price_dive_package: Option<PriceDivePackage>,
    #[serde(rename = "priceperdive")]
    pub price_per_dive: Option<Price>,
    #[serde(rename = "relateddives")]
    pub related_dives: Option<RelatedDives>,
    pub vessel: Option<Vessel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub address: Option<Address>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub contact: Option<Contact>,
    pub marina: Option<String>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "shipdimension")]
    pub ship_dimension: Option<ShipDimension>,
    #[serde(rename = "shiptype")]
    pub ship_type: Option<String>,
}

/// Links to the dives made during a trip part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedDives {
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateOfTrip {
    #[serde(rename = "@startdate", default, deserialize_with = "de::time")]
    pub start_date: Option<UddfTime>,
    #[serde(rename = "@enddate", default, deserialize_with = "de::time")]
    pub end_date: Option<UddfTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub address: Option<Address>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub category: Option<String>,
    pub contact: Option<Contact>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
}
