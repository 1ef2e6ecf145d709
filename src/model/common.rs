//! Small records reused all over the document

use serde::{Deserialize, Serialize};

use crate::decode::scalar::de;
use crate::decode::UddfTime;

/// Non-owning reference to another element by its `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "@ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(rename = "para", default)]
    pub paragraphs: Vec<String>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "email", default)]
    pub emails: Vec<String>,
    #[serde(rename = "fax", default)]
    pub faxes: Vec<String>,
    #[serde(rename = "homepage", default)]
    pub homepages: Vec<String>,
    #[serde(rename = "language", default)]
    pub languages: Vec<String>,
    #[serde(rename = "mobilephone", default)]
    pub mobile_phones: Vec<String>,
    #[serde(rename = "phone", default)]
    pub phones: Vec<String>,
}

/// An amount of money in the given currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(rename = "@currency")]
    pub currency: Option<String>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceDivePackage {
    #[serde(rename = "@currency")]
    pub currency: Option<String>,
    /// Number of dives included in the package
    #[serde(rename = "@noofdives", default, deserialize_with = "de::integer")]
    pub number_of_dives: Option<i64>,
    #[serde(rename = "$text", default, deserialize_with = "de::number")]
    pub value: Option<f64>,
}

/// A quality rating from 1 (lowest) to 10 (highest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    #[serde(rename = "ratingvalue", default, deserialize_with = "de::integer")]
    pub rating_value: Option<i64>,
}

/// A date wrapped in its own element (`<birthdate><datetime>…</datetime></birthdate>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Date {
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub address: Option<Address>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub contact: Option<Contact>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    pub link: Option<Link>,
    pub price: Option<Price>,
    pub shop: Option<Shop>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub shop: Option<Shop>,
}

/// The program that produced the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub name: Option<String>,
    /// converter, divecomputer or logbook
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maker {
    #[serde(rename = "manufacturer", default)]
    pub manufacturers: Vec<Manufacturer>,
}
