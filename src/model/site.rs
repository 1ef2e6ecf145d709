//! Dive sites, dive bases and the life found there

use serde::{Deserialize, Serialize};

use super::common::{Address, Contact, Date, Link, Notes, Price, PriceDivePackage, Rating};
use crate::decode::scalar::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveSite {
    #[serde(rename = "divebase", default)]
    pub dive_bases: Vec<DiveBase>,
    #[serde(rename = "site", default)]
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveBase {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub address: Option<Address>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub contact: Option<Contact>,
    #[serde(rename = "guide", default)]
    pub guides: Vec<Guide>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "pricedivepackage")]
    pub price_dive_package: Option<PriceDivePackage>,
    #[serde(rename = "priceperdive")]
    pub price_per_dive: Option<Price>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub ecology: Option<Ecology>,
    pub environment: Option<String>,
    pub geography: Option<Geography>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "rating", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "sitedata")]
    pub site_data: Option<SiteData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(rename = "arealength", default, deserialize_with = "de::number")]
    pub area_length: Option<f64>,
    #[serde(rename = "areawidth", default, deserialize_with = "de::number")]
    pub area_width: Option<f64>,
    #[serde(rename = "averagevisibility", default, deserialize_with = "de::number")]
    pub average_visibility: Option<f64>,
    pub bottom: Option<String>,
    pub cave: Option<NamedFeature>,
    /// kg/m^3; 1000.0 for fresh water, about 1030.0 for sea water
    #[serde(default, deserialize_with = "de::number")]
    pub density: Option<f64>,
    /// 1 (very easy) to 10 (very difficult)
    #[serde(default, deserialize_with = "de::integer")]
    pub difficulty: Option<i64>,
    #[serde(rename = "globallightintensity")]
    pub global_light_intensity: Option<String>,
    pub indoor: Option<Indoor>,
    pub lake: Option<NamedFeature>,
    /// Deepest point of the site, not of any particular dive
    #[serde(rename = "maximumdepth", default, deserialize_with = "de::number")]
    pub maximum_depth: Option<f64>,
    #[serde(rename = "maximumvisibility", default, deserialize_with = "de::number")]
    pub maximum_visibility: Option<f64>,
    #[serde(rename = "minimumdepth", default, deserialize_with = "de::number")]
    pub minimum_depth: Option<f64>,
    #[serde(rename = "minimumvisibility", default, deserialize_with = "de::number")]
    pub minimum_visibility: Option<f64>,
    pub river: Option<NamedFeature>,
    pub shore: Option<NamedFeature>,
    pub terrain: Option<String>,
    pub wreck: Option<Wreck>,
}

/// A cave, lake, river or shore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedFeature {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indoor {
    pub address: Option<Address>,
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub contact: Option<Contact>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wreck {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    pub built: Option<Built>,
    pub name: Option<String>,
    pub nationality: Option<String>,
    #[serde(rename = "shipdimension")]
    pub ship_dimension: Option<ShipDimension>,
    #[serde(rename = "shiptype")]
    pub ship_type: Option<String>,
    pub sunk: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipDimension {
    #[serde(default, deserialize_with = "de::number")]
    pub beam: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub displacement: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub draught: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub tonnage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Built {
    #[serde(rename = "launchingdate")]
    pub launching_date: Option<Date>,
    #[serde(rename = "shipyard")]
    pub ship_yard: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "de::number")]
    pub altitude: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub latitude: Option<f64>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub longitude: Option<f64>,
    /// Hours from UTC
    #[serde(rename = "timezone", default, deserialize_with = "de::number")]
    pub time_zone: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ecology {
    pub fauna: Option<Fauna>,
    pub flora: Option<Flora>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flora {
    pub chlorophyceae: Option<WithSpecies>,
    #[serde(rename = "floravarious")]
    pub flora_various: Option<WithSpecies>,
    pub notes: Option<Notes>,
    pub phaeophyceae: Option<WithSpecies>,
    pub rhodophyceae: Option<WithSpecies>,
    pub spermatophyta: Option<WithSpecies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fauna {
    pub invertebrata: Option<Invertebrata>,
    pub notes: Option<Notes>,
    pub vertebrata: Option<Vertebrata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertebrata {
    pub amphibia: Option<WithSpecies>,
    pub chondrichthyes: Option<WithSpecies>,
    pub mammalia: Option<WithSpecies>,
    pub osteichthyes: Option<WithSpecies>,
    pub reptilia: Option<WithSpecies>,
    #[serde(rename = "vertebratavarious")]
    pub vertebrata_various: Option<WithSpecies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invertebrata {
    pub ascidiacea: Option<WithSpecies>,
    pub bryozoan: Option<WithSpecies>,
    pub cnidaria: Option<WithSpecies>,
    pub coelenterata: Option<WithSpecies>,
    pub crustacea: Option<WithSpecies>,
    pub ctenophora: Option<WithSpecies>,
    pub echinodermata: Option<WithSpecies>,
    #[serde(rename = "invertebratavarious")]
    pub invertebrata_various: Option<WithSpecies>,
    pub mollusca: Option<WithSpecies>,
    pub phoronidea: Option<WithSpecies>,
    pub plathelminthes: Option<WithSpecies>,
    pub porifera: Option<WithSpecies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithSpecies {
    #[serde(rename = "species", default)]
    pub species: Vec<Species>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Species {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub abundance: Option<Abundance>,
    #[serde(default, deserialize_with = "de::integer")]
    pub age: Option<i64>,
    pub dominance: Option<String>,
    #[serde(rename = "lifestage")]
    pub life_stage: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "scientificname")]
    pub scientific_name: Option<String>,
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub size: Option<f64>,
    #[serde(rename = "trivialname")]
    pub trivial_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abundance {
    #[serde(rename = "@quality")]
    pub quality: Option<String>,
    #[serde(rename = "@occurrence")]
    pub occurrence: Option<String>,
    #[serde(rename = "$text", default, deserialize_with = "de::integer")]
    pub value: Option<i64>,
}
