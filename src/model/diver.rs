//! The logbook owner and their buddies

use serde::{Deserialize, Serialize};

use super::common::{Address, Contact, Date, Link, Notes};
use crate::decode::scalar::de;
use crate::decode::UddfTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diver {
    #[serde(rename = "buddy", default)]
    pub buddies: Vec<Buddy>,
    pub owner: Option<Owner>,
}

person_record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Buddy {
        pub certification: Option<Certification>,
        #[serde(default, deserialize_with = "de::flag")]
        pub student: bool,
    }
}

person_record! {
    /// Whoever the logbook belongs to.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Owner {
        pub education: Option<Education>,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(rename = "birthdate")]
    pub birth_date: Option<Date>,
    #[serde(rename = "birthname")]
    pub birth_name: Option<String>,
    #[serde(rename = "bloodgroup")]
    pub blood_group: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    /// Metres
    #[serde(default, deserialize_with = "de::number")]
    pub height: Option<f64>,
    pub honorific: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub membership: Option<Membership>,
    #[serde(rename = "middlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "numberofdives")]
    pub number_of_dives: Option<NumberOfDives>,
    pub sex: Option<String>,
    pub smoking: Option<String>,
    /// Kilograms
    #[serde(default, deserialize_with = "de::number")]
    pub weight: Option<f64>,
}

impl Personal {
    /// First, middle and last name joined by single spaces.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(rename = "@organisation")]
    pub organisation: Option<String>,
    #[serde(rename = "@memberid")]
    pub member_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberOfDives {
    #[serde(rename = "startdate")]
    pub start_date: Option<Date>,
    #[serde(rename = "enddate")]
    pub end_date: Option<Date>,
    #[serde(default, deserialize_with = "de::integer")]
    pub dives: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "certification", default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(rename = "certificatenumber")]
    pub certificate_number: Option<String>,
    pub instructor: Option<Instructor>,
    #[serde(rename = "issuedate")]
    pub issue_date: Option<Date>,
    pub level: Option<String>,
    pub link: Option<Link>,
    pub organization: Option<String>,
    pub specialty: Option<String>,
    #[serde(rename = "validdate")]
    pub valid_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub personal: Option<Personal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiveInsurances {
    #[serde(rename = "insurance", default)]
    pub insurances: Vec<Insurance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    #[serde(rename = "issuedate")]
    pub issue_date: Option<Date>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    #[serde(rename = "validdate")]
    pub valid_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivePermissions {
    #[serde(rename = "permit", default)]
    pub permits: Vec<Permit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permit {
    #[serde(rename = "aliasname")]
    pub alias_name: Option<String>,
    #[serde(rename = "issuedate")]
    pub issue_date: Option<Date>,
    pub name: Option<String>,
    pub notes: Option<Notes>,
    pub region: Option<String>,
    #[serde(rename = "validdate")]
    pub valid_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Medical {
    pub examination: Option<Examination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Examination {
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    pub doctor: Option<Doctor>,
    /// passed or failed
    #[serde(rename = "examinationresult")]
    pub examination_result: Option<String>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub notes: Option<Notes>,
    /// Cubic metres (6.4 litres is 0.0064)
    #[serde(rename = "totallungcapacity", default, deserialize_with = "de::number")]
    pub total_lung_capacity: Option<f64>,
    /// Cubic metres
    #[serde(rename = "vitalcapacity", default, deserialize_with = "de::number")]
    pub vital_capacity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub personal: Option<Personal>,
}
