//! Shared field-sets
//!
//! Several UDDF elements repeat the same group of children without a
//! wrapping element (every piece of equipment carries the equipment-part
//! fields, buddy and owner carry the same person fields). Each group is
//! declared once here and spliced into every record that embeds it, so the
//! bound records keep the flat shape the markup has.

/// Declares a record that starts with the equipment-part fields.
macro_rules! equipment_part_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            #[serde(rename = "@id")]
            pub id: Option<String>,
            #[serde(rename = "aliasname")]
            pub alias_name: Option<String>,
            #[serde(rename = "link", default)]
            pub links: Vec<$crate::model::common::Link>,
            pub manufacturer: Option<$crate::model::common::Manufacturer>,
            pub model: Option<String>,
            pub name: Option<String>,
            #[serde(rename = "nextservicedate")]
            pub next_service_date: Option<$crate::model::common::Date>,
            pub notes: Option<$crate::model::common::Notes>,
            pub purchase: Option<$crate::model::common::Purchase>,
            #[serde(rename = "serialnumber")]
            pub serial_number: Option<String>,
            /// Days between services
            #[serde(
                rename = "serviceinterval",
                default,
                deserialize_with = "crate::decode::scalar::de::integer"
            )]
            pub service_interval: Option<i64>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }
    };
}

/// Declares a record that starts with the equipment-content fields
/// (one sequence per kind of equipment).
macro_rules! equipment_content_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            #[serde(rename = "boots", default)]
            pub boots: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "buoyancycontroldevice", default)]
            pub buoyancy_control_devices: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "camera", default)]
            pub cameras: Vec<$crate::model::equipment::Camera>,
            #[serde(rename = "compass", default)]
            pub compasses: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "divecomputer", default)]
            pub dive_computers: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "fins", default)]
            pub fins: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "gloves", default)]
            pub gloves: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "knife", default)]
            pub knives: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "lead", default)]
            pub leads: Vec<$crate::model::equipment::Lead>,
            #[serde(rename = "light", default)]
            pub lights: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "mask", default)]
            pub masks: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "rebreather", default)]
            pub rebreathers: Vec<$crate::model::equipment::Rebreather>,
            #[serde(rename = "regulator", default)]
            pub regulators: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "scooter", default)]
            pub scooters: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "suit", default)]
            pub suits: Vec<$crate::model::equipment::Suit>,
            #[serde(rename = "tank", default)]
            pub tanks: Vec<$crate::model::equipment::Tank>,
            #[serde(rename = "variouspieces", default)]
            pub various_pieces: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "videocamera", default)]
            pub video_cameras: Vec<$crate::model::equipment::EquipmentPart>,
            #[serde(rename = "watch", default)]
            pub watches: Vec<$crate::model::equipment::EquipmentPart>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }
    };
}

/// Declares a record that starts with the person fields shared by the
/// owner of a logbook and each of their buddies.
macro_rules! person_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            #[serde(rename = "@id")]
            pub id: Option<String>,
            pub address: Option<$crate::model::common::Address>,
            pub contact: Option<$crate::model::common::Contact>,
            #[serde(rename = "diveinsurances")]
            pub dive_insurances: Option<$crate::model::diver::DiveInsurances>,
            #[serde(rename = "divepermissions")]
            pub dive_permissions: Option<$crate::model::diver::DivePermissions>,
            pub equipment: Option<$crate::model::equipment::Equipment>,
            pub medical: Option<$crate::model::diver::Medical>,
            pub notes: Option<$crate::model::common::Notes>,
            pub personal: Option<$crate::model::diver::Personal>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }
    };
}

/// Declares a record that starts with the profile-calculation fields.
macro_rules! profile_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            #[serde(rename = "applicationdata")]
            pub application_data: Option<$crate::model::tables::ApplicationData>,
            #[serde(rename = "decomodel")]
            pub deco_model: Option<$crate::model::deco::DecoModel>,
            #[serde(
                rename = "deepstoptime",
                default,
                deserialize_with = "crate::decode::scalar::de::number"
            )]
            pub deep_stop_time: Option<f64>,
            /// kg/m^3
            #[serde(default, deserialize_with = "crate::decode::scalar::de::number")]
            pub density: Option<f64>,
            #[serde(rename = "inputprofile")]
            pub input_profile: Option<$crate::model::tables::InputProfile>,
            #[serde(rename = "link", default)]
            pub links: Vec<$crate::model::common::Link>,
            #[serde(
                rename = "maximumascendingrate",
                default,
                deserialize_with = "crate::decode::scalar::de::number"
            )]
            pub maximum_ascending_rate: Option<f64>,
            #[serde(rename = "mixchange")]
            pub mix_change: Option<$crate::model::tables::MixChange>,
            pub output: Option<$crate::model::tables::Output>,
            #[serde(rename = "surfaceintervalafterdive")]
            pub surface_interval_after_dive: Option<$crate::model::profile::SurfaceInterval>,
            #[serde(rename = "surfaceintervalbeforedive")]
            pub surface_interval_before_dive: Option<$crate::model::profile::SurfaceInterval>,
            pub title: Option<String>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }
    };
}
