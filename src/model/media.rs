//! Media files referenced from the log

use serde::{Deserialize, Serialize};

use crate::decode::scalar::de;
use crate::decode::UddfTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaData {
    #[serde(rename = "audio", default)]
    pub audio_files: Vec<MediaFile>,
    #[serde(rename = "image", default)]
    pub image_files: Vec<Image>,
    #[serde(rename = "video", default)]
    pub video_files: Vec<MediaFile>,
}

/// An audio or video file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// Path or URL of the file
    #[serde(rename = "objectname")]
    pub object_name: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@height", default, deserialize_with = "de::integer")]
    pub height: Option<i64>,
    #[serde(rename = "@width", default, deserialize_with = "de::integer")]
    pub width: Option<i64>,
    #[serde(rename = "@format")]
    pub format: Option<String>,
    #[serde(rename = "imagedata")]
    pub image_data: Option<ImageData>,
    #[serde(rename = "objectname")]
    pub object_name: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default, deserialize_with = "de::number")]
    pub aperture: Option<f64>,
    #[serde(default, deserialize_with = "de::time")]
    pub datetime: Option<UddfTime>,
    #[serde(rename = "exposurecompensation", default, deserialize_with = "de::number")]
    pub exposure_compensation: Option<f64>,
    #[serde(rename = "filmspeed", default, deserialize_with = "de::integer")]
    pub film_speed: Option<i64>,
    #[serde(rename = "focallength", default, deserialize_with = "de::number")]
    pub focal_length: Option<f64>,
    #[serde(rename = "focusingdistance", default, deserialize_with = "de::number")]
    pub focusing_distance: Option<f64>,
    #[serde(rename = "meteringmethod")]
    pub metering_method: Option<String>,
    #[serde(rename = "shutterspeed", default, deserialize_with = "de::number")]
    pub shutter_speed: Option<f64>,
}
