//! Itinerary Data Model
//!
//! Typed shape of the static travel itinerary the host renders. The library
//! only defines and parses the shape; rendering belongs to the host shell.

use serde::{Deserialize, Serialize};

/// Who an activity belongs to, for display sectioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityOwner {
    PersonX,
    PersonY,
    Shared,
    Empty,
}

/// Transit-related activity flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitKind {
    Flight,
    Immigration,
    Transfer,
}

/// One slot of a day's schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelActivity {
    pub time: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub owner: ActivityOwner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<TransitKind>,
}

/// One flight leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub departure: String,
    pub arrival: String,
    pub airline: String,
    pub flight_number: String,
    pub date: String,
}

/// Outbound and return legs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryFlights {
    pub outbound: FlightInfo,
    #[serde(rename = "return")]
    pub return_leg: FlightInfo,
}

/// All activities of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: String,
    pub day: String,
    pub activities: Vec<TravelActivity>,
}

/// The whole trip: title, period, flights and the day-by-day schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelItinerary {
    pub title: String,
    pub period: String,
    pub flight_info: ItineraryFlights,
    pub schedule: Vec<DaySchedule>,
}

impl TravelItinerary {
    /// Parse an itinerary bundled or fetched by the host as JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
