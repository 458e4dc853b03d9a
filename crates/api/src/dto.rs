//! Response DTOs.
//!
//! Field names and date formats here are the wire contract: snake_case
//! names, the one hyphenated `total-items` meta key, ISO-8601 timestamps
//! with an explicit offset. Booked activities are rendered without their
//! playlist; the listing includes it.

use chrono::{DateTime, SecondsFormat, Utc};
use gymbook_core::{ActivityPage, ClientOverview};
use gymbook_domain::{Activity, Booking, ClientBooking, Song, YearStatistics};
use serde::Serialize;

/// `{code, description}` body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub id: i64,
    pub name: String,
    pub duration_seconds: i64,
}

impl From<&Song> for SongResponse {
    fn from(song: &Song) -> Self {
        Self { id: song.id, name: song.name.clone(), duration_seconds: song.duration_seconds }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: i64,
    pub max_participants: i64,
    pub clients_signed: i64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub date_start: String,
    pub date_end: String,
    pub play_list: Vec<SongResponse>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            max_participants: activity.max_participants,
            clients_signed: activity.clients_signed,
            activity_type: activity.activity_type.to_string(),
            date_start: format_datetime(activity.date_start),
            date_end: format_datetime(activity.date_end),
            play_list: activity.play_list.iter().map(SongResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "total-items")]
    pub total_items: u64,
}

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub data: Vec<ActivityResponse>,
    pub meta: MetaResponse,
}

impl From<&ActivityPage> for ActivityListResponse {
    fn from(page: &ActivityPage) -> Self {
        Self {
            data: page.items.iter().map(ActivityResponse::from).collect(),
            meta: MetaResponse {
                page: page.page,
                limit: page.page_size,
                total_items: page.total_items,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub activity: ActivityResponse,
    pub client_id: i64,
}

impl BookingResponse {
    pub fn new(booking: &Booking, activity: &Activity) -> Self {
        Self {
            id: booking.id,
            activity: ActivityResponse::from(activity),
            client_id: booking.client_id,
        }
    }
}

/// Activity as embedded in a client's booking list (no playlist).
#[derive(Debug, Serialize)]
pub struct BookedActivityResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub max_participants: i64,
    pub clients_signed: i64,
    pub date_start: String,
    pub date_end: String,
}

#[derive(Debug, Serialize)]
pub struct ClientBookingResponse {
    pub id: i64,
    pub activity: BookedActivityResponse,
    pub client_id: i64,
}

impl From<&ClientBooking> for ClientBookingResponse {
    fn from(booking: &ClientBooking) -> Self {
        let activity = &booking.activity;
        Self {
            id: booking.id,
            activity: BookedActivityResponse {
                id: activity.id,
                activity_type: activity.activity_type.to_string(),
                max_participants: activity.max_participants,
                clients_signed: activity.clients_signed,
                date_start: format_datetime(activity.date_start),
                date_end: format_datetime(activity.date_end),
            },
            client_id: booking.client_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub client_type: String,
    /// Omitted entirely unless bookings were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities_booked: Option<Vec<ClientBookingResponse>>,
    /// Omitted entirely unless statistics were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_statistics: Option<Vec<YearStatistics>>,
}

impl From<ClientOverview> for ClientResponse {
    fn from(overview: ClientOverview) -> Self {
        Self {
            id: overview.client.id,
            name: overview.client.name,
            email: overview.client.email,
            client_type: overview.client.client_type.to_string(),
            activities_booked: overview
                .upcoming
                .map(|bookings| bookings.iter().map(ClientBookingResponse::from).collect()),
            activity_statistics: overview.statistics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use gymbook_domain::ActivityType;

    use super::*;

    fn sample_activity() -> Activity {
        Activity {
            id: 7,
            activity_type: ActivityType::BodyPump,
            max_participants: 25,
            date_start: Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap(),
            date_end: Utc.with_ymd_and_hms(2024, 3, 4, 10, 55, 0).unwrap(),
            play_list: vec![Song {
                id: 1,
                name: "Pump It Up".into(),
                duration_seconds: 245,
            }],
            clients_signed: 3,
        }
    }

    #[test]
    fn activity_uses_wire_names_and_iso_dates() {
        let json =
            serde_json::to_value(ActivityResponse::from(&sample_activity())).expect("serializes");
        assert_eq!(json["type"], "BodyPump");
        assert_eq!(json["date_start"], "2024-03-04T10:00:00+00:00");
        assert_eq!(json["play_list"][0]["duration_seconds"], 245);
    }

    #[test]
    fn meta_uses_hyphenated_total_items() {
        let page = ActivityPage {
            items: vec![sample_activity()],
            page: 2,
            page_size: 10,
            total_items: 31,
        };
        let json = serde_json::to_value(ActivityListResponse::from(&page)).expect("serializes");
        assert_eq!(json["meta"]["total-items"], 31);
        assert_eq!(json["meta"]["limit"], 10);
    }

    #[test]
    fn optional_client_sections_are_omitted_not_null() {
        let response = ClientResponse {
            id: 1,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            client_type: "standard".into(),
            activities_booked: None,
            activity_statistics: None,
        };
        let json = serde_json::to_value(response).expect("serializes");
        let object = json.as_object().expect("object");
        assert!(!object.contains_key("activities_booked"));
        assert!(!object.contains_key("activity_statistics"));
    }

    #[test]
    fn booked_activity_has_no_playlist_field() {
        let booking = ClientBooking { id: 9, client_id: 2, activity: sample_activity() };
        let json = serde_json::to_value(ClientBookingResponse::from(&booking)).expect("serializes");
        let activity = json["activity"].as_object().expect("object");
        assert!(!activity.contains_key("play_list"));
    }
}
