//! Scheduled group activities and their playlists

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kinds of group activities the gym schedules.
///
/// Wire representation is the exact class name (`BodyPump`, `Spinning`,
/// `Core`); parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    BodyPump,
    Spinning,
    Core,
}

impl ActivityType {
    /// All valid types, in the order used for error messages.
    pub const ALL: [Self; 3] = [Self::BodyPump, Self::Spinning, Self::Core];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BodyPump => "BodyPump",
            Self::Spinning => "Spinning",
            Self::Core => "Core",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BodyPump" => Ok(Self::BodyPump),
            "Spinning" => Ok(Self::Spinning),
            "Core" => Ok(Self::Core),
            _ => Err(()),
        }
    }
}

/// A song in an activity playlist.
///
/// Owned exclusively by one activity; removed with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub duration_seconds: i64,
}

/// A scheduled group class with capacity and time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub activity_type: ActivityType,
    pub max_participants: i64,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub play_list: Vec<Song>,
    /// Live count of bookings for this activity, recomputed at load time.
    pub clients_signed: i64,
}

impl Activity {
    pub fn has_free_places(&self) -> bool {
        self.clients_signed < self.max_participants
    }

    pub fn available_places(&self) -> i64 {
        self.max_participants - self.clients_signed
    }

    pub fn is_full(&self) -> bool {
        !self.has_free_places()
    }

    /// Activity duration in whole minutes (floor).
    pub fn duration_minutes(&self) -> i64 {
        (self.date_end.timestamp() - self.date_start.timestamp()) / 60
    }
}
