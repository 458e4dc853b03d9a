//! Gym clients and membership tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Membership tier. Standard clients are capped at two bookings per
/// Monday-Sunday week; premium clients are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    #[default]
    Standard,
    Premium,
}

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(()),
        }
    }
}

/// A registered gym client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub client_type: ClientType,
}

impl Client {
    pub fn is_standard(&self) -> bool {
        self.client_type == ClientType::Standard
    }

    pub fn is_premium(&self) -> bool {
        self.client_type == ClientType::Premium
    }
}
