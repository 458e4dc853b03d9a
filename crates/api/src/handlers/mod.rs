//! Request handlers.

pub mod activities;
pub mod bookings;
pub mod clients;
pub mod health;

/// Parse the loose boolean syntax accepted in query strings.
///
/// `1`, `true`, `yes` and `on` (case-insensitive) are true; anything
/// else, including garbage, is false.
pub(crate) fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
