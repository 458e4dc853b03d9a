//! Pure aggregation over a client's bookings
//!
//! Splits bookings around a reference instant: activities ending at or
//! after it are "upcoming", the rest feed the per-year statistics. Both
//! functions are pure so the output shape is controlled entirely by the
//! caller's parameters, never by entity state.

use chrono::{DateTime, Datelike, Utc};
use gymbook_domain::{ActivityType, ClientBooking, TypeEntry, TypeStatistics, YearStatistics};

/// Bookings whose activity has not finished yet.
///
/// The bound is inclusive: an activity ending exactly at `now` is still
/// upcoming, not past.
pub fn upcoming(bookings: &[ClientBooking], now: DateTime<Utc>) -> Vec<ClientBooking> {
    bookings.iter().filter(|b| b.activity.date_end >= now).cloned().collect()
}

/// Group past bookings by `(year of end time, activity type)`.
///
/// Per group, `num_activities` counts bookings and `num_minutes` sums the
/// per-activity whole-minute durations (each duration floored before
/// summing). Years are sorted ascending; within a year, types keep the
/// order in which they first occur in `bookings`.
pub fn aggregate(bookings: &[ClientBooking], now: DateTime<Utc>) -> Vec<YearStatistics> {
    let mut years: Vec<(i32, Vec<(ActivityType, TypeStatistics)>)> = Vec::new();

    for booking in bookings {
        let activity = &booking.activity;
        if activity.date_end >= now {
            continue;
        }

        let year = activity.date_end.year();
        let minutes = activity.duration_minutes();

        let year_idx = match years.iter().position(|(y, _)| *y == year) {
            Some(idx) => idx,
            None => {
                years.push((year, Vec::new()));
                years.len() - 1
            }
        };
        let types = &mut years[year_idx].1;

        let type_idx = match types.iter().position(|(t, _)| *t == activity.activity_type) {
            Some(idx) => idx,
            None => {
                types.push((activity.activity_type, TypeStatistics::default()));
                types.len() - 1
            }
        };

        types[type_idx].1.num_activities += 1;
        types[type_idx].1.num_minutes += minutes;
    }

    years.sort_by_key(|(year, _)| *year);

    years
        .into_iter()
        .map(|(year, types)| YearStatistics {
            year,
            statistics_by_type: types
                .into_iter()
                .map(|(activity_type, statistics)| TypeEntry { activity_type, statistics })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use gymbook_domain::Activity;

    use super::*;

    fn booking(
        id: i64,
        ty: ActivityType,
        start: DateTime<Utc>,
        duration_minutes: i64,
    ) -> ClientBooking {
        ClientBooking {
            id,
            client_id: 1,
            activity: Activity {
                id,
                activity_type: ty,
                max_participants: 10,
                date_start: start,
                date_end: start + Duration::minutes(duration_minutes),
                play_list: Vec::new(),
                clients_signed: 1,
            },
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_year_same_type_accumulates_one_group() {
        let start = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let bookings = vec![
            booking(1, ActivityType::Spinning, start, 60),
            booking(2, ActivityType::Spinning, start + Duration::days(7), 60),
        ];

        let stats = aggregate(&bookings, now());

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].year, 2023);
        assert_eq!(stats[0].statistics_by_type.len(), 1);
        let entry = &stats[0].statistics_by_type[0];
        assert_eq!(entry.activity_type, ActivityType::Spinning);
        assert_eq!(entry.statistics.num_activities, 2);
        assert_eq!(entry.statistics.num_minutes, 120);
    }

    #[test]
    fn durations_are_floored_per_activity_before_summing() {
        let start = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        // Two activities of 30.5 minutes each: floored individually they
        // contribute 30 + 30, not floor(61) = 61.
        let mut first = booking(1, ActivityType::Core, start, 30);
        first.activity.date_end += Duration::seconds(30);
        let mut second = booking(2, ActivityType::Core, start + Duration::days(1), 30);
        second.activity.date_end += Duration::seconds(30);

        let stats = aggregate(&[first, second], now());

        assert_eq!(stats[0].statistics_by_type[0].statistics.num_minutes, 60);
    }

    #[test]
    fn years_sorted_ascending_and_types_keep_first_occurrence_order() {
        let y2023 = Utc.with_ymd_and_hms(2023, 2, 1, 10, 0, 0).unwrap();
        let y2022 = Utc.with_ymd_and_hms(2022, 2, 1, 10, 0, 0).unwrap();
        let bookings = vec![
            booking(1, ActivityType::Core, y2023, 45),
            booking(2, ActivityType::BodyPump, y2022, 45),
            booking(3, ActivityType::Spinning, y2023, 45),
        ];

        let stats = aggregate(&bookings, now());

        assert_eq!(stats.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2022, 2023]);
        let types_2023: Vec<ActivityType> =
            stats[1].statistics_by_type.iter().map(|e| e.activity_type).collect();
        assert_eq!(types_2023, vec![ActivityType::Core, ActivityType::Spinning]);
    }

    #[test]
    fn activity_ending_exactly_now_is_upcoming_not_past() {
        let start = now() - Duration::minutes(60);
        let boundary = booking(1, ActivityType::Spinning, start, 60);
        assert_eq!(boundary.activity.date_end, now());

        let up = upcoming(&[boundary.clone()], now());
        assert_eq!(up.len(), 1);

        let stats = aggregate(&[boundary], now());
        assert!(stats.is_empty());
    }

    #[test]
    fn upcoming_excludes_finished_activities() {
        let past = booking(1, ActivityType::Core, now() - Duration::days(30), 60);
        let future = booking(2, ActivityType::Core, now() + Duration::days(1), 60);

        let up = upcoming(&[past, future], now());

        assert_eq!(up.len(), 1);
        assert_eq!(up[0].id, 2);
    }
}
