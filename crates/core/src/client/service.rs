//! Client overview service
//!
//! The optional sections of the overview are controlled by explicit
//! parameters threaded through to pure formatting functions; entity state
//! never decides what gets serialized.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gymbook_domain::{Client, ClientBooking, Rejection, YearStatistics};
use tracing::debug;

use super::ports::ClientRepository;
use super::statistics;
use crate::booking::ports::BookingRepository;
use crate::error::ServiceResult;

/// A client together with the optional sections requested by the caller.
#[derive(Debug, Clone)]
pub struct ClientOverview {
    pub client: Client,
    /// Present only when bookings were requested
    pub upcoming: Option<Vec<ClientBooking>>,
    /// Present only when statistics were requested
    pub statistics: Option<Vec<YearStatistics>>,
}

/// Client overview service.
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { clients, bookings }
    }

    /// Fetch a client, optionally with upcoming bookings and per-year
    /// statistics relative to `now`.
    ///
    /// An unknown client is rejected with code 44 (this endpoint's own
    /// "not found" code, distinct from the booking flow's 32).
    pub async fn overview(
        &self,
        client_id: i64,
        with_bookings: bool,
        with_statistics: bool,
        now: DateTime<Utc>,
    ) -> ServiceResult<ClientOverview> {
        let client =
            self.clients.find_by_id(client_id).await?.ok_or(Rejection::UnknownClient)?;

        let mut upcoming = None;
        let mut stats = None;

        if with_bookings || with_statistics {
            let bookings = self.bookings.find_for_client(client_id).await?;
            debug!(client_id, bookings = bookings.len(), "loaded client bookings");

            if with_bookings {
                upcoming = Some(statistics::upcoming(&bookings, now));
            }
            if with_statistics {
                stats = Some(statistics::aggregate(&bookings, now));
            }
        }

        Ok(ClientOverview { client, upcoming, statistics: stats })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use gymbook_domain::{
        Activity, ActivityType, Booking, ClientType, Result as DomainResult,
    };

    use super::*;

    struct MockClientRepository {
        client: Option<Client>,
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>> {
            Ok(self.client.clone().filter(|c| c.id == id))
        }
    }

    struct MockBookingRepository {
        bookings: Vec<ClientBooking>,
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn exists(&self, _activity_id: i64, _client_id: i64) -> DomainResult<bool> {
            Ok(false)
        }

        async fn count_for_client_between(
            &self,
            _client_id: i64,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> DomainResult<u64> {
            Ok(0)
        }

        async fn find_for_client(&self, client_id: i64) -> DomainResult<Vec<ClientBooking>> {
            Ok(self.bookings.iter().filter(|b| b.client_id == client_id).cloned().collect())
        }

        async fn insert_if_free(
            &self,
            _activity_id: i64,
            _client_id: i64,
        ) -> DomainResult<Option<Booking>> {
            Ok(None)
        }
    }

    fn sample_client() -> Client {
        Client {
            id: 1,
            name: "Ana García".to_string(),
            email: "ana_garcia@example.com".to_string(),
            client_type: ClientType::Standard,
        }
    }

    fn booking(id: i64, end_offset_days: i64, now: DateTime<Utc>) -> ClientBooking {
        let end = now + Duration::days(end_offset_days);
        ClientBooking {
            id,
            client_id: 1,
            activity: Activity {
                id,
                activity_type: ActivityType::Core,
                max_participants: 10,
                date_start: end - Duration::hours(1),
                date_end: end,
                play_list: Vec::new(),
                clients_signed: 3,
            },
        }
    }

    fn service(client: Option<Client>, bookings: Vec<ClientBooking>) -> ClientService {
        ClientService::new(
            Arc::new(MockClientRepository { client }),
            Arc::new(MockBookingRepository { bookings }),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn unknown_client_is_rejected_with_code_44() {
        let service = service(None, Vec::new());

        let err = service.overview(7, false, false, now()).await.expect_err("unknown");
        assert_eq!(err.rejection(), Some(Rejection::UnknownClient));
        assert_eq!(err.rejection().unwrap().code(), 44);
    }

    #[tokio::test]
    async fn sections_are_omitted_unless_requested() {
        let service = service(Some(sample_client()), vec![booking(1, 1, now())]);

        let overview = service.overview(1, false, false, now()).await.expect("overview");
        assert!(overview.upcoming.is_none());
        assert!(overview.statistics.is_none());
        assert_eq!(overview.client.name, "Ana García");
    }

    #[tokio::test]
    async fn bookings_section_contains_only_upcoming() {
        let service = service(
            Some(sample_client()),
            vec![booking(1, -10, now()), booking(2, 1, now())],
        );

        let overview = service.overview(1, true, false, now()).await.expect("overview");
        let upcoming = overview.upcoming.expect("requested");
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, 2);
        assert!(overview.statistics.is_none());
    }

    #[tokio::test]
    async fn statistics_section_aggregates_past_bookings() {
        let service = service(
            Some(sample_client()),
            vec![booking(1, -10, now()), booking(2, -20, now())],
        );

        let overview = service.overview(1, false, true, now()).await.expect("overview");
        let stats = overview.statistics.expect("requested");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].statistics_by_type[0].statistics.num_activities, 2);
    }
}
