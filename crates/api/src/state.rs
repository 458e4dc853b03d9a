//! Shared application state.

use std::sync::Arc;

use gymbook_core::{ActivityService, BookingService, ClientService};
use gymbook_infra::{
    DbManager, SqlActivityRepository, SqlBookingRepository, SqlClientRepository,
};

/// Services and infrastructure handles shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ActivityService>,
    pub bookings: Arc<BookingService>,
    pub clients: Arc<ClientService>,
    pub db: Arc<DbManager>,
}

impl AppState {
    /// Wire the SQLite repositories into the core services.
    pub fn new(db: Arc<DbManager>) -> Self {
        let activity_repo = Arc::new(SqlActivityRepository::new(Arc::clone(&db)));
        let booking_repo = Arc::new(SqlBookingRepository::new(Arc::clone(&db)));
        let client_repo = Arc::new(SqlClientRepository::new(Arc::clone(&db)));

        let activities = Arc::new(ActivityService::new(activity_repo.clone()));
        let bookings = Arc::new(BookingService::new(
            activity_repo,
            client_repo.clone(),
            booking_repo.clone(),
        ));
        let clients = Arc::new(ClientService::new(client_repo, booking_repo));

        Self { activities, bookings, clients, db }
    }
}
