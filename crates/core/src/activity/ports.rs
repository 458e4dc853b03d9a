//! Port interfaces for activity queries
//!
//! These traits define the boundary between the query engine and the
//! persistence implementation. The same [`ActivityFilter`] value is handed
//! to both the page query and the count query so availability filtering is
//! single-sourced: listing and `total-items` can never disagree.

use async_trait::async_trait;
use gymbook_domain::{Activity, ActivityType, Result};

/// Availability/type predicate applied to activity queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Restrict to activities with a free place (live booking count)
    pub only_free: bool,
    /// Restrict to one activity type
    pub activity_type: Option<ActivityType>,
}

/// Sort direction for the start-date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// 1-based pagination window, applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Row offset of the first item on this page.
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// Trait for loading activities.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Load a single activity with its playlist and live booking count.
    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>>;

    /// Load one page of activities matching `filter`, ordered by start
    /// date.
    async fn find_page(
        &self,
        filter: ActivityFilter,
        order: SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Activity>>;

    /// Count all activities matching `filter`, ignoring pagination.
    async fn count(&self, filter: ActivityFilter) -> Result<u64>;
}
