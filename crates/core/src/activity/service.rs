//! Activity listing service - filtering, sorting and pagination

use std::str::FromStr;
use std::sync::Arc;

use gymbook_domain::{Activity, ActivityType, Rejection};
use tracing::debug;

use super::ports::{ActivityFilter, ActivityRepository, PageRequest, SortOrder};
use crate::error::ServiceResult;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_SORT: &str = "date";
const DEFAULT_ORDER: &str = "desc";
const VALID_SORT: &str = "date";

/// Raw listing parameters as received from the HTTP layer.
///
/// Validation happens in [`ActivityService::list`]; unknown values are
/// rejected with their stable codes instead of producing empty results.
#[derive(Debug, Clone)]
pub struct ActivityListRequest {
    pub only_free: bool,
    pub activity_type: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl Default for ActivityListRequest {
    fn default() -> Self {
        Self {
            only_free: true,
            activity_type: None,
            page: None,
            page_size: None,
            sort: None,
            order: None,
        }
    }
}

/// One page of the filtered activity set.
#[derive(Debug, Clone)]
pub struct ActivityPage {
    pub items: Vec<Activity>,
    pub page: u32,
    pub page_size: u32,
    /// Size of the filtered set, independent of pagination
    pub total_items: u64,
}

/// Activity listing service.
pub struct ActivityService {
    activities: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    /// List activities matching the request.
    ///
    /// The filter is validated first (codes 21/22/23), then the same
    /// [`ActivityFilter`] drives both the count and the page query. A page
    /// past the end of the filtered set is an empty list, not an error.
    pub async fn list(&self, request: ActivityListRequest) -> ServiceResult<ActivityPage> {
        let (filter, order, page) = validate(&request)?;

        debug!(?filter, ?order, page = page.page, page_size = page.page_size, "listing activities");

        let total_items = self.activities.count(filter).await?;
        let items = self.activities.find_page(filter, order, page).await?;

        Ok(ActivityPage { items, page: page.page, page_size: page.page_size, total_items })
    }
}

fn validate(
    request: &ActivityListRequest,
) -> Result<(ActivityFilter, SortOrder, PageRequest), Rejection> {
    let activity_type = match request.activity_type.as_deref() {
        None => None,
        Some(raw) => {
            Some(ActivityType::from_str(raw).map_err(|()| Rejection::InvalidTypeFilter)?)
        }
    };

    let sort = request.sort.as_deref().unwrap_or(DEFAULT_SORT);
    if sort != VALID_SORT {
        return Err(Rejection::InvalidSort);
    }

    let order = match request.order.as_deref().unwrap_or(DEFAULT_ORDER).to_ascii_lowercase().as_str()
    {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        _ => return Err(Rejection::InvalidOrder),
    };

    let page = PageRequest {
        page: request.page.unwrap_or(DEFAULT_PAGE).max(1),
        page_size: request.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    };

    Ok((ActivityFilter { only_free: request.only_free, activity_type }, order, page))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use gymbook_domain::Result as DomainResult;

    use super::*;

    /// Records the filters handed to each query path so tests can verify
    /// the predicate is single-sourced.
    struct MockActivityRepository {
        activities: Vec<Activity>,
        count_filters: Mutex<Vec<ActivityFilter>>,
        page_filters: Mutex<Vec<ActivityFilter>>,
    }

    impl MockActivityRepository {
        fn new(activities: Vec<Activity>) -> Self {
            Self {
                activities,
                count_filters: Mutex::new(Vec::new()),
                page_filters: Mutex::new(Vec::new()),
            }
        }

        fn matching(&self, filter: ActivityFilter) -> Vec<Activity> {
            self.activities
                .iter()
                .filter(|a| !filter.only_free || a.has_free_places())
                .filter(|a| filter.activity_type.map_or(true, |t| a.activity_type == t))
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl ActivityRepository for MockActivityRepository {
        async fn find_by_id(&self, id: i64) -> DomainResult<Option<Activity>> {
            Ok(self.activities.iter().find(|a| a.id == id).cloned())
        }

        async fn find_page(
            &self,
            filter: ActivityFilter,
            order: SortOrder,
            page: PageRequest,
        ) -> DomainResult<Vec<Activity>> {
            self.page_filters.lock().unwrap().push(filter);
            let mut matching = self.matching(filter);
            matching.sort_by_key(|a| a.date_start);
            if matches!(order, SortOrder::Desc) {
                matching.reverse();
            }
            Ok(matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.page_size as usize)
                .collect())
        }

        async fn count(&self, filter: ActivityFilter) -> DomainResult<u64> {
            self.count_filters.lock().unwrap().push(filter);
            Ok(self.matching(filter).len() as u64)
        }
    }

    fn activity(id: i64, ty: ActivityType, start_offset_days: i64, signed: i64) -> Activity {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
            + Duration::days(start_offset_days);
        Activity {
            id,
            activity_type: ty,
            max_participants: 2,
            date_start: start,
            date_end: start + Duration::hours(1),
            play_list: Vec::new(),
            clients_signed: signed,
        }
    }

    fn service(activities: Vec<Activity>) -> (ActivityService, Arc<MockActivityRepository>) {
        let repo = Arc::new(MockActivityRepository::new(activities));
        (ActivityService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn invalid_type_filter_is_rejected_with_code_21() {
        let (service, _) = service(Vec::new());
        let request = ActivityListRequest {
            activity_type: Some("InvalidType".to_string()),
            ..Default::default()
        };

        let err = service.list(request).await.expect_err("invalid type");
        assert_eq!(err.rejection(), Some(Rejection::InvalidTypeFilter));
        assert_eq!(err.rejection().unwrap().code(), 21);
    }

    #[tokio::test]
    async fn invalid_sort_is_rejected_with_code_22() {
        let (service, _) = service(Vec::new());
        let request =
            ActivityListRequest { sort: Some("foo".to_string()), ..Default::default() };

        let err = service.list(request).await.expect_err("invalid sort");
        assert_eq!(err.rejection(), Some(Rejection::InvalidSort));
    }

    #[tokio::test]
    async fn invalid_order_is_rejected_with_code_23() {
        let (service, _) = service(Vec::new());
        let request =
            ActivityListRequest { order: Some("sideways".to_string()), ..Default::default() };

        let err = service.list(request).await.expect_err("invalid order");
        assert_eq!(err.rejection(), Some(Rejection::InvalidOrder));
    }

    #[tokio::test]
    async fn order_is_case_insensitive() {
        let (service, _) = service(Vec::new());
        let request = ActivityListRequest { order: Some("ASC".to_string()), ..Default::default() };

        service.list(request).await.expect("uppercase order accepted");
    }

    #[tokio::test]
    async fn only_free_filters_on_live_count_and_total_matches() {
        let (service, _) = service(vec![
            activity(1, ActivityType::Spinning, 0, 0),
            activity(2, ActivityType::Spinning, 1, 2), // full
            activity(3, ActivityType::Core, 2, 1),
        ]);

        let page = service.list(ActivityListRequest::default()).await.expect("list");
        let ids: Vec<i64> = page.items.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]); // desc by start date, full activity excluded
        assert_eq!(page.total_items, 2);

        let all = service
            .list(ActivityListRequest { only_free: false, ..Default::default() })
            .await
            .expect("list all");
        assert_eq!(all.total_items, 3);
    }

    #[tokio::test]
    async fn count_and_page_share_one_filter() {
        let (service, repo) = service(vec![activity(1, ActivityType::BodyPump, 0, 0)]);

        let request = ActivityListRequest {
            activity_type: Some("BodyPump".to_string()),
            ..Default::default()
        };
        service.list(request).await.expect("list");

        let count_filters = repo.count_filters.lock().unwrap();
        let page_filters = repo.page_filters.lock().unwrap();
        assert_eq!(count_filters.as_slice(), page_filters.as_slice());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_correct_total() {
        let (service, _) = service(vec![
            activity(1, ActivityType::Spinning, 0, 0),
            activity(2, ActivityType::Spinning, 1, 0),
        ]);

        let request = ActivityListRequest {
            page: Some(5),
            page_size: Some(2),
            ..Default::default()
        };
        let page = service.list(request).await.expect("list");

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 2);
    }

    #[tokio::test]
    async fn page_size_limits_items() {
        let (service, _) = service(vec![
            activity(1, ActivityType::Spinning, 0, 0),
            activity(2, ActivityType::Spinning, 1, 0),
            activity(3, ActivityType::Spinning, 2, 0),
        ]);

        let request = ActivityListRequest {
            page: Some(1),
            page_size: Some(2),
            order: Some("asc".to_string()),
            ..Default::default()
        };
        let page = service.list(request).await.expect("list");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.total_items, 3);
    }
}
