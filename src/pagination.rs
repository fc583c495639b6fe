//! Pagination controller
//!
//! Owns the page cursor of one paged view. Navigation moves the cursor
//! optimistically and hands out a request token; the server's answer then
//! replaces the cursor with the page it actually served. Tokens increase
//! monotonically, so an answer to an older click can be recognised and
//! dropped when a newer one is already in flight or applied.

use crate::config::StaleResponses;

/// Navigation intent from the pager buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A page fetch to issue, tagged with its sequence token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub token: u64,
}

/// Pager affordances derived from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub current_page: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Outcome of feeding a server response back into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied(NavState),
    /// Response answered a request older than the latest one; ignore it
    Stale { token: u64, latest: u64 },
}

/// Cursor state of one paged view
#[derive(Debug, Clone)]
pub struct Pagination {
    current_page: u32,
    /// Last page the server actually served
    confirmed_page: u32,
    total_records: u64,
    page_size: u32,
    latest_token: u64,
    stale: StaleResponses,
}

impl Pagination {
    pub fn new(page_size: u32, stale: StaleResponses) -> Self {
        Self {
            current_page: 1,
            confirmed_page: 1,
            total_records: 0,
            page_size: page_size.max(1),
            latest_token: 0,
            stale,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Request a specific page (initial load, refresh of the current page)
    pub fn request(&mut self, page: u32) -> PageRequest {
        self.current_page = page.max(1);
        self.latest_token += 1;
        PageRequest {
            page: self.current_page,
            token: self.latest_token,
        }
    }

    /// Start a navigation step.
    ///
    /// `Previous` is refused on page 1. `Next` is never bounds-checked here:
    /// the total is only as fresh as the last response, and an overshoot
    /// just comes back as an empty page.
    pub fn begin(&mut self, direction: Direction) -> Option<PageRequest> {
        let target = match direction {
            Direction::Previous if self.current_page <= 1 => return None,
            Direction::Previous => self.current_page - 1,
            Direction::Next => self.current_page.saturating_add(1),
        };
        Some(self.request(target))
    }

    /// Apply the server-confirmed page and total for the request `token`
    pub fn settle(&mut self, token: u64, page: u32, total_records: u64) -> Settlement {
        if token < self.latest_token && self.stale == StaleResponses::Discard {
            return Settlement::Stale {
                token,
                latest: self.latest_token,
            };
        }
        self.current_page = page.max(1);
        self.confirmed_page = self.current_page;
        self.total_records = total_records;
        Settlement::Applied(self.nav())
    }

    /// The request `token` failed. If nothing newer was issued, move the
    /// cursor back to the last served page and return the restored state.
    pub fn abandon(&mut self, token: u64) -> Option<NavState> {
        if token != self.latest_token {
            return None;
        }
        self.current_page = self.confirmed_page;
        Some(self.nav())
    }

    /// Button state as a pure function of the cursor and the last known total
    pub fn nav(&self) -> NavState {
        NavState {
            current_page: self.current_page,
            prev_disabled: self.current_page <= 1,
            next_disabled: u64::from(self.current_page) * u64::from(self.page_size)
                >= self.total_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(pagination: &mut Pagination, page: u32, total: u64) -> NavState {
        let request = pagination.request(page);
        match pagination.settle(request.token, page, total) {
            Settlement::Applied(nav) => nav,
            Settlement::Stale { .. } => panic!("fresh response should apply"),
        }
    }

    #[test]
    fn test_last_page_disables_next() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        let nav = settled(&mut pagination, 3, 12);
        assert_eq!(nav.current_page, 3);
        assert!(nav.next_disabled); // 15 >= 12
        assert!(!nav.prev_disabled);
    }

    #[test]
    fn test_first_page_disables_previous() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        let nav = settled(&mut pagination, 1, 12);
        assert!(nav.prev_disabled);
        assert!(!nav.next_disabled);
        assert_eq!(pagination.begin(Direction::Previous), None);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_exact_multiple_disables_next() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        let nav = settled(&mut pagination, 2, 10);
        assert!(nav.next_disabled);
    }

    #[test]
    fn test_empty_log_disables_both() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        let nav = settled(&mut pagination, 1, 0);
        assert!(nav.prev_disabled);
        assert!(nav.next_disabled);
    }

    #[test]
    fn test_begin_is_optimistic_and_tokens_increase() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        settled(&mut pagination, 1, 30);

        let first = pagination.begin(Direction::Next).unwrap();
        let second = pagination.begin(Direction::Next).unwrap();
        assert_eq!(first.page, 2);
        assert_eq!(second.page, 3);
        assert!(second.token > first.token);
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_server_page_replaces_local_cursor() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        let request = pagination.begin(Direction::Next).unwrap();
        // Server clamps an out-of-range request back to its last page
        let Settlement::Applied(nav) = pagination.settle(request.token, 1, 4) else {
            panic!("latest response should apply");
        };
        assert_eq!(nav.current_page, 1);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_out_of_order_responses_discarded() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        settled(&mut pagination, 1, 30);
        let page2 = pagination.begin(Direction::Next).unwrap();
        let page3 = pagination.begin(Direction::Next).unwrap();

        assert!(matches!(
            pagination.settle(page3.token, 3, 30),
            Settlement::Applied(_)
        ));
        assert!(matches!(
            pagination.settle(page2.token, 2, 30),
            Settlement::Stale { .. }
        ));
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_out_of_order_responses_applied_when_unguarded() {
        let mut pagination = Pagination::new(5, StaleResponses::Apply);
        settled(&mut pagination, 1, 30);
        let page2 = pagination.begin(Direction::Next).unwrap();
        let page3 = pagination.begin(Direction::Next).unwrap();

        pagination.settle(page3.token, 3, 30);
        pagination.settle(page2.token, 2, 30);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_failed_request_restores_cursor() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        settled(&mut pagination, 2, 30);
        let request = pagination.begin(Direction::Next).unwrap();
        assert_eq!(pagination.current_page(), 3);

        let nav = pagination.abandon(request.token).unwrap();
        assert_eq!(nav.current_page, 2);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_failed_older_request_leaves_cursor() {
        let mut pagination = Pagination::new(5, StaleResponses::Discard);
        settled(&mut pagination, 1, 30);
        let older = pagination.begin(Direction::Next).unwrap();
        pagination.begin(Direction::Next).unwrap();

        assert_eq!(pagination.abandon(older.token), None);
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_zero_page_normalised() {
        let mut pagination = Pagination::new(0, StaleResponses::Discard);
        assert_eq!(pagination.page_size(), 1);
        let request = pagination.request(0);
        assert_eq!(request.page, 1);
        pagination.settle(request.token, 0, 3);
        assert_eq!(pagination.current_page(), 1);
    }
}
