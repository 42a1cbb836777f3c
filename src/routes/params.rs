use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::services::pagination::PageWindow;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct Pagination {
    pub page: Option<i64>,
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<i64>,
}

impl Pagination {
    /// Missing or non-positive page sizes fall back to 10; a missing page means the first one.
    pub fn window(&self) -> PageWindow {
        let page_size = self
            .record_per_page
            .filter(|size| *size >= 1)
            .map(|size| size as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let page = self.page.unwrap_or(1).max(1) as u64;
        PageWindow { page, page_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, size: Option<i64>) -> Pagination {
        Pagination {
            page,
            record_per_page: size,
        }
    }

    #[test]
    fn defaults_apply_when_missing() {
        let window = params(None, None).window();
        assert_eq!(window, PageWindow { page: 1, page_size: 10 });
    }

    #[test]
    fn non_positive_page_size_falls_back() {
        assert_eq!(params(Some(1), Some(0)).window().page_size, 10);
        assert_eq!(params(Some(1), Some(-4)).window().page_size, 10);
        assert_eq!(params(Some(2), Some(25)).window().page_size, 25);
    }

    #[test]
    fn query_string_uses_record_per_page() {
        let parsed: Pagination =
            serde_json::from_str(r#"{"page": 3, "recordPerPage": 10}"#).unwrap();
        assert_eq!(parsed.window(), PageWindow { page: 3, page_size: 10 });
        assert_eq!(parsed.window().start_index(), Some(20));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let window = params(Some(i64::MAX), Some(i64::MAX)).window();
        assert_eq!(window.page_size, i64::MAX as u64);
        assert_eq!(window.start_index(), None);

        let window = params(Some(i64::MIN), Some(i64::MIN)).window();
        assert_eq!(window, PageWindow { page: 1, page_size: 10 });
    }
}
