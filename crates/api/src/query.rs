//! Shared query parameter types for API handlers.

use gym_core::listing::clamp_page_size;
use serde::Deserialize;

/// Free-text filter and page selection for list endpoints
/// (`?search=&page=&page_size=`).
///
/// `page` is zero-based. `page_size` is clamped to
/// `1..=MAX_PAGE_SIZE` and defaults to `DEFAULT_PAGE_SIZE`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListParams {
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(0)
    }

    pub fn page_size(&self) -> usize {
        clamp_page_size(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use gym_core::listing::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    use super::*;

    #[test]
    fn defaults_when_absent() {
        let params = ListParams::default();
        assert_eq!(params.search(), "");
        assert_eq!(params.page(), 0);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_is_clamped() {
        let params = ListParams {
            page_size: Some(MAX_PAGE_SIZE * 2),
            ..Default::default()
        };
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
    }
}
