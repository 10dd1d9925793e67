/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;

pub(crate) const EMPTY_QUERY_MSG: &str =
    "Search requires a query. Try searching with a query (e.g cats).";

const DEFAULT_SORT: &str = "time";
const DEFAULT_DATE_RANGE: &str = "all";
const DEFAULT_PAGE: &str = "1";

/// Caller-supplied overrides for a gallery search.
///
/// Unset fields fall back to the defaults (`time`/`all`/`1`).
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub sort: Option<String>,
    pub date_range: Option<String>,
    pub page: Option<String>,
}

/// The fully-resolved parameters a search was dispatched with.
///
/// Serialized into the path in fixed order: `/sort/dateRange/page?q=query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub sort: String,
    #[serde(rename = "dateRange")]
    pub date_range: String,
    pub page: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            sort: DEFAULT_SORT.to_string(),
            date_range: DEFAULT_DATE_RANGE.to_string(),
            page: DEFAULT_PAGE.to_string(),
        }
    }
}

impl SearchParams {
    pub(crate) fn with_options(options: &SearchOptions) -> Self {
        let mut params = Self::default();
        if let Some(sort) = options.sort.as_deref() {
            params.sort = sort.to_string();
        }
        if let Some(date_range) = options.date_range.as_deref() {
            params.date_range = date_range.to_string();
        }
        if let Some(page) = options.page.as_deref() {
            params.page = page.to_string();
        }
        params
    }

    pub(crate) fn to_path(&self, query: &str) -> String {
        format!("/{}/{}/{}?q={}", self.sort, self.date_range, self.page, query)
    }
}

/// Result of a gallery search: the raw item list plus the parameters the
/// search actually ran with.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub data: serde_json::Value,
    pub params: SearchParams,
}
