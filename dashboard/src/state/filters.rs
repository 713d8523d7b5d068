//! Filter state holder
//!
//! Holds the search text, categorical facet selections, and the
//! current page/page-size. Every mutator except `set_page` resets the
//! page back to 1 so filter changes never leave the user stranded on a
//! page that no longer exists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shared::ListParams;

/// Search, facets, and pagination for one list screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search: String,
    facets: BTreeMap<String, String>,
    page: u32,
    page_size: u32,
}

impl FilterState {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            facets: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Select a facet value; an empty value clears the facet
    pub fn set_facet(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.facets.remove(&name.into());
        } else {
            self.facets.insert(name.into(), value);
        }
        self.page = 1;
    }

    pub fn clear_facet(&mut self, name: &str) {
        self.facets.remove(name);
        self.page = 1;
    }

    pub fn facet(&self, name: &str) -> Option<&str> {
        self.facets.get(name).map(String::as_str)
    }

    /// Coerce an id-valued facet to an integer; invalid values read as
    /// unset
    pub fn facet_id(&self, name: &str) -> Option<i64> {
        self.facet(name).and_then(|v| v.parse().ok())
    }

    /// Explicit page navigation is the one mutator that keeps the rest
    /// of the filter state intact
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Whether any non-default filter is active; used to distinguish
    /// "no records at all" from "no records matching filters"
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || !self.facets.is_empty()
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.facets.clear();
        self.page = 1;
    }

    pub fn params(&self) -> ListParams {
        ListParams::new(self.page, self.page_size)
    }

    /// Query parameters for the list endpoint
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(self.facets.len() + 3);
        if !self.search.is_empty() {
            query.push(("search".to_string(), self.search.clone()));
        }
        for (name, value) in &self.facets {
            query.push((name.clone(), value.clone()));
        }
        query.push(("page".to_string(), self.page.to_string()));
        query.push(("page_size".to_string(), self.page_size.to_string()));
        query
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(20)
    }
}
