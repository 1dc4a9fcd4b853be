//! Task Query
//!
//! Filter, sort and paging parameters of the task list. Pages are zero-based
//! here and one-based on the wire.

use serde::Serialize;

use crate::models::{SortBy, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// Substring filter on the title
    pub title: Option<String>,
    /// Tri-state status filter
    pub is_done: Option<bool>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
}

/// Query string of `GET /tasks/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTasksParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// One-based page number
    pub page: u32,
    pub size: u32,
}

impl TaskQuery {
    pub fn new(size: u32) -> Self {
        Self {
            title: None,
            is_done: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            page: 0,
            size: size.max(1),
        }
    }

    // Every filter/sort setter returns whether the query changed. A change
    // always sends the list back to the first page.

    /// Sent as typed; only empty text means "no title filter".
    pub fn set_title(&mut self, text: &str) -> bool {
        let title = Some(text).filter(|t| !t.is_empty()).map(str::to_string);
        if title == self.title {
            return false;
        }
        self.title = title;
        self.page = 0;
        true
    }

    pub fn set_is_done(&mut self, is_done: Option<bool>) -> bool {
        if is_done == self.is_done {
            return false;
        }
        self.is_done = is_done;
        self.page = 0;
        true
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> bool {
        if sort_by == self.sort_by {
            return false;
        }
        self.sort_by = sort_by;
        self.page = 0;
        true
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> bool {
        if sort_order == self.sort_order {
            return false;
        }
        self.sort_order = sort_order;
        self.page = 0;
        true
    }

    /// Move to `page`, leaving filters and sorting alone.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn to_params(&self) -> ListTasksParams {
        ListTasksParams {
            title: self.title.clone(),
            is_done: self.is_done,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: self.page + 1,
            size: self.size,
        }
    }
}

/// Status filter `<select>` value
pub fn status_filter_value(is_done: Option<bool>) -> &'static str {
    match is_done {
        Some(true) => "true",
        Some(false) => "false",
        None => "all",
    }
}

pub fn parse_status_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
