//! Pagination types for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 0;
const DEFAULT_SIZE: u32 = 20;
const MIN_SIZE: u32 = 1;
const MAX_SIZE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// Pagination parameters for list endpoints
///
/// Pages are 0-indexed to match the query contract (`page=0` is the
/// first page).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number (0-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

impl Pagination {
    /// Create pagination with size clamped to the allowed range
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(MIN_SIZE, MAX_SIZE),
        }
    }

    /// Sanitize parameters coming from the query string
    pub fn validate(mut self) -> Self {
        self.size = self.size.clamp(MIN_SIZE, MAX_SIZE);
        self
    }

    /// Offset for SQL queries
    pub fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Limit for SQL queries
    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// Paginated response wrapper with page metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on this page
    pub content: Vec<T>,

    /// Current page number (0-indexed)
    pub page: u32,

    /// Requested page size
    pub size: u32,

    /// Total number of matching items
    pub total_elements: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Build a page from the fetched items and the total match count
    pub fn new(content: Vec<T>, pagination: Pagination, total_elements: u64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            ((total_elements + pagination.size as u64 - 1) / pagination.size as u64) as u32
        };

        Self {
            content,
            page: pagination.page,
            size: pagination.size,
            total_elements,
            total_pages,
        }
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
