use serde::{Deserialize, Serialize};

/// A zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Page size must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Number of records to skip
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of records as returned by a store, with the total record count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64) -> Self {
        Self {
            content,
            total_elements,
        }
    }

    /// Shape a store page into the public paged response for `request`
    pub fn into_response<U: From<T>>(self, request: PageRequest) -> PagedResponse<U> {
        let total_pages = total_pages(self.total_elements, request.page_size);
        PagedResponse {
            content: self.content.into_iter().map(U::from).collect(),
            page_no: request.page_number,
            page_size: request.page_size,
            total_elements: self.total_elements,
            total_pages,
            last: i64::from(request.page_number) + 1 >= total_pages,
        }
    }
}

/// Paged list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

fn total_pages(total_elements: i64, page_size: u32) -> i64 {
    let size = i64::from(page_size);
    if size == 0 {
        return 0;
    }
    (total_elements + size - 1) / size
}
