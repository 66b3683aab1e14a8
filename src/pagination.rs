//! Page envelope returned by the paginated client listing.

use serde::Serialize;

use crate::domain::types::{SortDirection, SortField, TypeConstraintError};

/// Number of items per page when the caller does not ask for a size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Sort applied to a page, echoed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Serialize for Sort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Sort", 2)?;
        state.serialize_field("property", self.field.as_str())?;
        state.serialize_field("direction", &self.direction)?;
        state.end()
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    /// Builds a request the store can serve.
    ///
    /// The size must be positive, and both the size and the offset have to fit
    /// in a signed 64-bit integer.
    pub fn checked(page: usize, size: usize, sort: Sort) -> Result<Self, TypeConstraintError> {
        if size == 0 {
            return Err(TypeConstraintError::EmptyPageSize);
        }
        let offset = page
            .checked_mul(size)
            .filter(|offset| i64::try_from(*offset).is_ok());
        if offset.is_none() || i64::try_from(size).is_err() {
            return Err(TypeConstraintError::PageOutOfRange);
        }
        Ok(Self::new(page, size, sort))
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: Sort,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };
        let number_of_elements = content.len();

        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            number_of_elements,
            first: request.page == 0,
            last: request.page + 1 >= total_pages,
            empty: number_of_elements == 0,
            sort: request.sort,
        }
    }

    /// Converts the page items keeping the metadata intact.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
            sort: self.sort,
        }
    }
}
