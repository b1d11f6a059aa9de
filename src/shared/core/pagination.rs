// Page requests and pages of results.
//
// Purpose
// - Describe which slice of a listing a caller wants and carry the slice back with its totals.
//
// Notes
// - Pages are zero-based.
// - The sort rendering (`UNSORTED` or `property: ASC`) is stable and is used as part of cache keys.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: u32, max: u32 },

    #[error("unknown sort property: {0}")]
    UnknownSortProperty(String),

    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = PaginationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(PaginationError::UnknownSortDirection(raw.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort<P> {
    pub property: P,
    pub direction: SortDirection,
}

impl<P: FromStr> Sort<P> {
    /// Parses the query form `property[,direction]`, for example `name,desc`.
    pub fn parse(raw: &str) -> Result<Self, PaginationError> {
        let (property, direction) = match raw.split_once(',') {
            Some((property, direction)) => (property.trim(), direction.parse()?),
            None => (raw.trim(), SortDirection::Asc),
        };
        let property = property
            .parse()
            .map_err(|_| PaginationError::UnknownSortProperty(property.to_string()))?;
        Ok(Self {
            property,
            direction,
        })
    }
}

impl<P: fmt::Display> fmt::Display for Sort<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<P> {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort<P>>,
}

impl<P> PageRequest<P> {
    pub fn new(page: u32, size: u32, sort: Option<Sort<P>>) -> Result<Self, PaginationError> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(PaginationError::InvalidPageSize {
                size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self { page, size, sort })
    }
}

impl<P: FromStr> PageRequest<P> {
    /// Builds a request from raw query values, falling back to page 0 and the default size.
    pub fn from_query(
        page: Option<u32>,
        size: Option<u32>,
        sort: Option<&str>,
    ) -> Result<Self, PaginationError> {
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(Sort::parse(raw)?),
            None => None,
        };
        Self::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE), sort)
    }
}

impl<P: fmt::Display> PageRequest<P> {
    pub fn sort_key(&self) -> String {
        match &self.sort {
            Some(sort) => sort.to_string(),
            None => "UNSORTED".to_string(),
        }
    }
}

impl<P> Default for PageRequest<P> {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size)) as u32
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Cuts the requested page out of an already ordered listing.
    pub fn paginate(items: Vec<T>, page: u32, size: u32) -> Self {
        let total_elements = items.len() as u64;
        let offset = (page as usize).saturating_mul(size as usize);
        let content = items
            .into_iter()
            .skip(offset)
            .take(size as usize)
            .collect();
        Self::new(content, page, size, total_elements)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
