//! Pagination helper
//!
//! Turns the raw listing options into concrete page, limit and ordering.
//! Missing or unparsable values fall back to the defaults instead of failing
//! the request.

use crate::user::dto::PaginationOptions;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Email,
    Name,
}

impl SortField {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "createdAt" => Some(SortField::CreatedAt),
            "updatedAt" => Some(SortField::UpdatedAt),
            "email" => Some(SortField::Email),
            "name" => Some(SortField::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

fn positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok()).filter(|value| *value > 0)
}

pub fn calculate_pagination(options: &PaginationOptions) -> PageRequest {
    let page = positive(options.page.as_deref()).unwrap_or(DEFAULT_PAGE);
    let limit = positive(options.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);

    PageRequest {
        page,
        limit,
        skip: (page - 1).saturating_mul(limit),
        sort_by: options.sort_by.as_deref().and_then(SortField::parse).unwrap_or_default(),
        sort_order: options.sort_order.as_deref().and_then(SortOrder::parse).unwrap_or_default(),
    }
}
