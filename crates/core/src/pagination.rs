//! Pagination rules for the `/people` listing.
//!
//! Lives in `core` so the clamping rules can be unit-tested without a
//! database or an HTTP stack.

/// Largest page the listing endpoint will return.
pub const MAX_PAGE_LIMIT: i64 = 10;

/// Raw `?limit=&offset=` values exactly as they appear in the query string.
///
/// Kept as strings so that non-numeric input degrades to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Clone)]
pub struct PageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A clamped `(limit, offset)` pair ready to bind into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    /// Collect the parameters from decoded query pairs. Only the first
    /// occurrence of a key counts; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = PageParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Resolve the raw parameters into a [`PageWindow`].
    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: clamp_limit(parse_or_zero(self.limit.as_deref())),
            offset: clamp_offset(parse_or_zero(self.offset.as_deref())),
        }
    }
}

/// Parse an integer parameter. Missing or malformed input yields `0`.
pub fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}

/// Any limit outside `1..=MAX_PAGE_LIMIT` becomes `MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: i64) -> i64 {
    if (1..=MAX_PAGE_LIMIT).contains(&limit) {
        limit
    } else {
        MAX_PAGE_LIMIT
    }
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: i64) -> i64 {
    offset.max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
