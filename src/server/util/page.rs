//! Paging arithmetic for query-string input.

/// Largest offset the database accepts as a signed 64-bit integer.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Row offset of a 1-based `page`, saturating instead of overflowing.
pub fn page_offset(page: u64, limit: u64) -> u64 {
    clamp_offset(page.saturating_sub(1).saturating_mul(limit))
}

/// Caps a caller supplied offset to what the database can bind.
pub fn clamp_offset(offset: u64) -> u64 {
    offset.min(MAX_OFFSET)
}
