//! Offset pagination over an already filtered and sorted sequence.

use std::borrow::Borrow;

use crate::types::{Record, ResultEnvelope};

/// Slices page `page` (1-based) of `page_size` records out of `records`.
///
/// Out-of-range pages yield an empty page, not an error. Zero arguments are
/// treated as 1 so the arithmetic is always defined.
pub fn paginate<R: Borrow<Record>>(records: &[R], page: u32, page_size: u32) -> ResultEnvelope {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = records.len();
    let size = page_size as usize;
    let start = (page as usize - 1).saturating_mul(size);

    let page_records = records
        .iter()
        .skip(start)
        .take(size)
        .map(|r| r.borrow().clone())
        .collect();

    ResultEnvelope {
        records: page_records,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(size),
    }
}
