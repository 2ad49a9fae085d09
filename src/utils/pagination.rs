//! Page slicing over fully materialized record sequences.
//!
//! Records arrive already fetched and ordered by a repository; nothing here
//! performs I/O or keeps state between calls.

use thiserror::Error;

/// The requested page holds no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {page} (size {page_size}) is out of range")]
pub struct OutOfRangeError {
    pub page: u64,
    pub page_size: u64,
}

/// One bounded slice of an ordered record sequence plus the sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_count: usize,
}

/// Return the records at zero-based offsets `[(page-1)*page_size, page*page_size)`,
/// clipped to the input length.
///
/// Pages are 1-based. An empty result (page past the data, empty input,
/// `page == 0` or `page_size == 0`) is an error rather than an empty slice.
pub fn paginate<T>(records: &[T], page: u64, page_size: u64) -> Result<&[T], OutOfRangeError> {
    let out_of_range = OutOfRangeError { page, page_size };

    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .and_then(|s| usize::try_from(s).ok())
        .ok_or(out_of_range)?;
    if start >= records.len() {
        return Err(out_of_range);
    }

    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let end = start.saturating_add(size).min(records.len());
    if end == start {
        return Err(out_of_range);
    }

    Ok(&records[start..end])
}

/// [`paginate`] and report the total record count alongside the slice.
pub fn page_of<T>(
    records: &[T],
    page: u64,
    page_size: u64,
) -> Result<Page<'_, T>, OutOfRangeError> {
    Ok(Page {
        items: paginate(records, page, page_size)?,
        total_count: records.len(),
    })
}

/// Keep the records whose text field contains `term`, ignoring case.
///
/// The whole candidate set is scanned and every match returned; callers do
/// not page search results. A blank term matches everything.
pub fn filter_by_text<T, F>(records: Vec<T>, term: &str, field: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| field(record).to_lowercase().contains(&needle))
        .collect()
}

/// Keep the records whose key equals `value`.
pub fn filter_by_key<T, K, F>(records: Vec<T>, value: &K, key: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    records
        .into_iter()
        .filter(|record| key(record) == *value)
        .collect()
}
