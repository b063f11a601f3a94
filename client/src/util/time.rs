//! Timestamp helpers for habit log fields.
//!
//! The backend sends ISO-8601 strings; `<input type="datetime-local">`
//! wants `YYYY-MM-DDTHH:MM`.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time as an ISO-8601 string. Empty outside the browser.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

fn has_date_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 10
        && bytes[..10]
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
}

/// Trim an ISO timestamp to the `datetime-local` input format.
#[must_use]
pub fn datetime_local_value(iso: &str) -> String {
    let bytes = iso.as_bytes();
    let has_clock = bytes.len() >= 16
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && [11, 12, 14, 15].iter().all(|&i| bytes[i].is_ascii_digit());
    match iso.get(..16) {
        Some(head) if has_date_prefix(iso) && has_clock => head.to_owned(),
        _ => String::new(),
    }
}

/// Calendar date part of an ISO timestamp, or the raw text if it is not one.
#[must_use]
pub fn display_date(iso: &str) -> &str {
    if has_date_prefix(iso) { &iso[..10] } else { iso }
}
