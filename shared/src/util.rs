/// Current UTC time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Millisecond-timestamp identifier that is not yet taken.
///
/// Starts from `now` and bumps by one millisecond while `is_taken` reports a
/// clash, so two records created within the same millisecond still get
/// distinct ids inside one collection.
pub fn timestamp_id(now: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = now;
    loop {
        let id = candidate.to_string();
        if !is_taken(&id) {
            return id;
        }
        candidate += 1;
    }
}
