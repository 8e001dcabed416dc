use chrono::Utc;

/// Current Unix-epoch time in milliseconds, as observed at the call
/// site. Isolated here so the Dispatcher's "stamp immediately before
/// dispatch" rule has one obvious place to stub in tests.
pub fn now_utc_ms() -> i64 {
	Utc::now().timestamp_millis()
}
