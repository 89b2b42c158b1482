use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Millisecond timestamp plus nine random characters. Probably unique for
/// the lifetime of the process; callers treat it as an opaque token.
pub fn generate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|byte| (byte as char).to_ascii_lowercase())
        .collect();
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}
