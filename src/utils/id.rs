//! Clock and identifier helpers.

/// Current time as milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Current time as milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generate an opaque record id: creation time in hex plus 4 random bytes.
///
/// Falls back to the time component alone if the random source fails.
pub fn generate_id() -> String {
    let mut suffix = [0u8; 4];
    let time = format!("{:x}", now_millis());
    match getrandom::getrandom(&mut suffix) {
        Ok(()) => format!("{}{}", time, hex::encode(suffix)),
        Err(_) => time,
    }
}
