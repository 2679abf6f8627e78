// src/infrastructure/color_scheme.rs
use std::env;

/// Whether the host terminal advertises a dark background.
///
/// Reads the `COLORFGBG` convention (`"fg;bg"` or `"fg;default;bg"`), where a
/// background index of 0-6 or 8 denotes a dark palette.
pub fn host_prefers_dark() -> bool {
    prefers_dark_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
}

pub fn prefers_dark_from_colorfgbg(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}
