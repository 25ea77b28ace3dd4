//! Timecode display formatting
//!
//! Formats a position in seconds as `[H:]MM:SS` for the elapsed/remaining
//! labels: the hour segment is omitted when zero, minutes and seconds are
//! always zero-padded to two digits.

/// Format seconds as a displayable `[H:]MM:SS` timecode
///
/// Fractional seconds are truncated; negative inputs clamp to `00:00`.
pub fn display_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0) as i64;

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
