//! Countdown display.

/// Format seconds as `MM:SS`.
///
/// ```
/// use memory_match::round::format_clock;
///
/// assert_eq!(format_clock(45), "00:45");
/// assert_eq!(format_clock(60), "01:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
