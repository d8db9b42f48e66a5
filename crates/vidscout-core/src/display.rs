//! Human-readable rendering of counts and durations.

const PLACEHOLDER: &str = "—";

/// Abbreviate a count with `K`/`M`/`B`/`T` suffixes, truncating.
///
/// Absent counts render as a dash.
#[must_use]
pub fn human_count(count: Option<u64>) -> String {
    let Some(mut value) = count else {
        return PLACEHOLDER.to_string();
    };
    for unit in ["", "K", "M", "B"] {
        if value < 1000 {
            return format!("{value}{unit}");
        }
        value /= 1000;
    }
    format!("{value}T")
}

/// `h:mm:ss` when there is at least an hour, else `m:ss`. Zero renders as a dash.
#[must_use]
pub fn human_duration(seconds: u64) -> String {
    if seconds == 0 {
        return PLACEHOLDER.to_string();
    }
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
