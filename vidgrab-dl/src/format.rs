//! Display helpers for video metadata.

/// Maximum number of description characters kept in an excerpt.
pub const EXCERPT_CHARS: usize = 200;

/// Marker appended to every description excerpt.
pub const ELLIPSIS: &str = "...";

/// Format seconds as `MM:SS`, or `HH:MM:SS` from one hour up.
///
/// Missing or zero durations (live streams, unknown length) render as `Unknown`.
pub fn format_duration(seconds: Option<u64>) -> String {
    let seconds = match seconds {
        Some(s) if s > 0 => s,
        _ => return "Unknown".to_string(),
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format a count with comma thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// First [`EXCERPT_CHARS`] characters followed by [`ELLIPSIS`].
///
/// The marker is appended even when nothing was cut.
pub fn description_excerpt(description: &str) -> String {
    let mut excerpt: String = description.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
