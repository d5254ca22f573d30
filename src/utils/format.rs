use chrono::NaiveDateTime;

/// "Monday, 09 February 2026 · 14:05"
pub fn format_today(now: NaiveDateTime) -> String {
    now.format("%A, %d %B %Y · %H:%M").to_string()
}

/// Signed day count, e.g. "+7", "-1", "0"
pub fn format_signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", n)
    } else {
        format!("{}", n)
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}
