//! Abbreviated count formatting for human display.

/// 把原始计数压缩成带 K/M 后缀的短字符串
///
/// Counts below one thousand come back as plain decimals; thousands and
/// millions are rounded to one decimal place. Callers only pass
/// non-negative counters.
pub fn format_count(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
