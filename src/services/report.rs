//! ISK formatting for console and TUI output

/// Format a count with thousand separators (e.g., 1234567 -> "1,234,567")
pub fn format_number(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Format ISK with thousand separators and two decimals
/// (e.g., 1234567.891 -> "1,234,567.89")
pub fn format_isk(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Insert `,` every three digits from the right. Input must be ASCII digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in digits.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// The one-line report shown by both the console command and the TUI
pub fn report_line(total_isk: f64) -> String {
    format!(
        "Total ISK destroyed (unique kills only): {} ISK",
        format_isk(total_isk)
    )
}
