//! Metric formatting for cards, tables and snapshots.
//!
//! Numbers are printed in their shortest decimal form (`99.99`, `100`, `0.05`)
//! followed by a fixed unit suffix.

use chrono::{Local, NaiveTime};

/// Milliseconds: `120` -> `"120ms"`.
pub fn ms(value: u32) -> String {
    format!("{}ms", value)
}

/// Percentage: `99.99` -> `"99.99%"`, `100.0` -> `"100%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// Minutes: `15` -> `"15m"`.
pub fn minutes(value: u32) -> String {
    format!("{}m", value)
}

/// Plain count.
pub fn count(value: impl Into<u64>) -> String {
    value.into().to_string()
}

/// Integer with thousands separators: `45320` -> `"45,320"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed delta in the value's shortest form: `7.0` -> `"+7"`, `-2.5` -> `"-2.5"`.
pub fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", value)
    } else {
        format!("{}", value)
    }
}

/// Wall-clock time for the "last updated" indicator.
pub fn last_updated(now: NaiveTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Read the local clock once for a render pass.
pub fn clock() -> NaiveTime {
    Local::now().time()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms() {
        assert_eq!(ms(120), "120ms");
        assert_eq!(ms(0), "0ms");
    }

    #[test]
    fn test_percent_shortest_form() {
        assert_eq!(percent(99.99), "99.99%");
        assert_eq!(percent(100.0), "100%");
        assert_eq!(percent(0.05), "0.05%");
        assert_eq!(percent(78.5), "78.5%");
    }

    #[test]
    fn test_minutes_and_count() {
        assert_eq!(minutes(45), "45m");
        assert_eq!(count(2u32), "2");
        assert_eq!(count(88u8), "88");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(45320), "45,320");
        assert_eq!(thousands(2847), "2,847");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(7.0), "+7");
        assert_eq!(signed(-22.0), "-22");
        assert_eq!(signed(6.5), "+6.5");
        assert_eq!(signed(-2.25), "-2.25");
        assert_eq!(signed(0.0), "0");
    }

    #[test]
    fn test_last_updated() {
        let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(last_updated(t), "09:05:03");
    }
}
