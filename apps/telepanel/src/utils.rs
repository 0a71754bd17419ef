use chrono::{DateTime, Utc};

/// Thousands-separated rendering for the stat and card counters.
pub fn format_count(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(654), "654");
        assert_eq!(format_count(1248), "1,248");
        assert_eq!(format_count(4880), "4,880");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(-1248), "-1,248");
    }

    #[test]
    fn dates_render_short_form() {
        let ts: DateTime<Utc> = "2023-02-15T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(ts), "Feb 15, 2023");
    }
}
