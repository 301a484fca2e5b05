//! UTC timestamps without an external chrono dependency

/// Current time as an ISO 8601 UTC string
pub fn now_iso8601() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (y, m, d) = civil_date(secs / 86400);
    let time_secs = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        y,
        m,
        d,
        time_secs / 3600,
        (time_secs % 3600) / 60,
        time_secs % 60
    )
}

/// Current date as YYYY-MM-DD
pub fn today_utc() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let (y, m, d) = civil_date(dur.as_secs() / 86400);
    format!("{:04}-{:02}-{:02}", y, m, d)
}

fn civil_date(days_since_epoch: u64) -> (i64, u32, u32) {
    let mut y = 1970i64;
    let mut remaining = days_since_epoch as i64;
    loop {
        let days_in_year = if is_leap(y) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        y += 1;
    }
    let month_days = [
        31,
        if is_leap(y) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut m = 0usize;
    while remaining >= month_days[m] {
        remaining -= month_days[m];
        m += 1;
    }
    (y, m as u32 + 1, remaining as u32 + 1)
}

fn is_leap(y: i64) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_date() {
        assert_eq!(civil_date(0), (1970, 1, 1));
    }

    #[test]
    fn test_known_date() {
        // 2024-01-01 is 19723 days after the epoch
        assert_eq!(civil_date(19723), (2024, 1, 1));
    }

    #[test]
    fn test_leap_day() {
        // 2024-02-29 is 19782 days after the epoch
        assert_eq!(civil_date(19782), (2024, 2, 29));
    }

    #[test]
    fn test_now_shapes() {
        let ts = now_iso8601();
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(today_utc().len(), 10);
    }
}
