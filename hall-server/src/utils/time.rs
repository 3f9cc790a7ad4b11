//! 时间工具函数
//!
//! 日期字符串的解析在 API handler 层完成，
//! repository 层只接收解析好的值；时间戳统一为 Unix millis。

use chrono::NaiveDate;

use crate::utils::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 当前时间 (Unix millis)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Unix millis → "YYYY-MM-DD HH:MM:SS" (UTC)，用于通知邮件正文
pub fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2026-09-12").unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
        );
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("12/09/2026").is_err());
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn formats_millis_as_utc() {
        assert_eq!(format_millis(0), "1970-01-01 00:00:00");
    }
}
