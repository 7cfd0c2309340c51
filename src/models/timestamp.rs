//! 时间字段的宽松解析
//!
//! 后端可能返回不带时区偏移的时间，例如 `2024-03-10T12:00:00.123456`，此时按 UTC 处理。
//! 序列化仍输出 RFC 3339。用法：`#[serde(with = "crate::models::timestamp")]`。

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析时间戳：带偏移的 RFC 3339、无偏移的本地格式或纯日期
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// 解析日期，也接受完整时间戳并取其日期部分
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .ok()
        .or_else(|| parse_datetime(raw).map(|dt| dt.date_naive()))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    value.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("无效的时间戳: {raw}")))
}

/// 日期字段，用法：`#[serde(with = "crate::models::timestamp::date")]`
pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| de::Error::custom(format!("无效的日期: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::models::timestamp")]
        at: DateTime<Utc>,
        #[serde(with = "crate::models::timestamp::date")]
        on: NaiveDate,
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_parse_datetime_formats() {
        let noon = utc(2024, 3, 10, 12, 0, 0);
        assert_eq!(parse_datetime("2024-03-10T12:00:00Z"), Some(noon));
        assert_eq!(parse_datetime("2024-03-10T20:00:00+08:00"), Some(noon));
        assert_eq!(parse_datetime("2024-03-10T12:00:00"), Some(noon));
        assert_eq!(parse_datetime("2024-03-10 12:00:00"), Some(noon));
        assert_eq!(parse_datetime("2024-03-10"), Some(utc(2024, 3, 10, 0, 0, 0)));

        let micros = parse_datetime("2024-03-10T12:00:00.123456").unwrap();
        assert_eq!(micros.timestamp_subsec_micros(), 123_456);

        assert_eq!(parse_datetime("昨天"), None);
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn test_parse_date_accepts_timestamps() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(day));
        assert_eq!(parse_date("2024-01-15T10:30:00.5"), Some(day));
        assert_eq!(parse_date("2024/01/15"), None);
    }

    #[test]
    fn test_naive_fields_deserialize() {
        let stamped: Stamped = serde_json::from_value(json!({
            "at": "2024-03-10T12:00:00.123456",
            "on": "2024-03-10T00:00:00"
        }))
        .unwrap();
        assert_eq!(stamped.at.date_naive(), stamped.on);

        let out = serde_json::to_value(&stamped).unwrap();
        assert_eq!(out["at"], "2024-03-10T12:00:00.123456Z");
        assert_eq!(out["on"], "2024-03-10");
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let err = serde_json::from_value::<Stamped>(json!({"at": "soon", "on": "2024-03-10"}))
            .unwrap_err();
        assert!(err.to_string().contains("soon"));
    }
}
