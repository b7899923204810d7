// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 时间戳的线上格式
//!
//! 写入时统一使用 `YYYY-MM-DD HH:MM:SS`，读取时兼容后端可能返回的
//! 多种格式。所有时间都按 UTC 的朴素时间处理。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 写入格式
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 格式化为线上格式
pub fn format(value: &NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// 解析后端返回的时间字符串
///
/// 支持 `YYYY-MM-DD HH:MM:SS`、ISO-8601/RFC 3339、`YYYY-MM-DD`
/// 以及 RFC 2822（如 `Tue, 15 Oct 2024 00:00:00 GMT`）
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(value) = NaiveDateTime::parse_from_str(raw, WIRE_FORMAT) {
        return Some(value);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc).naive_utc());
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(value);
    }
    if let Ok(value) = DateTime::parse_from_rfc2822(raw) {
        return Some(value.with_timezone(&Utc).naive_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// 截断到秒，保证写入后再读取得到相同的值
pub fn truncate(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp: {raw}")))
}

/// 可选时间戳，`null` 或缺失均视为 `None`
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("unrecognised timestamp: {raw}"))
            }),
            None => Ok(None),
        }
    }
}
