//! 宽松的整数字段反序列化
//!
//! 表单绑定层提交的数值经常是字符串（`"28"`）或带小数点的浮点数（`28.0`），
//! 这里统一转换为整数。空字符串视为缺省。

use serde::Deserializer;
use serde::de::{Error, Unexpected, Visitor};
use std::fmt;

struct OptionalI64Visitor;

impl<'de> Visitor<'de> for OptionalI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer, a string containing an integer, or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if value <= i64::MAX as u64 {
            Ok(Some(value as i64))
        } else {
            Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        // 只接受没有小数部分且在 i64 范围内的浮点数
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(Some(value as i64))
        } else {
            Err(Error::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
    }
}

/// 反序列化可选的 i64 字段
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OptionalI64Visitor)
}

/// 反序列化可选的 i32 字段，超出范围时报错
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_optional_i64(deserializer)? {
        None => Ok(None),
        Some(value) => i32::try_from(value)
            .map(Some)
            .map_err(|_| D::Error::invalid_value(Unexpected::Signed(value), &"a 32-bit integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        wide: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_i32")]
        narrow: Option<i32>,
    }

    fn probe(value: serde_json::Value) -> Result<Probe, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_integers_pass_through() {
        let p = probe(json!({ "wide": 9_000_000_000i64, "narrow": -3 })).unwrap();
        assert_eq!(p.wide, Some(9_000_000_000));
        assert_eq!(p.narrow, Some(-3));
    }

    #[test]
    fn test_missing_and_null_are_absent() {
        let p = probe(json!({ "wide": null })).unwrap();
        assert_eq!(p.wide, None);
        assert_eq!(p.narrow, None);
    }

    #[test]
    fn test_numeric_strings() {
        let p = probe(json!({ "wide": " 42 ", "narrow": "28" })).unwrap();
        assert_eq!(p.wide, Some(42));
        assert_eq!(p.narrow, Some(28));
    }

    #[test]
    fn test_empty_string_is_absent() {
        let p = probe(json!({ "wide": "", "narrow": "   " })).unwrap();
        assert_eq!(p.wide, None);
        assert_eq!(p.narrow, None);
    }

    #[test]
    fn test_integral_float() {
        let p = probe(json!({ "narrow": 28.0 })).unwrap();
        assert_eq!(p.narrow, Some(28));
        assert!(probe(json!({ "narrow": 28.5 })).is_err());
    }

    #[test]
    fn test_rejects_garbage_and_overflow() {
        assert!(probe(json!({ "wide": "twelve" })).is_err());
        assert!(probe(json!({ "wide": u64::MAX })).is_err());
        assert!(probe(json!({ "narrow": 3_000_000_000i64 })).is_err());
        assert!(probe(json!({ "narrow": true })).is_err());
    }
}
