// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// 表单使用的 URL 规则，协议可省略
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("URL pattern is a valid regex")
});

/// 验证URL
///
/// # 参数
///
/// * `value` - URL字符串
///
/// # 返回值
///
/// * `Ok(())` - URL有效
/// * `Err(ValidationError)` - URL不符合规则
pub fn validate_url_pattern(value: &str) -> Result<(), ValidationError> {
    if URL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed("Please enter a valid URL")))
    }
}

/// 验证抓取频率
///
/// 必须是有限正数，无穷大和 NaN 无法以 JSON 数字写出
pub fn validate_frequency<T: std::borrow::Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    let value = *value.borrow();
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("range").with_message(Cow::Borrowed("Frequency must be positive")))
    }
}

/// 把校验错误展开为 `字段: 信息` 列表，按字段名排序
pub fn describe(errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    lines.sort();
    lines
}
