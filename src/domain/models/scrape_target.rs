// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::DomainError;
use crate::domain::models::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 抓取目标实体
///
/// 抓取任务定期访问的站点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub id: EntityId,
    pub name: String,
    pub url: String,
    /// 目标类型，线上字段名为 `type`
    #[serde(rename = "type")]
    pub target_type: ScrapeTargetType,
    /// 抓取频率（天）
    pub frequency: f64,
}

/// 抓取目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeTargetType {
    #[default]
    News,
    Blog,
    Social,
}

impl ScrapeTargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeTargetType::News => "news",
            ScrapeTargetType::Blog => "blog",
            ScrapeTargetType::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrapeTargetType::News => "News",
            ScrapeTargetType::Blog => "Blog",
            ScrapeTargetType::Social => "Social Media",
        }
    }
}

impl fmt::Display for ScrapeTargetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrapeTargetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(ScrapeTargetType::News),
            "blog" => Ok(ScrapeTargetType::Blog),
            "social" => Ok(ScrapeTargetType::Social),
            other => Err(DomainError::UnknownVariant {
                kind: "scrape target type",
                value: other.to_string(),
            }),
        }
    }
}
