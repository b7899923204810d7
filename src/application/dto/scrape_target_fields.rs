// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scrape_target::{ScrapeTarget, ScrapeTargetType};
use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::Resource;
use crate::utils::validators::{validate_frequency, validate_url_pattern};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 抓取目标写入数据传输对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScrapeTargetFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_url_pattern"))]
    pub url: String,
    #[serde(rename = "type")]
    pub target_type: ScrapeTargetType,
    /// 抓取频率（天），必须为有限正数
    #[validate(custom(function = "validate_frequency"))]
    pub frequency: f64,
}

impl From<&ScrapeTarget> for ScrapeTargetFields {
    fn from(target: &ScrapeTarget) -> Self {
        Self {
            name: target.name.clone(),
            url: target.url.clone(),
            target_type: target.target_type,
            frequency: target.frequency,
        }
    }
}

impl Resource for ScrapeTarget {
    type Fields = ScrapeTargetFields;

    const COLLECTION: &'static str = "scrape-targets";
    const ACK_ID_FIELD: &'static str = "target_id";
    const SINGULAR: &'static str = "scrape target";
    const PLURAL: &'static str = "scrape targets";

    fn id(&self) -> EntityId {
        self.id
    }
}
