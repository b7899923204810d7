// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::media_type::MediaType;
use crate::domain::models::EntityId;
use serde::{Deserialize, Serialize};

/// 媒体生成选项
///
/// 拥有零个或多个 [`MediaCategoryOption`]。删除选项时后端会级联删除
/// 其下的所有分类选项。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaGenOption {
    pub id: EntityId,
    /// 分类名称（唯一）
    pub category: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub description: Option<String>,
}

/// 媒体分类选项
///
/// 隶属于某个媒体生成选项的提示词/检索变体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaCategoryOption {
    pub id: EntityId,
    pub title: String,
    /// 用于 AI 生成媒体的提示词
    pub prompt_text: String,
    /// 向量库检索语句，后端读取时可能省略
    #[serde(default)]
    pub chroma_query: String,
    /// 所属媒体生成选项ID
    pub option_id: EntityId,
}
