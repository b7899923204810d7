// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::media_asset::MediaAsset;
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::media_type::MediaType;
use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::Resource;
use crate::utils::validators::validate_url_pattern;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 媒体生成选项写入数据传输对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MediaGenOptionFields {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&MediaGenOption> for MediaGenOptionFields {
    fn from(option: &MediaGenOption) -> Self {
        Self {
            category: option.category.clone(),
            media_type: option.media_type,
            description: option.description.clone(),
        }
    }
}

/// 媒体分类选项写入数据传输对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MediaCategoryOptionFields {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Prompt text is required"))]
    pub prompt_text: String,
    #[validate(length(min = 1, message = "Chroma query is required"))]
    pub chroma_query: String,
    #[validate(range(min = 1, message = "Parent option is required"))]
    pub option_id: EntityId,
}

impl From<&MediaCategoryOption> for MediaCategoryOptionFields {
    fn from(option: &MediaCategoryOption) -> Self {
        Self {
            title: option.title.clone(),
            prompt_text: option.prompt_text.clone(),
            chroma_query: option.chroma_query.clone(),
            option_id: option.option_id,
        }
    }
}

/// 媒体资源写入数据传输对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MediaAssetFields {
    #[validate(custom(function = "validate_url_pattern"))]
    pub media_blob_url: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub caption: Option<String>,
}

impl From<&MediaAsset> for MediaAssetFields {
    fn from(asset: &MediaAsset) -> Self {
        Self {
            media_blob_url: asset.media_blob_url.clone(),
            media_type: asset.media_type,
            caption: asset.caption.clone(),
        }
    }
}

impl Resource for MediaGenOption {
    type Fields = MediaGenOptionFields;

    const COLLECTION: &'static str = "media-gen-options";
    const ACK_ID_FIELD: &'static str = "option_id";
    const SINGULAR: &'static str = "media generation option";
    const PLURAL: &'static str = "media generation options";
    const DELETE_NOTICE: Option<&'static str> =
        Some("This will also delete all associated category options.");

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Resource for MediaCategoryOption {
    type Fields = MediaCategoryOptionFields;

    const COLLECTION: &'static str = "media-category-options";
    const ACK_ID_FIELD: &'static str = "option_id";
    const SINGULAR: &'static str = "media category option";
    const PLURAL: &'static str = "media category options";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Resource for MediaAsset {
    type Fields = MediaAssetFields;

    const COLLECTION: &'static str = "media-assets";
    const ACK_ID_FIELD: &'static str = "asset_id";
    const SINGULAR: &'static str = "media asset";
    const PLURAL: &'static str = "media assets";

    fn id(&self) -> EntityId {
        self.id
    }
}
