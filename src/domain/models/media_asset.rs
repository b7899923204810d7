// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::media_type::MediaType;
use crate::domain::models::EntityId;
use serde::{Deserialize, Serialize};

/// 媒体资源
///
/// 存放在 Blob 存储中的已生成媒体文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: EntityId,
    pub media_blob_url: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaAsset {
    /// 选择器中展示的文本：有说明时用说明，否则用 URL
    pub fn display_text(&self) -> &str {
        match self.caption.as_deref() {
            Some(caption) if !caption.trim().is_empty() => caption,
            _ => &self.media_blob_url,
        }
    }
}
