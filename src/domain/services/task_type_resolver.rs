// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 作业 `task_id` 所指向实体的类别
///
/// 作业表单根据该类别决定展示哪一个外键选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// 媒体生成选项
    MediaGenOption,
    /// 抓取目标
    ScrapeTarget,
    /// 媒体资源
    MediaAsset,
    /// 自由文本
    #[default]
    FreeText,
}

impl TaskCategory {
    /// 选择器标题
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::MediaGenOption => "Media Generation Option",
            TaskCategory::ScrapeTarget => "Scrape Target",
            TaskCategory::MediaAsset => "Media Asset",
            TaskCategory::FreeText => "Task ID",
        }
    }

    /// 是否需要从实体列表中选择
    pub fn is_reference(&self) -> bool {
        !matches!(self, TaskCategory::FreeText)
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskCategory::MediaGenOption => write!(f, "media_gen_option"),
            TaskCategory::ScrapeTarget => write!(f, "scrape_target"),
            TaskCategory::MediaAsset => write!(f, "media_asset"),
            TaskCategory::FreeText => write!(f, "free_text"),
        }
    }
}

/// 根据任务名称推导任务类别
///
/// 按顺序匹配：
/// 1. 完全等于 `create media` → 媒体生成选项
/// 2. 完全等于 `web scrape` 或 `insta scrape` → 抓取目标
/// 3. 包含 `post image` 或 `post video` → 媒体资源
/// 4. 其他 → 自由文本
pub fn resolve_task_category(task_name: &str) -> TaskCategory {
    match task_name {
        "create media" => TaskCategory::MediaGenOption,
        "web scrape" | "insta scrape" => TaskCategory::ScrapeTarget,
        name if name.contains("post image") || name.contains("post video") => {
            TaskCategory::MediaAsset
        }
        _ => TaskCategory::FreeText,
    }
}
