// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{timestamp, EntityId};
use crate::domain::services::task_type_resolver::{resolve_task_category, TaskCategory};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 作业实体
///
/// 调度器中的一个计划任务。`task_id` 是多态外键，其指向的实体类型
/// 由 `task_name` 推导出的 [`TaskCategory`] 决定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// 作业ID
    pub id: EntityId,
    /// 任务名称，见 [`TaskName`]
    pub task_name: String,
    /// 任务关联的实体ID（或自由文本）
    pub task_id: String,
    /// 计划执行时间
    #[serde(with = "timestamp")]
    pub scheduled_date: NaiveDateTime,
    /// 作业状态
    pub status: JobStatus,
    /// 失败时的错误信息
    #[serde(default)]
    pub error_message: Option<String>,
    /// 创建时间
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    /// 最后更新时间
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Job {
    /// 已知的任务类型（未知名称返回 None）
    pub fn task_kind(&self) -> Option<TaskName> {
        self.task_name.parse().ok()
    }

    /// `task_id` 所指向实体的类别
    pub fn task_category(&self) -> TaskCategory {
        resolve_task_category(&self.task_name)
    }
}

/// 任务名称
///
/// 作业表单中可选择的七种任务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    WebScrape,
    InstaScrape,
    CreateMedia,
    PostImageWhatsapp,
    PostImageInstagram,
    PostVideoWhatsapp,
    PostVideoInstagram,
}

impl TaskName {
    pub const ALL: [TaskName; 7] = [
        TaskName::WebScrape,
        TaskName::InstaScrape,
        TaskName::CreateMedia,
        TaskName::PostImageWhatsapp,
        TaskName::PostImageInstagram,
        TaskName::PostVideoWhatsapp,
        TaskName::PostVideoInstagram,
    ];

    /// 线上使用的字面值
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::WebScrape => "web scrape",
            TaskName::InstaScrape => "insta scrape",
            TaskName::CreateMedia => "create media",
            TaskName::PostImageWhatsapp => "post image whatsapp",
            TaskName::PostImageInstagram => "post image instagram",
            TaskName::PostVideoWhatsapp => "post video whatsapp",
            TaskName::PostVideoInstagram => "post video instagram",
        }
    }

    /// 展示用名称
    pub fn label(&self) -> &'static str {
        match self {
            TaskName::WebScrape => "Web Scrape",
            TaskName::InstaScrape => "Instagram Scrape",
            TaskName::CreateMedia => "Create Media",
            TaskName::PostImageWhatsapp => "Post Image to WhatsApp",
            TaskName::PostImageInstagram => "Post Image to Instagram",
            TaskName::PostVideoWhatsapp => "Post Video to WhatsApp",
            TaskName::PostVideoInstagram => "Post Video to Instagram",
        }
    }

    pub fn category(&self) -> TaskCategory {
        resolve_task_category(self.as_str())
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "task name",
                value: s.to_string(),
            })
    }
}

/// 作业状态
///
/// 线上以整数表示：-1 失败，0 待处理，1 处理中，2 已完成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i64", into = "i64")]
pub enum JobStatus {
    Failed,
    #[default]
    Pending,
    Processing,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Failed,
    ];

    pub fn code(&self) -> i64 {
        match self {
            JobStatus::Failed => -1,
            JobStatus::Pending => 0,
            JobStatus::Processing => 1,
            JobStatus::Completed => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Failed => "Failed",
            JobStatus::Pending => "Pending",
            JobStatus::Processing => "Processing",
            JobStatus::Completed => "Completed",
        }
    }
}

impl From<JobStatus> for i64 {
    fn from(status: JobStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i64> for JobStatus {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(JobStatus::Failed),
            0 => Ok(JobStatus::Pending),
            1 => Ok(JobStatus::Processing),
            2 => Ok(JobStatus::Completed),
            other => Err(DomainError::UnknownVariant {
                kind: "job status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    /// 接受状态码或名称（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<i64>() {
            return JobStatus::try_from(code);
        }
        JobStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "job status",
                value: s.to_string(),
            })
    }
}

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 枚举值无法识别
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
