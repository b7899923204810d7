// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{Job, JobStatus};
use crate::domain::models::{timestamp, EntityId};
use crate::domain::repositories::entity_repository::Resource;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 作业写入数据传输对象
///
/// 创建和更新作业时提交的字段，`scheduled_date` 以
/// `YYYY-MM-DD HH:MM:SS` 格式写入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobFields {
    #[validate(length(min = 1, message = "Task name is required"))]
    pub task_name: String,
    #[validate(length(min = 1, message = "Task ID is required"))]
    pub task_id: String,
    #[serde(with = "timestamp")]
    pub scheduled_date: NaiveDateTime,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&Job> for JobFields {
    fn from(job: &Job) -> Self {
        Self {
            task_name: job.task_name.clone(),
            task_id: job.task_id.clone(),
            scheduled_date: job.scheduled_date,
            status: job.status,
            error_message: job.error_message.clone(),
        }
    }
}

impl Resource for Job {
    type Fields = JobFields;

    const COLLECTION: &'static str = "jobs";
    const ACK_ID_FIELD: &'static str = "job_id";
    const SINGULAR: &'static str = "job";
    const PLURAL: &'static str = "jobs";

    fn id(&self) -> EntityId {
        self.id
    }
}
