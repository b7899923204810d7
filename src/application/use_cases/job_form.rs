// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::job_fields::JobFields;
use crate::application::use_cases::list_screen::ScreenError;
use crate::domain::models::job::{Job, JobStatus};
use crate::domain::models::media_asset::MediaAsset;
use crate::domain::models::media_gen_option::MediaGenOption;
use crate::domain::models::scrape_target::ScrapeTarget;
use crate::domain::models::{timestamp, EntityId};
use crate::domain::repositories::entity_repository::{EntityRepository, Resource};
use crate::domain::services::task_type_resolver::{resolve_task_category, TaskCategory};
use chrono::{NaiveDateTime, Utc};
use tracing::error;
use validator::Validate;

/// 选择器中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerChoice {
    /// 提交为 `task_id` 的值
    pub value: String,
    /// 展示文本
    pub label: String,
}

/// 作业表单的三个外键候选列表
///
/// 某个列表加载失败时为 `None`，此时不对该类别做引用校验
#[derive(Debug, Clone, Default)]
pub struct PickerLists {
    pub media_gen_options: Option<Vec<MediaGenOption>>,
    pub scrape_targets: Option<Vec<ScrapeTarget>>,
    pub media_assets: Option<Vec<MediaAsset>>,
}

impl PickerLists {
    /// 并发加载三个候选列表
    ///
    /// 各列表相互独立，失败只记录日志
    pub async fn load<Repo>(repo: &Repo) -> Self
    where
        Repo: EntityRepository<MediaGenOption>
            + EntityRepository<ScrapeTarget>
            + EntityRepository<MediaAsset>
            + ?Sized,
    {
        let (media_gen_options, scrape_targets, media_assets) = futures::join!(
            EntityRepository::<MediaGenOption>::list(repo),
            EntityRepository::<ScrapeTarget>::list(repo),
            EntityRepository::<MediaAsset>::list(repo),
        );

        Self {
            media_gen_options: keep_or_log(media_gen_options),
            scrape_targets: keep_or_log(scrape_targets),
            media_assets: keep_or_log(media_assets),
        }
    }

    /// 某类别的候选项，列表未加载时返回 `None`
    pub fn choices(&self, category: TaskCategory) -> Option<Vec<PickerChoice>> {
        match category {
            TaskCategory::MediaGenOption => self.media_gen_options.as_ref().map(|options| {
                options
                    .iter()
                    .map(|o| choice(o.id, format!("{} ({})", o.category, o.media_type)))
                    .collect()
            }),
            TaskCategory::ScrapeTarget => self.scrape_targets.as_ref().map(|targets| {
                targets
                    .iter()
                    .map(|t| choice(t.id, format!("{} ({})", t.name, t.url)))
                    .collect()
            }),
            TaskCategory::MediaAsset => self.media_assets.as_ref().map(|assets| {
                assets
                    .iter()
                    .map(|a| choice(a.id, format!("{}: {}", a.media_type, a.display_text())))
                    .collect()
            }),
            TaskCategory::FreeText => Some(Vec::new()),
        }
    }
}

fn choice(id: EntityId, label: String) -> PickerChoice {
    PickerChoice {
        value: id.to_string(),
        label,
    }
}

fn keep_or_log<R: Resource>(
    result: Result<Vec<R>, crate::utils::errors::RequestError>,
) -> Option<Vec<R>> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            error!("Error fetching {}: {}", R::PLURAL, e);
            None
        }
    }
}

/// 作业表单状态
///
/// 选择任务名称时清空已选的 `task_id` 并切换到对应类别的选择器；
/// 编辑已有作业时按其任务名称确定类别但保留 `task_id`。
#[derive(Debug, Clone)]
pub struct JobForm {
    editing: Option<EntityId>,
    task_name: String,
    task_id: String,
    scheduled_date: NaiveDateTime,
    status: JobStatus,
    error_message: String,
    category: TaskCategory,
}

impl Default for JobForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JobForm {
    /// 新建作业的空表单，计划时间默认为当前时间
    pub fn new() -> Self {
        Self {
            editing: None,
            task_name: String::new(),
            task_id: String::new(),
            scheduled_date: timestamp::truncate(Utc::now().naive_utc()),
            status: JobStatus::Pending,
            error_message: String::new(),
            category: TaskCategory::FreeText,
        }
    }

    /// 编辑已有作业
    pub fn edit(job: &Job) -> Self {
        Self {
            editing: Some(job.id),
            task_name: job.task_name.clone(),
            task_id: job.task_id.clone(),
            scheduled_date: job.scheduled_date,
            status: job.status,
            error_message: job.error_message.clone().unwrap_or_default(),
            category: resolve_task_category(&job.task_name),
        }
    }

    pub fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn scheduled_date(&self) -> NaiveDateTime {
        self.scheduled_date
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// 当前选择器类别
    pub fn category(&self) -> TaskCategory {
        self.category
    }

    pub fn picker_title(&self) -> &'static str {
        self.category.label()
    }

    /// 选择任务名称
    ///
    /// 任务名称改变时清空 `task_id`，名称不变时保持原值
    pub fn set_task_name(&mut self, task_name: impl Into<String>) {
        let task_name = task_name.into();
        if task_name == self.task_name {
            return;
        }
        self.task_name = task_name;
        self.task_id.clear();
        self.category = resolve_task_category(&self.task_name);
    }

    pub fn set_task_id(&mut self, task_id: impl Into<String>) {
        self.task_id = task_id.into();
    }

    pub fn set_scheduled_date(&mut self, scheduled_date: NaiveDateTime) {
        self.scheduled_date = timestamp::truncate(scheduled_date);
    }

    pub fn set_status(&mut self, status: JobStatus) {
        self.status = status;
    }

    pub fn set_error_message(&mut self, error_message: impl Into<String>) {
        self.error_message = error_message.into();
    }

    /// 当前类别的候选项
    pub fn picker_choices(&self, lists: &PickerLists) -> Vec<PickerChoice> {
        lists.choices(self.category).unwrap_or_default()
    }

    /// 校验并生成写入字段
    ///
    /// 提供候选列表时，引用类别的 `task_id` 必须是该列表中的实体
    pub fn submit(&self, lists: Option<&PickerLists>) -> Result<JobFields, ScreenError> {
        let error_message = self.error_message.trim();
        let fields = JobFields {
            task_name: self.task_name.clone(),
            task_id: self.task_id.trim().to_string(),
            scheduled_date: self.scheduled_date,
            status: self.status,
            error_message: (!error_message.is_empty()).then(|| error_message.to_string()),
        };
        fields.validate()?;

        if let Some(choices) = lists.and_then(|lists| lists.choices(self.category)) {
            if self.category.is_reference() && !choices.iter().any(|c| c.value == fields.task_id)
            {
                return Err(ScreenError::InvalidReference(format!(
                    "Task ID {} is not a known {}",
                    fields.task_id,
                    self.category.label()
                )));
            }
        }

        Ok(fields)
    }
}

#[cfg(test)]
#[path = "job_form_test.rs"]
mod tests;
