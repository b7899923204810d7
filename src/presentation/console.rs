// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::job_fields::JobFields;
use crate::application::dto::media_fields::{
    MediaAssetFields, MediaCategoryOptionFields, MediaGenOptionFields,
};
use crate::application::dto::scrape_target_fields::ScrapeTargetFields;
use crate::application::use_cases::category_option_screen::CategoryOptionScreen;
use crate::application::use_cases::dashboard::load_dashboard;
use crate::application::use_cases::job_form::{JobForm, PickerLists};
use crate::application::use_cases::list_screen::{delete_prompt, ListScreen};
use crate::domain::models::job::Job;
use crate::domain::models::media_asset::MediaAsset;
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::scrape_target::ScrapeTarget;
use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::{AdminBackend, EntityRepository, Resource};
use crate::domain::services::task_type_resolver::resolve_task_category;
use crate::presentation::cli::{
    Command, DeleteArgs, JobAction, JobArgs, MediaAssetAction, MediaAssetArgs,
    MediaCategoryOptionAction, MediaCategoryOptionArgs, MediaGenOptionAction, MediaGenOptionArgs,
    ScrapeTargetAction, ScrapeTargetArgs,
};
use crate::presentation::errors::ConsoleError;
use crate::presentation::render::{self, Tabular};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use validator::Validate;

/// 单个实体集合上的操作
enum Operation<R: Resource> {
    List,
    Get(EntityId),
    Save(Option<EntityId>, R::Fields),
    Delete(DeleteArgs),
}

/// 管理控制台
///
/// 将解析后的命令分派到对应界面，返回写到 stdout 的文本
pub struct Console<Repo: ?Sized> {
    repo: Arc<Repo>,
    json: bool,
}

impl<Repo> Console<Repo>
where
    Repo: AdminBackend + ?Sized,
{
    pub fn new(repo: Arc<Repo>, json: bool) -> Self {
        Self { repo, json }
    }

    /// 执行命令
    pub async fn run(&self, command: Command) -> Result<String, ConsoleError> {
        debug!("Running command: {:?}", command);

        match command {
            Command::Dashboard => {
                let stats = load_dashboard(self.repo.as_ref()).await?;
                if self.json {
                    Ok(serde_json::to_string_pretty(&stats)?)
                } else {
                    Ok(render::dashboard(&stats))
                }
            }
            Command::Resolve { task_name } => {
                let category = resolve_task_category(&task_name);
                if self.json {
                    Ok(serde_json::to_string_pretty(&json!({
                        "task_name": task_name,
                        "category": category,
                        "label": category.label(),
                    }))?)
                } else {
                    Ok(format!("{} -> {} ({})", task_name, category, category.label()))
                }
            }
            Command::Jobs { action } => self.jobs(action).await,
            Command::ScrapeTargets { action } => self.scrape_targets(action).await,
            Command::MediaGenOptions { action } => self.media_gen_options(action).await,
            Command::MediaCategoryOptions { action } => self.media_category_options(action).await,
            Command::MediaAssets { action } => self.media_assets(action).await,
        }
    }

    async fn jobs(&self, action: JobAction) -> Result<String, ConsoleError> {
        let op = match action {
            JobAction::List => Operation::List,
            JobAction::Get { id } => Operation::Get(id),
            JobAction::Create(args) => {
                Operation::Save(None, self.job_fields(JobForm::new(), args).await?)
            }
            JobAction::Update { id, fields } => {
                let current = self.current::<Job>(id).await?;
                Operation::Save(Some(id), self.job_fields(JobForm::edit(&current), fields).await?)
            }
            JobAction::Delete(args) => Operation::Delete(args),
        };
        self.manage::<Job>(op).await
    }

    /// 填写作业表单并按选择器列表校验引用
    async fn job_fields(&self, mut form: JobForm, args: JobArgs) -> Result<JobFields, ConsoleError> {
        if let Some(task_name) = args.task_name {
            form.set_task_name(task_name);
        }
        if let Some(task_id) = args.task_id {
            form.set_task_id(task_id);
        }
        if let Some(scheduled_date) = args.scheduled_date {
            form.set_scheduled_date(scheduled_date);
        }
        if let Some(status) = args.status {
            form.set_status(status);
        }
        if let Some(error_message) = args.error_message {
            form.set_error_message(error_message);
        }

        let lists = if form.category().is_reference() {
            Some(PickerLists::load(self.repo.as_ref()).await)
        } else {
            None
        };
        Ok(form.submit(lists.as_ref())?)
    }

    async fn scrape_targets(&self, action: ScrapeTargetAction) -> Result<String, ConsoleError> {
        let op = match action {
            ScrapeTargetAction::List => Operation::List,
            ScrapeTargetAction::Get { id } => Operation::Get(id),
            ScrapeTargetAction::Create(args) => Operation::Save(None, args.into_fields(None)),
            ScrapeTargetAction::Update { id, fields } => {
                let current = ScrapeTargetFields::from(&self.current::<ScrapeTarget>(id).await?);
                Operation::Save(Some(id), fields.into_fields(Some(current)))
            }
            ScrapeTargetAction::Delete(args) => Operation::Delete(args),
        };
        self.manage::<ScrapeTarget>(op).await
    }

    async fn media_gen_options(&self, action: MediaGenOptionAction) -> Result<String, ConsoleError> {
        let op = match action {
            MediaGenOptionAction::List => Operation::List,
            MediaGenOptionAction::Get { id } => Operation::Get(id),
            MediaGenOptionAction::Create(args) => Operation::Save(None, args.into_fields(None)),
            MediaGenOptionAction::Update { id, fields } => {
                let current =
                    MediaGenOptionFields::from(&self.current::<MediaGenOption>(id).await?);
                Operation::Save(Some(id), fields.into_fields(Some(current)))
            }
            MediaGenOptionAction::Delete(args) => Operation::Delete(args),
        };
        self.manage::<MediaGenOption>(op).await
    }

    async fn media_category_options(
        &self,
        action: MediaCategoryOptionAction,
    ) -> Result<String, ConsoleError> {
        match action {
            MediaCategoryOptionAction::List { option } => {
                let mut screen = CategoryOptionScreen::new(self.repo.clone(), option);
                screen.refresh().await?;
                if self.json {
                    return Ok(serde_json::to_string_pretty(screen.items())?);
                }
                let table = render::table(screen.items());
                Ok(match screen.parent() {
                    Some(parent) => format!(
                        "Category options for {} ({})\n\n{}",
                        parent.category, parent.media_type, table
                    ),
                    None => table,
                })
            }
            MediaCategoryOptionAction::Get { id } => {
                self.manage::<MediaCategoryOption>(Operation::Get(id)).await
            }
            MediaCategoryOptionAction::Create(args) => {
                let fields = args.into_fields(None);
                let mut screen = CategoryOptionScreen::new(self.repo.clone(), None);
                let saved = screen.save(None, &fields).await?;
                self.saved(&saved)
            }
            MediaCategoryOptionAction::Update { id, fields } => {
                let current =
                    MediaCategoryOptionFields::from(&self.current::<MediaCategoryOption>(id).await?);
                let fields = fields.into_fields(Some(current));
                let mut screen = CategoryOptionScreen::new(self.repo.clone(), None);
                let saved = screen.save(Some(id), &fields).await?;
                self.saved(&saved)
            }
            MediaCategoryOptionAction::Delete(args) => {
                if !args.yes && !confirm(&delete_prompt::<MediaCategoryOption>()).await? {
                    return Ok("Deletion cancelled".to_string());
                }
                let mut screen = CategoryOptionScreen::new(self.repo.clone(), None);
                screen.delete(args.id).await?;
                Ok(format!("Deleted {} {}", MediaCategoryOption::SINGULAR, args.id))
            }
        }
    }

    async fn media_assets(&self, action: MediaAssetAction) -> Result<String, ConsoleError> {
        let op = match action {
            MediaAssetAction::List => Operation::List,
            MediaAssetAction::Get { id } => Operation::Get(id),
            MediaAssetAction::Create(args) => Operation::Save(None, args.into_fields(None)),
            MediaAssetAction::Update { id, fields } => {
                let current = MediaAssetFields::from(&self.current::<MediaAsset>(id).await?);
                Operation::Save(Some(id), fields.into_fields(Some(current)))
            }
            MediaAssetAction::Delete(args) => Operation::Delete(args),
        };
        self.manage::<MediaAsset>(op).await
    }

    /// 获取待更新的实体
    async fn current<R>(&self, id: EntityId) -> Result<R, ConsoleError>
    where
        R: Resource,
        R::Fields: Validate,
        Repo: EntityRepository<R>,
    {
        let mut screen = ListScreen::<R, Repo>::new(self.repo.clone());
        Ok(screen.open(id).await?)
    }

    async fn manage<R>(&self, op: Operation<R>) -> Result<String, ConsoleError>
    where
        R: Resource + Tabular,
        R::Fields: Validate,
        Repo: EntityRepository<R>,
    {
        let mut screen = ListScreen::<R, Repo>::new(self.repo.clone());

        match op {
            Operation::List => {
                screen.refresh().await?;
                if self.json {
                    Ok(serde_json::to_string_pretty(screen.items())?)
                } else {
                    Ok(render::table(screen.items()))
                }
            }
            Operation::Get(id) => {
                let item = screen.open(id).await?;
                self.one(&item)
            }
            Operation::Save(id, fields) => {
                let saved = screen.save(id, &fields).await?;
                self.saved(&saved)
            }
            Operation::Delete(args) => {
                if !args.yes && !confirm(&delete_prompt::<R>()).await? {
                    return Ok("Deletion cancelled".to_string());
                }
                screen.delete(args.id).await?;
                Ok(format!("Deleted {} {}", R::SINGULAR, args.id))
            }
        }
    }

    fn one<T: Tabular + Serialize>(&self, item: &T) -> Result<String, ConsoleError> {
        if self.json {
            Ok(serde_json::to_string_pretty(item)?)
        } else {
            Ok(render::record(item))
        }
    }

    fn saved<R: Resource + Tabular>(&self, item: &R) -> Result<String, ConsoleError> {
        info!("{} {} saved", R::SINGULAR, item.id());
        if self.json {
            self.one(item)
        } else {
            Ok(format!("Saved {} {}\n\n{}", R::SINGULAR, item.id(), render::record(item)))
        }
    }
}

/// 在 stderr 上询问确认，只有 `y`/`yes` 视为同意
async fn confirm(prompt: &str) -> Result<bool, ConsoleError> {
    eprint!("{} [y/N] ", prompt);
    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

impl ScrapeTargetArgs {
    /// 合并到已有字段上，创建时缺失的字段留空交给校验
    fn into_fields(self, current: Option<ScrapeTargetFields>) -> ScrapeTargetFields {
        let current = current.unwrap_or_else(|| ScrapeTargetFields {
            name: String::new(),
            url: String::new(),
            target_type: Default::default(),
            frequency: 0.0,
        });
        ScrapeTargetFields {
            name: self.name.unwrap_or(current.name),
            url: self.url.unwrap_or(current.url),
            target_type: self.target_type.unwrap_or(current.target_type),
            frequency: self.frequency.unwrap_or(current.frequency),
        }
    }
}

impl MediaGenOptionArgs {
    fn into_fields(self, current: Option<MediaGenOptionFields>) -> MediaGenOptionFields {
        let current = current.unwrap_or_else(|| MediaGenOptionFields {
            category: String::new(),
            media_type: Default::default(),
            description: None,
        });
        MediaGenOptionFields {
            category: self.category.unwrap_or(current.category),
            media_type: self.media_type.unwrap_or(current.media_type),
            description: self.description.or(current.description),
        }
    }
}

impl MediaCategoryOptionArgs {
    fn into_fields(self, current: Option<MediaCategoryOptionFields>) -> MediaCategoryOptionFields {
        let current = current.unwrap_or_else(|| MediaCategoryOptionFields {
            title: String::new(),
            prompt_text: String::new(),
            chroma_query: String::new(),
            option_id: 0,
        });
        MediaCategoryOptionFields {
            title: self.title.unwrap_or(current.title),
            prompt_text: self.prompt_text.unwrap_or(current.prompt_text),
            chroma_query: self.chroma_query.unwrap_or(current.chroma_query),
            option_id: self.option_id.unwrap_or(current.option_id),
        }
    }
}

impl MediaAssetArgs {
    fn into_fields(self, current: Option<MediaAssetFields>) -> MediaAssetFields {
        let current = current.unwrap_or_else(|| MediaAssetFields {
            media_blob_url: String::new(),
            media_type: Default::default(),
            caption: None,
        });
        MediaAssetFields {
            media_blob_url: self.media_blob_url.unwrap_or(current.media_blob_url),
            media_type: self.media_type.unwrap_or(current.media_type),
            caption: self.caption.or(current.caption),
        }
    }
}
