// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobStatus;
use crate::domain::models::media_type::MediaType;
use crate::domain::models::scrape_target::ScrapeTargetType;
use crate::domain::models::{timestamp, EntityId};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pipeline-admin - 内容管线后端的管理控制台
#[derive(Parser, Debug)]
#[command(name = "pipeline-admin")]
#[command(author = "Kirky.X")]
#[command(version)]
#[command(about = "Admin console for the content pipeline backend", long_about = None)]
pub struct Cli {
    /// Backend base URL (e.g., http://localhost:3001)
    #[arg(short = 'u', long = "base-url", env = "PIPELINE_ADMIN_BASE_URL")]
    pub base_url: Option<String>,

    /// Configuration file path (defaults to config/default and config/$APP_ENVIRONMENT)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Print raw entities as JSON instead of tables
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show job totals by status plus scrape target and generation option counts
    Dashboard,
    /// Show which kind of entity a job's task_id refers to for a task name
    Resolve {
        /// Task name, e.g. "create media"
        task_name: String,
    },
    /// Manage scheduled jobs
    Jobs {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Manage scrape targets
    ScrapeTargets {
        #[command(subcommand)]
        action: ScrapeTargetAction,
    },
    /// Manage media generation options
    MediaGenOptions {
        #[command(subcommand)]
        action: MediaGenOptionAction,
    },
    /// Manage media category options
    MediaCategoryOptions {
        #[command(subcommand)]
        action: MediaCategoryOptionAction,
    },
    /// Manage media assets
    MediaAssets {
        #[command(subcommand)]
        action: MediaAssetAction,
    },
}

/// 删除参数
#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: EntityId,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum JobAction {
    /// List all jobs
    List,
    /// Show one job
    Get { id: EntityId },
    /// Schedule a new job
    Create(JobArgs),
    /// Update a job; omitted fields keep their stored values
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: JobArgs,
    },
    /// Delete a job
    Delete(DeleteArgs),
}

/// 作业字段参数
///
/// 修改任务名称会清空原有 task_id，需同时提供新的 `--task-id`
#[derive(Args, Debug, Default)]
pub struct JobArgs {
    #[arg(long = "task-name")]
    pub task_name: Option<String>,

    /// Referenced entity id, or free text for unrecognised task names
    #[arg(long = "task-id")]
    pub task_id: Option<String>,

    /// Schedule time, "YYYY-MM-DD HH:MM:SS" (defaults to now on create)
    #[arg(long = "scheduled-date", value_parser = parse_timestamp)]
    pub scheduled_date: Option<NaiveDateTime>,

    /// pending, processing, completed, failed or the numeric code
    #[arg(long = "status")]
    pub status: Option<JobStatus>,

    #[arg(long = "error-message")]
    pub error_message: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ScrapeTargetAction {
    /// List all scrape targets
    List,
    /// Show one scrape target
    Get { id: EntityId },
    /// Add a scrape target
    Create(ScrapeTargetArgs),
    /// Update a scrape target; omitted fields keep their stored values
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: ScrapeTargetArgs,
    },
    /// Delete a scrape target
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct ScrapeTargetArgs {
    #[arg(long = "name")]
    pub name: Option<String>,

    #[arg(long = "url")]
    pub url: Option<String>,

    /// news, blog or social
    #[arg(long = "type")]
    pub target_type: Option<ScrapeTargetType>,

    /// Scrape frequency, must be positive
    #[arg(long = "frequency")]
    pub frequency: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum MediaGenOptionAction {
    /// List all media generation options
    List,
    /// Show one media generation option
    Get { id: EntityId },
    /// Add a media generation option
    Create(MediaGenOptionArgs),
    /// Update a media generation option; omitted fields keep their stored values
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: MediaGenOptionArgs,
    },
    /// Delete a media generation option and all of its category options
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct MediaGenOptionArgs {
    #[arg(long = "category")]
    pub category: Option<String>,

    /// image, video or audio
    #[arg(long = "media-type")]
    pub media_type: Option<MediaType>,

    #[arg(long = "description")]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MediaCategoryOptionAction {
    /// List category options, optionally for one media generation option
    List {
        /// Parent media generation option id
        #[arg(long = "option")]
        option: Option<EntityId>,
    },
    /// Show one category option
    Get { id: EntityId },
    /// Add a category option
    Create(MediaCategoryOptionArgs),
    /// Update a category option; omitted fields keep their stored values
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: MediaCategoryOptionArgs,
    },
    /// Delete a category option
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct MediaCategoryOptionArgs {
    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "prompt-text")]
    pub prompt_text: Option<String>,

    #[arg(long = "chroma-query")]
    pub chroma_query: Option<String>,

    /// Parent media generation option id
    #[arg(long = "option")]
    pub option_id: Option<EntityId>,
}

#[derive(Subcommand, Debug)]
pub enum MediaAssetAction {
    /// List all media assets
    List,
    /// Show one media asset
    Get { id: EntityId },
    /// Register a media asset
    Create(MediaAssetArgs),
    /// Update a media asset; omitted fields keep their stored values
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: MediaAssetArgs,
    },
    /// Delete a media asset
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct MediaAssetArgs {
    /// Blob storage URL of the asset
    #[arg(long = "url")]
    pub media_blob_url: Option<String>,

    /// image, video or audio
    #[arg(long = "media-type")]
    pub media_type: Option<MediaType>,

    #[arg(long = "caption")]
    pub caption: Option<String>,
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    timestamp::parse(raw).ok_or_else(|| format!("expected YYYY-MM-DD HH:MM:SS, got '{}'", raw))
}
