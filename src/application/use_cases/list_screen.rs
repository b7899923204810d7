// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::{EntityRepository, Resource};
use crate::utils::errors::RequestError;
use crate::utils::validators::describe;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use validator::{Validate, ValidationErrors};

/// 界面层错误类型
#[derive(Error, Debug)]
pub enum ScreenError {
    /// 表单校验失败，未发出请求
    #[error("Validation failed: {}", describe(.0).join("; "))]
    Validation(#[from] ValidationErrors),

    /// 后端请求失败，`banner` 为展示给用户的通用提示
    #[error("{banner}")]
    Request {
        banner: String,
        #[source]
        source: RequestError,
    },

    /// `task_id` 未指向当前类别中的实体
    #[error("{0}")]
    InvalidReference(String),
}

impl ScreenError {
    pub fn request(banner: String, source: RequestError) -> Self {
        ScreenError::Request { banner, source }
    }

    /// 展示给用户的提示
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

pub fn load_failed(plural: &str) -> String {
    format!("Failed to load {}. Please try again.", plural)
}

pub fn load_one_failed(singular: &str) -> String {
    format!("Failed to load {} data. Please try again.", singular)
}

pub fn save_failed(singular: &str) -> String {
    format!("Failed to save {}. Please try again.", singular)
}

pub fn delete_failed(singular: &str) -> String {
    format!("Failed to delete {}. Please try again.", singular)
}

/// 删除确认提示
pub fn delete_prompt<R: Resource>() -> String {
    match R::DELETE_NOTICE {
        Some(notice) => format!(
            "Are you sure you want to delete this {}? {}",
            R::SINGULAR,
            notice
        ),
        None => format!("Are you sure you want to delete this {}?", R::SINGULAR),
    }
}

/// 实体列表界面
///
/// 保存最近一次获取的列表。刷新成功时整体替换列表，失败时保留
/// 原列表并设置提示；任何写操作成功后都会重新获取列表。
pub struct ListScreen<R, Repo: ?Sized> {
    repo: Arc<Repo>,
    items: Vec<R>,
    banner: Option<String>,
}

impl<R, Repo> ListScreen<R, Repo>
where
    R: Resource,
    R::Fields: Validate,
    Repo: EntityRepository<R> + ?Sized,
{
    pub fn new(repo: Arc<Repo>) -> Self {
        Self {
            repo,
            items: Vec::new(),
            banner: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// 重新获取列表
    pub async fn refresh(&mut self) -> Result<(), ScreenError> {
        match self.repo.list().await {
            Ok(items) => {
                info!("Loaded {} {}", items.len(), R::PLURAL);
                self.items = items;
                self.banner = None;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching {}: {}", R::PLURAL, e);
                let banner = load_failed(R::PLURAL);
                self.banner = Some(banner.clone());
                Err(ScreenError::request(banner, e))
            }
        }
    }

    /// 获取单个实体，用于编辑表单
    pub async fn open(&mut self, id: EntityId) -> Result<R, ScreenError> {
        self.repo.get(id).await.map_err(|e| {
            error!("Error fetching {} {}: {}", R::SINGULAR, id, e);
            let banner = load_one_failed(R::SINGULAR);
            self.banner = Some(banner.clone());
            ScreenError::request(banner, e)
        })
    }

    /// 校验并保存实体
    ///
    /// `id` 为 `None` 时创建，否则更新。保存成功后刷新列表，刷新失败
    /// 只影响提示，不影响保存结果。
    pub async fn save(
        &mut self,
        id: Option<EntityId>,
        fields: &R::Fields,
    ) -> Result<R, ScreenError> {
        fields.validate()?;

        let result = match id {
            Some(id) => self.repo.update(id, fields).await,
            None => self.repo.create(fields).await,
        };

        match result {
            Ok(saved) => {
                info!("Saved {} {}", R::SINGULAR, saved.id());
                if let Err(e) = self.refresh().await {
                    debug!("Keeping previous {} after failed refresh: {}", R::PLURAL, e);
                }
                Ok(saved)
            }
            Err(e) => {
                error!("Error saving {}: {}", R::SINGULAR, e);
                let banner = save_failed(R::SINGULAR);
                self.banner = Some(banner.clone());
                Err(ScreenError::request(banner, e))
            }
        }
    }

    /// 删除实体并刷新列表
    pub async fn delete(&mut self, id: EntityId) -> Result<(), ScreenError> {
        if let Err(e) = self.repo.delete(id).await {
            error!("Error deleting {} {}: {}", R::SINGULAR, id, e);
            let banner = delete_failed(R::SINGULAR);
            self.banner = Some(banner.clone());
            return Err(ScreenError::request(banner, e));
        }

        info!("Deleted {} {}", R::SINGULAR, id);
        if let Err(e) = self.refresh().await {
            debug!("Keeping previous {} after failed refresh: {}", R::PLURAL, e);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "list_screen_test.rs"]
mod tests;
