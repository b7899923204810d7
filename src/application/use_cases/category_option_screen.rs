// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::media_fields::MediaCategoryOptionFields;
use crate::application::use_cases::list_screen::{
    delete_failed, load_failed, load_one_failed, save_failed, ScreenError,
};
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::{
    CategoryOptionRepository, EntityRepository, Resource,
};
use std::sync::Arc;
use tracing::{debug, error, info};
use validator::Validate;

/// 分类选项界面
///
/// 指定父级媒体生成选项时，先获取父级，再获取其下的分类选项；
/// 未指定时展示全部分类选项。
pub struct CategoryOptionScreen<Repo: ?Sized> {
    repo: Arc<Repo>,
    parent_id: Option<EntityId>,
    parent: Option<MediaGenOption>,
    items: Vec<MediaCategoryOption>,
    banner: Option<String>,
}

impl<Repo> CategoryOptionScreen<Repo>
where
    Repo: EntityRepository<MediaGenOption>
        + EntityRepository<MediaCategoryOption>
        + CategoryOptionRepository
        + ?Sized,
{
    pub fn new(repo: Arc<Repo>, parent_id: Option<EntityId>) -> Self {
        Self {
            repo,
            parent_id,
            parent: None,
            items: Vec::new(),
            banner: None,
        }
    }

    pub fn parent_id(&self) -> Option<EntityId> {
        self.parent_id
    }

    /// 父级选项，仅在限定父级且加载成功后可用
    pub fn parent(&self) -> Option<&MediaGenOption> {
        self.parent.as_ref()
    }

    pub fn items(&self) -> &[MediaCategoryOption] {
        &self.items
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// 重新获取列表
    pub async fn refresh(&mut self) -> Result<(), ScreenError> {
        let Some(parent_id) = self.parent_id else {
            let result = EntityRepository::<MediaCategoryOption>::list(self.repo.as_ref()).await;
            return self.replace_items(result);
        };

        match EntityRepository::<MediaGenOption>::get(self.repo.as_ref(), parent_id).await {
            Ok(parent) => self.parent = Some(parent),
            Err(e) => {
                error!("Error fetching {} {}: {}", MediaGenOption::SINGULAR, parent_id, e);
                return Err(self.fail(load_one_failed(MediaGenOption::SINGULAR), e));
            }
        }

        let result = self.repo.category_options(parent_id).await;
        self.replace_items(result)
    }

    /// 校验并保存分类选项，成功后刷新列表
    pub async fn save(
        &mut self,
        id: Option<EntityId>,
        fields: &MediaCategoryOptionFields,
    ) -> Result<MediaCategoryOption, ScreenError> {
        fields.validate()?;

        let repo = self.repo.as_ref();
        let result = match id {
            Some(id) => EntityRepository::<MediaCategoryOption>::update(repo, id, fields).await,
            None => EntityRepository::<MediaCategoryOption>::create(repo, fields).await,
        };

        match result {
            Ok(saved) => {
                info!("Saved {} {}", MediaCategoryOption::SINGULAR, saved.id);
                if let Err(e) = self.refresh().await {
                    debug!(
                        "Keeping previous {} after failed refresh: {}",
                        MediaCategoryOption::PLURAL,
                        e
                    );
                }
                Ok(saved)
            }
            Err(e) => {
                error!("Error saving {}: {}", MediaCategoryOption::SINGULAR, e);
                Err(self.fail(save_failed(MediaCategoryOption::SINGULAR), e))
            }
        }
    }

    /// 删除分类选项并刷新列表
    pub async fn delete(&mut self, id: EntityId) -> Result<(), ScreenError> {
        if let Err(e) = EntityRepository::<MediaCategoryOption>::delete(self.repo.as_ref(), id).await
        {
            error!("Error deleting {} {}: {}", MediaCategoryOption::SINGULAR, id, e);
            return Err(self.fail(delete_failed(MediaCategoryOption::SINGULAR), e));
        }

        info!("Deleted {} {}", MediaCategoryOption::SINGULAR, id);
        if let Err(e) = self.refresh().await {
            debug!(
                "Keeping previous {} after failed refresh: {}",
                MediaCategoryOption::PLURAL,
                e
            );
        }
        Ok(())
    }

    fn replace_items(
        &mut self,
        result: Result<Vec<MediaCategoryOption>, crate::utils::errors::RequestError>,
    ) -> Result<(), ScreenError> {
        match result {
            Ok(items) => {
                info!("Loaded {} {}", items.len(), MediaCategoryOption::PLURAL);
                self.items = items;
                self.banner = None;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching {}: {}", MediaCategoryOption::PLURAL, e);
                Err(self.fail(load_failed(MediaCategoryOption::PLURAL), e))
            }
        }
    }

    fn fail(&mut self, banner: String, source: crate::utils::errors::RequestError) -> ScreenError {
        self.banner = Some(banner.clone());
        ScreenError::request(banner, source)
    }
}
