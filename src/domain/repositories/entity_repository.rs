// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::Job;
use crate::domain::models::media_asset::MediaAsset;
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::scrape_target::ScrapeTarget;
use crate::domain::models::EntityId;
use crate::utils::errors::RequestError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 后端集合资源
///
/// 描述一种实体在后端的集合路径、写入确认体中的ID字段，
/// 以及界面提示文本中使用的名称
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// 创建/更新时提交的字段
    type Fields: Serialize + Send + Sync;

    /// 集合路径，如 `jobs`
    const COLLECTION: &'static str;
    /// 创建确认体中携带新ID的字段，如 `job_id`
    const ACK_ID_FIELD: &'static str;
    /// 单数名称，如 `job`
    const SINGULAR: &'static str;
    /// 复数名称，如 `jobs`
    const PLURAL: &'static str;
    /// 删除确认时附加的提示
    const DELETE_NOTICE: Option<&'static str> = None;

    fn id(&self) -> EntityId;
}

/// 实体仓库特质
///
/// 对后端 REST 集合的统一访问接口
#[async_trait]
pub trait EntityRepository<R: Resource>: Send + Sync {
    /// 获取集合中的全部实体
    async fn list(&self) -> Result<Vec<R>, RequestError>;
    /// 根据ID获取实体
    async fn get(&self, id: EntityId) -> Result<R, RequestError>;
    /// 创建实体并返回创建结果
    async fn create(&self, fields: &R::Fields) -> Result<R, RequestError>;
    /// 更新实体并返回更新后的结果
    async fn update(&self, id: EntityId, fields: &R::Fields) -> Result<R, RequestError>;
    /// 删除实体
    async fn delete(&self, id: EntityId) -> Result<(), RequestError>;
}

/// 分类选项查询特质
///
/// 获取某个媒体生成选项下的全部分类选项
#[async_trait]
pub trait CategoryOptionRepository: Send + Sync {
    async fn category_options(
        &self,
        option_id: EntityId,
    ) -> Result<Vec<MediaCategoryOption>, RequestError>;
}

/// 管理后端
///
/// 同时提供全部实体集合和分类选项查询的仓库
pub trait AdminBackend:
    EntityRepository<Job>
    + EntityRepository<ScrapeTarget>
    + EntityRepository<MediaGenOption>
    + EntityRepository<MediaCategoryOption>
    + EntityRepository<MediaAsset>
    + CategoryOptionRepository
{
}

impl<T> AdminBackend for T where
    T: EntityRepository<Job>
        + EntityRepository<ScrapeTarget>
        + EntityRepository<MediaGenOption>
        + EntityRepository<MediaCategoryOption>
        + EntityRepository<MediaAsset>
        + CategoryOptionRepository
{
}
