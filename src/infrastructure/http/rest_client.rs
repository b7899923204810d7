// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ApiSettings;
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::EntityId;
use crate::domain::repositories::entity_repository::{
    CategoryOptionRepository, EntityRepository, Resource,
};
use crate::utils::errors::RequestError;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// 后端 REST 客户端
///
/// 基于reqwest实现的实体仓库，所有实体类型共用一个连接池
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// 根据接口配置创建客户端
    ///
    /// # 参数
    ///
    /// * `settings` - 后端接口配置
    ///
    /// # 返回值
    ///
    /// * `Ok(RestClient)` - 客户端实例
    /// * `Err(RequestError)` - 基础URL无效或客户端构建失败
    pub fn new(settings: &ApiSettings) -> Result<Self, RequestError> {
        let mut base_url = Url::parse(&settings.base_url)?;
        // Url::join drops the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        Ok(self.base_url.join(&segments.join("/"))?)
    }

    /// 发送请求并检查状态码
    ///
    /// 非成功响应会被转换为 [`RequestError::Status`]，错误信息依次取自
    /// 响应体的 `error`、`message` 字段、原始文本和状态码原因短语
    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response, RequestError> {
        let response = request.send().await.map_err(|e| {
            error!(action, error = %e, "Backend request failed");
            RequestError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

        error!(
            action,
            status = status.as_u16(),
            message = %message,
            "Backend returned an error"
        );
        Err(RequestError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl<R: Resource> EntityRepository<R> for RestClient {
    async fn list(&self) -> Result<Vec<R>, RequestError> {
        let url = self.endpoint(&[R::COLLECTION])?;
        debug!(method = "GET", %url, "Listing {}", R::PLURAL);

        let response = self.send(self.http.get(url), "list").await?;
        read_json(response).await
    }

    async fn get(&self, id: EntityId) -> Result<R, RequestError> {
        let url = self.endpoint(&[R::COLLECTION, &id.to_string()])?;
        debug!(method = "GET", %url, "Fetching {} {}", R::SINGULAR, id);

        let response = self.send(self.http.get(url), "get").await?;
        read_json(response).await
    }

    async fn create(&self, fields: &R::Fields) -> Result<R, RequestError> {
        let url = self.endpoint(&[R::COLLECTION])?;
        debug!(method = "POST", %url, "Creating {}", R::SINGULAR);

        let response = self.send(self.http.post(url).json(fields), "create").await?;
        let body = read_body(response).await?;
        if let Some(entity) = as_entity::<R>(&body) {
            return Ok(entity);
        }

        // The backend acknowledges writes with {"message", "<kind>_id"} only
        let id = acknowledged_id(&body, R::ACK_ID_FIELD).ok_or_else(|| {
            RequestError::Decode(format!(
                "create response for {} carries no `{}`",
                R::SINGULAR,
                R::ACK_ID_FIELD
            ))
        })?;
        <Self as EntityRepository<R>>::get(self, id).await
    }

    async fn update(&self, id: EntityId, fields: &R::Fields) -> Result<R, RequestError> {
        let url = self.endpoint(&[R::COLLECTION, &id.to_string()])?;
        debug!(method = "PUT", %url, "Updating {} {}", R::SINGULAR, id);

        let response = self.send(self.http.put(url).json(fields), "update").await?;
        let body = read_body(response).await?;
        match as_entity::<R>(&body) {
            Some(entity) => Ok(entity),
            None => <Self as EntityRepository<R>>::get(self, id).await,
        }
    }

    async fn delete(&self, id: EntityId) -> Result<(), RequestError> {
        let url = self.endpoint(&[R::COLLECTION, &id.to_string()])?;
        debug!(method = "DELETE", %url, "Deleting {} {}", R::SINGULAR, id);

        self.send(self.http.delete(url), "delete").await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryOptionRepository for RestClient {
    async fn category_options(
        &self,
        option_id: EntityId,
    ) -> Result<Vec<MediaCategoryOption>, RequestError> {
        let url = self.endpoint(&[
            MediaGenOption::COLLECTION,
            &option_id.to_string(),
            "category-options",
        ])?;
        debug!(method = "GET", %url, "Listing category options of {}", option_id);

        let response = self.send(self.http.get(url), "category_options").await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode(e.to_string()))
}

/// 读取写操作的响应体，空响应视为 `null`
async fn read_body(response: Response) -> Result<Value, RequestError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode(e.to_string()))
}

fn as_entity<R: Resource>(body: &Value) -> Option<R> {
    if body.get("id").is_none() {
        return None;
    }
    serde_json::from_value(body.clone()).ok()
}

fn acknowledged_id(body: &Value, field: &str) -> Option<EntityId> {
    [field, "id"]
        .into_iter()
        .filter_map(|key| body.get(key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

fn error_message(body: &str) -> Option<String> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Some(message.clone());
            }
        }
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "rest_client_test.rs"]
mod tests;
