// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认的后端地址（CRUD 服务）
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 后端接口配置
    pub api: ApiSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 后端接口配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// 后端基础URL
    pub base_url: String,
    /// 请求超时时间（秒），未设置时不限制
    pub timeout_secs: Option<u64>,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl ApiSettings {
    /// 使用默认值创建指向指定地址的配置
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 默认日志级别
    pub level: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

fn default_user_agent() -> String {
    format!("pipeline-admin/{}", env!("CARGO_PKG_VERSION"))
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.user_agent", default_user_agent())?
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 和 `PIPELINE_ADMIN__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PIPELINE_ADMIN").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 从单个配置文件加载（叠加在默认值之上）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
