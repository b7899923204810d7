// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 后端请求错误类型
///
/// 所有实体客户端操作失败时返回此错误。HTTP 非成功响应会携带
/// 后端返回的状态码和错误信息。
#[derive(Error, Debug)]
pub enum RequestError {
    /// 后端返回了非成功状态码
    #[error("Backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// 网络或传输层错误
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 响应体无法解析
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// 无效的接口地址
    #[error("Invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RequestError {
    /// 返回后端状态码（如果存在）
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// 返回错误信息
    pub fn message(&self) -> String {
        match self {
            RequestError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// 判断是否为 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
