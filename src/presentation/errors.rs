// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::list_screen::ScreenError;

/// 控制台错误类型
///
/// 封装命令执行中的所有错误，提供统一的提示和退出码
#[derive(Debug)]
pub struct ConsoleError(anyhow::Error);

impl ConsoleError {
    /// 输出到 stderr 的提示
    ///
    /// 请求失败只展示通用提示，细节已写入日志
    pub fn banner(&self) -> String {
        match self.0.downcast_ref::<ScreenError>() {
            Some(screen) => screen.banner(),
            None => self.0.to_string(),
        }
    }

    /// 校验失败为 2，其余为 1
    pub fn exit_code(&self) -> u8 {
        match self.0.downcast_ref::<ScreenError>() {
            Some(ScreenError::Validation(_)) | Some(ScreenError::InvalidReference(_)) => 2,
            _ => 1,
        }
    }
}

impl<E> From<E> for ConsoleError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
