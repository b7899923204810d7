// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 构建日志过滤器
///
/// 优先使用 `RUST_LOG`，否则使用配置中的日志级别
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},pipeline_admin={}", settings.level, settings.level).into())
}

/// 初始化日志
///
/// 日志输出到 stderr，stdout 留给命令输出
pub fn init_telemetry(settings: &LoggingSettings) {
    let registry = tracing_subscriber::registry().with(build_filter(settings));

    if settings.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
