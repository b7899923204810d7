// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use pipeline_admin::config::settings::Settings;
use pipeline_admin::infrastructure::http::rest_client::RestClient;
use pipeline_admin::presentation::cli::Cli;
use pipeline_admin::presentation::console::Console;
use pipeline_admin::utils::telemetry;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 加载配置、初始化日志并执行一条管理命令
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    if let Some(base_url) = &cli.base_url {
        settings.api.base_url = base_url.clone();
    }

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Using backend at {}", settings.api.base_url);

    // 3. Build client
    let client = Arc::new(RestClient::new(&settings.api)?);
    let console = Console::new(client, cli.json);

    // 4. Run command
    match console.run(cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Command failed: {:?}", e);
            eprintln!("{}", e.banner());
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
