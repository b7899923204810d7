// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了内容管线的配置实体，包括：
/// - 作业（job）：调度器中的计划任务
/// - 抓取目标（scrape_target）：定期抓取的站点
/// - 媒体生成选项及其分类选项（media_gen_option）
/// - 媒体资源（media_asset）：已生成的媒体文件
///
/// 所有实体都由后端持有，客户端只保存最近一次获取的副本。
pub mod job;
pub mod media_asset;
pub mod media_gen_option;
pub mod media_type;
pub mod scrape_target;
pub mod timestamp;

/// 后端分配的实体ID
pub type EntityId = i64;
