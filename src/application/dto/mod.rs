// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义提交给后端的写入字段，以及各实体在后端的集合绑定
pub mod job_fields;
pub mod media_fields;
pub mod scrape_target_fields;
