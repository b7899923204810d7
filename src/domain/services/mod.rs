// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 任务类型推导（task_type_resolver）：根据作业任务名称决定 `task_id` 的实体类别
pub mod task_type_resolver;
