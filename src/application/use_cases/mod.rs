// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个用例对应一个管理界面的状态与操作流程
pub mod category_option_screen;
pub mod dashboard;
pub mod job_form;
pub mod list_screen;
