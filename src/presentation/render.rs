// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::dashboard::DashboardStats;
use crate::domain::models::job::Job;
use crate::domain::models::media_asset::MediaAsset;
use crate::domain::models::media_gen_option::{MediaCategoryOption, MediaGenOption};
use crate::domain::models::scrape_target::ScrapeTarget;
use crate::domain::models::timestamp;

/// 可按表格输出的实体
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

impl Tabular for Job {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Task Name",
        "Task ID",
        "Scheduled",
        "Status",
        "Error",
        "Created",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task_name.clone(),
            self.task_id.clone(),
            timestamp::format(&self.scheduled_date),
            self.status.label().to_string(),
            self.error_message.clone().unwrap_or_default(),
            timestamp::format(&self.created_at),
        ]
    }
}

impl Tabular for ScrapeTarget {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "URL", "Type", "Frequency"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.url.clone(),
            self.target_type.label().to_string(),
            self.frequency.to_string(),
        ]
    }
}

impl Tabular for MediaGenOption {
    const HEADERS: &'static [&'static str] = &["ID", "Category", "Media Type", "Description"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.category.clone(),
            self.media_type.to_string(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl Tabular for MediaCategoryOption {
    const HEADERS: &'static [&'static str] =
        &["ID", "Title", "Prompt Text", "Chroma Query", "Option ID"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.prompt_text.clone(),
            self.chroma_query.clone(),
            self.option_id.to_string(),
        ]
    }
}

impl Tabular for MediaAsset {
    const HEADERS: &'static [&'static str] = &["ID", "URL", "Media Type", "Caption"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.media_blob_url.clone(),
            self.media_type.to_string(),
            self.caption.clone().unwrap_or_default(),
        ]
    }
}

/// 渲染纯文本表格
///
/// 列宽取表头和单元格中最长者，列之间以两个空格分隔
pub fn table<T: Tabular>(items: &[T]) -> String {
    let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![line(&headers, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| line(row, &widths)));
    if rows.is_empty() {
        lines.push("(no rows)".to_string());
    }
    lines.join("\n")
}

fn line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// 渲染单个实体的字段列表
pub fn record<T: Tabular>(item: &T) -> String {
    let width = T::HEADERS.iter().map(|h| h.len()).max().unwrap_or(0);
    T::HEADERS
        .iter()
        .zip(item.row())
        .map(|(header, value)| format!("{:<width$}  {}", header, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dashboard(stats: &DashboardStats) -> String {
    [
        ("Total Jobs", stats.jobs.total),
        ("Pending Jobs", stats.jobs.pending),
        ("Processing Jobs", stats.jobs.processing),
        ("Completed Jobs", stats.jobs.completed),
        ("Failed Jobs", stats.jobs.failed),
        ("Scrape Targets", stats.scrape_targets),
        ("Media Generation Options", stats.media_gen_options),
    ]
    .iter()
    .map(|(label, count)| format!("{:<24}  {}", label, count))
    .collect::<Vec<_>>()
    .join("\n")
}
