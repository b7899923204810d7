// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::list_screen::{load_failed, ScreenError};
use crate::domain::models::job::{Job, JobStatus};
use crate::domain::models::media_gen_option::MediaGenOption;
use crate::domain::models::scrape_target::ScrapeTarget;
use crate::domain::repositories::entity_repository::{EntityRepository, Resource};
use serde::Serialize;
use tracing::{error, info};

/// 作业状态统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JobStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub failed: usize,
}

impl JobStats {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        jobs.iter().fold(
            Self {
                total: jobs.len(),
                ..Self::default()
            },
            |mut stats, job| {
                match job.status {
                    JobStatus::Pending => stats.pending += 1,
                    JobStatus::Processing => stats.processing += 1,
                    JobStatus::Completed => stats.completed += 1,
                    JobStatus::Failed => stats.failed += 1,
                }
                stats
            },
        )
    }
}

/// 仪表盘统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub jobs: JobStats,
    pub scrape_targets: usize,
    pub media_gen_options: usize,
}

/// 加载仪表盘统计
///
/// 三个列表并发获取，任一失败即整体失败
pub async fn load_dashboard<Repo>(repo: &Repo) -> Result<DashboardStats, ScreenError>
where
    Repo: EntityRepository<Job>
        + EntityRepository<ScrapeTarget>
        + EntityRepository<MediaGenOption>
        + ?Sized,
{
    let (jobs, targets, options) = futures::join!(
        EntityRepository::<Job>::list(repo),
        EntityRepository::<ScrapeTarget>::list(repo),
        EntityRepository::<MediaGenOption>::list(repo),
    );

    let jobs = jobs.map_err(|e| dashboard_error::<Job>(e))?;
    let targets = targets.map_err(|e| dashboard_error::<ScrapeTarget>(e))?;
    let options = options.map_err(|e| dashboard_error::<MediaGenOption>(e))?;

    let stats = DashboardStats {
        jobs: JobStats::from_jobs(&jobs),
        scrape_targets: targets.len(),
        media_gen_options: options.len(),
    };
    info!("Dashboard stats: {:?}", stats);
    Ok(stats)
}

fn dashboard_error<R: Resource>(e: crate::utils::errors::RequestError) -> ScreenError {
    error!("Error fetching {} for dashboard: {}", R::PLURAL, e);
    ScreenError::request(load_failed("dashboard data"), e)
}
