// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pipeline_admin::application::use_cases::job_form::JobForm;
use pipeline_admin::domain::models::job::TaskName;
use pipeline_admin::domain::services::task_type_resolver::{resolve_task_category, TaskCategory};

#[test]
fn test_every_task_name_resolves_to_expected_category() {
    for name in TaskName::ALL {
        let expected = match name {
            TaskName::CreateMedia => TaskCategory::MediaGenOption,
            TaskName::WebScrape | TaskName::InstaScrape => TaskCategory::ScrapeTarget,
            TaskName::PostImageWhatsapp
            | TaskName::PostImageInstagram
            | TaskName::PostVideoWhatsapp
            | TaskName::PostVideoInstagram => TaskCategory::MediaAsset,
        };
        assert_eq!(resolve_task_category(name.as_str()), expected, "{name}");
        assert_eq!(name.category(), expected);
    }
}

#[test]
fn test_post_prefixes_match_anywhere() {
    for name in [
        "post image",
        "post video",
        "scheduled post image to telegram",
        "repost video later",
    ] {
        assert_eq!(resolve_task_category(name), TaskCategory::MediaAsset, "{name}");
    }
}

#[test]
fn test_exact_names_are_case_and_space_sensitive() {
    for name in [
        "unknown task",
        "",
        "Create Media",
        "create media ",
        "web scraper",
        "Post Image whatsapp",
    ] {
        assert_eq!(resolve_task_category(name), TaskCategory::FreeText, "{name:?}");
    }
}

#[test]
fn test_form_clears_task_id_only_when_task_name_changes() {
    let previous_ids = ["5", "free text", "", "42"];
    for from in TaskName::ALL {
        for to in TaskName::ALL {
            for previous in previous_ids {
                let mut form = JobForm::new();
                form.set_task_name(from.as_str());
                form.set_task_id(previous);

                form.set_task_name(to.as_str());

                if from == to {
                    assert_eq!(form.task_id(), previous);
                } else {
                    assert_eq!(form.task_id(), "");
                }
                assert_eq!(form.category(), to.category());
            }
        }
    }
}
