// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::FakeBackend;
use pipeline_admin::application::dto::scrape_target_fields::ScrapeTargetFields;
use pipeline_admin::application::use_cases::category_option_screen::CategoryOptionScreen;
use pipeline_admin::application::use_cases::dashboard::{load_dashboard, JobStats};
use pipeline_admin::application::use_cases::job_form::{JobForm, PickerLists};
use pipeline_admin::application::use_cases::list_screen::{ListScreen, ScreenError};
use pipeline_admin::config::settings::ApiSettings;
use pipeline_admin::domain::models::job::Job;
use pipeline_admin::domain::models::scrape_target::{ScrapeTarget, ScrapeTargetType};
use pipeline_admin::domain::services::task_type_resolver::TaskCategory;
use pipeline_admin::infrastructure::http::rest_client::RestClient;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn seed_picker_rows(backend: &FakeBackend) -> (i64, i64, i64) {
    let option = backend.seed(
        "media-gen-options",
        json!({"category": "motivation", "media_type": "image", "description": null}),
    );
    let target = backend.seed(
        "scrape-targets",
        json!({"name": "Tech news", "url": "tech.example.com", "type": "news", "frequency": 1.0}),
    );
    let asset = backend.seed(
        "media-assets",
        json!({"media_blob_url": "https://store.example.com/a.png", "media_type": "image", "caption": "Dunes"}),
    );
    (option, target, asset)
}

#[tokio::test]
async fn test_job_form_schedules_job_against_picker_lists() {
    let backend = FakeBackend::start().await;
    let client = backend.client();
    let (_, target, _) = seed_picker_rows(&backend);

    let lists = PickerLists::load(client.as_ref()).await;
    let mut form = JobForm::new();
    form.set_task_name("web scrape");

    let choices = form.picker_choices(&lists);
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].label, "Tech news (tech.example.com)");

    form.set_task_id(choices[0].value.clone());
    let fields = form.submit(Some(&lists)).unwrap();
    assert_eq!(fields.task_id, target.to_string());

    let mut screen: ListScreen<Job, RestClient> = ListScreen::new(client);
    let job = screen.save(None, &fields).await.unwrap();

    assert_eq!(job.task_category(), TaskCategory::ScrapeTarget);
    assert_eq!(screen.items(), &[job]);
}

#[tokio::test]
async fn test_job_form_rejects_task_id_from_wrong_list() {
    let backend = FakeBackend::start().await;
    let (option, _, asset) = seed_picker_rows(&backend);
    let lists = PickerLists::load(backend.client().as_ref()).await;

    let mut form = JobForm::new();
    form.set_task_name("post video instagram");
    form.set_task_id(option.to_string());
    assert!(matches!(
        form.submit(Some(&lists)),
        Err(ScreenError::InvalidReference(_))
    ));

    form.set_task_id(asset.to_string());
    assert!(form.submit(Some(&lists)).is_ok());
}

#[tokio::test]
async fn test_scoped_category_screen_shows_parent_and_children() {
    let backend = FakeBackend::start().await;
    let (option, _, _) = seed_picker_rows(&backend);
    for title in ["Sunrise", "Mountains"] {
        backend.seed(
            "media-category-options",
            json!({"title": title, "prompt_text": "calm", "chroma_query": "calm", "option_id": option}),
        );
    }
    backend.seed(
        "media-category-options",
        json!({"title": "Other", "prompt_text": "p", "chroma_query": "q", "option_id": 999}),
    );

    let mut screen = CategoryOptionScreen::new(backend.client(), Some(option));
    screen.refresh().await.unwrap();

    assert_eq!(screen.parent().map(|p| p.category.as_str()), Some("motivation"));
    let titles: Vec<&str> = screen.items().iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Sunrise", "Mountains"]);
}

#[tokio::test]
async fn test_dashboard_totals() {
    let backend = FakeBackend::start().await;
    seed_picker_rows(&backend);
    for status in [0, 0, 1, 2, -1, 2] {
        backend.seed(
            "jobs",
            json!({
                "task_name": "web scrape",
                "task_id": "1",
                "scheduled_date": "2025-06-01 09:30:00",
                "status": status,
                "created_at": "2025-05-31 12:00:00",
                "updated_at": null
            }),
        );
    }

    let stats = load_dashboard(backend.client().as_ref()).await.unwrap();

    assert_eq!(
        stats.jobs,
        JobStats {
            total: 6,
            pending: 2,
            processing: 1,
            completed: 2,
            failed: 1,
        }
    );
    assert_eq!(stats.scrape_targets, 1);
    assert_eq!(stats.media_gen_options, 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_targets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape-targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Blog", "url": "blog.example.com", "type": "blog", "frequency": 2.0}
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scrape-targets"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "Maintenance"})))
        .mount(&server)
        .await;

    let client = Arc::new(RestClient::new(&ApiSettings::with_base_url(server.uri())).unwrap());
    let mut screen: ListScreen<ScrapeTarget, RestClient> = ListScreen::new(client);

    screen.refresh().await.unwrap();
    let err = screen.refresh().await.unwrap_err();

    assert_eq!(err.banner(), "Failed to load scrape targets. Please try again.");
    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.items()[0].target_type, ScrapeTargetType::Blog);
}

#[tokio::test]
async fn test_invalid_target_is_rejected_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape-targets"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = Arc::new(RestClient::new(&ApiSettings::with_base_url(server.uri())).unwrap());
    let mut screen: ListScreen<ScrapeTarget, RestClient> = ListScreen::new(client);

    let err = screen
        .save(
            None,
            &ScrapeTargetFields {
                name: "Broken".to_string(),
                url: "not a url".to_string(),
                target_type: ScrapeTargetType::Social,
                frequency: 1.0,
            },
        )
        .await
        .unwrap_err();

    assert!(err.banner().contains("url: Please enter a valid URL"));
}
