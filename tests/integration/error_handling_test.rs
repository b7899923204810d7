// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pipeline_admin::application::dto::media_fields::MediaGenOptionFields;
use pipeline_admin::config::settings::ApiSettings;
use pipeline_admin::domain::models::job::Job;
use pipeline_admin::domain::models::media_gen_option::MediaGenOption;
use pipeline_admin::domain::models::media_type::MediaType;
use pipeline_admin::domain::repositories::entity_repository::EntityRepository;
use pipeline_admin::infrastructure::http::rest_client::RestClient;
use pipeline_admin::utils::errors::RequestError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RestClient {
    RestClient::new(&ApiSettings::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_not_found_carries_status_and_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Job not found"})))
        .mount(&server)
        .await;

    let err = EntityRepository::<Job>::get(&client(&server), 42)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Job not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_bad_request_on_create_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/media-gen-options"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Missing required fields"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fields = MediaGenOptionFields {
        category: "motivation".to_string(),
        media_type: MediaType::Image,
        description: None,
    };
    let err = EntityRepository::<MediaGenOption>::create(&client(&server), &fields)
        .await
        .unwrap_err();

    match err {
        RequestError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Missing required fields");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media-gen-options"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = EntityRepository::<MediaGenOption>::list(&client(&server))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "Internal Server Error");
}

#[tokio::test]
async fn test_create_posts_fields_and_follows_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/media-gen-options"))
        .and(body_json(json!({
            "category": "travel",
            "media_type": "video",
            "description": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Media generation option added successfully",
            "option_id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media-gen-options/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "category": "travel",
            "media_type": "video",
            "description": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fields = MediaGenOptionFields {
        category: "travel".to_string(),
        media_type: MediaType::Video,
        description: None,
    };
    let created = EntityRepository::<MediaGenOption>::create(&client(&server), &fields)
        .await
        .unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.media_type, MediaType::Video);
}

#[tokio::test]
async fn test_malformed_list_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = EntityRepository::<Job>::list(&client(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_configured_timeout_aborts_slow_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut settings = ApiSettings::with_base_url(server.uri());
    settings.timeout_secs = Some(1);
    let client = RestClient::new(&settings).unwrap();

    let err = EntityRepository::<Job>::list(&client).await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let client = RestClient::new(&ApiSettings::with_base_url("http://127.0.0.1:9")).unwrap();

    let err = EntityRepository::<Job>::list(&client).await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
}
