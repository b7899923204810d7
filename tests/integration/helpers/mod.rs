// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use pipeline_admin::config::settings::ApiSettings;
use pipeline_admin::infrastructure::http::rest_client::RestClient;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

const COLLECTIONS: &[(&str, &str, &str)] = &[
    ("jobs", "job_id", "Job"),
    ("scrape-targets", "target_id", "Scrape target"),
    ("media-gen-options", "option_id", "Media generation option"),
    ("media-category-options", "option_id", "Media category option"),
    ("media-assets", "asset_id", "Media asset"),
];

/// 模拟后端的存储
#[derive(Default)]
pub struct Store {
    next_id: i64,
    rows: HashMap<String, BTreeMap<i64, Value>>,
}

impl Store {
    pub fn count(&self, collection: &str) -> usize {
        self.rows.get(collection).map_or(0, BTreeMap::len)
    }

    /// 直接写入一行，返回新ID
    pub fn seed(&mut self, collection: &str, mut row: Value) -> i64 {
        self.next_id += 1;
        let id = self.next_id;
        row["id"] = json!(id);
        self.rows
            .entry(collection.to_string())
            .or_default()
            .insert(id, row);
        id
    }
}

pub type SharedStore = Arc<Mutex<Store>>;

/// 进程内的模拟后端
///
/// 与真实后端一致：写操作只返回确认体，找不到实体时返回
/// `404 {"error": ...}`，作业日期按 RFC 2822 输出，删除媒体生成
/// 选项时级联删除其分类选项
pub struct FakeBackend {
    pub base_url: String,
    pub store: SharedStore,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store = SharedStore::default();
        let app = Router::new()
            .route("/{collection}", get(list).post(create))
            .route(
                "/{collection}/{id}",
                get(fetch).put(update).delete(remove),
            )
            .route(
                "/media-gen-options/{id}/category-options",
                get(category_options),
            )
            .with_state(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
        }
    }

    pub fn client(&self) -> Arc<RestClient> {
        Arc::new(RestClient::new(&ApiSettings::with_base_url(&self.base_url)).unwrap())
    }

    pub fn count(&self, collection: &str) -> usize {
        self.store.lock().unwrap().count(collection)
    }

    pub fn seed(&self, collection: &str, row: Value) -> i64 {
        self.store.lock().unwrap().seed(collection, row)
    }
}

fn describe(collection: &str) -> Option<(&'static str, &'static str)> {
    COLLECTIONS
        .iter()
        .find(|(name, _, _)| *name == collection)
        .map(|(_, ack, label)| (*ack, *label))
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// 作业的日期列按 RFC 2822 输出
fn render(collection: &str, row: &Value) -> Value {
    let mut row = row.clone();
    if collection == "jobs" {
        for key in ["scheduled_date", "created_at", "updated_at"] {
            if let Some(Value::String(raw)) = row.get(key) {
                if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
                    row[key] = json!(value.and_utc().to_rfc2822());
                }
            }
        }
    }
    row
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

async fn list(State(store): State<SharedStore>, Path(collection): Path<String>) -> Response {
    if describe(&collection).is_none() {
        return error(StatusCode::NOT_FOUND, "Not found");
    }
    let store = store.lock().unwrap();
    let rows: Vec<Value> = store
        .rows
        .get(&collection)
        .map(|rows| rows.values().map(|row| render(&collection, row)).collect())
        .unwrap_or_default();
    Json(rows).into_response()
}

async fn fetch(
    State(store): State<SharedStore>,
    Path((collection, id)): Path<(String, i64)>,
) -> Response {
    let Some((_, label)) = describe(&collection) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    let store = store.lock().unwrap();
    match store.rows.get(&collection).and_then(|rows| rows.get(&id)) {
        Some(row) => Json(render(&collection, row)).into_response(),
        None => error(StatusCode::NOT_FOUND, format!("{} not found", label)),
    }
}

async fn create(
    State(store): State<SharedStore>,
    Path(collection): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let Some((ack, label)) = describe(&collection) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    if body.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No data provided");
    }

    let mut row = Value::Object(body);
    if collection == "jobs" {
        row["created_at"] = json!(now());
        row["updated_at"] = Value::Null;
    }
    let id = store.lock().unwrap().seed(&collection, row);

    (
        StatusCode::CREATED,
        Json(json!({ "message": format!("{} created successfully", label), ack: id })),
    )
        .into_response()
}

async fn update(
    State(store): State<SharedStore>,
    Path((collection, id)): Path<(String, i64)>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let Some((_, label)) = describe(&collection) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    let mut store = store.lock().unwrap();
    let Some(row) = store
        .rows
        .get_mut(&collection)
        .and_then(|rows| rows.get_mut(&id))
    else {
        return error(StatusCode::NOT_FOUND, format!("{} not found", label));
    };

    for (key, value) in body {
        if key != "id" {
            row[key.as_str()] = value;
        }
    }
    if collection == "jobs" {
        row["updated_at"] = json!(now());
    }

    Json(json!({ "message": format!("{} updated successfully", label) })).into_response()
}

async fn remove(
    State(store): State<SharedStore>,
    Path((collection, id)): Path<(String, i64)>,
) -> Response {
    let Some((_, label)) = describe(&collection) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    let mut store = store.lock().unwrap();
    let removed = store
        .rows
        .get_mut(&collection)
        .and_then(|rows| rows.remove(&id));
    if removed.is_none() {
        return error(StatusCode::NOT_FOUND, format!("{} not found", label));
    }

    if collection == "media-gen-options" {
        if let Some(children) = store.rows.get_mut("media-category-options") {
            children.retain(|_, child| child["option_id"] != json!(id));
        }
    }

    Json(json!({ "message": format!("{} deleted successfully", label) })).into_response()
}

/// 某个媒体生成选项下的分类选项，不包含 `chroma_query`
async fn category_options(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    if !store
        .rows
        .get("media-gen-options")
        .is_some_and(|rows| rows.contains_key(&id))
    {
        return error(StatusCode::NOT_FOUND, "Media generation option not found");
    }

    let rows: Vec<Value> = store
        .rows
        .get("media-category-options")
        .map(|rows| {
            rows.values()
                .filter(|row| row["option_id"] == json!(id))
                .map(|row| {
                    let mut row = row.clone();
                    if let Some(object) = row.as_object_mut() {
                        object.remove("chroma_query");
                    }
                    row
                })
                .collect()
        })
        .unwrap_or_default();
    Json(rows).into_response()
}
