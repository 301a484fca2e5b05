//! HTTP endpoint for oracle-triggered publication
//!
//! The oracle request posts to `/upload-generated-ads`; the handler runs the
//! full pipeline and answers with both identifiers plus the fixed-width
//! scalar encoding. Failures become HTTP errors so the oracle layer sees a
//! failed request, never a silently wrong value.

use adcraft_core::time::today_utc;
use adcraft_core::AdCraftError;
use adcraft_gen::providers::create_provider;
use adcraft_gen::AdCraftConfig;
use adcraft_pipeline::{encode_scalar_hex, AdSpec, PublicationResult, Publisher};
use adcraft_store::{PinRecord, PinStore};
use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

struct AppState {
    config: AdCraftConfig,
    provider_name: String,
}

pub fn run(bind: &str, provider: Option<&str>) -> Result<()> {
    let config = AdCraftConfig::load()?;
    let provider_name = provider
        .unwrap_or_else(|| config.default_provider())
        .to_string();

    // Fail fast on missing credentials before binding the socket
    create_provider(&provider_name, &config)?;
    super::open_store(&config)?;

    let state = Arc::new(AppState {
        config,
        provider_name,
    });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(bind, state))
}

async fn serve(bind: &str, state: Arc<AppState>) -> Result<()> {
    let app = Router::new()
        .route("/upload-generated-ads", post(upload_generated_ads))
        .route("/pins", get(list_pins))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// The ad fields the oracle request supplies; anything omitted gets a default
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UploadRequest {
    name: String,
    description: String,
    unique_ad_prompt: String,
    type_of_ad: String,
    niche: String,
    tagline: String,
    promoter: String,
    creator: String,
    hash_tags: String,
    created_at: String,
}

impl Default for UploadRequest {
    fn default() -> Self {
        Self {
            name: "untitled ad".to_string(),
            description: String::new(),
            unique_ad_prompt: String::new(),
            type_of_ad: "image".to_string(),
            niche: String::new(),
            tagline: String::new(),
            promoter: String::new(),
            creator: String::new(),
            hash_tags: String::new(),
            created_at: String::new(),
        }
    }
}

impl UploadRequest {
    fn into_spec(self) -> AdSpec {
        let unique_ad_prompt = if self.unique_ad_prompt.trim().is_empty() {
            format!("{}: {}", self.name, self.description)
        } else {
            self.unique_ad_prompt
        };
        let created_at = if self.created_at.is_empty() {
            today_utc()
        } else {
            self.created_at
        };
        AdSpec {
            name: self.name,
            description: self.description,
            type_of_ad: self.type_of_ad,
            niche: self.niche,
            tagline: self.tagline,
            promoter: self.promoter,
            creator: self.creator,
            hash_tags: self.hash_tags,
            unique_ad_prompt,
            created_at,
        }
    }
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn error_response(e: &AdCraftError) -> ApiError {
    let status = match e {
        AdCraftError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": e.to_string() })))
}

fn join_error(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("pipeline task failed: {}", e) })),
    )
}

async fn upload_generated_ads(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result: PublicationResult = tokio::task::spawn_blocking(move || {
        let provider = create_provider(&state.provider_name, &state.config)?;
        let store = open_store(&state.config)?;
        let publisher = Publisher::new(&store);
        publisher.create_ad(provider.as_ref(), &request.into_spec())
    })
    .await
    .map_err(join_error)?
    .map_err(|e| error_response(&e))?;

    Ok(Json(json!({
        "image": result.image,
        "metadata": result.metadata,
        "result": encode_scalar_hex(&result.metadata),
    })))
}

#[derive(Debug, Deserialize)]
struct PinsQuery {
    hash: Option<String>,
}

async fn list_pins(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PinsQuery>,
) -> Result<Json<Vec<PinRecord>>, ApiError> {
    let records = tokio::task::spawn_blocking(move || {
        let store = open_store(&state.config)?;
        store.pin_list(query.hash.as_deref())
    })
    .await
    .map_err(join_error)?
    .map_err(|e| error_response(&e))?;

    Ok(Json(records))
}

/// Store constructor that stays inside the core error type so handler
/// failures map cleanly to HTTP statuses
fn open_store(config: &AdCraftConfig) -> adcraft_core::Result<adcraft_store::PinataStore> {
    let (api_key, secret_key) = config.require_pinata_keys()?;
    let mut store = adcraft_store::PinataStore::new(api_key, secret_key);
    if let Some(url) = config.pinata_api_url() {
        store = store.with_api_url(url);
    }
    Ok(store)
}
