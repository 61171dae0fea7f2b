use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::aggregate::{AggregateService, Summary};
use crate::error::{Result, SmokestackError};
use crate::query::QueryService;
use crate::store::{Record, RecordStore, Year};

pub struct AppState {
    pub query: QueryService,
    pub aggregate: AggregateService,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            query: QueryService::new(Arc::clone(&store)),
            aggregate: AggregateService::new(store),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for SmokestackError {
    fn into_response(self) -> Response {
        let status = match &self {
            SmokestackError::NotFound(_) | SmokestackError::UnknownColumn { .. } => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let detail = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!(%detail, "request failed");
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[derive(Deserialize)]
struct YearParam {
    year: Option<Year>,
}

#[derive(Deserialize)]
struct ByYearParams {
    year: Year,
    country: Option<String>,
}

#[derive(Deserialize)]
struct CompareParams {
    /// Comma-separated country names.
    countries: String,
    year: Option<Year>,
}

#[derive(Deserialize)]
struct TrendParams {
    #[serde(alias = "startYear")]
    start_year: Option<Year>,
    #[serde(alias = "endYear")]
    end_year: Option<Year>,
}

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

async fn root() -> Json<Liveness> {
    Json(Liveness {
        status: "online",
        message: "CO2 emissions query service up and running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn countries(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.aggregate.countries())
}

async fn country(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<YearParam>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(state.query.by_country(&name, params.year)?))
}

async fn co2_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByYearParams>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(
        state.query.by_year(params.year, params.country.as_deref())?,
    ))
}

async fn column(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let (column, values) = state.aggregate.column_values(&name)?;
    let name = column.name();
    Ok(Json(serde_json::json!({ name: values })))
}

async fn commodity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<YearParam>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(state.query.by_commodity(&name, params.year)?))
}

async fn entity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<YearParam>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(state.query.by_entity(&name, params.year)?))
}

async fn entity_type(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<YearParam>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(state.query.by_entity_type(&kind, params.year)?))
}

async fn compare_countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<Vec<Record>>> {
    let names: Vec<String> = params
        .countries
        .split(',')
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect();
    Ok(Json(state.query.compare_countries(&names, params.year)?))
}

async fn trends(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<Record>>> {
    Ok(Json(
        state
            .query
            .trends(&country, params.start_year, params.end_year)?,
    ))
}

async fn statistics_summary(State(state): State<Arc<AppState>>) -> Json<Summary> {
    Json(state.aggregate.summary())
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);
    Router::new()
        .route("/", get(root))
        .route("/countries/", get(countries))
        .route("/country/:name", get(country))
        .route("/co2_data/", get(co2_data))
        .route("/column/:name", get(column))
        .route("/commodity/:name", get(commodity))
        .route("/entity/:name", get(entity))
        .route("/entity_type/:kind", get(entity_type))
        .route("/compare_countries/", get(compare_countries))
        .route("/trends/:country", get(trends))
        .route("/statistics/summary", get(statistics_summary))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, listen: &str) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| SmokestackError::Server(format!("cannot bind {listen}: {e}")))?;
    info!(%listen, "listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| SmokestackError::Server(e.to_string()))?;
    Ok(())
}
