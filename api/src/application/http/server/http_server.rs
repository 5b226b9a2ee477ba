use std::sync::Arc;

use crate::application::http::{
    combination::router::combination_routes,
    food::router::food_routes,
    health::health_routes,
    identification::router::identification_routes,
    recipe::router::recipe_routes,
    season::router::season_routes,
    server::{app_state::AppState, openapi::ApiDoc},
    upload::MAX_BODY_SIZE,
};
use crate::args::Args;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use food_energy_core::{application::create_service, domain::common::FoodEnergyConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let mut args = args.as_ref().clone();
    args.server.root_path = normalize_root_path(&args.server.root_path)?;

    let food_energy_config = FoodEnergyConfig::from(args.clone());
    let service = create_service(food_energy_config)?;

    Ok(AppState::new(Arc::new(args), service))
}

/// Turns "api/", "/api" or "api" into "/api"; "" and "/" mean no prefix.
pub fn normalize_root_path(root_path: &str) -> Result<String, anyhow::Error> {
    let trimmed = root_path.trim().trim_end_matches('/');

    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c == '{' || c == '}')
    {
        return Err(anyhow::anyhow!("invalid root path '{}'", root_path));
    }

    if trimmed.is_empty() || trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{}", trimmed))
    }
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    // Browsers refuse credentials together with a wildcard origin.
    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(cors.allow_origin(allowed_origins).allow_credentials(true))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    if normalize_root_path(&state.args.server.root_path)? != state.args.server.root_path {
        return Err(anyhow::anyhow!(
            "root path '{}' is not normalized",
            state.args.server.root_path
        ));
    }

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi.clone()))
        .merge(RapiDoc::with_openapi(api_docs_url, openapi).path(format!("{}/rapidoc", root_path)))
        .merge(season_routes(state.clone()))
        .merge(identification_routes(state.clone()))
        .merge(combination_routes(state.clone()))
        .merge(food_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path));

    // The Prometheus recorder is process-global and can only be installed once.
    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
