use axum::extract::{Query, State};
use food_energy_core::domain::food::{
    entities::FoodRecord, ports::FoodService, value_objects::SearchFoodsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// Case-insensitive substring of the food key; empty matches everything
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub foods: Vec<FoodRecord>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "food",
    summary = "Search foods by name",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse)
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchFoodsQuery>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state
        .service
        .search_foods(SearchFoodsInput {
            name: query.name.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse { foods }))
}
