use axum::{Json, extract::Query, response::IntoResponse};
use serde::Serialize;
use tracing::debug;

use crate::{error::AppError, query::parse_query, window::max_window_sum};

#[derive(Serialize)]
pub struct MaxSumResponse {
    #[serde(rename = "maxSum")]
    pub max_sum: i64,
}

pub async fn sliding_window_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let query = parse_query(&pairs)?;

    debug!(
        "Computing max sum over {} numbers, window size {}",
        query.numbers.len(),
        query.window_size
    );

    let max_sum = max_window_sum(&query.numbers, query.window_size)?;

    Ok(Json(MaxSumResponse { max_sum }))
}
