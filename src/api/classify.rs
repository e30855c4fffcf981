//! Number classification endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::classify::{digit_sum, is_perfect, is_prime, properties};
use crate::AppState;

/// Query parameters for classification
///
/// `number` is taken as a raw string so malformed values produce the
/// structured 400 payload instead of axum's default query rejection.
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub number: String,
}

/// Classification result for a single integer
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// GET /api/classify-number?number=N
///
/// Classifies an integer and returns its arithmetic properties plus a
/// trivia string from the Numbers API. Negative numbers are accepted and
/// classified; only a value that does not parse as an integer is rejected.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, ClassifyError> {
    let number: i64 = query
        .number
        .parse()
        .map_err(|_| ClassifyError::NotANumber(query.number.clone()))?;

    let fun_fact = state.facts.fact_or_fallback(number).await;

    Ok(Json(ClassifyResponse {
        number,
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        properties: properties(number),
        digit_sum: digit_sum(number),
        fun_fact,
    }))
}

/// Classification endpoint errors
#[derive(Debug)]
pub enum ClassifyError {
    /// The supplied `number` parameter is not a well-formed integer
    NotANumber(String),
}

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        match self {
            ClassifyError::NotANumber(raw) => {
                let body = Json(json!({
                    "number": raw,
                    "error": true,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
