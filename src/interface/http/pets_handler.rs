use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Local;

use crate::{
    application::dto::{
        CreatePetRequest, HealthResponse, ListPetsQuery, PetResponse, UpdatePetRequest,
    },
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "petsy",
        status: "ok",
        date: Local::now().date_naive(),
    })
}

pub async fn list_pets(
    State(state): State<AppState>,
    query: Result<Query<ListPetsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PetResponse>>> {
    let Query(query) = query.map_err(ApiProblem::from_query_rejection)?;
    let pets = state.pet_service.list_pets(query).await;
    Ok(Json(pets))
}

pub async fn create_pet(
    State(state): State<AppState>,
    request: Result<Json<CreatePetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PetResponse>)> {
    let Json(request) = request.map_err(ApiProblem::from_json_rejection)?;
    let created = state
        .pet_service
        .create_pet(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PetResponse>> {
    let pet_id = parse_pet_id(&id)?;
    let pet = state
        .pet_service
        .get_pet(pet_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(pet))
}

pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdatePetRequest>, JsonRejection>,
) -> ApiResult<Json<PetResponse>> {
    let pet_id = parse_pet_id(&id)?;
    let Json(request) = request.map_err(ApiProblem::from_json_rejection)?;
    let updated = state
        .pet_service
        .update_pet(pet_id, request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Json(updated))
}

pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let pet_id = parse_pet_id(&id)?;
    state
        .pet_service
        .delete_pet(pet_id)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(StatusCode::NO_CONTENT)
}

// Ids start at 1, so any integer that is non-positive or beyond u64 folds to 0
// and reads as missing.
fn parse_pet_id(raw: &str) -> ApiResult<u64> {
    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiProblem::from_domain(DomainError::validation(
            "pet id must be an integer",
        )));
    }

    if raw.starts_with('-') {
        return Ok(0);
    }
    Ok(digits.parse::<u64>().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pet_id_folds_unreachable_integers_to_zero() {
        assert_eq!(parse_pet_id("42").ok(), Some(42));
        assert_eq!(parse_pet_id("+7").ok(), Some(7));
        assert_eq!(parse_pet_id("-3").ok(), Some(0));
        assert_eq!(parse_pet_id("99999999999999999999").ok(), Some(0));
        assert!(parse_pet_id("abc").is_err());
        assert!(parse_pet_id("-").is_err());
        assert!(parse_pet_id("1.5").is_err());
    }
}
