//! Pet handlers
//!
//! Endpoints for pet registration and lookup. Updates and deletions are not
//! supported yet and answer 501.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CustomerId, NewPet, Pet, PetId};
use super::extract::{AppJson, AppPath, AppQuery};
use crate::domain::pagination::{Page, PageQuery};
use crate::error::AppError;
use crate::AppState;

/// Request body for pet registration
#[derive(Debug, Deserialize)]
pub struct CreatePetRequest {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "especie")]
    pub species: Option<String>,
    #[serde(default, alias = "raca")]
    pub breed: Option<String>,
    #[serde(default, alias = "idade")]
    pub age: Option<i32>,
    /// Owning customer, must exist
    #[serde(alias = "cliente_id")]
    pub customer_id: i32,
}

impl From<CreatePetRequest> for NewPet {
    fn from(request: CreatePetRequest) -> Self {
        NewPet {
            name: request.name,
            species: request.species,
            breed: request.breed,
            age: request.age,
            customer_id: CustomerId::from(request.customer_id),
        }
    }
}

/// Request body for pet updates; every field is optional
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct UpdatePetRequest {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "especie")]
    pub species: Option<String>,
    #[serde(default, alias = "raca")]
    pub breed: Option<String>,
    #[serde(default, alias = "idade")]
    pub age: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PetResponse {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub customer_id: i32,
    pub created_at: String,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        PetResponse {
            id: pet.id.0,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            age: pet.age,
            customer_id: pet.customer_id.0,
            created_at: pet.created_at.to_rfc3339(),
        }
    }
}

/// GET /pets
///
/// List pets, `?skip=&limit=`.
pub async fn list_pets(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<Vec<PetResponse>>, AppError> {
    let pets = state.pet_service.list(Page::try_from(query)?).await?;

    Ok(Json(pets.into_iter().map(Into::into).collect()))
}

/// POST /pets
///
/// Register a pet for an existing customer.
pub async fn create_pet(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePetRequest>,
) -> Result<(StatusCode, Json<PetResponse>), AppError> {
    let pet = state.pet_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(pet.into())))
}

/// GET /pets/:id
pub async fn get_pet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PetResponse>, AppError> {
    let pet = state
        .pet_service
        .get(&PetId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", id)))?;

    Ok(Json(pet.into()))
}

/// PUT /pets/:id
///
/// The body is decoded so malformed payloads still fail as bad requests.
pub async fn update_pet(
    AppPath(id): AppPath<i32>,
    AppJson(_request): AppJson<UpdatePetRequest>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(pet_id = id, "Pet update requested");
    Err(AppError::NotImplemented(
        "Pet updates are not supported yet".to_string(),
    ))
}

/// DELETE /pets/:id
pub async fn delete_pet(AppPath(id): AppPath<i32>) -> Result<StatusCode, AppError> {
    tracing::debug!(pet_id = id, "Pet deletion requested");
    Err(AppError::NotImplemented(
        "Pet deletion is not supported yet".to_string(),
    ))
}
