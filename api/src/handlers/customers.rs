//! Customer handlers
//!
//! Endpoints for customer registration and lookup.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::pets::PetResponse;
use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use super::extract::{AppJson, AppPath, AppQuery};
use crate::domain::pagination::{Page, PageQuery};
use crate::error::AppError;
use crate::AppState;

/// Request body for customer registration
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
    #[serde(default, alias = "telefone")]
    pub phone: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            name: request.name,
            email: request.email,
            phone: request.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.0,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at.to_rfc3339(),
        }
    }
}

/// GET /customers
///
/// List customers, `?skip=&limit=`.
pub async fn list_customers(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customer_service.list(Page::try_from(query)?).await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// POST /customers
///
/// Register a customer. The email must be unused.
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = state.customer_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customer_service
        .get(&CustomerId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

    Ok(Json(customer.into()))
}

/// GET /customers/:id/pets
///
/// List the pets owned by a customer.
pub async fn list_customer_pets(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<Vec<PetResponse>>, AppError> {
    let pets = state
        .pet_service
        .list_for_customer(&CustomerId::from(id), Page::try_from(query)?)
        .await?;

    Ok(Json(pets.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_customer;

    #[test]
    fn parse_create_request_valid() {
        let json = r#"{"name": "Ana", "email": "ana@example.com", "phone": "555"}"#;
        let request: CreateCustomerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.phone.as_deref(), Some("555"));
    }

    #[test]
    fn parse_create_request_portuguese_fields() {
        let json = r#"{"nome": "Ana", "email": "ana@example.com", "telefone": "555"}"#;
        let request: CreateCustomerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.phone.as_deref(), Some("555"));
    }

    #[test]
    fn parse_create_request_phone_optional() {
        let json = r#"{"name": "Ana", "email": "ana@example.com"}"#;
        let request: CreateCustomerRequest = serde_json::from_str(json).unwrap();
        assert!(request.phone.is_none());
    }

    #[test]
    fn parse_create_request_missing_email() {
        let json = r#"{"name": "Ana"}"#;
        let result: Result<CreateCustomerRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_customer_response() {
        let customer = test_customer();
        let response = CustomerResponse::from(customer.clone());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], customer.id.0);
        assert_eq!(json["email"], customer.email);
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }
}
