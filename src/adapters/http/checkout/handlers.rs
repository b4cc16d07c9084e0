//! HTTP handlers for checkout endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::checkout::{CreateOrderCommand, SimulatePaymentCommand};
use crate::domain::catalog::BillingPeriod;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::order::{Buyer, GuestContact};

use super::super::auth::MaybeAccount;
use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::reconcile_status_label;
use super::dto::{
    CreateOrderRequest, CreateOrderResponse, GuestContactRequest, SimulatePaymentRequest,
    SimulatePaymentResponse,
};

/// POST /api/checkout/orders - create a Pending order and a checkout URL.
pub async fn create_order(
    State(state): State<AppState>,
    MaybeAccount(account): MaybeAccount,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let period: BillingPeriod = request.period.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::UnknownPeriod,
            format!("Unknown billing period '{}'", request.period),
        )
    })?;

    let buyer = match account {
        Some(account_id) => Buyer::account(account_id),
        None => {
            let guest = request.guest.ok_or_else(|| {
                DomainError::validation("guest", "Guest contact is required without an account")
            })?;
            Buyer::guest(guest_contact(guest)?)
        }
    };

    let handler = state.create_order_handler();
    let result = handler
        .handle(CreateOrderCommand {
            domain: request.domain,
            period,
            buyer,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateOrderResponse::from(result))))
}

/// POST /api/checkout/simulate-payment - development-only payment path.
pub async fn simulate_payment(
    State(state): State<AppState>,
    Json(request): Json<SimulatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.simulate_payment_handler();
    let result = handler
        .handle(SimulatePaymentCommand {
            order_id: request.order_id,
        })
        .await?;

    Ok(Json(SimulatePaymentResponse {
        payment_id: result.payment_id,
        result: reconcile_status_label(&result.outcome).to_string(),
    }))
}

fn guest_contact(request: GuestContactRequest) -> Result<GuestContact, DomainError> {
    let mut contact = GuestContact::new(request.name, request.email, request.phone)?;
    if let Some(company) = request.company {
        contact = contact.with_company(company);
    }
    if let Some(tax_id) = request.tax_id {
        contact = contact.with_tax_id(tax_id);
    }
    Ok(contact)
}
