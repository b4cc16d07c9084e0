//! HTTP handlers for order endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;

use crate::application::handlers::orders::{
    GetOrderQuery, ListOwnedOrdersQuery, ListStalePendingQuery,
};
use crate::domain::foundation::OrderId;

use super::super::auth::{AuthenticatedAccount, MaybeAccount};
use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{OrderResponse, OwnedOrdersResponse, StaleOrdersParams, StaleOrdersResponse};

/// GET /api/orders/{id} - fetch a single order.
pub async fn get_order(
    State(state): State<AppState>,
    MaybeAccount(account): MaybeAccount,
    Path(order_id): Path<OrderId>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_order_handler();
    let order = handler
        .handle(GetOrderQuery {
            order_id,
            requester: account,
        })
        .await?;

    Ok(Json(OrderResponse::from(order)))
}

/// GET /api/orders - the authenticated account's orders, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    AuthenticatedAccount { account_id }: AuthenticatedAccount,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_owned_orders_handler();
    let orders = handler.handle(ListOwnedOrdersQuery { account_id }).await?;

    Ok(Json(OwnedOrdersResponse {
        count: orders.len(),
        orders: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

/// GET /api/orders/stale?hours=N - Pending orders with no payment outcome.
///
/// Operational view carrying guest contact details; identity required.
pub async fn list_stale_orders(
    State(state): State<AppState>,
    _account: AuthenticatedAccount,
    Query(params): Query<StaleOrdersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_stale_pending_handler();
    let orders = handler
        .handle(ListStalePendingQuery {
            older_than_hours: params.hours.unwrap_or(24),
        })
        .await?;

    Ok(Json(StaleOrdersResponse {
        count: orders.len(),
        orders: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}
