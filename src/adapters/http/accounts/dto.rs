//! Request/response DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::accounts::LinkGuestOrdersResult;
use crate::domain::foundation::OrderId;

/// POST /api/accounts/sync request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncAccountRequest {
    /// Verified email of the freshly created account.
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncAccountResponse {
    pub linked_orders: Vec<OrderId>,
    pub provisioned: usize,
    pub already_provisioned: usize,
    pub flagged: usize,
}

impl From<LinkGuestOrdersResult> for SyncAccountResponse {
    fn from(result: LinkGuestOrdersResult) -> Self {
        Self {
            linked_orders: result.linked_orders,
            provisioned: result.provisioned,
            already_provisioned: result.already_provisioned,
            flagged: result.flagged,
        }
    }
}
