use std::future::Future;

use crate::errors::CampusResult;
use crate::models::{TicketReceipt, TicketRequest};

/// External support desk that accepts escalated questions.
pub trait ITicketSink: Send + Sync {
    /// Create a ticket. Implementations need not enforce a timeout; the
    /// caller bounds the call.
    fn create_ticket(
        &self,
        request: &TicketRequest,
    ) -> impl Future<Output = CampusResult<TicketReceipt>> + Send;
}
