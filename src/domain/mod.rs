// Domain layer: DTOs mirroring the remote JSON schemas, plus the ports the client is built from.

pub mod api_error;
pub mod common;
pub mod deal;
pub mod notification;
pub mod payment;
pub mod payout;
pub mod ports;
pub mod receipt;
pub mod refund;
pub mod settings;
