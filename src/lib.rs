//! Chargeback accessor for the Mollie v2 REST API.
//!
//! ```ignore
//! use mollie_chargebacks::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::with_token("test_xxx"))?;
//! let page = client.chargebacks().list(None).await?;
//! ```

pub mod core;

pub use crate::core::chargebacks::ChargebacksService;
pub use crate::core::config::{ClientConfig, ConfigError};
pub use crate::core::error::{ApiError, Result, TransportError};
pub use crate::core::http::{ApiClient, ApiRequest, ApiResponse, RequestBuilder, Transport};
pub use crate::core::models::amount::Amount;
pub use crate::core::models::chargeback::{
    Chargeback, ChargebackLinks, ChargebackList, ChargebackListEmbedded,
};
pub use crate::core::models::links::{Link, PaginationLinks};
pub use crate::core::models::options::{ChargebackOptions, ListChargebackOptions, QueryOptions};
