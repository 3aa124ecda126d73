pub mod chargebacks;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
