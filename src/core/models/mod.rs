pub mod amount;
pub mod chargeback;
pub mod links;
pub mod options;
