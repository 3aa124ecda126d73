use reqwest::Method;
use tracing::debug;
use url::form_urlencoded;

use crate::core::error::{ApiError, Result};
use crate::core::http::{ApiResponse, RequestBuilder, Transport};
use crate::core::models::chargeback::{Chargeback, ChargebackList};
use crate::core::models::options::{with_query, ChargebackOptions, ListChargebackOptions};

/// Operates over chargeback resources.
///
/// Holds only a shared reference to the client, so one service can be used
/// from several tasks at once.
pub struct ChargebacksService<'a, C> {
    client: &'a C,
}

impl<'a, C> ChargebacksService<'a, C>
where
    C: RequestBuilder + Transport,
{
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Retrieve a single chargeback. The original payment's ID is needed as well.
    pub async fn get(
        &self,
        payment_id: &str,
        chargeback_id: &str,
        options: Option<&ChargebackOptions>,
    ) -> Result<Chargeback> {
        let payment_id = path_segment("payment", payment_id)?;
        let chargeback_id = path_segment("chargeback", chargeback_id)?;
        let uri = with_query(
            format!("payments/{}/chargebacks/{}", payment_id, chargeback_id),
            options,
        );
        let response = self.fetch(&uri).await?;
        Ok(serde_json::from_slice(&response.content)?)
    }

    /// Retrieve all chargebacks of the account/organization.
    pub async fn list(&self, options: Option<&ListChargebackOptions>) -> Result<ChargebackList> {
        let uri = with_query("chargebacks".to_string(), options);
        self.list_uri(&uri).await
    }

    /// Retrieve the chargebacks of a single payment.
    pub async fn list_for_payment(
        &self,
        payment_id: &str,
        options: Option<&ListChargebackOptions>,
    ) -> Result<ChargebackList> {
        let payment_id = path_segment("payment", payment_id)?;
        let uri = with_query(format!("payments/{}/chargebacks", payment_id), options);
        self.list_uri(&uri).await
    }

    async fn list_uri(&self, uri: &str) -> Result<ChargebackList> {
        let response = self.fetch(uri).await?;
        let list: ChargebackList = serde_json::from_slice(&response.content)?;
        debug!(uri, count = list.count, "listed chargebacks");
        Ok(list)
    }

    async fn fetch(&self, uri: &str) -> Result<ApiResponse> {
        let request = self.client.new_api_request(Method::GET, uri, None)?;
        self.client.execute(request).await
    }
}

/// Percent-encode an identifier so it stays a single path segment.
fn path_segment(kind: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(ApiError::RequestConstruction(format!(
            "{} ID must not be empty",
            kind
        )));
    }
    if id == "." || id == ".." {
        return Err(ApiError::RequestConstruction(format!(
            "{} ID must not be a dot segment, got: {}",
            kind, id
        )));
    }
    // byte_serialize writes spaces as '+' and always escapes a literal '+'
    Ok(form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}
