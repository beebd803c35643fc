use crate::error::TransportError;
use crate::Result;
use std::time::Duration;

const CALLMEBOT_API: &str = "https://api.callmebot.com";

/// WhatsApp push via the Callmebot gateway. One GET per message; the
/// gateway is slow, hence the generous timeout.
#[derive(Debug, Clone)]
pub struct CallmebotClient {
    http: reqwest::Client,
    base_url: String,
    phone: String,
    api_key: String,
}

impl CallmebotClient {
    pub fn new(phone: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(phone, api_key, CALLMEBOT_API)
    }

    pub fn with_base_url(
        phone: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            phone: phone.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/whatsapp.php", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("phone", self.phone.as_str()),
                ("text", text),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Api { status, body });
        }
        Ok(())
    }
}
