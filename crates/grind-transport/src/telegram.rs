use crate::error::TransportError;
use crate::Result;
use serde::Deserialize;
use std::time::Duration;

const TELEGRAM_API: &str = "https://api.telegram.org";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<Update>,
    #[serde(default)]
    description: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Thin Telegram Bot API client: outbound messages plus the update poll
/// the command handlers are fed from.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(token, chat_id, TELEGRAM_API)
    }

    /// Test seam: point the client at a mock server.
    pub fn with_base_url(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// The single authorized identity: only this chat gets replies.
    pub fn is_authorized_chat(&self, chat_id: i64) -> bool {
        chat_id.to_string() == self.chat_id
    }

    /// Send to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let chat_id = self.chat_id.clone();
        self.send_message_to(&chat_id, text).await
    }

    /// Send to an explicit chat — only used to answer /start from an
    /// unknown chat with its own id.
    pub async fn send_message_to(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let resp = self.http.post(&url).json(&payload).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Api { status, body });
        }
        Ok(())
    }

    /// Fetch updates after `offset` (pass `last_update_id + 1`).
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let url = format!("{}/bot{}/getUpdates", self.base_url, self.token);
        let resp = self
            .http
            .get(&url)
            .query(&[("offset", offset.to_string()), ("timeout", "5".to_string())])
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body: UpdatesResponse = resp.json().await?;
        if !body.ok {
            return Err(TransportError::Api {
                status,
                body: body.description.unwrap_or_default(),
            });
        }
        Ok(body.result)
    }

    /// Text and chat id of an update, when it carries a text message.
    pub fn message_text(update: &Update) -> Option<(i64, &str)> {
        let msg = update.message.as_ref()?;
        Some((msg.chat.id, msg.text.as_deref()?))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_message_posts_to_bot_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "chat_id": "42",
                "text": "hello",
                "parse_mode": "Markdown",
            })))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_base_url("TOKEN", "42", server.url());
        client.send_message("hello").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_message_surfaces_api_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let client = TelegramClient::with_base_url("TOKEN", "42", server.url());
        let err = client.send_message("hello").await.unwrap_err();
        assert!(matches!(err, TransportError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn get_updates_parses_messages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/botTOKEN/getUpdates")
            .match_query(mockito::Matcher::UrlEncoded("offset".into(), "8".into()))
            .with_status(200)
            .with_body(
                r#"{"ok":true,"result":[
                    {"update_id":8,"message":{"chat":{"id":42},"text":"/done 3"}},
                    {"update_id":9,"message":{"chat":{"id":7},"text":"hi"}},
                    {"update_id":10}
                ]}"#,
            )
            .create_async()
            .await;

        let client = TelegramClient::with_base_url("TOKEN", "42", server.url());
        let updates = client.get_updates(8).await.unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(
            TelegramClient::message_text(&updates[0]),
            Some((42, "/done 3"))
        );
        assert_eq!(TelegramClient::message_text(&updates[2]), None);
    }

    #[tokio::test]
    async fn get_updates_rejects_not_ok() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/botTOKEN/getUpdates")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"ok":false,"description":"bad token"}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_base_url("TOKEN", "42", server.url());
        let err = client.get_updates(0).await.unwrap_err();
        assert!(matches!(err, TransportError::Api { .. }));
    }

    #[test]
    fn authorization_compares_the_configured_chat() {
        let client = TelegramClient::new("TOKEN", "42");
        assert!(client.is_authorized_chat(42));
        assert!(!client.is_authorized_chat(7));
    }
}
