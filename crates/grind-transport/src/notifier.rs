use crate::telegram::TelegramClient;
use crate::whatsapp::CallmebotClient;

/// Fan-out over the configured delivery channels.
///
/// Delivery is fire-and-forget: by the time a notification is sent, the
/// state mutation behind it is already committed, so failures are logged
/// and never propagated. An unconfigured channel is skipped with a warning.
pub struct Notifier {
    telegram: Option<TelegramClient>,
    whatsapp: Option<CallmebotClient>,
}

impl Notifier {
    pub fn new(telegram: Option<TelegramClient>, whatsapp: Option<CallmebotClient>) -> Self {
        Self { telegram, whatsapp }
    }

    pub async fn notify(&self, text: &str) {
        match &self.telegram {
            Some(client) => {
                if let Err(e) = client.send_message(text).await {
                    tracing::error!("Telegram send failed: {e}");
                }
            }
            None => tracing::warn!("Telegram not configured — skipping"),
        }

        match &self.whatsapp {
            Some(client) => {
                if let Err(e) = client.send(text).await {
                    tracing::error!("WhatsApp send failed: {e}");
                }
            }
            None => tracing::warn!("WhatsApp (Callmebot) not configured — skipping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sends_to_both_channels() {
        let mut tg = mockito::Server::new_async().await;
        let tg_mock = tg
            .mock("POST", "/botT/sendMessage")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let mut wa = mockito::Server::new_async().await;
        let wa_mock = wa
            .mock("GET", "/whatsapp.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .create_async()
            .await;

        let notifier = Notifier::new(
            Some(TelegramClient::with_base_url("T", "42", tg.url())),
            Some(CallmebotClient::with_base_url("234", "K", wa.url())),
        );
        notifier.notify("ping").await;

        tg_mock.assert_async().await;
        wa_mock.assert_async().await;
    }

    #[tokio::test]
    async fn one_failing_channel_does_not_stop_the_other() {
        let mut tg = mockito::Server::new_async().await;
        tg.mock("POST", "/botT/sendMessage")
            .with_status(500)
            .create_async()
            .await;

        let mut wa = mockito::Server::new_async().await;
        let wa_mock = wa
            .mock("GET", "/whatsapp.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .create_async()
            .await;

        let notifier = Notifier::new(
            Some(TelegramClient::with_base_url("T", "42", tg.url())),
            Some(CallmebotClient::with_base_url("234", "K", wa.url())),
        );
        notifier.notify("ping").await;

        wa_mock.assert_async().await;
    }

    #[tokio::test]
    async fn unconfigured_channels_are_skipped() {
        let notifier = Notifier::new(None, None);
        // Must complete without touching the network.
        notifier.notify("ping").await;
    }
}
