//! `grind-transport` — the bot's network-facing collaborators.
//!
//! The core never blocks on I/O; everything that talks to the outside world
//! lives here and is invoked after the core has committed its state change.
//! Delivery is fire-and-forget: a failed send is logged and never rolls back
//! a mutation.
//!
//! Collaborators:
//! - [`TelegramClient`] — sendMessage / getUpdates against the Bot API
//! - [`CallmebotClient`] — WhatsApp push via the Callmebot gateway
//! - [`GithubClient`] — recent labeled issues across watched repos
//! - [`Notifier`] — fan-out over the configured delivery channels

pub mod error;
pub mod github;
pub mod notifier;
pub mod telegram;
pub mod whatsapp;

pub use error::TransportError;
pub use github::{GithubClient, IssueCandidate};
pub use notifier::Notifier;
pub use telegram::{TelegramClient, Update};
pub use whatsapp::CallmebotClient;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, TransportError>;
