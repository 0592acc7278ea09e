//! # tempmail.plus Client
//! Asynchronous wrapper around the tempmail.plus disposable email HTTP API, providing simple methods to list, read, and resolve temporary inboxes from Rust using [`Client`] and [`Mailbox`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway addresses in integration tests, demos, or automation scripts without running mail infrastructure: pick an alias on one of the service's [`Domain`]s, poll for messages ([`MailList`]), then read them ([`MailDetail`]) and their attachments.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. A single [`Client`] holds the shared connection pool and can be used from many tasks at once; cancel a call by dropping its future.
//!
//! ## Out of scope
//! Not a general-purpose mail client, SMTP sender, or durable mailbox. It only proxies the tempmail.plus service and inherits its availability, spam filtering, and retention limits. No retries are attempted and listings are not paged automatically.
//!
//! ## Errors
//! Mailbox construction fails with [`Error::InvalidAlias`] or [`Error::InvalidDomain`]. Network calls surface transport failures as [`Error::Request`], non-2xx statuses as [`Error::Status`], and undecodable bodies as [`Error::Json`]; [`Error::MissingField`] and [`Error::WrongType`] cover unexpected response fields. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and failures are reported through [`tracing`]; install a subscriber to see them.
//!
//! ## Example
//! ```no_run
//! use tempmail_client::{Client, Mailbox};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tempmail_client::Error> {
//!     let client = Client::new()?;
//!     let mailbox = Mailbox::new("myalias", "mailto.plus")?;
//!     println!("Inbox: {}", mailbox);
//!
//!     let inbox = client.list_messages(&mailbox).await?;
//!     for msg in inbox.mail_list {
//!         println!("From: {}, Subject: {}", msg.from_mail, msg.subject);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mailbox;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use mailbox::{Domain, Mailbox};
pub use models::{Attachment, MailDetail, MailList, MailListItem};

/// Result type alias for tempmail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
