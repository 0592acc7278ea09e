//! tempmail.plus async client implementation.

use crate::{Attachment, Error, MailDetail, MailList, Mailbox, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Async client for the tempmail.plus disposable email service.
///
/// The client holds the shared HTTP transport and no per-mailbox state, so a
/// single instance can serve any number of [`Mailbox`]es concurrently.
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like timeouts, proxies, and a custom user agent.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    proxy: Option<String>,
    user_agent: String,
    base_url: String,
    list_limit: u32,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// let client = Client::new()?;
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// API origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the most recent messages in a mailbox.
    ///
    /// # Returns
    /// One page of at most `list_limit` messages (20 by default)
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::{Client, Mailbox};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::new()?;
    /// let mailbox = Mailbox::new("myalias", "mailto.plus")?;
    /// let inbox = client.list_messages(&mailbox).await?;
    /// for msg in inbox.mail_list {
    ///     println!("{}: {}", msg.from_mail, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_messages(&self, mailbox: &Mailbox) -> Result<MailList> {
        let limit = self.list_limit.to_string();
        self.get_api("/api/mails", mailbox, &[("limit", limit.as_str())])
            .await
    }

    /// Fetch the full content of a specific message.
    ///
    /// # Arguments
    /// * `mailbox` - The mailbox the message was delivered to
    /// * `mail_id` - The message ID, as found in [`MailListItem::mail_id`](crate::MailListItem::mail_id)
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::{Client, Mailbox};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::new()?;
    /// let mailbox = Mailbox::new("myalias", "mailto.plus")?;
    /// let inbox = client.list_messages(&mailbox).await?;
    /// if let Some(msg) = inbox.mail_list.first() {
    ///     let details = client.fetch_message(&mailbox, msg.mail_id).await?;
    ///     println!("{}", details.text);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_message(&self, mailbox: &Mailbox, mail_id: u64) -> Result<MailDetail> {
        let path = format!("/api/mails/{mail_id}");
        self.get_api(&path, mailbox, &[]).await
    }

    /// Resolve the hidden forwarding address associated with a mailbox.
    ///
    /// # Errors
    /// Besides transport and decode failures, returns [`Error::MissingField`]
    /// when the response has no `email` field and [`Error::WrongType`] when it
    /// is not a string.
    pub async fn hidden_address(&self, mailbox: &Mailbox) -> Result<String> {
        let response: serde_json::Value = self.get_api("/api/box/hidden", mailbox, &[]).await?;

        match response.get("email") {
            None | Some(serde_json::Value::Null) => {
                warn!(%mailbox, "hidden address response has no email field");
                Err(Error::MissingField("email"))
            }
            Some(serde_json::Value::String(email)) => Ok(email.clone()),
            Some(other) => {
                warn!(%mailbox, value = %other, "hidden address email field is not a string");
                Err(Error::WrongType {
                    field: "email",
                    expected: "string",
                })
            }
        }
    }

    /// Build the download URL for an attachment of a fetched message.
    ///
    /// No request is made. `attachments` is usually [`MailDetail::attachments`];
    /// returns `None` when it holds no attachment with `attachment_id`.
    /// The alias and PIN are percent-encoded; the `@` stays literal.
    ///
    /// # Examples
    /// ```
    /// # use tempmail_client::{Attachment, Client, Mailbox};
    /// let client = Client::new()?;
    /// let mailbox = Mailbox::new("abc123", "mailbox.in.ua")?;
    /// let attachments = vec![Attachment { attachment_id: 5, name: "x.pdf".into(), size: 100 }];
    /// let link = client.attachment_link(&mailbox, 5, &attachments, 42);
    /// assert_eq!(
    ///     link.as_deref(),
    ///     Some("https://tempmail.plus/api/mails/42/attachments/5?email=abc123@mailbox.in.ua&epin=")
    /// );
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn attachment_link(
        &self,
        mailbox: &Mailbox,
        attachment_id: u64,
        attachments: &[Attachment],
        mail_id: u64,
    ) -> Option<String> {
        attachments
            .iter()
            .find(|a| a.attachment_id == attachment_id)
            .map(|a| {
                format!(
                    "{}/api/mails/{mail_id}/attachments/{}?email={}@{}&epin={}",
                    self.base_url,
                    a.attachment_id,
                    urlencoding::encode(mailbox.alias()),
                    mailbox.domain(),
                    urlencoding::encode(mailbox.pin())
                )
            })
    }

    /// Common GET API request pattern.
    ///
    /// The body is always read to the end before the status is checked or the
    /// JSON decoded, so the connection goes back to the pool on every path.
    async fn get_api<T: DeserializeOwned>(
        &self,
        path: &str,
        mailbox: &Mailbox,
        extra: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let email = mailbox.to_string();

        let mut params = vec![("email", email.as_str())];
        params.extend_from_slice(extra);
        params.push(("epin", mailbox.pin()));

        debug!(%url, %mailbox, "sending request");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .headers(self.headers())
            .send()
            .await
            .inspect_err(|err| warn!(%url, %err, "request failed"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .inspect_err(|err| warn!(%url, %err, "failed to read response body"))?;

        if !status.is_success() {
            warn!(%url, %status, "unexpected response status");
            return Err(Error::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(%url, %err, "failed to decode response");
            Error::Json(err)
        })
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
        );
        headers
    }
}

const BASE_URL: &str = "https://tempmail.plus";
const USER_AGENT_VALUE: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:131.0) Gecko/20100101 Firefox/131.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_LIST_LIMIT: u32 = 20;

/// Builder for configuring a tempmail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    base_url: String,
    timeout: Duration,
    list_limit: u32,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - Default user agent
    /// - `https://tempmail.plus` as the API origin
    /// - 30 second request timeout
    /// - 20 messages per listing
    pub fn new() -> Self {
        Self {
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API origin.
    ///
    /// Useful for testing against a local server. A trailing slash is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Total time allowed for each request, connect through body (default: 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of messages requested per listing (default: 20).
    pub fn list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    /// Build the client.
    ///
    /// No network request is made here.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use tempmail_client::Client;
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
            .timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            proxy: self.proxy,
            user_agent: self.user_agent,
            base_url: self.base_url,
            list_limit: self.list_limit,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
