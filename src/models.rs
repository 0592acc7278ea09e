//! Response models mirroring the tempmail.plus JSON payloads.

use serde::{Deserialize, Serialize};

/// Metadata for a file attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Attachment identifier, unique within its message.
    pub attachment_id: u64,
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

/// Summary row of an inbox listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailListItem {
    /// Number of attachments on the message.
    pub attachment_count: u32,
    /// Name of the first attachment, if any.
    pub first_attachment_name: Option<String>,
    /// Sender address.
    pub from_mail: String,
    /// Sender display name.
    pub from_name: String,
    /// Whether the message has not been opened yet.
    pub is_new: bool,
    /// Message identifier, used with [`Client::fetch_message`](crate::Client::fetch_message).
    pub mail_id: u64,
    /// Subject line.
    pub subject: String,
    /// Receive time as reported by the service.
    pub time: String,
}

/// One page of inbox results.
///
/// `more` tells whether older messages exist past this page. The raw
/// `first_id`/`last_id` values are exposed as-is; the client does not page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailList {
    /// Number of messages in the mailbox.
    pub count: u32,
    /// `mail_id` of the first message on this page.
    pub first_id: u64,
    /// `mail_id` of the last message on this page.
    pub last_id: u64,
    /// Page size the service applied.
    pub limit: u32,
    /// Whether more messages exist past this page.
    pub more: bool,
    /// Whether the service accepted the request.
    pub result: bool,
    /// Messages on this page.
    pub mail_list: Vec<MailListItem>,
}

/// Full content of a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailDetail {
    /// Files attached to the message.
    pub attachments: Vec<Attachment>,
    /// `Date` header as sent.
    pub date: String,
    /// Raw `From` header.
    pub from: String,
    /// Whether the sender is another mailbox on the service.
    pub from_is_local: bool,
    /// Sender address.
    pub from_mail: String,
    /// Sender display name.
    pub from_name: String,
    /// HTML body, empty for plaintext-only messages.
    pub html: String,
    /// Whether the message was delivered over TLS.
    pub is_tls: bool,
    /// Message identifier on the service.
    pub mail_id: u64,
    /// `Message-ID` header.
    pub message_id: String,
    /// Whether the service accepted the request.
    pub result: bool,
    /// Subject line.
    pub subject: String,
    /// Plaintext body.
    pub text: String,
    /// Recipient address.
    pub to: String,
}

impl MailDetail {
    /// Look up an attachment on this message by id.
    pub fn attachment(&self, attachment_id: u64) -> Option<&Attachment> {
        self.attachments
            .iter()
            .find(|a| a.attachment_id == attachment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_with_missing_and_null_fields() {
        let body = r#"{
            "count": 1,
            "first_id": 7,
            "last_id": 7,
            "limit": 20,
            "more": false,
            "result": true,
            "mail_list": [{
                "attachment_count": 0,
                "first_attachment_name": null,
                "from_mail": "sender@example.org",
                "is_new": true,
                "mail_id": 7,
                "subject": "hello",
                "time": "2024-01-01 10:00:00"
            }]
        }"#;

        let list: MailList = serde_json::from_str(body).unwrap();
        assert_eq!(list.count, 1);
        assert!(list.result);
        assert_eq!(list.mail_list.len(), 1);
        let item = &list.mail_list[0];
        assert_eq!(item.mail_id, 7);
        assert_eq!(item.first_attachment_name, None);
        assert_eq!(item.from_name, "");
    }

    #[test]
    fn rejects_wrong_field_types() {
        let body = r#"{"mail_id": "not-a-number"}"#;
        assert!(serde_json::from_str::<MailDetail>(body).is_err());
    }

    #[test]
    fn finds_attachment_by_id() {
        let body = r#"{
            "mail_id": 42,
            "attachments": [
                {"attachment_id": 5, "name": "x.pdf", "size": 100},
                {"attachment_id": 6, "name": "y.png", "size": 2048}
            ]
        }"#;

        let detail: MailDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.attachment(6).map(|a| a.name.as_str()), Some("y.png"));
        assert!(detail.attachment(9).is_none());
    }
}
