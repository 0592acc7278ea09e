use std::time::Duration;

use tempmail_client::{Client, Mailbox};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), tempmail_client::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mailbox = match std::env::args().nth(1) {
        Some(address) => address.parse::<Mailbox>()?,
        None => Mailbox::random(),
    };
    println!("Mailbox: {mailbox}");

    let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

    let hidden = client.hidden_address(&mailbox).await?;
    println!("Hidden address: {hidden}");

    let inbox = client.list_messages(&mailbox).await?;
    println!("{} message(s), more: {}", inbox.count, inbox.more);

    for item in &inbox.mail_list {
        println!(
            "- [{}] {} <{}>: {}",
            item.mail_id, item.from_name, item.from_mail, item.subject
        );

        let detail = client.fetch_message(&mailbox, item.mail_id).await?;
        println!("{}", detail.text);

        for attachment in &detail.attachments {
            if let Some(link) = client.attachment_link(
                &mailbox,
                attachment.attachment_id,
                &detail.attachments,
                detail.mail_id,
            ) {
                println!("  {} ({} bytes): {link}", attachment.name, attachment.size);
            }
        }
    }

    Ok(())
}
