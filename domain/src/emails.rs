use crate::{
    error::Error,
    gateway::{MailRelay, OutgoingEmail},
};

use log::*;

pub const SUMMARY_EMAIL_SUBJECT: &str = "Meeting Summary - AI Generated";

const DISCLAIMER: &str = "This summary was generated using AI and may have been edited.";
const SIGN_OFF: &str = "Meeting Summarizer App";

/// A validated request to email a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailRequest {
    pub recipients: Vec<String>,
    pub summary: String,
}

pub fn plain_text_body(summary: &str) -> String {
    format!(
        "Hi,\n\nPlease find the meeting summary below:\n\n{summary}\n\n---\n{DISCLAIMER}\n\nBest regards,\n{SIGN_OFF}"
    )
}

/// HTML rendition of the summary. The summary is placed verbatim inside a `<pre>`
/// block so its line breaks and indentation survive.
pub fn html_body(summary: &str) -> String {
    format!(
        r#"<html>
    <body>
        <h2>Meeting Summary</h2>
        <div style="background-color: #f9f9f9; padding: 20px; border-radius: 5px; margin: 20px 0;">
            <pre style="white-space: pre-wrap; font-family: Arial, sans-serif;">{summary}</pre>
        </div>
        <hr>
        <p><small>{DISCLAIMER}</small></p>
        <p><small>Best regards,<br>{SIGN_OFF}</small></p>
    </body>
</html>"#
    )
}

pub fn compose_summary_email(request: &EmailRequest) -> OutgoingEmail {
    OutgoingEmail {
        recipients: request.recipients.clone(),
        subject: SUMMARY_EMAIL_SUBJECT.to_string(),
        text_body: plain_text_body(&request.summary),
        html_body: html_body(&request.summary),
    }
}

/// Send the summary to every recipient and return the confirmation message.
pub async fn send_summary_email(
    relay: &dyn MailRelay,
    request: &EmailRequest,
) -> Result<String, Error> {
    let recipient_count = request.recipients.len();
    info!("Initiating summary email to {recipient_count} recipient(s)");

    let email = compose_summary_email(request);

    match relay.send(&email).await {
        Ok(()) => {
            info!("Email sent successfully to {recipient_count} recipients");
            Ok(format!(
                "Email sent successfully to {recipient_count} recipient(s)"
            ))
        }
        Err(err) => {
            error!("Error sending email: {err}");
            Err(err.in_context("Failed to send email"))
        }
    }
}
