use domain::emails::EmailRequest;
use domain::error::Error as DomainError;
use serde::Deserialize;
use serde_json::Value;

use super::decode;

pub(crate) const FIELDS_REQUIRED: &str = "Recipients and summary are required";
pub(crate) const RECIPIENTS_NOT_A_LIST: &str = "Recipients must be a non-empty list";
pub(crate) const SUMMARY_EMPTY: &str = "Summary cannot be empty";

/// Parameters accepted by `POST /api/send-email`
///
/// # Fields
///
/// * `recipients` - Addresses to send the summary to. Kept as raw JSON so that anything
///   other than a list of strings is rejected with its own message.
/// * `summary` - The finalized summary text
#[derive(Debug, Deserialize)]
pub(crate) struct SendEmailParams {
    pub(crate) recipients: Option<Value>,
    pub(crate) summary: Option<String>,
}

impl SendEmailParams {
    /// Decode and validate a raw request body.
    pub(crate) fn validate(body: &[u8]) -> Result<EmailRequest, DomainError> {
        decode::<Self>(body)
            .ok_or_else(|| DomainError::validation(FIELDS_REQUIRED))?
            .try_into()
    }
}

/// Minimal syntactic check: an address needs an `@` and a `.` somewhere.
pub(crate) fn looks_like_email(address: &str) -> bool {
    address.contains('@') && address.contains('.')
}

impl TryFrom<SendEmailParams> for EmailRequest {
    type Error = DomainError;

    fn try_from(params: SendEmailParams) -> Result<Self, Self::Error> {
        let (Some(recipients), Some(summary)) = (params.recipients, params.summary) else {
            return Err(DomainError::validation(FIELDS_REQUIRED));
        };

        let recipients = serde_json::from_value::<Vec<String>>(recipients)
            .ok()
            .filter(|list| !list.is_empty())
            .ok_or_else(|| DomainError::validation(RECIPIENTS_NOT_A_LIST))?;

        if summary.trim().is_empty() {
            return Err(DomainError::validation(SUMMARY_EMPTY));
        }

        if let Some(invalid) = recipients.iter().find(|r| !looks_like_email(r)) {
            return Err(DomainError::validation(format!(
                "Invalid email address: {invalid}"
            )));
        }

        Ok(EmailRequest {
            recipients,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(body: &str) -> String {
        SendEmailParams::validate(body.as_bytes())
            .unwrap_err()
            .message()
            .to_string()
    }

    #[test]
    fn test_absent_body_or_missing_fields_are_required() {
        assert_eq!(message(""), FIELDS_REQUIRED);
        assert_eq!(message("{}"), FIELDS_REQUIRED);
        assert_eq!(message(r#"{"summary": "Done."}"#), FIELDS_REQUIRED);
        assert_eq!(message(r#"{"recipients": ["a@b.com"]}"#), FIELDS_REQUIRED);
        assert_eq!(
            message(r#"{"recipients": null, "summary": "Done."}"#),
            FIELDS_REQUIRED
        );
    }

    #[test]
    fn test_recipients_must_be_a_non_empty_list_of_strings() {
        assert_eq!(
            message(r#"{"recipients": [], "summary": "Done."}"#),
            RECIPIENTS_NOT_A_LIST
        );
        assert_eq!(
            message(r#"{"recipients": "a@b.com", "summary": "Done."}"#),
            RECIPIENTS_NOT_A_LIST
        );
        assert_eq!(
            message(r#"{"recipients": ["a@b.com", 7], "summary": "Done."}"#),
            RECIPIENTS_NOT_A_LIST
        );
        assert_eq!(
            message(r#"{"recipients": {"to": "a@b.com"}, "summary": "Done."}"#),
            RECIPIENTS_NOT_A_LIST
        );
    }

    #[test]
    fn test_blank_summary_is_rejected_before_addresses_are_checked() {
        assert_eq!(
            message(r#"{"recipients": ["bad-address"], "summary": "   "}"#),
            SUMMARY_EMPTY
        );
    }

    #[test]
    fn test_first_invalid_address_is_named() {
        assert_eq!(
            message(r#"{"recipients": ["a@b.com", "bad-address", "no-at.com"], "summary": "Done."}"#),
            "Invalid email address: bad-address"
        );
        assert_eq!(
            message(r#"{"recipients": ["user@localhost"], "summary": "Done."}"#),
            "Invalid email address: user@localhost"
        );
    }

    #[test]
    fn test_address_check_is_lenient() {
        assert!(looks_like_email("a@b.com"));
        assert!(looks_like_email("first.last@host"));
        assert!(looks_like_email("@."));
        assert!(!looks_like_email("bad-address"));
        assert!(!looks_like_email("a@b"));
    }

    #[test]
    fn test_valid_request_keeps_order_and_summary_verbatim() {
        let request = SendEmailParams::validate(
            br#"{"recipients": ["z@y.com", "a@b.com"], "summary": "  Done.\n"}"#,
        )
        .unwrap();

        assert_eq!(request.recipients, vec!["z@y.com", "a@b.com"]);
        assert_eq!(request.summary, "  Done.\n");
    }
}
