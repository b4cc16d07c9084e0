//! Mercado Pago webhook notification payloads.
//!
//! Notifications are loosely typed and untrusted. They are only used to
//! decide whether a payment lookup is warranted and which id to look up;
//! every other field is ignored.

use serde::Deserialize;

/// Incoming webhook body, `{type, action, data: {id}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookNotification {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub action: Option<String>,
    pub data: Option<NotificationData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationData {
    pub id: Option<serde_json::Value>,
}

impl WebhookNotification {
    /// Whether this notification refers to a payment.
    ///
    /// Everything else (plan updates, test pings) is acknowledged without
    /// side effects so the gateway stops retrying.
    pub fn is_payment(&self) -> bool {
        let kind_is_payment = self
            .kind
            .as_deref()
            .map(|k| k == "payment")
            .unwrap_or(false);
        let action_is_payment = self
            .action
            .as_deref()
            .map(|a| a.starts_with("payment."))
            .unwrap_or(false);
        kind_is_payment || action_is_payment
    }

    /// The payment id to look up, if present.
    ///
    /// Sent as a JSON number or a string depending on the notification
    /// channel.
    pub fn payment_id(&self) -> Option<String> {
        let id = self.data.as_ref()?.id.as_ref()?;
        match id {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> WebhookNotification {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn payment_notification_with_numeric_id() {
        let n = parse(r#"{"type":"payment","action":"payment.created","data":{"id":123456}}"#);
        assert!(n.is_payment());
        assert_eq!(n.payment_id().as_deref(), Some("123456"));
    }

    #[test]
    fn payment_notification_with_string_id() {
        let n = parse(r#"{"type":"payment","data":{"id":"123456"}}"#);
        assert!(n.is_payment());
        assert_eq!(n.payment_id().as_deref(), Some("123456"));
    }

    #[test]
    fn action_alone_classifies_as_payment() {
        let n = parse(r#"{"action":"payment.updated","data":{"id":1}}"#);
        assert!(n.is_payment());
    }

    #[test]
    fn non_payment_notification_is_ignored() {
        let n = parse(r#"{"type":"subscription_preapproval","data":{"id":"abc"}}"#);
        assert!(!n.is_payment());
    }

    #[test]
    fn payment_notification_without_id() {
        let n = parse(r#"{"type":"payment","data":{}}"#);
        assert!(n.is_payment());
        assert!(n.payment_id().is_none());

        let n = parse(r#"{"type":"payment"}"#);
        assert!(n.payment_id().is_none());
    }

    #[test]
    fn empty_body_parses_without_panicking() {
        let n = parse(r#"{}"#);
        assert!(!n.is_payment());
        assert!(n.payment_id().is_none());
    }
}
