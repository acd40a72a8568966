// Build-time configuration. Values can be overridden when compiling with
// e.g. `WEBHOOK_URL=... trunk build`.

pub const LEAD_SOURCE: &str = "Website Quote Request";
pub const LEAD_TYPE: &str = "Christmas Lights Installation";
pub const NO_FILES_SELECTED: &str = "No files selected";

pub const UPLOAD_FIELD: &str = "houseImages";

/// How long the thank-you notice stays on the page.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;

/// Scroll offset (px) after which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

const DEFAULT_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/17573513/uiiq9a2/";
const DEFAULT_RELAY_URL: &str = "https://cors-anywhere.herokuapp.com/";

pub fn get_webhook_url() -> &'static str {
    option_env!("WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

pub fn get_relay_url() -> &'static str {
    option_env!("CORS_RELAY_URL").unwrap_or(DEFAULT_RELAY_URL)
}

/// Full URL the form is posted to: the relay prefix wrapping the webhook.
pub fn get_submit_url() -> String {
    format!("{}{}", get_relay_url(), get_webhook_url())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SubmitPolicy {
    /// When set, submit validates every required field first and stays idle
    /// if any of them fails. Off by default: the page has always sent the
    /// form as-is.
    pub gate_on_validity: bool,
}

impl SubmitPolicy {
    pub fn from_build_env() -> Self {
        Self {
            gate_on_validity: matches!(option_env!("GATE_SUBMIT_ON_VALIDITY"), Some("1") | Some("true")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_url_wraps_webhook_in_relay() {
        let url = get_submit_url();
        assert!(url.starts_with(get_relay_url()));
        assert!(url.ends_with(get_webhook_url()));
    }

    #[test]
    fn default_policy_does_not_gate() {
        assert!(!SubmitPolicy::default().gate_on_validity);
    }
}
