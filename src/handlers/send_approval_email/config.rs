use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Base URL of the callback endpoint the action links point at.
    pub base_url: String,

    /// Verified address the notification is sent from.
    pub sender_address: String,

    /// Per item timeout for the email provider call, so one slow item cannot
    /// stall the whole batch.
    #[serde(default = "default_send_email_timeout_seconds")]
    pub send_email_timeout_seconds: u64,
}

fn default_send_email_timeout_seconds() -> u64 {
    10
}
