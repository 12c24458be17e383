use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Timeout for the workflow engine callback, kept short to match
    /// interactive HTTP expectations.
    #[serde(default = "default_signal_timeout_seconds")]
    pub signal_timeout_seconds: u64,
}

fn default_signal_timeout_seconds() -> u64 {
    3
}
