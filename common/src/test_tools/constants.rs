pub const TASK_TOKEN_FOR_MOCK_REQUESTS: &str = "AAAAKgAAAAIAAAAAAAAAAWJjMTJkNmI2";
pub const REQUEST_ID_FOR_MOCK_REQUESTS: &str = "6e5f2c60-1d2e-47f8-a7b8-c14e4e2c1d10";
pub const RECIPIENT_FOR_MOCK_REQUESTS: &str = "approver@example.com";
pub const SENDER_FOR_MOCK_REQUESTS: &str = "no-reply@example.com";
pub const BASE_URL_FOR_MOCK_REQUESTS: &str = "https://callbacks.example.com";
