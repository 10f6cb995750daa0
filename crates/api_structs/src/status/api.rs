use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    /// Returned by the status endpoint while the server is able to handle requests
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn healthy() -> Self {
            Self {
                message: "Companies service is up and running".into(),
            }
        }
    }
}
