use contracts::shared::ApiError;
use std::fmt;

/// Ошибка обращения к бэкенду.
///
/// `status == 0` означает, что ответа не было (сеть, CORS, сервер не запущен).
/// Статус для ошибок, возникших до отправки запроса
pub const ENCODE_STATUS: u16 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl ClientError {
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn network(message: impl fmt::Display) -> Self {
        Self::new(0, "network", message.to_string())
    }

    /// Ответ пришёл, но тело не разобралось
    pub fn decode(status: u16, message: impl fmt::Display) -> Self {
        Self::new(status, "decode", message.to_string())
    }

    /// Тело запроса не сериализовалось, запрос не отправлялся
    pub fn encode(message: impl fmt::Display) -> Self {
        Self::new(ENCODE_STATUS, "encode", message.to_string())
    }

    pub fn from_api(status: u16, body: ApiError) -> Self {
        Self::new(status, body.code, body.message)
    }

    pub fn is_network(&self) -> bool {
        self.status == 0
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_network() {
            write!(f, "Network error: {}", self.message)
        } else if self.code == "encode" {
            write!(f, "Could not encode request: {}", self.message)
        } else {
            write!(f, "{} (HTTP {})", self.message, self.status)
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_distinguishes_network_failures() {
        assert_eq!(
            ClientError::network("Failed to fetch").to_string(),
            "Network error: Failed to fetch"
        );
        let api = ApiError::new("foreign_key_violation", "category 3 does not exist");
        let err = ClientError::from_api(409, api);
        assert_eq!(err.code, "foreign_key_violation");
        assert_eq!(err.to_string(), "category 3 does not exist (HTTP 409)");
    }

    #[test]
    fn test_encode_failure_is_not_a_network_error() {
        let err = ClientError::encode("key must be a string");
        assert!(!err.is_network());
        assert_eq!(err.status, ENCODE_STATUS);
        assert_eq!(err.code, "encode");
        assert_eq!(
            err.to_string(),
            "Could not encode request: key must be a string"
        );
    }
}
