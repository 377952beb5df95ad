//! Адрес бэкенда для запросов из браузера

/// Бэкенд слушает этот порт на том же хосте, откуда отдан фронтенд
pub const BACKEND_PORT: u16 = 3000;

fn backend_base(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Базовый URL API, например `http://localhost:3000`.
///
/// Пустая строка, если `window` недоступен (тесты вне браузера).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_base(&protocol, &hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_base_keeps_scheme_and_host() {
        assert_eq!(backend_base("https:", "crm.local"), "https://crm.local:3000");
    }
}
