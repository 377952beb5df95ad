use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;

/// Конфигурация всех роутов приложения
///
/// Всё, что не попало в `/api`, отдаётся из каталога собранного фронтенда;
/// неизвестные пути получают `index.html` (клиентский роутинг).
pub fn configure_routes(static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // TABLE STORE
        // ========================================
        .route(
            "/api/:table",
            get(handlers::table::select)
                .post(handlers::table::insert)
                .patch(handlers::table::update)
                .delete(handlers::table::delete),
        )
        .fallback_service(
            ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html"))),
        )
}
