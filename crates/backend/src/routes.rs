use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::StaticFilesConfig;
use crate::system::middleware::request_logger;

/// All routes of the site.
///
/// - `/` serves the HTML shell from the dist directory
/// - `/public/*` serves the public directory
/// - anything else is looked up in dist, then node_modules
pub fn configure_routes(dirs: &StaticFilesConfig) -> Router {
    let assets = ServeDir::new(&dirs.dist_dir).fallback(ServeDir::new(&dirs.node_modules_dir));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route_service("/", ServeFile::new(dirs.index_html()))
        .nest_service("/public", ServeDir::new(&dirs.public_dir))
        .fallback_service(assets)
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!doctype html><html><body><script src=\"/bundle.js\"></script></body></html>";

    fn site() -> (TempDir, StaticFilesConfig) {
        let root = tempfile::tempdir().unwrap();
        let dirs = StaticFilesConfig::default().rooted_at(root.path());

        write(&dirs.index_html(), INDEX_HTML);
        write(&dirs.dist_dir.join("bundle.js"), "console.log('dist');");
        write(&dirs.public_dir.join("images/portrait.png"), "PNG");
        write(&dirs.public_dir.join("style.css"), "body { margin: 0; }");
        write(
            &dirs.node_modules_dir.join("normalize.css/normalize.css"),
            "html { line-height: 1.15; }",
        );
        write(&dirs.node_modules_dir.join("bundle.js"), "console.log('node_modules');");

        (root, dirs)
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    async fn get(dirs: &StaticFilesConfig, uri: &str) -> (StatusCode, String) {
        let response = configure_routes(dirs)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let (_root, dirs) = site();

        let response = configure_routes(&dirs)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{content_type}");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, INDEX_HTML.as_bytes());
    }

    #[tokio::test]
    async fn test_public_directory_is_mounted() {
        let (_root, dirs) = site();

        assert_eq!(
            get(&dirs, "/public/style.css").await,
            (StatusCode::OK, "body { margin: 0; }".to_string())
        );
        assert_eq!(
            get(&dirs, "/public/images/portrait.png").await,
            (StatusCode::OK, "PNG".to_string())
        );
        assert_eq!(get(&dirs, "/public/missing.css").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dist_wins_over_node_modules() {
        let (_root, dirs) = site();

        assert_eq!(
            get(&dirs, "/bundle.js").await,
            (StatusCode::OK, "console.log('dist');".to_string())
        );
    }

    #[tokio::test]
    async fn test_node_modules_fallback() {
        let (_root, dirs) = site();

        assert_eq!(
            get(&dirs, "/normalize.css/normalize.css").await,
            (StatusCode::OK, "html { line-height: 1.15; }".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (_root, dirs) = site();

        assert_eq!(get(&dirs, "/settings").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get(&dirs, "/api/projects").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_public_dir_is_not_reachable_from_root() {
        let (_root, dirs) = site();

        assert_eq!(get(&dirs, "/style.css").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (_root, dirs) = site();

        assert_eq!(get(&dirs, "/health").await, (StatusCode::OK, "ok".to_string()));
    }
}
