//! End-to-end navigation tests against a running front server.

use std::time::Duration;

use olympiad_front::config::FrontConfig;
use olympiad_front::routing::{HistoryMode, STANDARD_ROUTES};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_every_route_renders_its_page_once() {
    let front = common::start_front(FrontConfig::default()).await;
    let client = common::client();

    for route in STANDARD_ROUTES {
        let res = client.get(front.url(route.path)).send().await.expect("front unreachable");
        assert_eq!(res.status(), StatusCode::OK, "{}", route.path);
        assert_eq!(res.headers()["content-type"], "text/html; charset=utf-8");

        let body = res.text().await.unwrap();
        assert_eq!(body.matches("data-page=").count(), 1, "{}", route.path);
        assert!(body.contains(&format!("data-page=\"{}\"", route.name)));
        assert_eq!(body.matches("<div id=\"app\">").count(), 1);
    }

    front.shutdown.trigger();
}

#[tokio::test]
async fn test_undeclared_paths_are_not_found() {
    let front = common::start_front(FrontConfig::default()).await;
    let client = common::client();

    for path in ["/settings", "/favorites/1", "/olympiad/42", "/users"] {
        let res = client.get(front.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", path);
        assert!(!res.text().await.unwrap().contains("data-page="));
    }

    front.shutdown.trigger();
}

#[tokio::test]
async fn test_lenient_matching_by_default() {
    let front = common::start_front(FrontConfig::default()).await;
    let client = common::client();

    let res = client.get(front.url("/Favorites/?tab=all")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("data-page=\"Favorites\""));

    front.shutdown.trigger();
}

#[tokio::test]
async fn test_strict_sensitive_matching() {
    let mut config = FrontConfig::default();
    config.router.strict = true;
    config.router.sensitive = true;
    let front = common::start_front(config).await;
    let client = common::client();

    let res = client.get(front.url("/Favorites")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = client.get(front.url("/favorites/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    front.shutdown.trigger();
}

#[tokio::test]
async fn test_hash_history_serves_base_only() {
    let mut config = FrontConfig::default();
    config.router.history = HistoryMode::Hash;
    let front = common::start_front(config).await;
    let client = common::client();

    let res = client.get(front.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("href=\"/#/participants\""));

    let res = client.get(front.url("/participants")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    front.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let front = common::start_front(FrontConfig::default()).await;
    let client = common::client();

    let res = client.get(front.url("/healthz")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "ok");

    front.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), front.handle)
        .await
        .expect("server should stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_concurrent_navigation() {
    let front = common::start_front(FrontConfig::default()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let route = STANDARD_ROUTES[i % STANDARD_ROUTES.len()];
        let url = front.url(route.path);
        tasks.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (route.name, res.status(), res.text().await.unwrap())
        }));
    }

    for task in tasks {
        let (name, status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(&format!("data-page=\"{}\"", name)));
    }

    front.shutdown.trigger();
}
