mod common;

use reqwest::StatusCode;
use serde_json::json;
use shortlink_edge::config::Config;
use shortlink_edge::server::build_state;

async fn spawn(redirect_api: &str, public_origin: Option<&str>) -> String {
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        redirect_api_url: redirect_api.parse().unwrap(),
        shorten_api_url: format!("{}/shorten", redirect_api).parse().unwrap(),
        public_origin: public_origin.map(str::to_string),
        reserved_prefixes: vec!["/blog".to_string()],
    };

    common::spawn_app(build_state(&config).unwrap(), config.behind_proxy).await
}

#[tokio::test]
async fn test_short_code_redirects_end_to_end() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, None).await;
    let client = common::no_redirect_client();

    let response = client.get(format!("{}/perm01", app)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/permanent"
    );

    let response = client.get(format!("{}/temp01", app)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/temporary"
    );
}

#[tokio::test]
async fn test_unknown_and_failing_codes_fall_through() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, None).await;
    let client = common::no_redirect_client();

    for code in ["zzz999", "boom01", "reloc1", "noloc1"] {
        let response = client
            .get(format!("{}/{}", app, code))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", code);
    }
}

#[tokio::test]
async fn test_unreachable_redirect_api_falls_through() {
    let upstream = common::unreachable_url().await;
    let app = spawn(&upstream, None).await;
    let client = common::no_redirect_client();

    let response = client.get(format!("{}/abc123", app)).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_site_routes_are_not_intercepted() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, None).await;
    let client = common::no_redirect_client();

    let response = client.get(format!("{}/", app)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/url-shortner");

    let response = client
        .get(format!("{}/url-shortner/", app))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/api/health", app))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/blog12", app))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shorten_proxy_end_to_end() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, None).await;
    let client = common::no_redirect_client();

    let response = client
        .post(format!("{}/api/shorten", app))
        .json(&json!({ "url": "https://example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        json!({ "shortCode": "abc123", "longUrl": "https://example.com" })
    );

    let response = client
        .post(format!("{}/api/shorten", app))
        .json(&json!({ "url": "https://fail.example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        json!({ "error": "Failed to shorten URL" })
    );
}

#[tokio::test]
async fn test_form_end_to_end() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, Some("https://me.dev")).await;
    let client = common::no_redirect_client();

    let html = client
        .post(format!("{}/url-shortner", app))
        .form(&[("url", "https://example.com")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("https://me.dev/abc123"));
}

#[tokio::test]
async fn test_form_submissions_are_rate_limited() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, Some("https://me.dev")).await;
    let client = common::no_redirect_client();

    let mut limited = 0;
    for _ in 0..15 {
        let response = client
            .post(format!("{}/url-shortner", app))
            .form(&[("url", "https://example.com")])
            .send()
            .await
            .unwrap();
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited += 1;
        }
    }

    assert!(limited > 0);

    // The page itself stays reachable.
    let response = client
        .get(format!("{}/url-shortner", app))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_form_and_proxy_share_one_budget() {
    let upstream = common::spawn_upstream().await;
    let app = spawn(&upstream, Some("https://me.dev")).await;
    let client = common::no_redirect_client();

    for _ in 0..10 {
        client
            .post(format!("{}/api/shorten", app))
            .json(&json!({ "url": "https://example.com" }))
            .send()
            .await
            .unwrap();
    }

    let mut limited = 0;
    for _ in 0..5 {
        let response = client
            .post(format!("{}/url-shortner", app))
            .form(&[("url", "https://example.com")])
            .send()
            .await
            .unwrap();
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited += 1;
        }
    }

    assert!(limited > 0);
}
