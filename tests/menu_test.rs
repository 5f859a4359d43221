//! Integration tests for the menu and landing endpoints.

mod common;

use http::StatusCode;

use common::TestApp;

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let (status, json) = app.request("GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["routes"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_menu_is_filtered_to_held_codes() {
    let app = TestApp::new();
    let token = app.token(1, &["ROLE_VIEW_MOVIE"]);

    let (status, json) = app.request("GET", "/api/menu", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let sections = json["data"].as_array().unwrap();

    // Unrestricted section headers always survive; their children are
    // pruned to what the caller holds.
    let content = sections
        .iter()
        .find(|s| s["label"] == "Content")
        .unwrap();
    let children: Vec<&str> = content["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(children, ["Movies"]);

    let admin = sections
        .iter()
        .find(|s| s["label"] == "Administration")
        .unwrap();
    assert!(admin["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_for_anonymous_prunes_every_restricted_entry() {
    let app = TestApp::new();
    let (status, json) = app.request("GET", "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);

    for section in json["data"].as_array().unwrap() {
        // Only unrestricted entries remain, so no surviving node carries
        // a permission code.
        assert!(section["permission_code"].as_array().unwrap().is_empty());
        assert!(section["children"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_landing_prefers_first_reachable_menu_route() {
    let app = TestApp::new();
    let token = app.token(1, &["ROLE_VIEW_SIDEBAR"]);

    let (status, json) = app
        .request("GET", "/api/guard/landing", None, Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["target"], "/sidebar");
}

#[tokio::test]
async fn test_landing_for_codeless_user_is_first_unrestricted_path() {
    let app = TestApp::new();
    let token = app.token(1, &[]);

    // Every restricted branch is pruned; the unrestricted Profile entry is
    // the first surviving node with a path.
    let (_, json) = app
        .request("GET", "/api/guard/landing", None, Some(&token))
        .await;
    assert_eq!(json["data"]["target"], "/profile");
}
