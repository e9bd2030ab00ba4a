use super::*;

#[tokio::test]
async fn healthz_reports_ok_with_crate_version() {
    let Json(body) = healthz().await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn healthz_serializes_as_flat_json() {
    let Json(body) = healthz().await;
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert!(value["version"].is_string());
}
