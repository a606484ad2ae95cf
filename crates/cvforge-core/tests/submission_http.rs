//! Submission round trips against a mock generator backend.
//!
//! These tests drive the controller exactly the way the desktop UI does:
//! `begin_submit` -> `GenerateClient::generate` -> `finish_submit`.

use std::sync::Arc;

use cvforge_core::{
    Attachment, AttachmentSlot, ClientConfig, CvError, FormController, GenerateClient,
    MemoryPreferences, Phase, View,
};
use httpmock::prelude::*;
use serde_json::json;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("info,cvforge_core=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

fn ready_form(base_url: &str) -> FormController {
    let config = ClientConfig::new(base_url).unwrap();
    let mut form = FormController::new(config, Arc::new(MemoryPreferences::new()));
    form.on_file_selected(
        AttachmentSlot::Passport,
        Some(Attachment::new("passport.jpg", b"passport-bytes".to_vec())),
    );
    form.on_file_selected(
        AttachmentSlot::Face,
        Some(Attachment::new("face.png", b"face-bytes".to_vec())),
    );
    form.on_file_selected(
        AttachmentSlot::FullBody,
        Some(Attachment::new("body.webp", b"body-bytes".to_vec())),
    );
    form
}

async fn submit(form: &mut FormController) -> bool {
    let client = GenerateClient::new(form.config().clone());
    let payload = form.begin_submit().unwrap();
    assert_eq!(form.phase(), &Phase::Submitting);
    let outcome = client.generate(payload).await;
    form.finish_submit(outcome)
}

#[tokio::test]
async fn test_successful_generation_shows_result() {
    init_tracing();
    let server = MockServer::start_async().await;
    let generate = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/generate")
                .body_contains("name=\"passport\"; filename=\"passport.jpg\"")
                .body_contains("name=\"face\"; filename=\"face.png\"")
                .body_contains("name=\"full_body\"; filename=\"body.webp\"")
                .body_contains("name=\"contactPhone\"\r\n\r\n555-0100")
                .body_contains("name=\"religion\"\r\n\r\nnone")
                .body_contains(r#"[{"country":"FR","period":"2"}]"#);
            then.status(200).json_body(json!({
                "fullName": "Jane Doe",
                "downloadUrl": "/files/jane.pdf"
            }));
        })
        .await;

    let mut form = ready_form(&server.base_url());
    form.set_contact_phone("555-0100");
    form.set_religion("none");
    let row = form.add_row().unwrap();
    form.update_country(row, "FR");
    form.update_period(row, "2");
    // Incomplete rows never reach the backend
    let partial = form.add_row().unwrap();
    form.update_country(partial, "DE");

    assert!(submit(&mut form).await);
    generate.assert_async().await;

    assert_eq!(form.view(), View::Result);
    assert_eq!(form.phase(), &Phase::Idle);
    let download = form.result().download.clone().unwrap();
    assert_eq!(download.file_name, "Jane_Doe_CV.pdf");
    assert_eq!(download.href, format!("{}/files/jane.pdf", server.base_url()));
}

#[tokio::test]
async fn test_backend_error_message_is_surfaced() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/generate");
            then.status(500).json_body(json!({ "message": "storage full" }));
        })
        .await;

    let mut form = ready_form(&server.base_url());
    assert!(!submit(&mut form).await);

    assert_eq!(form.view(), View::Form);
    assert_eq!(form.error(), Some("storage full"));
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn test_numeric_error_message_is_stringified() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/generate");
            then.status(422).json_body(json!({ "message": 42 }));
        })
        .await;

    let mut form = ready_form(&server.base_url());
    assert!(!submit(&mut form).await);
    assert_eq!(form.error(), Some("42"));
}

#[tokio::test]
async fn test_non_json_error_uses_status() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/generate");
            then.status(500)
                .body("Error: Could not extract data from passport image.");
        })
        .await;

    let mut form = ready_form(&server.base_url());
    assert!(!submit(&mut form).await);
    assert_eq!(form.error(), Some("HTTP error! Status: 500"));
}

#[tokio::test]
async fn test_success_without_name_hides_download() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/generate");
            then.status(201).json_body(json!({ "downloadUrl": "/files/x.pdf" }));
        })
        .await;

    let mut form = ready_form(&server.base_url());
    assert!(submit(&mut form).await);
    assert!(form.result().preview_src.is_some());
    assert!(form.result().download.is_none());
}

#[tokio::test]
async fn test_unreachable_backend_keeps_form() {
    init_tracing();
    // Nothing listens on port 9 locally
    let mut form = ready_form("http://127.0.0.1:9");
    assert!(!submit(&mut form).await);
    assert_eq!(form.view(), View::Form);
    assert!(form.error().is_some());
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn test_download_fetches_document() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/files/jane.pdf");
            then.status(200).body("%PDF-1.4 fake");
        })
        .await;

    let client = GenerateClient::new(ClientConfig::new(&server.base_url()).unwrap());
    let bytes = client.download("/files/jane.pdf").await.unwrap();
    assert_eq!(bytes.as_ref(), b"%PDF-1.4 fake");

    let missing = client.download("/files/missing.pdf").await;
    assert!(matches!(missing, Err(CvError::Backend { status: 404, .. })));
}
