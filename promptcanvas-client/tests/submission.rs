//! End-to-end submission tests against a stubbed agent over real HTTP.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use promptcanvas_client::{HttpTransport, Session, Submission};
use promptcanvas_core::document::DEFAULT_PLACEHOLDER;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("promptcanvas_client=debug,promptcanvas_core=debug")
        .with_test_writer()
        .try_init();
}

fn session_for(server: &MockServer) -> Session<HttpTransport> {
    let transport =
        HttpTransport::new(&format!("{}/prompt", server.uri())).expect("valid endpoint");
    Session::new(transport)
}

#[tokio::test]
async fn make_background_red_end_to_end() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prompt"))
        // The request carries the prompt text and the full state snapshot.
        .and(body_partial_json(json!({
            "text": "make background red",
            "state": {"prompt": "make background red", "elements": []}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "actions": [
                {"action": "change_background", "payload": {"r": 255, "g": 0, "b": 0}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.set_prompt("make background red");

    let submission = session.submit().await;
    assert!(matches!(submission, Submission::Applied { .. }));
    assert_eq!(session.document().background.to_string(), "rgb(255, 0, 0)");
    assert_eq!(session.document().prompt, "");
    assert_eq!(session.document().placeholder, DEFAULT_PLACEHOLDER);
}

#[tokio::test]
async fn rate_limit_error_surfaces_and_shake_resets() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "error": "RATE_LIMIT"
        })))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.set_prompt("draw me a unicorn");
    let mut shake = session.error_signal();

    let submission = session.submit().await;
    assert!(matches!(submission, Submission::Rejected { .. }));
    assert!(session.document().placeholder.contains("RATE_LIMIT"));
    assert_eq!(session.document().prompt, "");

    // The shake flag is up now and drops on its own within the reset window.
    assert!(*shake.borrow());
    tokio::time::timeout(Duration::from_millis(600), shake.wait_for(|up| !*up))
        .await
        .expect("flag resets within 500ms")
        .expect("signal alive");
}

#[tokio::test]
async fn unreachable_backend_is_generic_failure() {
    init_logging();
    // Nothing is listening here.
    let transport = HttpTransport::new("http://127.0.0.1:9/prompt").expect("valid endpoint");
    let mut session = Session::new(transport);
    session.set_prompt("hello?");

    let submission = session.submit().await;
    assert!(matches!(submission, Submission::Rejected { .. }));
    assert_eq!(session.document().placeholder, "Something went wrong...");
    assert_eq!(session.document().prompt, "");
}

#[tokio::test]
async fn malformed_response_body_is_generic_failure() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let submission = session.submit().await;
    assert!(matches!(submission, Submission::Rejected { .. }));
    assert_eq!(session.document().placeholder, "Something went wrong...");
}

#[tokio::test]
async fn multi_action_batch_spawns_and_edits_in_order() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "actions": [
                {"action": "spawn_text", "payload": {
                    "id": "title", "content": "Hello", "color": "white",
                    "font_size": "40px", "x": "50%", "y": "30%", "z_index": 2
                }},
                {"action": "spawn_image", "payload": {
                    "id": "pic", "url": "https://example.com/cat.jpg",
                    "width": "300px", "x": "50%", "y": "60%", "z_index": 1
                }},
                {"action": "edit_text", "payload": {"id": "title", "content": "Hello, canvas"}}
            ]
        })))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.set_prompt("say hello with a cat picture");

    match session.submit().await {
        Submission::Applied { outcomes } => assert_eq!(outcomes.len(), 3),
        other => panic!("expected Applied, got {other:?}"),
    }

    let doc = session.document();
    assert_eq!(doc.element_count(), 2);
    assert_eq!(doc.element("pic").expect("image spawned").kind.tag(), "image");
    match &doc.element("title").expect("text spawned").kind {
        promptcanvas_core::ElementKind::Text { content, .. } => {
            assert_eq!(content, "Hello, canvas");
        }
        promptcanvas_core::ElementKind::Image { .. } => panic!("expected text"),
    }
}
