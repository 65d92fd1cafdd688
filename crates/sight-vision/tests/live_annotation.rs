//! Live Vision API tests.

use sight_models::{DetectionFeature, LanguageHints};
use sight_vision::{resolve_credentials, VisionClient, VisionConfig};

/// 1x1 transparent PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn live_client() -> VisionClient {
    let credentials =
        resolve_credentials(None).expect("GOOGLE_APPLICATION_CREDENTIALS must be set");
    let config = VisionConfig::from_env().expect("Invalid Vision configuration");
    VisionClient::from_credentials(config, credentials)
}

/// One image, one response.
#[tokio::test]
#[ignore = "requires Vision credentials"]
async fn test_label_detection_live() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.png");
    std::fs::write(&path, TINY_PNG).unwrap();

    let mut client = live_client();
    let response = client
        .request_image_annotation(&[&path], DetectionFeature::Label)
        .await
        .expect("Annotation request failed");

    assert_eq!(response.responses.len(), 1);
}

/// Hints are accepted by the service for OCR features.
#[tokio::test]
#[ignore = "requires Vision credentials"]
async fn test_text_detection_with_hints_live() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");
    std::fs::write(&first, TINY_PNG).unwrap();
    std::fs::write(&second, TINY_PNG).unwrap();

    let mut client = live_client();
    client.set_language_hints(LanguageHints::parse_list("en,it"), false);
    let response = client
        .request_image_annotation(&[&first, &second], DetectionFeature::Text)
        .await
        .expect("Annotation request failed");

    assert_eq!(response.responses.len(), 2);
    assert!(client.language_hints().is_empty());
}
