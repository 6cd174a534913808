mod common;

use actix_web::test;
use serde_json::{json, Value};
use std::sync::Arc;

use common::{MockGenerator, TestApp, UppercaseTranslator};

#[actix_rt::test]
async fn test_translate_with_working_service() {
    let test_app = TestApp::new(MockGenerator::returning("{}"))
        .with_translator(Arc::new(UppercaseTranslator));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/translate")
        .set_json(&json!({ "text": "good morning", "targetLanguage": "es" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["translatedText"], "GOOD MORNING");
    assert_eq!(body["detectedSourceLanguage"], "en");
    assert!(body.get("error").is_none());
}

#[actix_rt::test]
async fn test_translate_falls_back_to_phrasebook() {
    let test_app = TestApp::new(MockGenerator::returning("{}"));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/translate")
        .set_json(&json!({ "text": "Thank you very much.", "targetLanguage": "ja" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["translatedText"], "どうもありがとうございます。");
    assert_eq!(body["detectedSourceLanguage"], "en");
    assert_eq!(body["note"], "Using fallback translation");
}

#[actix_rt::test]
async fn test_translate_without_any_translation() {
    let test_app = TestApp::new(MockGenerator::returning("{}"));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/translate")
        .set_json(&json!({ "text": "Where is the ferry?", "targetLanguage": "fr" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Translation failed");
    assert_eq!(
        body["translatedText"],
        "[Translation unavailable for \"Where is the ferry?\"]"
    );
}

#[actix_rt::test]
async fn test_translate_missing_parameters() {
    let test_app = TestApp::new(MockGenerator::returning("{}"));
    let app = test::init_service(test_app.create_app()).await;

    for body in [json!({ "text": "Hello" }), json!({ "targetLanguage": "es" })] {
        let req = test::TestRequest::post()
            .uri("/api/translate")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing required parameters");
    }
}
