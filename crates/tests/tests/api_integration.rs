use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use wanderpeak_api::build_app;
use wanderpeak_core::responder;

async fn post_chat(body: Value) -> (StatusCode, Value) {
    let app = build_app();
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = build_app();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_service_and_timestamp() {
    let (status, body) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "WanderPeak Chatbot API");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_without_message_is_a_client_error() {
    let (status, body) = post_chat(json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn chat_hello_returns_greeting_with_timestamp() {
    let (status, body) = post_chat(json!({ "message": "hello" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], responder::greeting());
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn greeting_takes_priority_over_destination() {
    let (status, body) = post_chat(json!({ "message": "hi, what about japan?" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], responder::greeting());
}

#[tokio::test]
async fn destination_places_query_lists_attractions() {
    let (status, body) =
        post_chat(json!({ "message": "what places should I visit in japan?" })).await;

    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().unwrap();
    for name in [
        "Mount Fuji",
        "Tokyo Tower",
        "Senso-ji Temple",
        "Shirakawa-go Village",
        "Hakone Museum",
        "Nara Deer Park",
    ] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("(Free)"));
    assert!(text.contains("(₹8,500)"));
}

#[tokio::test]
async fn unknown_message_returns_default_menu_verbatim() {
    let (status, body) = post_chat(json!({ "message": "zzz qqq" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], responder::default_menu());
}

#[tokio::test]
async fn history_is_accepted_and_ignored() {
    let with_history = post_chat(json!({
        "message": "budget tips please",
        "history": [{ "role": "user", "content": "hello" }, 42, "free text"]
    }))
    .await;
    let without_history = post_chat(json!({ "message": "budget tips please" })).await;

    assert_eq!(with_history.0, StatusCode::OK);
    assert_eq!(with_history.1["response"], without_history.1["response"]);
}

#[tokio::test]
async fn destinations_dump_matches_table_sizes() {
    let (status, body) = get_json("/destinations").await;

    assert_eq!(status, StatusCode::OK);
    let destinations = body["destinations"].as_array().unwrap();
    assert_eq!(destinations.len(), 5);
    assert_eq!(destinations[0]["id"], "japan");
    assert_eq!(destinations[0]["name"], "Japan");
    for dest in destinations {
        assert_eq!(dest["famous_count"], 3);
        assert_eq!(dest["hidden_count"], 3);
        assert_eq!(dest["restaurant_count"], 3);
    }
}

#[tokio::test]
async fn packages_dump_is_verbatim() {
    let (status, body) = get_json("/packages").await;

    assert_eq!(status, StatusCode::OK);
    let packages = body["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 5);
    assert_eq!(packages[0]["name"], "Tokyo Complete Tour");
    assert_eq!(packages[0]["destination"], "Japan");
    assert_eq!(packages[0]["price"], 95000);
    assert_eq!(
        packages[0]["includes"],
        json!(["Flights", "Hotels", "Meals", "Guided Tours", "Local Transport"])
    );
}

#[tokio::test]
async fn destination_package_query_is_filtered() {
    let (status, body) = post_chat(json!({ "message": "any tour deals for the maldives?" })).await;

    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().unwrap();
    assert!(text.contains("Maldives Paradise"));
    assert!(text.contains("Price: ₹180,000 per person"));
    assert!(!text.contains("Tokyo Complete Tour"));
}

#[tokio::test]
async fn destination_restaurant_query_lists_all_three() {
    let (status, body) = post_chat(json!({ "message": "restaurants in japan" })).await;

    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().unwrap();
    assert!(text.contains("Ichiran Ramen"));
    assert!(text.contains("Sushi Dai"));
    assert!(text.contains("Dotonbori Street Food"));
    assert!(text.contains("Price Range: ₹800-₹1,500"));
}
