//! Client tests against a local stub of the Maps web services.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use google_maps_client::{GoogleMapsClient, MapsError};
use serde_json::json;

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Spawn a stub server and return its base URL plus the recorded query strings.
async fn spawn_stub() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let geocode_seen = seen.clone();
    let details_seen = seen.clone();

    let app = Router::new()
        .route(
            "/geocode/json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let seen = geocode_seen.clone();
                async move {
                    seen.lock().unwrap().push(params.clone());
                    if params.get("key").map(String::as_str) != Some("test-key") {
                        return Json(json!({"status": "REQUEST_DENIED", "error_message": "bad key"}));
                    }
                    if params.contains_key("latlng") {
                        Json(json!({
                            "status": "OK",
                            "results": [{"formatted_address": "Patong, Phuket, Thailand"}]
                        }))
                    } else if params.get("address").map(String::as_str) == Some("nowhere") {
                        Json(json!({"status": "ZERO_RESULTS", "results": []}))
                    } else {
                        Json(json!({
                            "status": "OK",
                            "results": [{"geometry": {"location": {"lat": 7.8961, "lng": 98.2964}}}]
                        }))
                    }
                }
            }),
        )
        .route(
            "/place/details/json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let seen = details_seen.clone();
                async move {
                    seen.lock().unwrap().push(params.clone());
                    match params.get("place_id").map(String::as_str) {
                        Some("missing") => Json(json!({"status": "NOT_FOUND"})),
                        _ => Json(json!({
                            "status": "OK",
                            "result": {"geometry": {"location": {"lat": 13.75, "lng": 100.5}}}
                        })),
                    }
                }
            }),
        )
        .route(
            "/broken/geocode/json",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        )
        .route(
            "/slow/geocode/json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"status": "ZERO_RESULTS", "results": []}))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

#[tokio::test]
async fn geocode_returns_location_and_sends_key() {
    let (base, seen) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(base);

    let results = client.geocode("Patong Beach, Phuket").await.unwrap();
    let location = results[0].geometry.as_ref().unwrap().location;
    assert_eq!(location.lat, 7.8961);
    assert_eq!(location.lng, 98.2964);

    let calls = seen.lock().unwrap();
    assert_eq!(calls[0].get("address").unwrap(), "Patong Beach, Phuket");
    assert_eq!(calls[0].get("key").unwrap(), "test-key");
}

#[tokio::test]
async fn geocode_zero_results_is_empty() {
    let (base, _) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(base);

    assert!(client.geocode("nowhere").await.unwrap().is_empty());
}

#[tokio::test]
async fn reverse_geocode_sends_latlng_and_language() {
    let (base, seen) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(base);

    let results = client.reverse_geocode(7.5, 98.25, "en").await.unwrap();
    assert_eq!(
        results[0].formatted_address.as_deref(),
        Some("Patong, Phuket, Thailand")
    );

    let calls = seen.lock().unwrap();
    assert_eq!(calls[0].get("latlng").unwrap(), "7.5,98.25");
    assert_eq!(calls[0].get("language").unwrap(), "en");
}

#[tokio::test]
async fn request_denied_surfaces_status() {
    let (base, _) = spawn_stub().await;
    let client = GoogleMapsClient::new("wrong-key").with_base_url(base);

    let err = client.geocode("Phuket").await.unwrap_err();
    assert_eq!(err.api_status(), Some("REQUEST_DENIED"));
}

#[tokio::test]
async fn place_details_requests_only_given_fields() {
    let (base, seen) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(base);

    let place = client
        .place_details("ChIJ123", &["geometry"])
        .await
        .unwrap();
    assert_eq!(place.geometry.unwrap().location.lng, 100.5);

    let calls = seen.lock().unwrap();
    assert_eq!(calls[0].get("fields").unwrap(), "geometry");
    assert_eq!(calls[0].get("place_id").unwrap(), "ChIJ123");
}

#[tokio::test]
async fn place_details_not_found_is_error() {
    let (base, _) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(base);

    let err = client.place_details("missing", &["geometry"]).await.unwrap_err();
    assert_eq!(err.api_status(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn http_error_maps_to_api_error() {
    let (base, _) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key").with_base_url(format!("{}/broken", base));

    match client.geocode("Phuket").await {
        Err(MapsError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = GoogleMapsClient::new("test-key").with_base_url("http://127.0.0.1:1");

    let err = client.geocode("Phuket").await.unwrap_err();
    assert!(matches!(err, MapsError::Network(_)));
}

#[tokio::test]
async fn slow_response_hits_configured_timeout() {
    let (base, _) = spawn_stub().await;
    let client = GoogleMapsClient::new("test-key")
        .with_base_url(format!("{}/slow", base))
        .with_timeout(Duration::from_millis(200));

    match client.geocode("Phuket").await {
        Err(MapsError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
