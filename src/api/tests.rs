use std::sync::{Arc, Mutex};

use axum::{extract::RawQuery, http::StatusCode, routing::get, Json, Router};
use reqwest::StatusCode as HttpStatus;
use serde_json::json;

use super::*;
use crate::mapper::GeoPosition;
use crate::runner::{fetch_pass, fetch_position};

/// Serves `router` on an ephemeral local port from its own thread and
/// returns the base URL.
fn spawn_server(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    url
}

#[test]
fn non_success_status_is_an_http_error() {
    let app = Router::new().route(
        ASTROS_PATH,
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = ApiClient::new(&spawn_server(app)).unwrap();

    match client.fetch_json(ASTROS_PATH, &[]).unwrap_err() {
        ApiError::Http { status, url } => {
            assert_eq!(status, HttpStatus::SERVICE_UNAVAILABLE);
            assert!(url.ends_with("/astros.json"), "{url}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_route_is_an_http_error() {
    let client = ApiClient::new(&spawn_server(Router::new())).unwrap();
    assert!(matches!(
        client.fetch_json(ISS_NOW_PATH, &[]),
        Err(ApiError::Http { status, .. }) if status == HttpStatus::NOT_FOUND
    ));
}

#[test]
fn success_body_is_decoded() {
    let app = Router::new().route(
        ISS_NOW_PATH,
        get(|| async {
            Json(json!({
                "message": "success",
                "timestamp": 1_700_000_000,
                "iss_position": {"latitude": "-12.5000", "longitude": "100.2500"}
            }))
        }),
    );
    // trailing slash on the base must not double up
    let client = ApiClient::new(&format!("{}/", spawn_server(app))).unwrap();
    assert!(!client.url().ends_with('/'));

    let raw = client.fetch_json(ISS_NOW_PATH, &[]).unwrap();
    assert_eq!(raw["message"], "success");
    assert_eq!(
        fetch_position(&client).unwrap(),
        GeoPosition::new(-12.5, 100.25)
    );
}

#[test]
fn pass_request_carries_observer_coordinates() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let app = Router::new().route(
        ISS_PASS_PATH,
        get(move |RawQuery(query): RawQuery| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(query.unwrap_or_default());
                Json(json!({
                    "message": "success",
                    "response": [
                        {"risetime": 1_700_000_000, "duration": 600},
                        {"risetime": 1_700_005_000, "duration": 420}
                    ]
                }))
            }
        }),
    );
    let client = ApiClient::new(&spawn_server(app)).unwrap();

    let pass = fetch_pass(&client, GeoPosition::new(39.768403, -86.158068)).unwrap();
    assert_eq!(pass.rise_time_epoch, 1_700_005_000);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["lat=39.768403&lon=-86.158068".to_string()]
    );
}
