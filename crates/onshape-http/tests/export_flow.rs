//! End-to-end export flows over a scripted transport.

mod common;

use common::{client_with, fast_poll_config, json_response, MockNetwork};
use onshape_http::types::ApiResponse;
use onshape_http::{ClientConfig, ElementAddress, OnshapeError, WvmKind};
use serde_json::json;
use std::time::{Duration, Instant};

fn addr() -> ElementAddress {
    ElementAddress::new("D1", WvmKind::Workspace, "W1", "E1")
}

fn submit_response() -> ApiResponse {
    json_response(
        200,
        json!({
            "id": "J1",
            "requestState": "QUEUED",
            "href": "https://cad.onshape.com/api/translations/J1"
        }),
    )
}

fn poll_response(state: &str) -> ApiResponse {
    json_response(200, json!({ "requestState": state }))
}

#[tokio::test]
async fn step_export_runs_the_full_job_protocol() {
    let network = MockNetwork::new(vec![
        submit_response(),
        poll_response("ACTIVE"),
        json_response(
            200,
            json!({
                "requestState": "DONE",
                "resultExternalDataIds": ["X1"],
                "documentId": "D1"
            }),
        ),
        ApiResponse::new(200, &b"STEP-DATA"[..]),
    ]);
    let client = client_with(network.clone(), fast_poll_config());

    let bytes = client.export_step(&addr(), "bracket").await.unwrap();
    assert_eq!(&bytes[..], b"STEP-DATA");

    let requests = network.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(
        requests[0].path,
        "/api/partstudios/d/D1/w/W1/e/E1/translations"
    );
    assert_eq!(requests[1].path, "/api/v2/translations/J1");
    assert_eq!(requests[2].path, "/api/v2/translations/J1");
    assert_eq!(requests[3].path, "/api/documents/d/D1/externaldata/X1");
}

#[tokio::test]
async fn step_export_times_out_when_job_never_finishes() {
    let network = MockNetwork::looping(vec![submit_response(), poll_response("ACTIVE")]);
    let client = client_with(network, fast_poll_config());

    let started = Instant::now();
    let err = client.export_step(&addr(), "bracket").await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, OnshapeError::PollTimeout { .. }));
    // Deadline is 1s; allow one poll interval of slack either way.
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn step_export_fails_resolve_on_empty_result_list() {
    let network = MockNetwork::new(vec![
        submit_response(),
        json_response(
            200,
            json!({
                "requestState": "DONE",
                "resultExternalDataIds": [],
                "documentId": "D1"
            }),
        ),
    ]);
    let client = client_with(network, fast_poll_config());

    let err = client.export_step(&addr(), "bracket").await.unwrap_err();
    assert!(matches!(err, OnshapeError::ResolveFailed(_)));
}

#[tokio::test]
async fn step_export_fails_submit_on_error_status() {
    let network = MockNetwork::new(vec![ApiResponse::new(500, "")]);
    let client = client_with(network.clone(), fast_poll_config());

    let err = client.export_step(&addr(), "bracket").await.unwrap_err();
    assert!(matches!(err, OnshapeError::SubmitFailed(_)));
    assert_eq!(network.requests().len(), 1);
}

#[tokio::test]
async fn step_export_stops_on_server_side_failure() {
    let network = MockNetwork::new(vec![submit_response(), poll_response("FAILED")]);
    let client = client_with(network.clone(), fast_poll_config());

    let err = client.export_step(&addr(), "bracket").await.unwrap_err();
    assert!(matches!(err, OnshapeError::ResolveFailed(_)));
    // Submit plus exactly one poll; the loop does not burn the deadline.
    assert_eq!(network.requests().len(), 2);
}

#[tokio::test]
async fn stl_export_is_a_single_synchronous_call() {
    let network = MockNetwork::new(vec![ApiResponse::new(200, &b"solid part"[..])]);
    let client = client_with(network.clone(), ClientConfig::default());

    let bytes = client.export_stl(&addr()).await.unwrap();
    assert_eq!(&bytes[..], b"solid part");

    let requests = network.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/partstudios/d/D1/w/W1/e/E1/stl");
    assert!(requests[0]
        .accept
        .as_deref()
        .unwrap()
        .contains("octet-stream"));
}

#[tokio::test]
async fn stl_export_maps_transport_failure_to_fetch_failed() {
    let network = MockNetwork::new(vec![ApiResponse::new(502, "")]);
    let client = client_with(network, ClientConfig::default());

    let err = client.export_stl(&addr()).await.unwrap_err();
    assert!(matches!(err, OnshapeError::FetchFailed(_)));
}
