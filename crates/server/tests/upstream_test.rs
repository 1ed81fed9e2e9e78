//! Front door wired to a real JSON-RPC provider backed by a mock node.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use ethgate_chain::{ChainClient, RpcConfig, RpcProvider};
use ethgate_server::{router, AppState};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_node() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_chainId" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x1"
        })))
        .mount(&server)
        .await;
    server
}

async fn gateway(server: &MockServer) -> Router {
    let provider = RpcProvider::connect(&RpcConfig::new(server.uri()))
        .await
        .unwrap();
    router(AppState::new(ChainClient::new(provider)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_latest_block_through_rpc() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_getBlockByNumber" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": { "number": "0x3039", "hash": "0x01" }
        })))
        .mount(&server)
        .await;

    let (status, body) = get(gateway(&server).await, "/latest-block").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "latest_block": "12345" }));
}

#[tokio::test]
async fn test_balance_through_rpc_normalizes_address() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "eth_getBalance",
            "params": ["0x00000000000000000000000000000000000000ab", "latest"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": "0x3e8"
        })))
        .expect(2)
        .mount(&server)
        .await;
    let app = gateway(&server).await;

    let (status, body) = get(app.clone(), "/balance?address=0xAB").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "balance": "1000" }));

    let (status, again) = get(app, "/balance?address=ab").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_rpc_error_surfaces_as_500() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_getBlockByNumber" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": { "code": -32005, "message": "daily request count exceeded" }
        })))
        .mount(&server)
        .await;

    let (status, body) = get(gateway(&server).await, "/latest-block").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "rpc error -32005: daily request count exceeded");
}

#[tokio::test]
async fn test_http_failure_surfaces_as_500() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_getBalance" })))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (status, body) = get(gateway(&server).await, "/balance?address=0x0").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "upstream returned HTTP 502");
}

/// A node that answers the `eth_chainId` handshake once, then stops listening.
async fn node_that_goes_away() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // Read the whole request; its JSON body is the last thing sent.
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.ends_with(b"}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }

        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#;
        let response = format!(
            concat!(
                "HTTP/1.1 200 OK\r\n",
                "content-type: application/json\r\n",
                "content-length: {}\r\n",
                "connection: close\r\n",
                "\r\n",
                "{}"
            ),
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        // listener drops here, so later dials are refused
    });

    (format!("http://{}/v3/SECRETKEY", addr), handle)
}

#[tokio::test]
async fn test_unreachable_node_after_connect_surfaces_as_500() {
    let (url, node) = node_that_goes_away().await;
    let provider = RpcProvider::connect(&RpcConfig::new(url)).await.unwrap();
    node.await.unwrap();
    let app = router(AppState::new(ChainClient::new(provider)));

    let (status, body) = get(app.clone(), "/latest-block").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("request failed"), "unexpected body: {body}");
    assert!(!body.contains("SECRETKEY"));

    let (status, body) = get(app, "/balance?address=0x0").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("request failed"), "unexpected body: {body}");
    assert!(!body.contains("SECRETKEY"));
}
