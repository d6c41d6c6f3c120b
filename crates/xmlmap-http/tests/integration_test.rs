//! HTTP integration tests using mock Axum server

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use xmlmap_core::{SerializeError, XmlResponseSerializer};
use xmlmap_http::{XmlClient, XmlHttpError};

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
}

async fn user_handler() -> (StatusCode, String) {
    (
        StatusCode::OK,
        "<user><id>7</id><name>Ferris</name></user>".to_string(),
    )
}

async fn wrapped_handler() -> (StatusCode, String) {
    (
        StatusCode::OK,
        "<response>\
            <meta><count>1</count></meta>\
            <data><user><id>7</id><name>Ferris</name></user></data>\
        </response>"
            .to_string(),
    )
}

async fn deleted_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn empty_handler() -> (StatusCode, String) {
    (StatusCode::OK, String::new())
}

/// Start a test server and return its address
async fn start_test_server() -> SocketAddr {
    let app = Router::new()
        .route("/users/7", get(user_handler))
        .route("/wrapped", get(wrapped_handler))
        .route("/deleted", get(deleted_handler))
        .route("/empty", get(empty_handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    addr
}

#[tokio::test]
async fn test_xml_body_maps_to_struct() {
    let addr = start_test_server().await;
    let client = XmlClient::new(format!("http://{}", addr));

    let serializer: XmlResponseSerializer<User> = XmlResponseSerializer::mappable(None);
    let user = client.get("/users/7", &serializer).await.unwrap();

    assert_eq!(
        user,
        User {
            id: 7,
            name: "Ferris".to_string()
        }
    );
}

#[tokio::test]
async fn test_key_path_maps_nested_element() {
    let addr = start_test_server().await;
    let client = XmlClient::new(format!("http://{}", addr));

    let serializer: XmlResponseSerializer<User> =
        XmlResponseSerializer::mappable(Some("data.user"));
    let user = client.get("/wrapped", &serializer).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ferris");
}

#[tokio::test]
async fn test_no_content_yields_empty_value() {
    let addr = start_test_server().await;
    let client = XmlClient::new(format!("http://{}", addr));

    let serializer: XmlResponseSerializer<Option<User>> =
        XmlResponseSerializer::mappable(None).allow_empty();
    let user = client.get("/deleted", &serializer).await.unwrap();

    assert_eq!(user, None);
}

#[tokio::test]
async fn test_empty_ok_body_is_rejected() {
    let addr = start_test_server().await;
    let client = XmlClient::new(format!("http://{}", addr));

    let serializer: XmlResponseSerializer<User> = XmlResponseSerializer::mappable(None);
    let error = client.get("/empty", &serializer).await.unwrap_err();

    assert!(matches!(
        error,
        XmlHttpError::Serialize(SerializeError::EmptyBodyNotAllowed)
    ));
}

#[tokio::test]
async fn test_head_request_admits_empty_body() {
    let addr = start_test_server().await;
    let client = XmlClient::new(format!("http://{}", addr));

    // axum serves HEAD on GET routes with the body stripped; status stays 200
    let serializer: XmlResponseSerializer<Option<User>> =
        XmlResponseSerializer::mappable(None).allow_empty();
    let user = client.head("/users/7", &serializer).await.unwrap();

    assert_eq!(user, None);
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    // Reserve a port, then close it so the connection is refused
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = XmlClient::new(format!("http://{}", addr));
    let serializer: XmlResponseSerializer<User> = XmlResponseSerializer::mappable(None);
    let error = client.get("/users/7", &serializer).await.unwrap_err();

    match error {
        XmlHttpError::Serialize(SerializeError::Transport(source)) => {
            assert!(source.downcast_ref::<reqwest::Error>().is_some());
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
