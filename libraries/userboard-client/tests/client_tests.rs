//! Tests for the users client against a mock upstream.

use std::time::Duration;
use userboard_client::{ClientConfig, ClientError, UsersClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": { "street": "Victor Plains", "city": "Wisokyburgh" },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": { "name": "Deckow-Crist" }
        }
    ])
}

async fn client_for(server: &MockServer) -> UsersClient {
    UsersClient::new(ClientConfig::new(format!("{}/users", server.uri()))).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match UsersClient::new(ClientConfig::new("")) {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match UsersClient::new(ClientConfig::new("jsonplaceholder.typicode.com/users")) {
            Err(ClientError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_is_kept() {
        let client =
            UsersClient::new(ClientConfig::new("https://jsonplaceholder.typicode.com/users"))
                .unwrap();
        assert_eq!(client.url(), "https://jsonplaceholder.typicode.com/users");
    }
}

// =============================================================================
// Fetch Tests
// =============================================================================

mod fetch {
    use super::*;

    #[tokio::test]
    async fn test_fetch_users() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).await.fetch_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "Bret");
        assert_eq!(
            users[1].company.as_ref().and_then(|c| c.name.as_deref()),
            Some("Deckow-Crist")
        );
    }

    #[tokio::test]
    async fn test_fetch_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let users = client_for(&server).await.fetch_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_network_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_users().await.unwrap_err();
        match &err {
            ClientError::ServerError { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_not_found_is_network_failure() {
        let server = MockServer::start().await;

        let err = client_for(&server).await.fetch_users().await.unwrap_err();
        assert!(matches!(err, ClientError::ServerError { status: 404, .. }));
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let client = UsersClient::new(ClientConfig::new("http://127.0.0.1:1/users")).unwrap();

        let err = client.fetch_users().await.unwrap_err();
        match err {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            ref e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_deadline_expiry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(users_body())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::new(format!("{}/users", server.uri()))
            .with_timeout(Duration::from_millis(200));
        let err = UsersClient::new(config)
            .unwrap()
            .fetch_users()
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Timeout(_)), "got {:?}", err);
        assert_eq!(err.to_string(), "Request timed out after 200ms");
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_network_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_users().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "id": 1, "name": "No Email" }])),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_users().await.unwrap_err();
        match err {
            ClientError::ParseError(msg) => assert!(msg.contains("record 0")),
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }
}
