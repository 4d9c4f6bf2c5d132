//! Common test utilities and fixtures
#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use userboard::DashboardConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock upstream plus a scratch directory holding the database and output.
pub struct TestEnv {
    pub upstream: MockServer,
    pub config: DashboardConfig,
    _temp_dir: TempDir,
}

impl TestEnv {
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = DashboardConfig::default();
        config.source.url = format!("{}/users", upstream.uri());
        config.source.timeout_secs = 2;
        config.storage.database_url = format!("sqlite://{}", temp_dir.path().join("users.db").display());
        config.output.dir = temp_dir.path().join("out");

        Self {
            upstream,
            config,
            _temp_dir: temp_dir,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config.output.dir.clone()
    }

    /// Serve `body` for every GET /users until reset.
    pub async fn respond_with_users(&self, body: Value) {
        self.upstream.reset().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    pub async fn respond_with_status(&self, status: u16) {
        self.upstream.reset().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream down"))
            .mount(&self.upstream)
            .await;
    }
}

/// Test fixtures shaped like the public users endpoint
pub mod fixtures {
    use super::*;

    pub fn user(id: i64, name: &str, username: &str, email: &str, city: &str, company: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "username": username,
            "email": email,
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": city,
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": company,
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })
    }

    /// Five users over four domains; april.biz appears twice.
    pub fn five_users() -> Value {
        json!([
            user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
            user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
            user(4, "Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "South Elvis", "Robel-Corkery"),
            user(5, "Chelsey Dietrich", "Kamren", "Lucio_Hettinger@april.biz", "Roscoeview", "Keebler LLC"),
        ])
    }

    pub fn two_users() -> Value {
        json!([
            user(9, "Glenna Reichert", "Delphine", "Chaim_McDermott@dana.io", "Bartholomebury", "Yost and Sons"),
            user(10, "Clementina DuBuque", "Moriah.Stanton", "Rey.Padberg@karina.biz", "Lebsackbury", "Hoeger LLC"),
        ])
    }
}
