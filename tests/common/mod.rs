//! Helpers shared by the HTTP-mocked integration tests.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

use drive_audio::models::{ServiceAccountCredentials, FOLDER_MIME_TYPE};

/// Throwaway RSA key, only ever used to sign JWTs sent to the mock server.
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_service_account_key.pem");

pub const TEST_CLIENT_EMAIL: &str = "reader@test-project.iam.gserviceaccount.com";

pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

pub fn credentials(server_url: &str) -> ServiceAccountCredentials {
    ServiceAccountCredentials {
        client_email: TEST_CLIENT_EMAIL.to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        token_uri: Some(format!("{}/token", server_url)),
    }
}

/// Secrets file contents pointing the token exchange at the mock server.
pub fn secrets_toml(server_url: &str) -> String {
    format!(
        "[gcp_service_account]\ntype = \"service_account\"\nclient_email = \"{}\"\nprivate_key = '''\n{}'''\ntoken_uri = \"{}/token\"\n",
        TEST_CLIENT_EMAIL, TEST_PRIVATE_KEY, server_url
    )
}

/// Token endpoint mock, not yet created so callers can set expectations.
pub fn token_mock(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/token")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "urn:ietf:params:oauth:grant-type:jwt-bearer".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": TEST_ACCESS_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            })
            .to_string(),
        )
}

pub fn parent_query(folder_id: &str) -> Matcher {
    Matcher::UrlEncoded(
        "q".into(),
        format!("'{}' in parents and trashed=false", folder_id),
    )
}

/// Single-page listing of `folder_id`.
pub async fn mock_listing(server: &mut ServerGuard, folder_id: &str, files: Vec<Value>) -> Mock {
    server
        .mock("GET", "/files")
        .match_query(parent_query(folder_id))
        .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "files": files }).to_string())
        .create_async()
        .await
}

pub fn folder(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "mimeType": FOLDER_MIME_TYPE,
        "createdTime": "2024-01-01T00:00:00.000Z",
        "webViewLink": format!("https://drive.google.com/drive/folders/{}", id)
    })
}

pub fn file(id: &str, name: &str, mime_type: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "mimeType": mime_type,
        "createdTime": "2024-02-03T04:05:06.000Z",
        "webViewLink": format!("https://drive.google.com/file/d/{}/view?usp=drivesdk", id)
    })
}
