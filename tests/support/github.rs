//! Wiremock fixtures imitating the GitHub endpoints a collection run reads.
//!
//! Every fixture serves `acme/widgets` under the `/api/v3` prefix used by
//! GitHub Enterprise, so the gateway must honour a non-root API base.

use gleaner::{OctocrabGateway, PersonalAccessToken};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPOSITORY_PATH: &str = "/api/v3/repos/acme/widgets";

/// Path of the detail endpoint for pull request `number`.
pub fn pull_request_path(number: u64) -> String {
    format!("{REPOSITORY_PATH}/pulls/{number}")
}

/// Builds a gateway pointed at `server`.
///
/// # Panics
///
/// Panics if the mock server URL cannot be used as an API base.
pub fn gateway_for(server: &MockServer) -> OctocrabGateway {
    let token = PersonalAccessToken::new("valid-token")
        .unwrap_or_else(|error| panic!("token should be valid: {error}"));
    let api_base = Url::parse(&format!("{}/api/v3", server.uri()))
        .unwrap_or_else(|error| panic!("mock server URL should parse: {error}"));
    OctocrabGateway::for_token(&token, &api_base)
        .unwrap_or_else(|error| panic!("gateway should build: {error}"))
}

/// Close instant of pull request `number`: `number` hours into
/// 2024-01-01 UTC, which is inside 2024-01-01 in Asia/Tokyo for 1..=14.
fn closed_at(number: u64) -> String {
    format!("2024-01-01T{number:02}:00:00Z")
}

/// Serves a readable repository whose closed pull requests are `count..=1`,
/// newest first, followed by one pull request closed before the window.
pub async fn mount_repository(server: &MockServer, count: u64) {
    Mock::given(method("GET"))
        .and(path(REPOSITORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "full_name": "acme/widgets"
        })))
        .mount(server)
        .await;

    let mut listing: Vec<Value> = (1..=count)
        .rev()
        .map(|number| {
            json!({
                "number": number,
                "title": format!("Change {number}"),
                "closed_at": closed_at(number),
                "merged_at": closed_at(number)
            })
        })
        .collect();
    listing.push(json!({
        "number": 100,
        "title": "Closed last year",
        "closed_at": "2023-12-30T00:00:00Z",
        "merged_at": null
    }));

    Mock::given(method("GET"))
        .and(path(format!("{REPOSITORY_PATH}/pulls")))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(server)
        .await;

    for number in 1..=count {
        mount_pull_request(server, number).await;
    }
}

async fn mount_pull_request(server: &MockServer, number: u64) {
    Mock::given(method("GET"))
        .and(path(pull_request_path(number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": number,
            "title": format!("Change {number}"),
            "closed_at": closed_at(number),
            "merged": true,
            "merged_at": closed_at(number)
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/comments", pull_request_path(number))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": number * 10 + 1,
                "body": "Please add a test",
                "user": { "login": "alice" },
                "path": "src/widgets.rs",
                "position": 4,
                "original_position": 4,
                "commit_id": "c0ffee",
                "diff_hunk": "@@ -1,3 +1,4 @@\n+fn widget() {}",
                "created_at": "2024-01-01T00:30:00Z"
            },
            {
                "id": number * 10 + 2,
                "body": "Consider renaming",
                "user": { "login": "Copilot" },
                "path": "src/widgets.rs",
                "position": 5,
                "original_position": 5,
                "commit_id": "c0ffee",
                "diff_hunk": "@@ -1,3 +1,4 @@\n+fn widget() {}",
                "created_at": "2024-01-01T00:31:00Z"
            }
        ])))
        .mount(server)
        .await;
}

/// Makes the detail endpoint of pull request `number` answer 404.
///
/// Mounted with a higher priority than the fixtures of [`mount_repository`].
pub async fn mount_missing_pull_request(server: &MockServer, number: u64) {
    Mock::given(method("GET"))
        .and(path(pull_request_path(number)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .with_priority(1)
        .mount(server)
        .await;
}

/// Serves a repository endpoint that rejects the token.
pub async fn mount_rejected_repository(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(REPOSITORY_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(server)
        .await;
}

/// Counts requests received for the detail endpoint of pull request `number`.
pub async fn detail_requests(server: &MockServer, number: u64) -> usize {
    let expected = pull_request_path(number);
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == expected)
        .count()
}

/// Counts every request the server has received.
pub async fn total_requests(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}
