mod common;

use common::{client_for, readme_body, repo_value, user_value};
use mockito::Matcher;
use portfolio_analyzer::error::PortfolioError;
use portfolio_analyzer::{GitHubClient, GitHubClientConfig};
use serde_json::json;
use url::Url;

fn repos_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("sort".into(), "updated".into()),
        Matcher::UrlEncoded("per_page".into(), "50".into()),
    ])
}

#[tokio::test]
async fn test_github_client_creation() {
    let config = GitHubClientConfig::new(Url::parse("https://api.github.com").unwrap())
        .with_token(Some("test_token".to_string()));
    let client = GitHubClient::new(config);
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_client_rejects_non_base_url() {
    let config = GitHubClientConfig::new(Url::parse("mailto:someone@example.com").unwrap());
    match GitHubClient::new(config) {
        Err(PortfolioError::InvalidUrl(_)) => {}
        Err(other) => panic!("Expected InvalidUrl error, got: {:?}", other),
        Ok(_) => panic!("Expected InvalidUrl error"),
    }
}

#[tokio::test]
async fn test_fetch_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octo")
        .match_header("accept", "application/vnd.github.v3+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_value("octo").to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let user = client.fetch_profile("octo").await.expect("profile");

    assert_eq!(user.login, "octo");
    assert_eq!(user.name.as_deref(), Some("Sam Example"));
    assert_eq!(user.location.as_deref(), Some("Lisbon"));
    assert!(user.email.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_token_is_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octo")
        .match_header("authorization", "token secret-123")
        .with_status(200)
        .with_body(user_value("octo").to_string())
        .create_async()
        .await;

    let base_url = Url::parse(&server.url()).unwrap();
    let client =
        GitHubClient::new(GitHubClientConfig::new(base_url).with_token(Some("secret-123".into())))
            .unwrap();
    client.fetch_profile("octo").await.expect("profile");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_profile_not_found_carries_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.fetch_profile("ghost").await;

    match result.unwrap_err() {
        err @ PortfolioError::NotFound { .. } => {
            assert_eq!(err.status(), Some(404));
            if let PortfolioError::NotFound { body, .. } = err {
                assert!(body.contains("Not Found"));
            }
        }
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_profile_server_error_is_http_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/octo")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = client_for(&server);
    match client.fetch_profile("octo").await.unwrap_err() {
        PortfolioError::HttpError { status, body, .. } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("Expected HttpError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_profile_shape_mismatch_fails_fast() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/octo")
        .with_status(200)
        .with_body(json!({ "id": 1, "name": "No Login" }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.fetch_profile("octo").await;
    assert!(matches!(result, Err(PortfolioError::JsonError(_))));
}

#[tokio::test]
async fn test_fetch_repositories_applies_filters() {
    let mut archived = repo_value("archived");
    archived["archived"] = json!(true);
    let mut disabled = repo_value("disabled");
    disabled["disabled"] = json!(true);
    let mut tiny = repo_value("tiny");
    tiny["size"] = json!(10);
    let mut undescribed = repo_value("undescribed");
    undescribed["description"] = json!(null);
    let mut blank = repo_value("blank");
    blank["description"] = json!("   ");
    let mut forked = repo_value("forked");
    forked["fork"] = json!(true);
    let mut small_but_ok = repo_value("small-but-ok");
    small_but_ok["size"] = json!(11);

    let body = json!([
        repo_value("newest"),
        archived,
        disabled,
        tiny,
        undescribed,
        blank,
        forked,
        small_but_ok
    ]);

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octo/repos")
        .match_query(repos_query())
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let repos = client.fetch_repositories("octo").await.expect("repos");

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "small-but-ok"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_qualifying_repositories_is_not_an_error() {
    let mut forked = repo_value("forked");
    forked["fork"] = json!(true);

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/octo/repos")
        .match_query(repos_query())
        .with_status(200)
        .with_body(json!([forked]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let repos = client.fetch_repositories("octo").await.expect("repos");
    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_fetch_languages_keeps_api_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/tool/languages")
        .with_status(200)
        .with_body(r#"{"TypeScript": 5000, "CSS": 200, "HTML": 900}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let languages = client.fetch_languages("octo", "tool").await;

    let names: Vec<&str> = languages.names().collect();
    assert_eq!(names, vec!["TypeScript", "CSS", "HTML"]);
}

#[tokio::test]
async fn test_fetch_languages_failure_degrades_to_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/tool/languages")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server);
    let languages = client.fetch_languages("octo", "tool").await;
    assert!(languages.is_empty());
}

#[tokio::test]
async fn test_fetch_readme_decodes_base64() {
    let text = "# Tool\n\nDoes things — quickly.\n";
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/tool/readme")
        .with_status(200)
        .with_body(readme_body(text))
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch_readme("octo", "tool").await.as_deref(), Some(text));
}

#[tokio::test]
async fn test_missing_readme_is_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/tool/readme")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.fetch_readme("octo", "tool").await.is_none());
}

#[tokio::test]
async fn test_undecodable_readme_is_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/bad-base64/readme")
        .with_status(200)
        .with_body(json!({ "content": "!!not base64!!", "encoding": "base64" }).to_string())
        .create_async()
        .await;
    // 0xFF 0xFE is valid base64 but not UTF-8.
    server
        .mock("GET", "/repos/octo/bad-utf8/readme")
        .with_status(200)
        .with_body(json!({ "content": "//4=", "encoding": "base64" }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.fetch_readme("octo", "bad-base64").await.is_none());
    assert!(client.fetch_readme("octo", "bad-utf8").await.is_none());
}

#[tokio::test]
async fn test_commit_count_from_link_header() {
    let mut server = mockito::Server::new_async().await;
    let link = format!(
        "<{url}/repositories/1/commits?per_page=1&page=2>; rel=\"next\", \
         <{url}/repositories/1/commits?per_page=1&page=60>; rel=\"last\"",
        url = server.url()
    );
    server
        .mock("GET", "/repos/octo/tool/commits")
        .match_query(Matcher::UrlEncoded("per_page".into(), "1".into()))
        .with_status(200)
        .with_header("link", &link)
        .with_body(r#"[{"sha": "abc"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch_commit_count("octo", "tool").await, Some(60));
}

#[tokio::test]
async fn test_commit_count_without_pagination() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/tool/commits")
        .match_query(Matcher::UrlEncoded("per_page".into(), "1".into()))
        .with_status(200)
        .with_body(r#"[{"sha": "abc"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/empty/commits")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"message":"Git Repository is empty."}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch_commit_count("octo", "tool").await, Some(1));
    assert_eq!(client.fetch_commit_count("octo", "empty").await, None);
}
