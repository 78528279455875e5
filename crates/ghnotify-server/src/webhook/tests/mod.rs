//! Webhook handler tests


use actix_http::StatusCode;
use actix_web::{
    http::header,
    test::{self, TestRequest},
    web::Data,
};
use ghnotify_chat_interface::{MockMessageSender, SenderError};
use ghnotify_config::Config;
use ghnotify_crypto::Signature;
use pretty_assertions::assert_eq;

use self::fixtures::*;
use crate::{
    metrics::build_metrics_handler,
    server::{build_actix_app, AppContext},
};

const SECRET: &str = "webhook-secret";
const CHANNEL: &str = "ABCDEF";

fn test_config(secret: &str) -> Config {
    let mut config = Config::from_env_no_version();
    config.chat.access_token = "access-token".into();
    config.server.webhook_secret = secret.into();
    config
}

fn sender_expecting(expected: String) -> MockMessageSender {
    let mut sender = MockMessageSender::new();
    sender
        .expect_send()
        .once()
        .withf(move |channel, message| channel == CHANNEL && message == expected)
        .returning(|_, _| Ok(()));
    sender
}

fn silent_sender() -> MockMessageSender {
    let mut sender = MockMessageSender::new();
    sender.expect_send().never();
    sender
}

fn webhook_request(event: &str, body: &str) -> TestRequest {
    TestRequest::post()
        .uri(&format!("/webhook?channel={CHANNEL}"))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .insert_header(("X-GitHub-Event", event))
        .insert_header((
            "X-Hub-Signature",
            Signature::compute(body.as_bytes(), SECRET)
                .unwrap()
                .to_header(),
        ))
        .set_payload(body.to_string())
}

async fn call(config: Config, sender: MockMessageSender, req: TestRequest) -> (StatusCode, String) {
    let context = Data::new(AppContext::new(config, Box::new(sender)));
    let app =
        test::init_service(build_actix_app(context, build_metrics_handler().unwrap())).await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    if status.is_success() {
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn test_ping_event() {
    let expected = format!("{REPOSITORY_LINE}\n__Ping received.__\n> Responsive is better than fast.");

    let (status, body) = call(
        test_config(SECRET),
        sender_expecting(expected.clone()),
        webhook_request("ping", PING_DATA),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_issues_opened_without_secret() {
    let expected = format!(
        "{REPOSITORY_LINE}\n\
        __The issue [#1: Spelling error in the README file](https://github.com/octo-org/my_repo/issues/1) opened by [octocat](https://github.com/octocat).__\n\
        > It looks like you accidentally spelled 'commit' with two 't's.\n\
        > Please fix."
    );

    let req = TestRequest::post()
        .uri(&format!("/webhook?channel={CHANNEL}"))
        .insert_header(("X-GitHub-Event", "issues"))
        .set_payload(ISSUES_OPENED_DATA);

    let (status, body) = call(test_config(""), sender_expecting(expected.clone()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_issues_labeled_is_acknowledged() {
    let (status, body) = call(
        test_config(SECRET),
        silent_sender(),
        webhook_request("issues", ISSUES_LABELED_DATA),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn test_push_event() {
    let expected = format!(
        "{REPOSITORY_LINE}\n\
        __2 commits pushed to branch [fix\\_readme](https://github.com/octo-org/my_repo/compare/6113728f27ae...0d1a26e67d8f).__\n\
        [`a10867b`](https://github.com/octo-org/my_repo/commit/a10867b14bb761a232cd80139fbd4c0d33264240) Fix typo in README - octocat\n\
        [`0d1a26e`](https://github.com/octo-org/my_repo/commit/0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c) Update \\*all\\* the \\[links\\] - hubot"
    );

    let (status, body) = call(
        test_config(SECRET),
        sender_expecting(expected.clone()),
        webhook_request("push", PUSH_DATA),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_pull_request_review_requested() {
    let expected = format!(
        "{REPOSITORY_LINE}\n\
        __The pull request [#2: Update the README with new information](https://github.com/octo-org/my_repo/pull/2) requested review to monalisa, hubot and Justice League by [octocat](https://github.com/octocat).__"
    );

    let (status, body) = call(
        test_config(SECRET),
        sender_expecting(expected.clone()),
        webhook_request("pull_request", PULL_REQUEST_REVIEW_REQUESTED_DATA),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_watch_is_acknowledged() {
    let (status, body) = call(
        test_config(SECRET),
        silent_sender(),
        webhook_request("watch", WATCH_STARTED_DATA),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn test_unknown_event_on_root_route() {
    let expected = format!("{REPOSITORY_LINE}\n__Unsupported event: `check_run`.__");

    let req = webhook_request("check_run", WATCH_STARTED_DATA).uri(&format!("/?channel={CHANNEL}"));
    let (status, body) = call(test_config(SECRET), sender_expecting(expected.clone()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_missing_channel() {
    let req = webhook_request("ping", PING_DATA).uri("/webhook");
    let (status, body) = call(test_config(SECRET), silent_sender(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: channel");
}

#[actix_web::test]
async fn test_missing_signature() {
    let req = TestRequest::post()
        .uri("/webhook")
        .insert_header(("X-GitHub-Event", "ping"))
        .set_payload(PING_DATA);
    let (status, body) = call(test_config(SECRET), silent_sender(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing HTTP Header: X-Hub-Signature");
}

#[actix_web::test]
async fn test_invalid_signature() {
    let req = webhook_request("ping", PING_DATA).set_payload(PUSH_DATA);
    let (status, body) = call(test_config(SECRET), silent_sender(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid X-Hub-Signature");
}

#[actix_web::test]
async fn test_unsupported_hash_algorithm() {
    let req = webhook_request("ping", PING_DATA)
        .insert_header(("X-Hub-Signature", "sha256=0123456789abcdef"));
    let (status, body) = call(test_config(SECRET), silent_sender(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Unknown Hash Algorithm");
}

#[actix_web::test]
async fn test_missing_access_token() {
    let mut config = test_config(SECRET);
    config.chat.access_token = String::new();

    let (status, body) = call(config, silent_sender(), webhook_request("ping", PING_DATA)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing configuration: AccessToken");
}

#[actix_web::test]
async fn test_invalid_json() {
    let (status, body) = call(
        test_config(SECRET),
        silent_sender(),
        webhook_request("ping", "{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid JSON payload: "), "{body}");
}

#[actix_web::test]
async fn test_missing_required_field() {
    let payload = r#"{"ref": "refs/heads/main", "repository": {"full_name": "a/b", "html_url": "https://github.com/a/b"}}"#;
    let (status, body) = call(
        test_config(SECRET),
        silent_sender(),
        webhook_request("push", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Could not format event: Missing required field: commits");
}

#[actix_web::test]
async fn test_send_failure() {
    let mut sender = MockMessageSender::new();
    sender.expect_send().once().returning(|_, _| {
        Err(SenderError::UnexpectedStatus {
            status: 401,
            body: "Unauthorized".into(),
        })
    });

    let (status, body) = call(test_config(SECRET), sender, webhook_request("ping", PING_DATA)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        "Could not send message: Chat API answered with status 401: Unauthorized"
    );
}
