//! Action watching against a local mock API

mod common;

use common::*;
use ecsapi::{ActionRef, EcsError, WatchOptions};
use std::time::Duration;

fn fast() -> WatchOptions {
    WatchOptions::new().poll_interval(Duration::from_millis(5))
}

#[tokio::test]
async fn test_watch_completed_action() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/actions/1234")
        .match_header("X-APITOKEN", TOKEN)
        .with_status(200)
        .with_body(action_response(1234, "completed"))
        .expect(1)
        .create_async()
        .await;

    let action = api_for(&server)
        .watch_action(1234u64, &fast())
        .await
        .unwrap();

    assert_eq!(action.id, 1234);
    assert_eq!(action.status, "completed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_watch_exit_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/actions/1234")
        .with_status(200)
        .with_body(action_response(1234, "completed"))
        .expect(1)
        .create_async()
        .await;

    let options = fast()
        .desired_status("not existing status")
        .exit_on_status("completed");
    let result = api_for(&server).watch_action(1234u64, &options).await;

    match result {
        Err(EcsError::ActionExitStatus {
            action_id, status, ..
        }) => {
            assert_eq!(action_id, 1234);
            assert_eq!(status, "completed");
        }
        other => panic!("Expected ActionExitStatus, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_watch_max_retries() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/actions/1234")
        .with_status(200)
        .with_body(action_response(1234, "running"))
        .expect(4)
        .create_async()
        .await;

    let mut observed = Vec::new();
    let result = api_for(&server)
        .watch_action_with(1234u64, &fast().max_retries(3), |action, retry| {
            observed.push((action.status.to_string(), retry));
        })
        .await;

    assert!(matches!(
        result,
        Err(EcsError::ActionMaxRetriesExceeded { retries: 3, .. })
    ));
    assert_eq!(
        observed.iter().map(|(_, retry)| *retry).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_watch_spawned_resource() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v2/templates")
        .with_status(200)
        .with_body(template_create_response())
        .create_async()
        .await;
    let poll = server
        .mock("GET", "/api/v2/actions/4321")
        .with_status(200)
        .with_body(action_response(4321, "completed"))
        .create_async()
        .await;

    let api = api_for(&server);
    let created = api
        .create_template(&ecsapi::TemplateCreateRequest::from_snapshot(42))
        .await
        .unwrap();

    let action = api.watch_action(created.action(), &fast()).await.unwrap();

    assert_eq!(action.id, 4321);
    poll.assert_async().await;
}

#[tokio::test]
async fn test_watch_unknown_action() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/actions/9")
        .with_status(404)
        .with_body("action not found")
        .expect(1)
        .create_async()
        .await;

    let result = api_for(&server)
        .watch_action(ActionRef::ById(9), &fast().max_retries(5))
        .await;

    assert!(matches!(result, Err(EcsError::NotFound(_))));
    mock.assert_async().await;
}
