mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_answer() {
    let (server, pool) = common::create_test_server().await;
    let question_id = common::create_test_question(&pool, "First pet?", true).await;

    let response = server
        .post("/api/v1/answers")
        .add_header("Authorization", common::bearer(&common::user_token("jdoe")))
        .json(&json!({ "question_id": question_id, "answer": "Rex" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["username"], "jdoe");
    assert_eq!(json["question_id"], question_id);
    assert!(json.get("answer_hash").is_none());

    let stored: String =
        sqlx::query_scalar("SELECT answer_hash FROM answers WHERE username = 'jdoe'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored.len(), 64);
    assert_ne!(stored, "Rex");
}

#[tokio::test]
async fn test_create_answer_twice() {
    let (server, pool) = common::create_test_server().await;
    let question_id = common::create_test_question(&pool, "First pet?", true).await;
    common::create_test_answer(&pool, "jdoe", question_id).await;

    let response = server
        .post("/api/v1/answers")
        .add_header("Authorization", common::bearer(&common::user_token("jdoe")))
        .json(&json!({ "question_id": question_id, "answer": "Rex" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_answer_disabled_question() {
    let (server, pool) = common::create_test_server().await;
    let question_id = common::create_test_question(&pool, "Retired?", false).await;

    server
        .post("/api/v1/answers")
        .add_header("Authorization", common::bearer(&common::user_token("jdoe")))
        .json(&json!({ "question_id": question_id, "answer": "Yes" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_answer_unknown_question() {
    let (server, _pool) = common::create_test_server().await;

    server
        .post("/api/v1/answers")
        .add_header("Authorization", common::bearer(&common::user_token("jdoe")))
        .json(&json!({ "question_id": 404, "answer": "Yes" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_answers_only_own() {
    let (server, pool) = common::create_test_server().await;
    for i in 1..=3 {
        let id = common::create_test_question(&pool, &format!("Q{}?", i), true).await;
        common::create_test_answer(&pool, "jdoe", id).await;
        common::create_test_answer(&pool, "asmith", id).await;
    }

    let response = server
        .get("/api/v1/answers")
        .add_query_param("per_page", "2")
        .add_header("Authorization", common::bearer(&common::user_token("jdoe")))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a["username"] == "jdoe"));
    assert_eq!(json["meta"]["total"], 3);
    assert_eq!(json["meta"]["pages"], 2);
    assert_eq!(
        json["meta"]["next"],
        "http://adreset.test/api/v1/answers?page=2&per_page=2"
    );
}
