//! HTTP-level tests for `/lines`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, ids};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_get_line_with_context(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/lines/0").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["line_id"], 0);
    assert_eq!(json["title"], "10 things i hate about you");
    assert_eq!(json["said_by"], "CAMERON");
    assert_eq!(json["text"], "Can we make this quick?");

    let context = json["in_context"].as_array().unwrap();
    let speakers: Vec<&str> = context
        .iter()
        .map(|e| e["speaker_name"].as_str().unwrap())
        .collect();
    assert_eq!(speakers, vec!["BIANCA", "CAMERON", "CAMERON", "BIANCA"]);

    let highlighted: Vec<usize> = context
        .iter()
        .enumerate()
        .filter(|(_, e)| e["is_highlighted"] == true)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(highlighted, vec![1]);
    assert_eq!(context[1]["text"], json["text"]);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_unknown_line_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/lines/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Line with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_list_lines_filtered_by_text(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/lines/?text=father").await).await;

    assert_eq!(ids(&json, "line_id"), vec![4, 5, 8]);
    assert_eq!(json[0]["movie_title"], "10 things i hate about you");
    assert_eq!(json[0]["text"], "My father says I can't date.");
    assert_eq!(json[0]["conversation_id"], 1);
    assert_eq!(json[0]["characters_involved"], serde_json::json!([2, 3]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_list_lines_pages_are_contiguous(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let all = ids(&body_json(get(app, "/lines?limit=250").await).await, "line_id");

    let app = common::build_test_app(pool);
    let page = ids(
        &body_json(get(app, "/lines?limit=4&offset=6").await).await,
        "line_id",
    );
    assert_eq!(page, all[6..10].to_vec());
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_lines_by_character_pages(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/lines/bycharacter/0?limit=2&offset=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "line_id"), vec![3, 7]);
    assert_eq!(ids(&json, "character_id"), vec![0, 0]);
    assert_eq!(json[1]["conversation_id"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/lines/bycharacter/0?limit=5&offset=5").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("corpus"))]
async fn test_lines_by_character_edge_cases(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let silent = get(app, "/lines/bycharacter/4").await;
    assert_eq!(silent.status(), StatusCode::OK);
    assert_eq!(body_json(silent).await, serde_json::json!([]));

    let app = common::build_test_app(pool.clone());
    let unknown = get(app, "/lines/bycharacter/999").await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let bad_limit = get(app, "/lines/bycharacter/0?limit=0").await;
    assert_eq!(bad_limit.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
