//! # Todo Service アプリケーション構築
//!
//! State を受け取りルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::handler::{
    ReadinessState,
    TodoState,
    create_todo,
    health_check,
    hello,
    list_todos,
    readiness_check,
    update_todo,
};

/// ルーター定義を行う
///
/// `/todos/hello` は静的セグメントのため `/todos/{id}` より優先してマッチする。
pub fn build_app(todo_state: Arc<TodoState>, readiness_state: Arc<ReadinessState>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state);

    let todo_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/hello", get(hello))
        .route("/todos/{id}", put(update_todo))
        .with_state(todo_state);

    Router::new()
        .merge(health_routes)
        .merge(todo_routes)
        .layer(TraceLayer::new_for_http())
}
