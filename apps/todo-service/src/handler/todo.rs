//! # Todo ハンドラ
//!
//! Todo 管理 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todos` - Todo 一覧
//! - `GET /todos/hello` - 疎通確認用の固定文字列
//! - `POST /todos` - Todo 作成
//! - `PUT /todos/{id}` - Todo 更新

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use todo_domain::todo::{NewTodo, Todo, TodoId, TodoPatch};

use crate::{error::CoreError, usecase::TodoUseCaseImpl};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub done: Option<bool>,
}

/// Todo 更新リクエスト
///
/// `id` はパスパラメータが正であり、ボディの値は無視する。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id:   Option<i32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub done: Option<bool>,
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    pub id:   TodoId,
    pub text: String,
    pub done: bool,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:   todo.id(),
            text: todo.text().to_string(),
            done: todo.done(),
        }
    }
}

/// 真偽値として JSON の bool と文字列 `"true"` / `"false"` の両方を受け付ける
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(value)) => Ok(Some(value)),
        Some(BoolOrString::String(value)) => match value.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a boolean or \"true\" / \"false\"",
            )),
        },
    }
}

// --- ハンドラ ---

/// GET /todos/hello
pub async fn hello() -> &'static str {
    "Hello World"
}

/// GET /todos
///
/// 全 Todo を挿入順で取得する。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, CoreError> {
    let todos = state.usecase.find_all().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /todos
///
/// Todo を作成する。`done` 省略時は未完了になる。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let todo = state
        .usecase
        .save(NewTodo::with_done(req.text, req.done))
        .await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// PUT /todos/{id}
///
/// Todo の `text` / `done` を更新する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, CoreError> {
    if let Some(body_id) = req.id.filter(|body_id| *body_id != id) {
        tracing::debug!(body_id, "ボディの id はパスと異なるため無視します");
    }

    let patch = TodoPatch {
        text: req.text,
        done: req.done,
    };
    let todo = state.usecase.update(TodoId::from_i32(id), patch).await?;

    Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}
