//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | detail |
//! |--------|----------------|--------|
//! | `Domain(NotFound)` | 404 | 固定メッセージ |
//! | `Database` | 500 | 固定メッセージ（詳細はログのみ） |
//!
//! レスポンスボディは素の文字列ではなく、RFC 9457 Problem Details 形式の
//! [`ErrorResponse`] で返す。404 の固定メッセージは `detail` に入る。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo が見つからない場合のレスポンス detail
pub const TODO_NOT_FOUND_DETAIL: &str = "No Todo with the provided id is found";

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// ドメインエラー（NotFound など）
   #[error(transparent)]
   Domain(#[from] DomainError),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         CoreError::Domain(DomainError::NotFound { .. }) => {
            tracing::debug!("{}", self);
            (
               StatusCode::NOT_FOUND,
               ErrorResponse::not_found(TODO_NOT_FOUND_DETAIL),
            )
         }
         CoreError::Database(e) => {
            tracing::error!(
               error.kind = "database",
               span_trace = %e.span_trace(),
               "データベースエラー: {}",
               e
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
