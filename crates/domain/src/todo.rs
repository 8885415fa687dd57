//! # Todo
//!
//! Todo 項目を表現するドメインモデル。
//!
//! ## ライフサイクル
//!
//! 1. [`NewTodo`] として作成（`id` 未採番、`done` は既定で `false`）
//! 2. ストレージが `id` を採番し [`Todo`] として永続化
//! 3. [`TodoPatch`] を適用して `text` / `done` を上書き（`id` は不変）
//!
//! 公開 API に削除操作はない。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{Todo, TodoId, TodoPatch};
//!
//! let todo = Todo::from_db(TodoId::from_i32(1), "牛乳を買う".to_string(), false);
//! let updated = todo.apply(TodoPatch {
//!     text: None,
//!     done: Some(true),
//! });
//!
//! assert_eq!(updated.text(), "牛乳を買う");
//! assert!(updated.done());
//! ```

use serde::{Deserialize, Serialize};

/// Todo の一意識別子
///
/// ストレージ（`SERIAL` 列）が採番する整数 ID。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(i32);

impl TodoId {
    /// 既存の整数値から ID を作成する
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

// =========================================================================
// NewTodo（作成入力）
// =========================================================================

/// 永続化前の Todo
///
/// `id` はストレージが採番するため持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    text: String,
    done: bool,
}

impl NewTodo {
    /// 未完了の Todo を作成する
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// 完了状態を明示して作成する
    ///
    /// `None` の場合は未完了になる。
    pub fn with_done(text: impl Into<String>, done: Option<bool>) -> Self {
        Self {
            text: text.into(),
            done: done.unwrap_or(false),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn done(&self) -> bool {
        self.done
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` は採番後に変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:   TodoId,
    text: String,
    done: bool,
}

impl Todo {
    /// データベースから Todo を復元する
    pub fn from_db(id: TodoId, text: String, done: bool) -> Self {
        Self { id, text, done }
    }

    /// 採番済み ID で永続化前の Todo を確定する
    pub fn from_new(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            text: new_todo.text,
            done: new_todo.done,
        }
    }

    /// パッチを適用した新しい Todo を返す
    ///
    /// パッチに含まれるフィールドのみ上書きし、`None` のフィールドは現在値を維持する。
    /// `id` は変更しない。
    pub fn apply(self, patch: TodoPatch) -> Self {
        Self {
            id:   self.id,
            text: patch.text.unwrap_or(self.text),
            done: patch.done.unwrap_or(self.done),
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn done(&self) -> bool {
        self.done
    }
}

// =========================================================================
// TodoPatch（更新入力）
// =========================================================================

/// Todo の更新内容
///
/// - `text`: 変更なしは `None`
/// - `done`: 変更なしは `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub done: Option<bool>,
}
