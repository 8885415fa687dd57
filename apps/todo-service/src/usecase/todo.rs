//! Todo 管理ユースケース

use std::sync::Arc;

use todo_domain::{
    DomainError,
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};
use todo_infra::repository::TodoRepository;

use crate::error::CoreError;

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// 全 Todo をストレージの返す順（挿入順）で取得する
    pub async fn find_all(&self) -> Result<Vec<Todo>, CoreError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// ID で Todo を取得する
    ///
    /// 存在しない場合は `DomainError::NotFound` を返す。
    pub async fn find_by_id(&self, id: TodoId) -> Result<Todo, CoreError> {
        self.todo_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound {
                    entity_type: "Todo",
                    id:          id.to_string(),
                }
                .into()
            })
    }

    /// Todo を作成する
    pub async fn save(&self, new_todo: NewTodo) -> Result<Todo, CoreError> {
        let todo = self.todo_repository.insert(&new_todo).await?;
        tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
        Ok(todo)
    }

    /// Todo を更新する
    ///
    /// 1. 既存 Todo の取得（存在しなければ NotFound）
    /// 2. パッチに含まれるフィールドのみ上書き
    /// 3. 永続化して更新後の Todo を返す
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, CoreError> {
        let existing = self.find_by_id(id).await?;
        let updated = existing.apply(patch);

        let todo = self.todo_repository.update(&updated).await?;
        tracing::info!(todo_id = %todo.id(), "Todo を更新しました");
        Ok(todo)
    }
}
