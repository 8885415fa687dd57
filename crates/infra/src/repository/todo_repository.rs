//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! - `id` は `todos.id`（`SERIAL`）で採番する
//! - 一覧は `id` 昇順（= 挿入順）で返す

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全 Todo を挿入順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番済みの Todo を返す
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError>;

    /// 既存 Todo の `text` / `done` を更新し、更新後の Todo を返す
    async fn update(&self, todo: &Todo) -> Result<Todo, InfraError>;

    /// 全 Todo を削除する（テストのセットアップ用、HTTP には公開しない）
    async fn delete_all(&self) -> Result<(), InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:   i32,
    text: String,
    done: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(TodoId::from_i32(row.id), row.text, row.done)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, done
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, done
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (text, done)
            VALUES ($1, $2)
            RETURNING id, text, done
            "#,
        )
        .bind(todo.text())
        .bind(todo.done())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET text = $2, done = $3
            WHERE id = $1
            RETURNING id, text, done
            "#,
        )
        .bind(todo.id().as_i32())
        .bind(todo.text())
        .bind(todo.done())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::from).ok_or_else(|| {
            InfraError::unexpected(format!("更新対象の Todo が存在しません: id={}", todo.id()))
        })
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn delete_all(&self) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        Ok(())
    }
}
