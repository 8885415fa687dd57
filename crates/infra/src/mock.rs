//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{db::DatabaseHealth, error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

/// インメモリの TodoRepository
///
/// `SERIAL` と同様に、ID は 1 から単調増加で採番し、削除後も再利用しない。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
   state: Arc<Mutex<MockTodoState>>,
}

#[derive(Default)]
struct MockTodoState {
   todos:   Vec<Todo>,
   last_id: i32,
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存済み Todo のスナップショットを取得する
   pub fn todos(&self) -> Vec<Todo> {
      self.state.lock().unwrap().todos.clone()
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      Ok(self.todos())
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .state
         .lock()
         .unwrap()
         .todos
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.last_id += 1;
      let saved = Todo::from_new(TodoId::from_i32(state.last_id), todo.clone());
      state.todos.push(saved.clone());
      Ok(saved)
   }

   async fn update(&self, todo: &Todo) -> Result<Todo, InfraError> {
      let mut state = self.state.lock().unwrap();
      let slot = state
         .todos
         .iter_mut()
         .find(|t| t.id() == todo.id())
         .ok_or_else(|| {
            InfraError::unexpected(format!("更新対象の Todo が存在しません: id={}", todo.id()))
         })?;
      *slot = todo.clone();
      Ok(todo.clone())
   }

   async fn delete_all(&self) -> Result<(), InfraError> {
      self.state.lock().unwrap().todos.clear();
      Ok(())
   }
}

// ===== MockDatabaseHealth =====

/// 疎通確認の結果を固定で返す DatabaseHealth
pub struct MockDatabaseHealth {
   healthy: bool,
}

impl MockDatabaseHealth {
   pub fn healthy() -> Self {
      Self { healthy: true }
   }

   pub fn unhealthy() -> Self {
      Self { healthy: false }
   }
}

#[async_trait]
impl DatabaseHealth for MockDatabaseHealth {
   async fn ping(&self) -> Result<(), InfraError> {
      if self.healthy {
         Ok(())
      } else {
         Err(InfraError::unexpected("データベースに接続できません"))
      }
   }
}
