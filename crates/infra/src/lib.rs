//! # Todo インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ストレージの抽象（リポジトリトレイト）と、その具体的な実装を提供する。
//! PostgreSQL の詳細をカプセル化し、ユースケース層をインフラの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::{PostgresTodoRepository, TodoRepository}};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/todo").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let repo = PostgresTodoRepository::new(pool);
//!     let todos = repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use db::{DatabaseHealth, PgDatabaseHealth};
pub use error::{InfraError, InfraErrorKind};
