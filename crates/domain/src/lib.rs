//! # Todo ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと更新パッチ
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::{DomainError, todo::TodoId};
//!
//! let error = DomainError::NotFound {
//!     entity_type: "Todo",
//!     id:          TodoId::from_i32(12389).to_string(),
//! };
//! assert_eq!(error.to_string(), "Todo が見つかりません: 12389");
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
