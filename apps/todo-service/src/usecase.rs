//! # ユースケース層
//!
//! HTTP 境界とストレージの間に位置するビジネスルール層。
//! ハンドラは薄く保ち、判断はこの層に集約する。

pub mod todo;

pub use todo::TodoUseCaseImpl;
