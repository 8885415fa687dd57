//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// 既定のバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// 既定のポート番号
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("TODO_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "TODO_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    /// `TcpListener::bind` に渡すアドレス
    ///
    /// `host` は IP アドレスに限らず、`localhost` などのホスト名も解決される。
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
