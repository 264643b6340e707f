//! # Todo API 設定
//!
//! 環境変数から Todo API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `CORS_ALLOWED_ORIGINS` | No | カンマ区切りの許可オリジン（デフォルト: ローカル開発用の 4 オリジン） |

use std::env;

use thiserror::Error;

/// CORS を許可するローカル開発用オリジン
///
/// 開発用の設定であり、外部公開時はそのまま使わずに見直すこと。
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
   "http://localhost",
   "http://localhost:8000",
   "http://localhost:5500",
   "http://127.0.0.1:5500",
];

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// Todo API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
   /// CORS で許可するオリジン
   pub cors_origins: Vec<String>,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let host = lookup("TODO_API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

      let port = match lookup("TODO_API_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name: "TODO_API_PORT",
            value,
         })?,
         None => 8000,
      };

      let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

      let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
         Some(value) => parse_origins(&value),
         None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
      };

      Ok(Self {
         host,
         port,
         database_url,
         cors_origins,
      })
   }
}

fn parse_origins(value: &str) -> Vec<String> {
   value
      .split(',')
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_string)
      .collect()
}
