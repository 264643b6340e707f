//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<sqlx::Error>` や convenience constructor でエラーを生成すると、
//! その時点のスパン（リポジトリメソッドの `#[tracing::instrument]` など）が
//! `SpanTrace` として記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// API 層はこれらをすべてサーバーエラー（500）として扱う。
/// 「見つからない」はエラーではなく `Option::None` / `false` で表現する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// 接続断、制約違反、SQL 実行失敗など。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// マイグレーションエラー
    #[error("マイグレーションエラー: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),

    /// DB に格納された値がドメインの制約を満たさない
    #[error("不正な格納データ: {0}")]
    CorruptedData(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 格納データ不整合エラーを生成する
    pub fn corrupted_data(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::CorruptedData(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self {
            kind:       InfraErrorKind::Migration(source),
            span_trace: SpanTrace::capture(),
        }
    }
}
