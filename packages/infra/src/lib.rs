//! # TodoFlow インフラ層
//!
//! PostgreSQL との接続・永続化を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プール管理とスキーマ適用
//! - **Unit of Work**: リクエスト単位のトランザクション（[`TxContext`]）
//! - **リポジトリ実装**: Todo の CRUD
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール、マイグレーション、トランザクション管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - インメモリモック（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use db::{PgTransactionManager, TransactionManager, TxContext};
pub use error::{InfraError, InfraErrorKind};
