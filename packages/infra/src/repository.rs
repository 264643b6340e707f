//! # リポジトリ実装
//!
//! ドメインエンティティの永続化を担当するリポジトリを提供する。
//!
//! ## 設計方針
//!
//! - **トレイト + Postgres 実装**: ユースケース層はトレイトにのみ依存し、
//!   テストではインメモリ実装に差し替える
//! - **書き込みは TxContext 必須**: [`crate::db::TxContext`] を引数に取る
//! - **見つからないことはエラーではない**: `Option` / `bool` で返し、
//!   NotFound への変換はユースケース層が行う

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
