//! # TodoFlow ドメイン層
//!
//! Todo 管理の中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::TodoText`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘     ↓
//!    shared
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! テーブル定義は `migrations/` の SQL に分離されており、
//! `Todo` 自体は保存方法を知らない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと値オブジェクト

pub mod clock;
pub mod error;
pub mod todo;

pub use error::DomainError;
