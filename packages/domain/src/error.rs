//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::DomainError;
//!
//! fn validate_text(text: &str) -> Result<(), DomainError> {
//!     if text.is_empty() {
//!         return Err(DomainError::Validation("text は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値がビジネスルールに違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),
}
