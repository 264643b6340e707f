//! # Todo
//!
//! 唯一のエンティティである Todo と、その値オブジェクトを定義する。
//!
//! ## ライフサイクル
//!
//! ```text
//! NewTodo ──insert──▶ Todo ──apply(TodoChanges)──▶ Todo ──delete──▶ (消滅)
//!          (id 採番)          (部分更新)                   (物理削除)
//! ```
//!
//! - 作成前の状態は [`NewTodo`] で表す。ID は DB が採番するため持たない
//! - 採番後は [`Todo`] になり、`id` と `created_at` は以後変化しない
//! - 更新は [`TodoChanges`] による部分更新で、指定されたフィールドだけが変わる
//!
//! ## 部分更新
//!
//! `TodoChanges` の各フィールドは `Option` で「未指定」と「値あり」を区別する。
//! `completed: Some(false)` は「false に更新する」であり、未指定とは扱わない。
//!
//! ```rust
//! use chrono::Utc;
//! use todoflow_domain::todo::{Todo, TodoChanges, TodoId, TodoText};
//!
//! let todo = Todo::from_db(
//!     TodoId::from_i64(1),
//!     TodoText::new("buy milk").unwrap(),
//!     true,
//!     Utc::now(),
//! );
//!
//! let updated = todo.apply(TodoChanges {
//!     text:      None,
//!     completed: Some(false),
//! });
//!
//! assert_eq!(updated.text().as_str(), "buy milk");
//! assert!(!updated.completed());
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// TodoId
// =========================================================================

/// Todo の識別子
///
/// DB の主キー（`BIGINT GENERATED ALWAYS AS IDENTITY`）が採番する。
/// 主キー制約により一意性は構造的に保証される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

// =========================================================================
// TodoText
// =========================================================================

/// Todo の本文
///
/// # バリデーション
///
/// - 空文字列、空白のみの文字列は不可
///
/// 前後の空白は除去せず、入力された文字列をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoText(String);

impl TodoText {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.trim().is_empty() {
         return Err(DomainError::Validation(
            "text を入力してください".to_string(),
         ));
      }

      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }

   pub fn into_string(self) -> String {
      self.0
   }
}

impl std::fmt::Display for TodoText {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

// =========================================================================
// NewTodo
// =========================================================================

/// 挿入前の Todo
///
/// `completed` は常に false で作成されるため持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
   pub text:       TodoText,
   pub created_at: DateTime<Utc>,
}

// =========================================================================
// TodoChanges
// =========================================================================

/// 部分更新の内容
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
   pub text:      Option<TodoText>,
   pub completed: Option<bool>,
}

impl TodoChanges {
   /// 変更対象のフィールドが 1 つもないか
   pub fn is_empty(&self) -> bool {
      self.text.is_none() && self.completed.is_none()
   }
}

// =========================================================================
// Todo
// =========================================================================

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:         TodoId,
   text:       TodoText,
   completed:  bool,
   created_at: DateTime<Utc>,
}

impl Todo {
   /// DB から取得した値で復元する
   pub fn from_db(
      id: TodoId,
      text: TodoText,
      completed: bool,
      created_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         text,
         completed,
         created_at,
      }
   }

   pub fn id(&self) -> TodoId {
      self.id
   }

   pub fn text(&self) -> &TodoText {
      &self.text
   }

   pub fn completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   /// 部分更新を適用した新しい状態を返す
   ///
   /// `id` と `created_at` は変更されない。
   pub fn apply(self, changes: TodoChanges) -> Self {
      Self {
         text: changes.text.unwrap_or(self.text),
         completed: changes.completed.unwrap_or(self.completed),
         ..self
      }
   }
}
