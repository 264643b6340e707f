//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! ハンドラは DTO の変換だけを行い、処理はユースケースに委譲する。

pub mod health;
pub mod todo;

pub use health::health_check;
pub use todo::{
   TodoState,
   create_todo,
   delete_todo,
   get_all_todo,
   get_todo_for_id,
   update_todo,
};
