//! # ユースケース層
//!
//! ハンドラから呼ばれ、リポジトリとトランザクションを組み合わせて
//! 1 リクエスト分の処理を完結させる。

pub mod todo;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};
