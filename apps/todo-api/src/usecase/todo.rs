//! Todo 管理ユースケース

use std::sync::Arc;

use todoflow_domain::{
   clock::Clock,
   todo::{NewTodo, Todo, TodoChanges, TodoId, TodoText},
};
use todoflow_infra::{TransactionManager, repository::TodoRepository};

use crate::error::CoreError;

/// Todo 作成の入力
pub struct CreateTodoInput {
   pub text: String,
}

/// Todo 更新の入力
///
/// - `text`: 変更なしは `None`
/// - `completed`: 変更なしは `None`。`Some(false)` は false への更新
pub struct UpdateTodoInput {
   pub id:        TodoId,
   pub text:      Option<String>,
   pub completed: Option<bool>,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
   tx_manager:      Arc<dyn TransactionManager>,
   clock:           Arc<dyn Clock>,
}

fn not_found(id: TodoId) -> CoreError {
   CoreError::NotFound(format!("Todo が見つかりません: id={id}"))
}

impl TodoUseCaseImpl {
   pub fn new(
      todo_repository: Arc<dyn TodoRepository>,
      tx_manager: Arc<dyn TransactionManager>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         todo_repository,
         tx_manager,
         clock,
      }
   }

   /// Todo を作成する
   ///
   /// 1. TodoText バリデーション
   /// 2. 作成日時を Clock から取得
   /// 3. トランザクション内で挿入しコミット
   pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, CoreError> {
      let new_todo = NewTodo {
         text:       TodoText::new(input.text)?,
         created_at: self.clock.now(),
      };

      let mut tx = self.tx_manager.begin().await?;
      let todo = self.todo_repository.insert(&mut tx, &new_todo).await?;
      tx.commit().await?;

      tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
      Ok(todo)
   }

   /// ID で Todo を取得する
   pub async fn get_todo(&self, id: TodoId) -> Result<Todo, CoreError> {
      self
         .todo_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))
   }

   /// Todo 一覧を作成順で取得する
   pub async fn list_todos(&self) -> Result<Vec<Todo>, CoreError> {
      let todos = self.todo_repository.find_all().await?;
      Ok(todos)
   }

   /// Todo を部分更新する
   ///
   /// - 指定されたフィールドのみ変更する
   /// - どちらも未指定なら現在の状態をそのまま返す（存在しなければ NotFound）
   pub async fn update_todo(&self, input: UpdateTodoInput) -> Result<Todo, CoreError> {
      let changes = TodoChanges {
         text:      input.text.map(TodoText::new).transpose()?,
         completed: input.completed,
      };

      if changes.is_empty() {
         return self.get_todo(input.id).await;
      }

      let mut tx = self.tx_manager.begin().await?;
      let current = self
         .todo_repository
         .find_by_id_for_update(&mut tx, input.id)
         .await?
         .ok_or_else(|| not_found(input.id))?;

      let updated = self
         .todo_repository
         .update(&mut tx, &current.apply(changes))
         .await?;
      tx.commit().await?;

      tracing::info!(todo_id = %updated.id(), "Todo を更新しました");
      Ok(updated)
   }

   /// Todo を削除する
   ///
   /// 存在しない ID は NotFound。2 回目の削除も NotFound になる。
   pub async fn delete_todo(&self, id: TodoId) -> Result<(), CoreError> {
      let mut tx = self.tx_manager.begin().await?;
      let deleted = self.todo_repository.delete(&mut tx, id).await?;
      if !deleted {
         return Err(not_found(id));
      }
      tx.commit().await?;

      tracing::info!(todo_id = %id, "Todo を削除しました");
      Ok(())
   }
}
