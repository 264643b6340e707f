//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /create_todo` - Todo 作成
//! - `GET /get_todo_for_id?id=` - ID 指定で取得
//! - `GET /get_all_todo` - 一覧取得
//! - `PATCH /update_todo:id?id=` - 部分更新
//! - `DELETE /delete_todo:id?id=` - 削除
//!
//! `:id` はパスパラメータではなくパスの一部。ID は常にクエリ文字列で渡す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Query, State},
   http::StatusCode,
   response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{Todo, TodoId};

use crate::{
   error::CoreError,
   usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ID クエリパラメータ
#[derive(Debug, Deserialize)]
pub struct TodoIdQuery {
   pub id: i64,
}

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
   pub text: String,
}

/// Todo 更新リクエスト
///
/// 省略したフィールド（および `null`）は変更しない。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
   #[serde(default)]
   pub text:      Option<String>,
   #[serde(default)]
   pub completed: Option<bool>,
}

/// Todo DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
   pub id:        i64,
   pub text:      String,
   pub completed: bool,
   pub create_at: DateTime<Utc>,
}

impl From<Todo> for TodoDto {
   fn from(todo: Todo) -> Self {
      Self {
         id:        todo.id().as_i64(),
         text:      todo.text().as_str().to_string(),
         completed: todo.completed(),
         create_at: todo.created_at(),
      }
   }
}

/// 削除レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
   pub success: bool,
}

// --- ハンドラ ---

/// POST /create_todo
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, CoreError> {
   let todo = state
      .usecase
      .create_todo(CreateTodoInput { text: req.text })
      .await?;

   Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// GET /get_todo_for_id?id=
pub async fn get_todo_for_id(
   State(state): State<Arc<TodoState>>,
   Query(query): Query<TodoIdQuery>,
) -> Result<impl IntoResponse, CoreError> {
   let todo = state.usecase.get_todo(TodoId::from_i64(query.id)).await?;

   Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// GET /get_all_todo
///
/// 作成順（ID 昇順）で返す。0 件なら空配列。
pub async fn get_all_todo(
   State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, CoreError> {
   let todos = state.usecase.list_todos().await?;
   let items: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();

   Ok((StatusCode::OK, Json(items)))
}

/// PATCH /update_todo:id?id=
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Query(query): Query<TodoIdQuery>,
   Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, CoreError> {
   let todo = state
      .usecase
      .update_todo(UpdateTodoInput {
         id:        TodoId::from_i64(query.id),
         text:      req.text,
         completed: req.completed,
      })
      .await?;

   Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// DELETE /delete_todo:id?id=
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Query(query): Query<TodoIdQuery>,
) -> Result<impl IntoResponse, CoreError> {
   state.usecase.delete_todo(TodoId::from_i64(query.id)).await?;

   Ok((StatusCode::OK, Json(DeleteTodoResponse { success: true })))
}
