//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todoflow_domain::todo::{NewTodo, Todo, TodoId};

use crate::{
    db::{TransactionManager, TxContext},
    error::InfraError,
    repository::TodoRepository,
};

// ===== MockTodoRepository =====

/// インメモリの TodoRepository
///
/// ID は 1 から連番で採番し、削除された ID は再利用しない。
#[derive(Clone)]
pub struct MockTodoRepository {
    todos:   Arc<Mutex<Vec<Todo>>>,
    next_id: Arc<Mutex<i64>>,
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self {
            todos:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// 既存データとして Todo を追加する
    pub fn add_todo(&self, todo: Todo) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(todo.id().as_i64() + 1);
        self.todos.lock().unwrap().push(todo);
    }

    /// 現在保持している Todo の一覧
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let mut todos = self.todos.lock().unwrap().clone();
        todos.sort_by_key(|t| t.id());
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, _tx: &mut TxContext, todo: &NewTodo) -> Result<Todo, InfraError> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        let inserted = Todo::from_db(
            TodoId::from_i64(id),
            todo.text.clone(),
            false,
            todo.created_at,
        );
        self.todos.lock().unwrap().push(inserted.clone());
        Ok(inserted)
    }

    async fn find_by_id_for_update(
        &self,
        _tx: &mut TxContext,
        id: TodoId,
    ) -> Result<Option<Todo>, InfraError> {
        self.find_by_id(id).await
    }

    async fn update(&self, _tx: &mut TxContext, todo: &Todo) -> Result<Todo, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        if let Some(existing) = todos.iter_mut().find(|t| t.id() == todo.id()) {
            *existing = todo.clone();
        }
        Ok(todo.clone())
    }

    async fn delete(&self, _tx: &mut TxContext, id: TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok(todos.len() < before)
    }
}

// ===== MockTransactionManager =====

/// 常にモックの TxContext を返す TransactionManager
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
    async fn begin(&self) -> Result<TxContext, InfraError> {
        Ok(TxContext::mock())
    }
}
