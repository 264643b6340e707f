//! # TodoRepository
//!
//! `todos` テーブルへの CRUD を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **行型とエンティティの分離**: SQL の結果は非公開の [`TodoRow`] で受け、
//!   [`Todo`] へ変換する。テーブル定義は `migrations/` にのみ存在する
//! - **実行時クエリ**: `sqlx::query_as` を使用し、ビルド時に DB 接続を要求しない
//! - **更新は行ロック付き**: 部分更新は `find_by_id_for_update` で読んだ行に
//!   変更を適用してから `update` する。同じトランザクション内で完結する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use todoflow_domain::todo::{NewTodo, Todo, TodoId, TodoText};

use crate::{db::TxContext, error::InfraError};

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件を ID 昇順（作成順）で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// 挿入し、採番された ID を含むエンティティを返す
    async fn insert(&self, tx: &mut TxContext, todo: &NewTodo) -> Result<Todo, InfraError>;

    /// ID で検索し、トランザクション終了まで行をロックする
    async fn find_by_id_for_update(
        &self,
        tx: &mut TxContext,
        id: TodoId,
    ) -> Result<Option<Todo>, InfraError>;

    /// `text` と `completed` を書き戻し、保存後の状態を返す
    async fn update(&self, tx: &mut TxContext, todo: &Todo) -> Result<Todo, InfraError>;

    /// 削除する。対象が存在しなかった場合は `false` を返す
    async fn delete(&self, tx: &mut TxContext, id: TodoId) -> Result<bool, InfraError>;
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:        i64,
    text:      String,
    completed: bool,
    create_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = InfraError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        // text は NOT NULL だが、空文字列は DB 制約では防げない
        let text = TodoText::new(row.text)
            .map_err(|e| InfraError::corrupted_data(format!("todos.id={}: {e}", row.id)))?;
        Ok(Todo::from_db(
            TodoId::from_i64(row.id),
            text,
            row.completed,
            row.create_at,
        ))
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, completed, create_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, completed, create_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, tx: &mut TxContext, todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (text, completed, create_at)
            VALUES ($1, FALSE, $2)
            RETURNING id, text, completed, create_at
            "#,
        )
        .bind(todo.text.as_str())
        .bind(todo.created_at)
        .fetch_one(tx.conn())
        .await?;

        Todo::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id_for_update(
        &self,
        tx: &mut TxContext,
        id: TodoId,
    ) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, text, completed, create_at
            FROM todos
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(tx.conn())
        .await?;

        row.map(Todo::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, tx: &mut TxContext, todo: &Todo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET text = $2, completed = $3
            WHERE id = $1
            RETURNING id, text, completed, create_at
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.text().as_str())
        .bind(todo.completed())
        .fetch_one(tx.conn())
        .await?;

        Todo::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, tx: &mut TxContext, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(tx.conn())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
