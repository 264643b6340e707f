//! # Todo API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | HTTP ステータス |
//! |-----------|----------------|
//! | `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `Database` | 500（詳細はログのみ） |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_domain::DomainError;
use todoflow_infra::InfraError;
use todoflow_shared::ErrorResponse;

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 不正なリクエスト
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => CoreError::BadRequest(msg),
      }
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let body = match self {
         CoreError::NotFound(msg) => ErrorResponse::not_found(msg),
         CoreError::BadRequest(msg) => ErrorResponse::validation_error(msg),
         CoreError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            ErrorResponse::internal_error()
         }
      };

      let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_not_foundは404を返す() {
      let response = CoreError::NotFound("Todo(id=1)".to_string()).into_response();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   #[test]
   fn test_ドメインのバリデーションエラーは400になる() {
      let err: CoreError = DomainError::Validation("text を入力してください".to_string()).into();

      assert!(matches!(err, CoreError::BadRequest(_)));
      assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
   }

   #[test]
   fn test_インフラエラーは500になる() {
      let err: CoreError = InfraError::corrupted_data("broken").into();

      assert_eq!(
         err.into_response().status(),
         StatusCode::INTERNAL_SERVER_ERROR
      );
   }
}
