//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! データベースには触れず、プロセスが応答できることだけを返す。

use axum::Json;
use todoflow_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
