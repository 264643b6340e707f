//! # ルーター構築
//!
//! ルーティングとミドルウェアを組み立てる。`main.rs` とテストの両方から使う。
//!
//! ## レイヤー構成（外側から）
//!
//! 1. `CorsLayer`: 許可オリジンのみに CORS ヘッダーを付与（資格情報あり）
//! 2. `SetRequestIdLayer`: `X-Request-Id` を UUID v7 で採番（クライアント提供値があればそのまま使う）
//! 3. `TraceLayer`: request_id を含むスパンでリクエストを記録
//! 4. `PropagateRequestIdLayer`: レスポンスに `X-Request-Id` をコピー

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{HeaderValue, Request},
   routing::{delete, get, patch, post},
};
use todoflow_shared::observability::MakeRequestUuidV7;
use tower_http::{
   cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};
use tracing::Span;

use crate::handler::{
   TodoState,
   create_todo,
   delete_todo,
   get_all_todo,
   get_todo_for_id,
   health_check,
   update_todo,
};

/// アプリケーション全体のルーターを構築する
pub fn build_router(state: Arc<TodoState>, cors_origins: &[String]) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/create_todo", post(create_todo))
      .route("/get_todo_for_id", get(get_todo_for_id))
      .route("/get_all_todo", get(get_all_todo))
      .route("/update_todo:id", patch(update_todo))
      .route("/delete_todo:id", delete(delete_todo))
      .with_state(state)
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
      .layer(cors_layer(cors_origins))
}

/// リクエストごとのトレーシングスパンを作成する
///
/// `SetRequestIdLayer` の内側で呼ばれるため、`x-request-id` は常に設定済み。
pub fn make_request_span(request: &Request<Body>) -> Span {
   let request_id = request
      .headers()
      .get("x-request-id")
      .and_then(|v| v.to_str().ok())
      .unwrap_or("-");

   tracing::info_span!(
      "request",
      method = %request.method(),
      uri = %request.uri(),
      request_id = %request_id,
   )
}

/// 許可オリジン一覧から CORS レイヤーを作成する
///
/// 資格情報を許可するため、ワイルドカードは使えない。
/// メソッドとヘッダーはプリフライトの要求をそのまま返す。
fn cors_layer(origins: &[String]) -> CorsLayer {
   let allowed: Vec<HeaderValue> = origins
      .iter()
      .filter_map(|origin| {
         if origin == "*" {
            tracing::warn!("資格情報付き CORS ではワイルドカードを使えないため無視します");
            return None;
         }
         match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
               tracing::warn!(origin = %origin, "不正な CORS オリジンを無視します");
               None
            }
         }
      })
      .collect();

   CorsLayer::new()
      .allow_origin(AllowOrigin::list(allowed))
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request())
      .allow_credentials(true)
}
