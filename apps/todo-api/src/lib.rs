//! # Todo API ライブラリ
//!
//! ルーター・ハンドラ・ユースケースを公開する。
//! バイナリ（`main.rs`）と結合テストの両方から利用する。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
