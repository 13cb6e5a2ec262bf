//! 単一ユーザー向け蔵書カタログ。メモリ上のBookコレクションとJSONファイル永続化。

pub mod application;
pub mod domain;
pub mod infra;
pub mod interface;
