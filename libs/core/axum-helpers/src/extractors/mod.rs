//! Extractors whose rejections render as [`crate::errors::ErrorResponse`].

pub mod id_path;
pub mod query;
pub mod validated_json;

pub use id_path::IdPath;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
