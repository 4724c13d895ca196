//! Banter infrastructure: concrete storage backends for `banter-core`.

pub mod json_state_repository;
pub mod paths;

pub use crate::json_state_repository::JsonStateRepository;
pub use crate::paths::BanterPaths;
