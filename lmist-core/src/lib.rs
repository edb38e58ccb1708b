#![cfg_attr(feature = "strict", deny(warnings))]

pub mod config;
pub mod list;
pub mod place;
pub mod storage;

mod error;

pub use error::{ConfigError, ListError, PlaceError};
