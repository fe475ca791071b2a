//! Add and multiply two `f64` values.
//!
//! ```
//! use mylib::{add, Calculator};
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(Calculator::new().multiply(4.0, 5.0), 20.0);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::TomlConfig;

pub use crate::core::arithmetic::{add, Calculator};
pub use crate::core::engine::CalcEngine;
pub use domain::model::{Evaluation, Operation, OutputFormat};
pub use utils::error::{MylibError, Result};
