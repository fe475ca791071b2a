pub mod arithmetic;
pub mod engine;

pub use crate::domain::model::{Evaluation, Operation, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
