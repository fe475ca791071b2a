use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, Operation, OutputFormat};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mylib")]
#[command(about = "Add or multiply two numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, value_enum, help = "Output format (overrides config file)")]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub file: Option<TomlConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Command {
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Multiply two numbers
    #[command(alias = "mul")]
    Multiply {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

impl Command {
    pub fn operands(&self) -> (Operation, f64, f64) {
        match *self {
            Command::Add { a, b } => (Operation::Add, a, b),
            Command::Multiply { x, y } => (Operation::Multiply, x, y),
        }
    }
}

impl CliConfig {
    /// Read the `--config` file, if one was given.
    pub fn load_file(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            self.file = Some(TomlConfig::from_file(path)?);
        }
        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.file.as_ref().and_then(|f| f.log_level())
    }
}

impl ConfigProvider for CliConfig {
    fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| self.file.as_ref().and_then(|f| f.format()))
            .unwrap_or_default()
    }

    fn verbose(&self) -> bool {
        self.verbose || self.file.as_ref().is_some_and(|f| f.verbose())
    }
}
