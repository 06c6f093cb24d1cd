// File: crates/traceplot/src/config.rs
// Summary: Validated CLI configuration built once from positional arguments.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required argument <{name}>")]
    Missing { name: &'static str },

    #[error("unexpected extra argument {arg:?}")]
    Extra { arg: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Raw little-endian f32 samples to plot.
    pub input: PathBuf,
    /// Destination image; its extension selects the encoding.
    pub output: PathBuf,
}

impl Config {
    /// Build the run configuration from the arguments after argv[0].
    /// Exactly two positionals are accepted.
    pub fn from_args<I>(mut args: I) -> Result<Self, ConfigError>
    where
        I: Iterator<Item = String>,
    {
        let input = args.next().ok_or(ConfigError::Missing { name: "input-trace" })?;
        let output = args.next().ok_or(ConfigError::Missing { name: "output-image" })?;
        if let Some(arg) = args.next() {
            return Err(ConfigError::Extra { arg });
        }
        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        })
    }
}
