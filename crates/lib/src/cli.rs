//! CLI helpers.

mod error;
mod output;
mod stdout_logger;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};

pub use self::error::{error_context, LineCol};
pub use self::output::Output;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Verbosity level, raised by each `--verbose`.
    verbose: u8,
    /// Output JSON lines.
    json: bool,
    /// Path to the input file.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(opts.log_level());
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-V" | "--verbose" => {
                    opts.verbose = opts.verbose.saturating_add(1);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    if let Some(path) = it.next() {
                        opts.set_input(path.into())?;
                    }

                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    opts.set_input(other.into())?;
                }
            }
        }

        if let Some(arg) = it.next() {
            bail!("unexpected argument: {}", arg.to_string_lossy());
        }

        Ok(opts)
    }

    fn set_input(&mut self, path: PathBuf) -> Result<()> {
        if self.input.is_some() {
            bail!("duplicate input path `{}`", path.display());
        }

        self.input = Some(path);
        Ok(())
    }

    /// Input path, or the given default if none was specified.
    pub fn input_or<'a>(&'a self, default: &'a Path) -> &'a Path {
        self.input.as_deref().unwrap_or(default)
    }

    /// Log level to use.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Construct an output writing to `out` in the requested format.
    pub fn output<O>(&self, out: O) -> Output<O>
    where
        O: Write,
    {
        Output::new(out, self.json)
    }
}
