mod approach;
mod config;

pub use approach::Approach;
pub use config::DemoConfig;

use addend_common::{write_sequence, Result};
use log::debug;
use std::io::Write;

/// Runs the labeled demonstrations against an output stream.
pub struct Driver {
    config: DemoConfig,
}

impl Driver {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Run a single demonstration: label, transform, print.
    ///
    /// The sequence is cloned from the configuration, so every call starts
    /// from the same values. `out` is flushed before returning.
    pub fn run<W: Write + ?Sized>(&self, approach: Approach, out: &mut W) -> Result<()> {
        debug!("Running {} ({})", approach.label(), approach.description());

        writeln!(out, "{}", approach.label())?;

        let mut seq = self.config.values.clone();
        approach.apply(&mut seq, self.config.addend);

        write_sequence(out, &seq)?;
        out.flush()?;

        debug!("{} done: {:?}", approach.label(), seq);
        Ok(())
    }

    /// Run every demonstration in order.
    pub fn run_all<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for approach in Approach::ALL {
            self.run(approach, out)?;
        }
        Ok(())
    }

    /// Run every demonstration into a string.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.run_all(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}
