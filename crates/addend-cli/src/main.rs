use addend_driver::{DemoConfig, Driver};
use log::LevelFilter;
use miette::Result;
use std::io;

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    // Builder::new() does not read RUST_LOG.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    let driver = Driver::new(DemoConfig::default());
    let mut out = io::stdout().lock();
    driver.run_all(&mut out)?;

    Ok(())
}
