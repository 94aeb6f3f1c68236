//! Logging bootstrap for the desktop binary.

use anyhow::Result;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::panic;

/// Initialises the global logger.
///
/// Events go to stderr so they stay separate from the frame statistics the
/// renderer prints on stdout. Panics are routed through the logger as well,
/// since a window launched from a desktop shell has no terminal attached.
pub(crate) fn setup(debug: bool) -> Result<()> {
    panic::set_hook(Box::new(|panic_info| {
        log::error!("{panic_info}");
    }));

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {d(%H:%M:%S.%3f)} {m}{n}")))
        .build();

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    let _handle = log4rs::init_config(config)?;

    Ok(())
}
