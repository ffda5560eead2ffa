use tracing::Level;
use tracing_subscriber::prelude::*;

pub(crate) fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let tracing_layer = tracing_subscriber::fmt::layer();
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("octocrab", level)
        .with_default(level);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
