use tracing::subscriber::{
    set_global_default,
    SetGlobalDefaultError,
};
use tracing::Subscriber;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Bunyan JSON records written to `sink`, filtered by `RUST_LOG` or else by `level`.
pub fn get_subscriber<Sink>(name: String, level: String, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: MakeWriter + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Install the subscriber globally, logging to stderr so that stdout is left to the prompts and
/// the received data. Fails if one is already installed.
pub fn setup_tracing(name: String, level: String) -> Result<(), SetGlobalDefaultError> {
    set_global_default(get_subscriber(name, level, std::io::stderr))
}
