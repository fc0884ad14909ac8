pub use configuration::*;
pub use startup::DataCollectionApp;
pub use telemetry::{
    get_subscriber,
    setup_tracing,
};

mod configuration;
mod startup;
mod telemetry;
