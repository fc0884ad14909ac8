pub use errors::CollectionError;
pub use input_collector::{
    InputCollector,
    Interrupt,
};

mod errors;
mod input_collector;
