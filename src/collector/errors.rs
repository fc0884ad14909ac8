use thiserror::Error;

/// Failures that end a collection run.
///
/// Invalid field values are not represented here: the collector re-prompts
/// for those and they never leave its loop.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Program interrupted by user")]
    UserInterrupted,

    #[error("{0:#}")]
    UnexpectedFault(#[from] anyhow::Error),
}
