//! Formatting and printing of the accepted contact details.

use anyhow::Context;
use tokio::io::{
    AsyncWrite,
    AsyncWriteExt,
};

use crate::collector::CollectionError;
use crate::domain::ContactDetails;

pub const DEFAULT_BANNER_WIDTH: usize = 50;
pub const MAX_BANNER_WIDTH: usize = 200;

const RESULT_TITLE: &str = "           DATA RECEIVED SUCCESSFULLY";

/// A line of `=` characters, at most `MAX_BANNER_WIDTH` long.
pub fn rule(width: usize) -> String {
    "=".repeat(width.min(MAX_BANNER_WIDTH))
}

/// A title framed by two rules, each on its own line.
pub fn banner(title: &str, width: usize) -> String {
    let rule = rule(width);
    format!("{rule}\n{title}\n{rule}\n", rule = rule, title = title)
}

/// The contract line: `Received data: Name - <name>, Email - <email>`.
pub fn result_line(details: &ContactDetails) -> String {
    format!(
        "Received data: Name - {}, Email - {}",
        details.name.as_ref(),
        details.email.as_ref()
    )
}

pub fn render(details: &ContactDetails, banner_width: usize) -> String {
    format!(
        "\n{}{}\n{}\n",
        banner(RESULT_TITLE, banner_width),
        result_line(details),
        rule(banner_width)
    )
}

#[tracing::instrument(name = "presenting contact details", skip(output, details))]
pub async fn present<W>(
    output: &mut W,
    details: &ContactDetails,
    banner_width: usize,
) -> Result<(), CollectionError>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(render(details, banner_width).as_bytes())
        .await
        .context("Failed to write the received data")?;
    output
        .flush()
        .await
        .context("Failed to flush the received data")?;
    Ok(())
}
