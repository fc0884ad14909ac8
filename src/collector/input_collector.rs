use std::convert::TryFrom;
use std::future::Future;
use std::io;
use std::pin::Pin;

use anyhow::{
    anyhow,
    Context,
};
use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    AsyncWrite,
    AsyncWriteExt,
    Lines,
};

use crate::collector::CollectionError;
use crate::domain::{
    ContactDetails,
    ContactEmail,
    ContactName,
    MalformedInput,
};
use crate::presenter::{
    banner,
    DEFAULT_BANNER_WIDTH,
};

const HEADER_TITLE: &str = "     DATA COLLECTION";
const NAME_PROMPT: &str = "Enter your Name: ";
const EMAIL_PROMPT: &str = "Enter your Email: ";

/// Resolves once the user asks to cancel the run.
pub type Interrupt = Pin<Box<dyn Future<Output = io::Result<()>> + Send>>;

/// Prompts for a name and an email until both are valid.
///
/// Every read races `interrupt`: in production a SIGINT listener registered before anything is
/// printed, in tests any future resolving to `io::Result<()>`.
pub struct InputCollector<R, W> {
    lines: Lines<R>,
    output: W,
    interrupt: Interrupt,
    banner_width: usize,
}

impl<R, W> InputCollector<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new<I>(input: R, output: W, interrupt: I) -> Self
    where
        I: Future<Output = io::Result<()>> + Send + 'static,
    {
        Self {
            lines: input.lines(),
            output,
            interrupt: Box::pin(interrupt),
            banner_width: DEFAULT_BANNER_WIDTH,
        }
    }

    pub fn with_banner_width(mut self, banner_width: usize) -> Self {
        self.banner_width = banner_width;
        self
    }

    /// Gives back the writer and the interrupt, so that printing the result can still be
    /// cancelled.
    pub fn into_parts(self) -> (W, Interrupt) {
        (self.output, self.interrupt)
    }

    /// Runs the prompt loop until a valid pair is entered.
    ///
    /// An invalid email restarts the loop from the name prompt.
    #[tracing::instrument(name = "collecting contact details", skip(self))]
    pub async fn collect(&mut self) -> Result<ContactDetails, CollectionError> {
        let header = format!("{}\n", banner(HEADER_TITLE, self.banner_width));
        self.write(&header).await?;

        loop {
            let name = match ContactName::try_from(self.prompt(NAME_PROMPT).await?) {
                Ok(name) => name,
                Err(e) => {
                    self.reject(e).await?;
                    continue;
                }
            };

            let email = match ContactEmail::try_from(self.prompt(EMAIL_PROMPT).await?) {
                Ok(email) => email,
                Err(e) => {
                    self.reject(e).await?;
                    continue;
                }
            };

            tracing::debug!("contact details accepted");
            return Ok(ContactDetails { name, email });
        }
    }

    async fn reject(&mut self, error: MalformedInput) -> Result<(), CollectionError> {
        tracing::info!("rejected input: {}", error);
        self.write(&format!("❌ Error: {}. Please try again.\n", error))
            .await
    }

    async fn prompt(&mut self, prompt: &str) -> Result<String, CollectionError> {
        self.write(prompt).await?;

        tokio::select! {
            biased;

            signal = &mut self.interrupt => {
                signal.context("Failed to listen for the interrupt signal")?;
                tracing::info!("interrupted while waiting for {:?}", prompt.trim());
                Err(CollectionError::UserInterrupted)
            }
            line = self.lines.next_line() => {
                match line.context("Failed to read from the console")? {
                    Some(line) => Ok(line),
                    None => Err(anyhow!(
                        "input stream closed before a valid name and email were entered"
                    )
                    .into()),
                }
            }
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), CollectionError> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context("Failed to write to the console")?;
        self.output
            .flush()
            .await
            .context("Failed to flush the console")?;
        Ok(())
    }
}
