use std::future::Future;
use std::process::ExitCode;

use anyhow::Context;
use tokio::io::{
    self,
    AsyncWriteExt,
    BufReader,
};
use tokio::runtime::Builder;

use crate::app::configuration::{
    ConfigurationError,
    Settings,
};
use crate::app::telemetry::setup_tracing;
use crate::collector::{
    CollectionError,
    InputCollector,
};
use crate::domain::ContactDetails;
use crate::presenter;

const WELCOME: &str = "Welcome to the Data Collection Script!\nPlease provide the following information:\n\n";
const COMPLETED: &str = "\n✅ Data collection completed successfully!\n";

pub struct DataCollectionApp {
    settings: Settings,
    rejected_configuration: Option<ConfigurationError>,
}

impl DataCollectionApp {
    pub fn from(settings: Settings) -> DataCollectionApp {
        DataCollectionApp {
            settings,
            rejected_configuration: None,
        }
    }

    /// Runs on `Settings::default()`, reporting `error` once tracing is up.
    pub fn with_default_settings(error: ConfigurationError) -> DataCollectionApp {
        DataCollectionApp {
            settings: Settings::default(),
            rejected_configuration: Some(error),
        }
    }

    /// Runs one collection on the process console and returns the exit status.
    ///
    /// The runtime is dropped with `shutdown_background` so that a stdin read still parked on the
    /// blocking pool after an interrupt does not hold the process open.
    pub fn run(self) -> ExitCode {
        let telemetry = &self.settings.telemetry;
        if let Err(e) = setup_tracing(telemetry.name.clone(), telemetry.level.clone()) {
            return report(CollectionError::from(
                anyhow::Error::new(e).context("Failed to set up tracing"),
            ));
        }
        if let Some(e) = &self.rejected_configuration {
            tracing::warn!("invalid configuration, using the defaults: {}", e);
        }

        let runtime = match Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime")
        {
            Ok(runtime) => runtime,
            Err(e) => return report(e.into()),
        };

        let outcome = runtime.block_on(self.collect_and_present());
        runtime.shutdown_background();

        match outcome {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report(e),
        }
    }

    #[tracing::instrument(name = "running data collection", skip(self))]
    async fn collect_and_present(&self) -> Result<(), CollectionError> {
        // Registered before the first byte is printed; a SIGINT from here on is queued for the
        // collector instead of killing the process.
        let interrupt = listen_for_interrupt().context("Failed to listen for the interrupt signal")?;

        let banner_width = self.settings.application.banner_width;
        let mut stdout = io::stdout();
        write_console(&mut stdout, WELCOME).await?;

        let mut collector = InputCollector::new(BufReader::new(io::stdin()), stdout, interrupt)
            .with_banner_width(banner_width);
        let details = collector.collect().await?;

        let (mut stdout, mut interrupt) = collector.into_parts();
        tokio::select! {
            biased;

            signal = &mut interrupt => {
                signal.context("Failed to listen for the interrupt signal")?;
                Err(CollectionError::UserInterrupted)
            }
            presented = present_and_finish(&mut stdout, &details, banner_width) => presented,
        }
    }
}

#[cfg(unix)]
fn listen_for_interrupt() -> std::io::Result<impl Future<Output = std::io::Result<()>> + Send> {
    use tokio::signal::unix::{
        signal,
        SignalKind,
    };

    let mut interrupt = signal(SignalKind::interrupt())?;
    Ok(async move {
        interrupt.recv().await;
        Ok(())
    })
}

#[cfg(not(unix))]
fn listen_for_interrupt() -> std::io::Result<impl Future<Output = std::io::Result<()>> + Send> {
    let mut interrupt = tokio::signal::windows::ctrl_c()?;
    Ok(async move {
        interrupt.recv().await;
        Ok(())
    })
}

async fn present_and_finish(
    stdout: &mut io::Stdout,
    details: &ContactDetails,
    banner_width: usize,
) -> Result<(), CollectionError> {
    presenter::present(stdout, details, banner_width).await?;
    write_console(stdout, COMPLETED).await
}

async fn write_console(stdout: &mut io::Stdout, text: &str) -> Result<(), CollectionError> {
    stdout
        .write_all(text.as_bytes())
        .await
        .context("Failed to write to the console")?;
    stdout
        .flush()
        .await
        .context("Failed to flush the console")?;
    Ok(())
}

/// Prints the fatal error on stdout and maps it to exit status 1.
fn report(error: CollectionError) -> ExitCode {
    match &error {
        CollectionError::UserInterrupted => {
            tracing::warn!("collection interrupted");
            println!("\n\n❌ Program interrupted by user. Exiting...");
        }
        CollectionError::UnexpectedFault(_) => {
            tracing::error!("collection failed: {:?}", error);
            println!("\n❌ An error occurred: {}", error);
        }
    }
    ExitCode::from(1)
}
