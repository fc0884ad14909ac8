use std::process::ExitCode;

use data_collection::app::{
    load_configuration,
    DataCollectionApp,
};

fn main() -> ExitCode {
    match load_configuration() {
        Ok(configuration) => DataCollectionApp::from(configuration),
        Err(e) => DataCollectionApp::with_default_settings(e),
    }
    .run()
}
