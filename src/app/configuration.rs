use config::{
    Config,
    ConfigError,
    Environment,
    File,
};
use custom_error::custom_error;

use crate::presenter::{
    DEFAULT_BANNER_WIDTH,
    MAX_BANNER_WIDTH,
};

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub banner_width: usize,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct TelemetrySettings {
    pub name: String,
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            application: ApplicationSettings {
                banner_width: DEFAULT_BANNER_WIDTH,
            },
            telemetry: TelemetrySettings {
                name: "data-collection".to_string(),
                level: "warn".to_string(),
            },
        }
    }
}

custom_error! {
/// Invalid configuration file or environment override.
pub ConfigurationError
    InvalidConfig{source:ConfigError} = "{source}",
    BannerTooWide{width:usize, max:usize} = "banner_width {width} exceeds the maximum of {max}",
}

/// Load the configuration.
///
/// Every source is optional, later ones win:
/// - built-in defaults
/// - the `configuration/base` file (any format `config` understands)
/// - `APP_`-prefixed env variables, `__` separating the nesting levels
///
/// It fails only if a source is present but malformed, has values of the wrong type or a
/// `banner_width` above `MAX_BANNER_WIDTH`. Callers fall back to `Settings::default()`.
///
/// # Examples
///
/// ```rust
/// use data_collection::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let defaults = Settings::default();
    let mut config = Config::new();
    config.set_default(
        "application.banner_width",
        defaults.application.banner_width as i64,
    )?;
    config.set_default("telemetry.name", defaults.telemetry.name)?;
    config.set_default("telemetry.level", defaults.telemetry.level)?;

    config.merge(File::with_name("configuration/base").required(false))?;

    // E.g. `APP_TELEMETRY__LEVEL=debug` would set `Settings.telemetry.level`
    config.merge(Environment::with_prefix("app").separator("__"))?;

    validate(config.try_into()?)
}

fn validate(settings: Settings) -> Result<Settings, ConfigurationError> {
    let width = settings.application.banner_width;
    if width > MAX_BANNER_WIDTH {
        return Err(ConfigurationError::BannerTooWide {
            width,
            max: MAX_BANNER_WIDTH,
        });
    }
    Ok(settings)
}
