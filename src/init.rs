use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

/// Settings for the crate's own diagnostics output.
///
/// The logger reports sink write failures and shutdown problems through
/// `tracing`. These settings control whether, and at which verbosity, those
/// diagnostics are printed.
///
/// **Fields**
/// - `level`: most verbose `tracing` level that gets printed.
/// - `enable_stderr`: if `false`, a subscriber is still installed but
///   nothing is printed.
#[derive(Clone, Debug)]
pub struct DiagnosticsConfig {
    pub level: Level,
    pub enable_stderr: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            enable_stderr: true,
        }
    }
}

/// Install a global `tracing` subscriber that prints diagnostics to stderr.
///
/// **Returns**
/// - `Err(..)` if another global subscriber was already installed.
pub fn init_diagnostics_with_config(config: DiagnosticsConfig) -> Result<(), SetGlobalDefaultError> {
    let filter = if config.enable_stderr {
        LevelFilter::from_level(config.level)
    } else {
        LevelFilter::OFF
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);
    let subscriber = Registry::default().with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
}

/// Equivalent to [`init_diagnostics_with_config`] with
/// [`DiagnosticsConfig::default`].
pub fn init_diagnostics() -> Result<(), SetGlobalDefaultError> {
    init_diagnostics_with_config(DiagnosticsConfig::default())
}
