use crate::core::StoreKind;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Default number of records shown by "Display First N Transactions"
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Load transactions into per-channel stores and explore them interactively
#[derive(Parser, Debug)]
#[command(name = "channel-ledger")]
#[command(about = "Compare linked and array transaction stores on a CSV export", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path; prompted for when omitted
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: Option<PathBuf>,

    /// Backing structure for the channel stores; prompted for when omitted
    #[arg(
        long = "store",
        value_name = "STORE",
        help = "Store implementation: 'linked' or 'array'"
    )]
    pub store: Option<StoreKind>,

    /// Number of records shown by the short listing
    #[arg(
        long = "display-limit",
        value_name = "COUNT",
        default_value_t = DEFAULT_DISPLAY_LIMIT,
        help = "Records shown by 'Display First N Transactions' (default: 10)"
    )]
    pub display_limit: usize,
}

/// Settings for the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    pub display_limit: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl CliArgs {
    /// Create a MenuConfig from CLI arguments
    ///
    /// A display limit of zero would make the short listing useless, so it
    /// falls back to the default with a warning.
    pub fn to_menu_config(&self) -> MenuConfig {
        if self.display_limit == 0 {
            warn!(
                "display limit must be positive, using default {}",
                DEFAULT_DISPLAY_LIMIT
            );
            return MenuConfig::default();
        }
        MenuConfig {
            display_limit: self.display_limit,
        }
    }
}
