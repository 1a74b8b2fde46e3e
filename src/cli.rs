use clap::Parser;
use std::path::PathBuf;

use crate::error::DepMoleError;
use crate::report::{DisplayMode, Selection, Status, TypeFilter};

/// Scan, verify, and report your npm dependencies.
#[derive(Debug, Parser)]
#[command(name = "dep-mole", version, about)]
pub struct Args {
    /// Project root containing package.json
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Check the reported packages against the npm registry
    #[arg(long)]
    pub verify: bool,

    /// Report every dependency type (the default)
    #[arg(long)]
    pub all: bool,

    /// Report "dependencies" only
    #[arg(long)]
    pub prod: bool,

    /// Report "devDependencies" only
    #[arg(long)]
    pub dev: bool,

    /// Report "peerDependencies" only
    #[arg(long)]
    pub peer: bool,

    /// Show only packages that are declared, used and installed
    #[arg(long)]
    pub healthy: bool,

    /// Show only declared packages never imported from source
    #[arg(long)]
    pub unused: bool,

    /// Show only declared packages absent from node_modules
    #[arg(long)]
    pub notinstalled: bool,

    /// Show only packages imported from source but not declared
    #[arg(long)]
    pub missing: bool,

    /// Group the report by manifest section instead of health status
    #[arg(long)]
    pub flat: bool,
}

impl Args {
    /// Validates the flag combination and resolves it into a `Selection`.
    ///
    /// The dependency type flags are mutually exclusive with each other,
    /// `--all` included, and `--flat` is mutually exclusive with every
    /// status flag. Status flags combine freely; asking for none of them
    /// means asking for all of them.
    ///
    /// # Returns
    ///
    /// Returns `Err(DepMoleError::InvalidOptionCombination)` for any
    /// rejected combination, so conflicts exit like every other error of
    /// this tool rather than through the argument parser.
    pub fn selection(&self) -> Result<Selection, DepMoleError> {
        let type_flags = [
            (self.all, "--all"),
            (self.prod, "--prod"),
            (self.dev, "--dev"),
            (self.peer, "--peer"),
        ];
        let picked: Vec<&str> = type_flags
            .iter()
            .filter(|(given, _)| *given)
            .map(|(_, flag)| *flag)
            .collect();
        if picked.len() > 1 {
            return Err(DepMoleError::InvalidOptionCombination {
                message: format!(
                    "only one dependency type filter may be given (saw {})",
                    picked.join(", ")
                ),
            });
        }

        let statuses = self.statuses();
        if self.flat && !statuses.is_empty() {
            return Err(DepMoleError::InvalidOptionCombination {
                message: "--flat cannot be combined with --healthy, --unused, --notinstalled or --missing"
                    .to_string(),
            });
        }

        let type_filter = if self.prod {
            TypeFilter::Prod
        } else if self.dev {
            TypeFilter::Dev
        } else if self.peer {
            TypeFilter::Peer
        } else {
            TypeFilter::All
        };
        let mode = if self.flat {
            DisplayMode::Flat
        } else if statuses.is_empty() {
            DisplayMode::Status(Status::ALL.to_vec())
        } else {
            DisplayMode::Status(statuses)
        };

        Ok(Selection { type_filter, mode })
    }

    fn statuses(&self) -> Vec<Status> {
        let mut statuses = Vec::new();
        if self.healthy {
            statuses.push(Status::Healthy);
        }
        if self.unused {
            statuses.push(Status::Unused);
        }
        if self.notinstalled {
            statuses.push(Status::NotInstalled);
        }
        if self.missing {
            statuses.push(Status::Missing);
        }
        statuses
    }
}
