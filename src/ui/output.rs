//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show banners, command lines, and durations.
    Verbose,
    /// Show banners; pip writes straight to the console.
    #[default]
    Normal,
    /// Capture pip output behind a spinner; show it only on failure.
    Quiet,
}

impl OutputMode {
    /// Resolve the mode from the `--verbose` / `--quiet` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if child processes should write directly to the console.
    pub fn streams_command_output(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows command lines and timings.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Quiet)
    }
}
