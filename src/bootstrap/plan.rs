//! The fixed sequence of setup steps.

use crate::shell::Invocation;

use super::packages::{Package, PACKAGES};

/// One subprocess run by the bootstrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// `pip install --upgrade pip`.
    UpgradePackageManager,
    /// `pip install <package>`.
    Install(&'static Package),
}

impl SetupStep {
    /// Short banner title.
    pub fn title(&self) -> String {
        match self {
            Self::UpgradePackageManager => "Upgrading pip".to_string(),
            Self::Install(package) => format!("Installing {} ({})", package.name, package.purpose),
        }
    }

    /// Name used in summaries and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpgradePackageManager => "pip",
            Self::Install(package) => package.name,
        }
    }

    /// Command line for this step, run through the given interpreter.
    pub fn invocation(&self, interpreter: &str) -> Invocation {
        let pip = Invocation::new(interpreter).args(["-m", "pip", "install"]);
        match self {
            Self::UpgradePackageManager => pip.args(["--upgrade", "pip"]),
            Self::Install(package) => pip.arg(package.name),
        }
    }
}

/// All steps in execution order: the pip upgrade, then each package.
pub fn setup_steps() -> Vec<SetupStep> {
    std::iter::once(SetupStep::UpgradePackageManager)
        .chain(PACKAGES.iter().map(SetupStep::Install))
        .collect()
}
