//! Platform detection.

/// Interpreter binary name for the current platform.
///
/// Windows installers register `python`; most Unix distributions only
/// ship `python3`.
pub fn default_interpreter() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Check if running in a CI environment.
///
/// Used by `main` to suppress the closing pause. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interpreter_matches_platform() {
        if cfg!(target_os = "windows") {
            assert_eq!(default_interpreter(), "python");
        } else {
            assert_eq!(default_interpreter(), "python3");
        }
    }
}
