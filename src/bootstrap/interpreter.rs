//! Interpreter invocability check.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SetupError};
use crate::shell::{CommandOptions, CommandRunner, Invocation};

/// Regex for the version in `python --version` output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+\.\d+(?:\.\d+)?)").expect("VERSION_REGEX must compile")
});

/// An interpreter that answered `--version` successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Program name the interpreter was invoked as.
    pub program: String,
    /// Reported version, if the output could be parsed.
    pub version: Option<String>,
}

impl InterpreterInfo {
    /// Human-readable description, e.g. "Python 3.12.1".
    pub fn describe(&self) -> String {
        match &self.version {
            Some(version) => format!("Python {}", version),
            None => format!("Python ({})", self.program),
        }
    }
}

/// The invocation used to check the interpreter.
pub fn version_invocation(program: &str) -> Invocation {
    Invocation::new(program).arg("--version")
}

/// Extract `X.Y[.Z]` from version output.
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Verify the interpreter can be invoked.
///
/// Fails with [`SetupError::InterpreterNotFound`] when the program cannot be
/// spawned or its version check exits non-zero.
pub fn check_interpreter(program: &str, runner: &mut dyn CommandRunner) -> Result<InterpreterInfo> {
    let invocation = version_invocation(program);
    let result = runner
        .run(&invocation, &CommandOptions::captured())
        .map_err(|e| SetupError::InterpreterNotFound {
            interpreter: program.to_string(),
            message: e.to_string(),
        })?;

    if !result.success {
        return Err(SetupError::InterpreterNotFound {
            interpreter: program.to_string(),
            message: format!("'{}' exited with code {:?}", invocation, result.exit_code),
        });
    }

    // Python 2 prints its version on stderr.
    let version = parse_version(&result.stdout).or_else(|| parse_version(&result.stderr));
    tracing::debug!("Interpreter '{}' reports version {:?}", program, version);

    Ok(InterpreterInfo {
        program: program.to_string(),
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn parse_version_full() {
        assert_eq!(parse_version("Python 3.12.1\n"), Some("3.12.1".to_string()));
    }

    #[test]
    fn parse_version_two_components() {
        assert_eq!(parse_version("Python 3.13"), Some("3.13".to_string()));
    }

    #[test]
    fn parse_version_prerelease_keeps_numeric_part() {
        assert_eq!(parse_version("Python 3.14.0rc1"), Some("3.14.0".to_string()));
    }

    #[test]
    fn parse_version_unrecognized() {
        assert_eq!(parse_version("command not found"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn check_interpreter_success_parses_stdout() {
        let mut runner = MockRunner::new();
        runner.set_stdout("python3 --version", "Python 3.11.4\n");

        let info = check_interpreter("python3", &mut runner).unwrap();

        assert_eq!(info.program, "python3");
        assert_eq!(info.version.as_deref(), Some("3.11.4"));
        assert_eq!(info.describe(), "Python 3.11.4");
        assert_eq!(runner.command_lines(), vec!["python3 --version"]);
    }

    #[test]
    fn check_interpreter_falls_back_to_stderr() {
        let mut runner = MockRunner::new();
        runner.set_stderr("python --version", "Python 2.7.18\n");

        let info = check_interpreter("python", &mut runner).unwrap();
        assert_eq!(info.version.as_deref(), Some("2.7.18"));
    }

    #[test]
    fn check_interpreter_without_parsable_version_still_passes() {
        let mut runner = MockRunner::new();
        let info = check_interpreter("python3", &mut runner).unwrap();
        assert_eq!(info.version, None);
        assert_eq!(info.describe(), "Python (python3)");
    }

    #[test]
    fn check_interpreter_missing_binary() {
        let mut runner = MockRunner::new();
        runner.set_missing("python3");

        let err = check_interpreter("python3", &mut runner).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InterpreterNotFound { ref interpreter, .. } if interpreter == "python3"
        ));
    }

    #[test]
    fn check_interpreter_nonzero_exit() {
        // Windows' app-execution alias for python exits 9009 when Python isn't installed.
        let mut runner = MockRunner::new();
        runner.set_exit_code("python --version", 9009);

        let err = check_interpreter("python", &mut runner).unwrap_err();
        assert!(err.to_string().contains("9009"));
    }
}
