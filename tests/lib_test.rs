//! Library integration tests.

use pdfutil_setup::bootstrap::{Bootstrapper, PACKAGES};
use pdfutil_setup::shell::MockRunner;
use pdfutil_setup::ui::{MockUI, OutputMode};
use pdfutil_setup::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::InterpreterNotFound {
        interpreter: "python".into(),
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pdfutil_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pdfutil_setup::cli::Cli;

    let cli = Cli::parse_from(["pdfutil-setup", "--quiet", "--no-pause"]);
    assert!(cli.no_pause);
    assert_eq!(cli.output_mode(), OutputMode::Quiet);
}

#[test]
fn package_list_is_public_and_fixed() {
    let names: Vec<_> = PACKAGES.iter().map(|p| p.name).collect();
    assert_eq!(names, ["pypdf", "Pillow", "msoffcrypto-tool"]);
}

#[test]
fn bootstrapper_runs_against_mocks() {
    let mut runner = MockRunner::new();
    runner.set_stdout("python --version", "Python 3.10.12");
    runner.set_exit_code("python -m pip install msoffcrypto-tool", 1);
    let mut ui = MockUI::new();

    let report = Bootstrapper::new("python")
        .run(&mut runner, &mut ui)
        .unwrap();

    assert_eq!(
        runner.command_lines(),
        vec![
            "python --version",
            "python -m pip install --upgrade pip",
            "python -m pip install pypdf",
            "python -m pip install Pillow",
            "python -m pip install msoffcrypto-tool",
        ]
    );
    assert_eq!(report.interpreter.version.as_deref(), Some("3.10.12"));
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn bootstrapper_reports_missing_interpreter() {
    let mut runner = MockRunner::new();
    runner.set_missing("python");
    let mut ui = MockUI::new();

    let err = Bootstrapper::new("python")
        .run(&mut runner, &mut ui)
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert_eq!(runner.calls().len(), 1);
}
