//! End-to-end tests against a fake interpreter placed on PATH.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pdfutil-setup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Installs the Python packages"))
        .stdout(predicate::str::contains("--no-pause"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pdfutil-setup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_package_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pdfutil-setup"));
    cmd.arg("numpy");
    cmd.assert().failure();
    Ok(())
}

#[cfg(unix)]
mod with_fake_python {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const EXPECTED_CALLS: &str = "\
--version
-m pip install --upgrade pip
-m pip install pypdf
-m pip install Pillow
-m pip install msoffcrypto-tool
";

    /// A PATH directory holding a `python3` script that logs its arguments.
    struct FakePython {
        temp: TempDir,
    }

    impl FakePython {
        /// `fail_on` is a shell `case` pattern; matching invocations exit 1.
        fn new(fail_on: Option<&str>) -> Self {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join("bin");
            fs::create_dir_all(&bin).unwrap();

            let log = temp.path().join("calls.log");
            let fail_case = fail_on
                .map(|pattern| format!("case \"$*\" in {}) exit 1;; esac\n", pattern))
                .unwrap_or_default();
            let script = format!(
                "#!/bin/sh\n\
                 echo \"$*\" >> \"{}\"\n\
                 if [ \"$1\" = \"--version\" ]; then echo \"Python 3.12.1\"; exit 0; fi\n\
                 {}\
                 exit 0\n",
                log.display(),
                fail_case
            );

            let python = bin.join("python3");
            fs::write(&python, script).unwrap();
            fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

            Self { temp }
        }

        fn bin_dir(&self) -> PathBuf {
            self.temp.path().join("bin")
        }

        fn calls(&self) -> String {
            fs::read_to_string(self.temp.path().join("calls.log")).unwrap_or_default()
        }
    }

    fn setup_cmd(path: &Path) -> Command {
        let mut cmd = Command::new(cargo_bin("pdfutil-setup"));
        cmd.env("PATH", path)
            .env("CI", "true")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn installs_packages_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let python = FakePython::new(None);

        setup_cmd(&python.bin_dir())
            .assert()
            .success()
            .stdout(predicate::str::contains("Found Python 3.12.1"))
            .stdout(predicate::str::contains("[1/4]"))
            .stdout(predicate::str::contains("Installing Pillow (image handling)"))
            .stdout(predicate::str::contains("Installation complete!"));

        assert_eq!(python.calls(), EXPECTED_CALLS);
        Ok(())
    }

    #[test]
    fn missing_interpreter_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
        let empty = TempDir::new()?;

        setup_cmd(empty.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Python is not installed"))
            .stdout(predicate::str::contains("python.org"))
            .stdout(predicate::str::contains("Installation complete!").not());
        Ok(())
    }

    #[test]
    fn failing_version_check_attempts_no_install() -> Result<(), Box<dyn std::error::Error>> {
        let python = FakePython::new(None);
        let script = fs::read_to_string(python.bin_dir().join("python3"))?;
        let failing = script.replacen("echo \"Python 3.12.1\"; exit 0", "exit 1", 1);
        fs::write(python.bin_dir().join("python3"), failing)?;

        setup_cmd(&python.bin_dir()).assert().code(1);

        assert_eq!(python.calls(), "--version\n");
        Ok(())
    }

    #[test]
    fn failed_install_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let python = FakePython::new(Some("*Pillow*"));

        setup_cmd(&python.bin_dir())
            .assert()
            .success()
            .stdout(predicate::str::contains("Installation complete!"))
            .stdout(predicate::str::contains("1 of 4 steps reported an error"));

        assert_eq!(python.calls(), EXPECTED_CALLS);
        Ok(())
    }

    #[test]
    fn repeated_runs_make_the_same_calls() -> Result<(), Box<dyn std::error::Error>> {
        let python = FakePython::new(None);

        setup_cmd(&python.bin_dir()).assert().success();
        setup_cmd(&python.bin_dir()).assert().success();

        assert_eq!(python.calls(), EXPECTED_CALLS.repeat(2));
        Ok(())
    }

    #[test]
    fn presentation_flags_do_not_change_calls() -> Result<(), Box<dyn std::error::Error>> {
        for flag in ["--quiet", "--verbose", "--no-color", "--no-pause", "--debug"] {
            let python = FakePython::new(None);

            setup_cmd(&python.bin_dir()).arg(flag).assert().success();

            assert_eq!(python.calls(), EXPECTED_CALLS, "flag {}", flag);
        }
        Ok(())
    }

    #[test]
    fn quiet_mode_shows_captured_error_output() -> Result<(), Box<dyn std::error::Error>> {
        let python = FakePython::new(Some("*pypdf*"));
        let script = fs::read_to_string(python.bin_dir().join("python3"))?;
        let noisy = script.replacen(
            "*pypdf*) exit 1",
            "*pypdf*) echo \"ERROR: No matching distribution\" >&2; exit 1",
            1,
        );
        fs::write(python.bin_dir().join("python3"), noisy)?;

        setup_cmd(&python.bin_dir())
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("pypdf failed"))
            .stdout(predicate::str::contains("No matching distribution"));
        Ok(())
    }
}
