#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Test helper for running skyarea commands with less boilerplate
pub struct SkyareaTest {
    cmd: Command,
}

pub fn skyarea_command() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skyarea"));
    cmd.env_remove("RUST_LOG");
    cmd
}

impl SkyareaTest {
    pub fn new() -> Self {
        Self {
            cmd: skyarea_command(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Assert the command succeeds and contains text in stdout
    pub fn assert_success_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .success()
            .stdout(predicate::str::contains(text))
    }

    /// Assert the command fails with exit code 1 and the given text on stderr
    pub fn assert_failure_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(text))
    }

    /// Run and return stdout as a string
    pub fn stdout(mut self) -> String {
        let output = self.cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }
}

/// CSV output without headers, for parsing numbers back out
pub fn csv_values<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let stdout = SkyareaTest::new()
        .args(["--format=csv", "--no-headers"])
        .args(args)
        .stdout();
    stdout.trim_end().split(',').map(str::to_string).collect()
}

/// Area and area fraction from a CSV run
pub fn area_and_fraction<I, S>(args: I) -> (f64, f64)
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let values = csv_values(args);
    (values[0].parse().unwrap(), values[1].parse().unwrap())
}
