//! CLI command builders for tests

use assert_cmd::Command;

/// Get a Command for the `herald` binary with the host IP probe aimed at loopback
///
/// Tests never depend on an outbound route this way.
///
/// # Example
///
/// ```rust,no_run
/// use herald_test_helpers::cli::herald_command;
///
/// herald_command()
///     .arg("--version")
///     .assert()
///     .success();
/// ```
pub fn herald_command() -> Command {
    let mut cmd = command_for("herald");
    cmd.args(["--probe-addr", "127.0.0.1:9"]);
    cmd
}

/// Get a Command for a specific binary with a clean environment
///
/// `RUST_BACKTRACE` is cleared to keep panic output stable.
#[allow(deprecated)]
pub fn command_for(bin_name: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin_name)
        .unwrap_or_else(|_| panic!("Failed to find {} binary", bin_name));
    cmd.env_remove("RUST_BACKTRACE");
    cmd
}
