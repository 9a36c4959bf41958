#![allow(dead_code)]
use assert_cmd::Command;
use podctl::constants::LOG_ENV_VAR;

/// The binary under test, isolated from the caller's log settings.
pub fn podctl() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("podctl");
    cmd.env_remove(LOG_ENV_VAR);
    cmd
}

/// Minimal valid `deploy` invocation; append flags to it.
pub fn deploy_args() -> Vec<&'static str> {
    vec!["deploy", "--name", "web", "--image", "nginx:1.27", "--node", "n1"]
}
