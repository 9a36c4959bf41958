mod common;
use assert_fs::prelude::*;
use common::{deploy_args, podctl};
use predicates::str::contains;

#[test]
fn missing_required_flag_is_usage_error() {
    podctl()
        .args(["deploy", "--image", "nginx"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_memory_has_its_own_code() {
    podctl()
        .args(deploy_args())
        .args(["--memory", "12XB"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("invalid --memory value"))
        .stderr(contains(r#"invalid size: "12XB""#));
}

#[cfg(unix)]
#[test]
fn bad_extra_resources_is_generic_failure() {
    podctl()
        .args(deploy_args())
        .args(["--extra-resources", "{bad json"])
        .assert()
        .failure()
        .code(255)
        .stderr(contains("invalid --extra-resources value"));
}

#[cfg(unix)]
#[test]
fn template_syntax_error_is_generic_failure() {
    podctl()
        .args(["render"])
        .write_stdin("a={{ oops")
        .assert()
        .failure()
        .code(255)
        .stderr(contains("template could not be parsed"));
}

#[cfg(unix)]
#[test]
fn missing_env_file_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.child("nope.env");

    podctl()
        .args(deploy_args())
        .args(["--env-file", missing.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(255)
        .stderr(contains("reading env file"));
}

#[test]
fn invalid_log_filter_falls_back() {
    podctl()
        .args(["--log-level", "podctl=loud", "hostname"])
        .assert()
        .success()
        .stderr(contains("invalid log filter"));
}
