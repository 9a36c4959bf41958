// Centralized flag names, exit codes & default values
pub const EXTRA_RESOURCES_FLAG: &str = "extra-resources";
pub const GENERIC_FAILURE_EXIT_CODE: i32 = -1;
pub const INVALID_SIZE_EXIT_CODE: i32 = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const LOG_ENV_VAR: &str = "PODCTL_LOG";
pub const STDIN_PATH: &str = "-";
