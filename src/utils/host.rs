/// Returns the host name of this machine, or an empty string if the OS
/// refuses to tell.
pub fn get_hostname() -> String {
    match whoami::fallible::hostname() {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!("hostname lookup failed: {e}");
            String::new()
        }
    }
}
