use std::collections::{BTreeMap, HashMap};

use clap::ArgMatches;
use serde_json::Value;

use crate::constants::EXTRA_RESOURCES_FLAG;
use crate::error::ParseError;

/// Anything that can hand out a string flag by name.
pub trait FlagSource {
    /// Value of the flag, or `None` when it is unset or unknown.
    fn string_flag(
        &self,
        name: &str,
    ) -> Option<String>;
}

impl FlagSource for ArgMatches {
    fn string_flag(
        &self,
        name: &str,
    ) -> Option<String> {
        self.try_get_one::<String>(name).ok().flatten().cloned()
    }
}

impl FlagSource for HashMap<String, String> {
    fn string_flag(
        &self,
        name: &str,
    ) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FlagSource for BTreeMap<String, String> {
    fn string_flag(
        &self,
        name: &str,
    ) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Parses the JSON object passed as `--extra-resources`.
///
/// Unset or empty flag, or a JSON `null`, means no extra resources.
pub fn parse_extra_resources<F>(flags: &F) -> Result<BTreeMap<String, Value>, ParseError>
where
    F: FlagSource + ?Sized,
{
    match flags.string_flag(EXTRA_RESOURCES_FLAG) {
        Some(raw) if !raw.is_empty() => {
            let parsed: Option<BTreeMap<String, Value>> = serde_json::from_str(&raw)?;
            Ok(parsed.unwrap_or_default())
        }
        _ => Ok(BTreeMap::new()),
    }
}
