use std::collections::BTreeMap;

/// Turns `["aaa=bbb", "xxx=yyy"]` into `{aaa: bbb, xxx: yyy}`.
///
/// Only the first `=` separates key from value. Elements without `=` are
/// skipped and later duplicates overwrite earlier ones.
pub fn split_equality<I, S>(elements: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = BTreeMap::new();
    for element in elements {
        if let Some((key, value)) = element.as_ref().split_once('=') {
            pairs.insert(key.to_string(), value.to_string());
        }
    }
    pairs
}

/// Parses `NETWORK` or `NETWORK=ADDRESS` into a single-entry map.
pub fn get_networks(network: &str) -> BTreeMap<String, String> {
    let parts: Vec<&str> = network.split('=').collect();
    let (name, address) = match parts.as_slice() {
        [name, address] => (*name, *address),
        _ => (network, ""),
    };
    let mut networks = BTreeMap::new();
    if !name.is_empty() {
        networks.insert(name.to_string(), address.to_string());
    }
    networks
}
