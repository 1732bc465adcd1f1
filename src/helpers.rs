/// Proxy default from the process environment, checking the conventional
/// lower-case variable first and the upper-case spelling second.
///
/// Empty variables count as unset, matching how the builders treat empty
/// proxy strings.
pub fn proxy_from_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| {
            std::env::var(name.to_uppercase())
                .ok()
                .filter(|value| !value.is_empty())
        })
}
