use std::sync::LazyLock;

use regex::Regex;

static PROFILE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?t\.me/[A-Za-z0-9_]{3,}$").expect("profile link pattern")
});

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)t\.me/(\+?[A-Za-z0-9_]+)").expect("username pattern"));

/// Whether a decoded QR payload is a Telegram profile link we accept:
/// `t.me/<username>` with an optional http(s) scheme and a username of at
/// least three word characters.
///
/// Note the asymmetry with [`extract_username`]: this pattern does not
/// accept `+`-prefixed invite links even though extraction does. Kept as
/// shipped.
pub fn is_valid_profile_link(input: &str) -> bool {
    PROFILE_LINK.is_match(input.trim())
}

/// Pull the username out of a profile link, invite prefix included.
/// Returns `None` when the input has no `t.me/` component.
pub fn extract_username(input: &str) -> Option<&str> {
    USERNAME
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
