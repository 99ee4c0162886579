use regex::Regex;
use std::sync::LazyLock;

// Attribute values are quoted with either quote style; the closing quote
// isn't required to match the opening one.
const QUOTED: &str = r#"["']([^"']+)["']"#;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

regex!(SRC_REGEX, format!(r"(?i)src={}", QUOTED).as_str());
regex!(HREF_REGEX, format!(r"(?i)href={}", QUOTED).as_str());
regex!(CSS_URL_REGEX, r#"(?i)url\(["']?([^"'()]+)["']?\)"#);
regex!(BACKGROUND_REGEX, r#"(?i)background["']?\s*:\s*["']?([^"'();]+)"#);
regex!(DATA_BACKGROUND_REGEX, format!(r"(?i)data-background={}", QUOTED).as_str());
regex!(DATA_DISPLACEMENT_REGEX, format!(r"(?i)data-displacement={}", QUOTED).as_str());
// `http:`, `data:`, `mailto:`... A single letter is more likely a Windows
// drive than a scheme.
regex!(SCHEME_REGEX, r"^[A-Za-z][A-Za-z0-9+.\-]+:");

/// Every pattern that may hold an asset path, in application order. Each has
/// exactly one capture group.
pub(crate) static REFERENCE_PATTERNS: [&LazyLock<Regex>; 6] = [
    &SRC_REGEX,
    &HREF_REGEX,
    &CSS_URL_REGEX,
    &BACKGROUND_REGEX,
    &DATA_BACKGROUND_REGEX,
    &DATA_DISPLACEMENT_REGEX,
];
