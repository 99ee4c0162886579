//! Path normalization shared by references and media files.

/// Canonicalizes a path-like string so references and media paths compare
/// equal regardless of slash direction, case, or a leading `./` or `/`.
///
/// Only a single leading `./` and then a single leading `/` are removed, in
/// that order. Parent segments (`../`) are left alone; suffix and basename
/// matching take care of them.
///
/// # Examples
///
/// ```rust
/// use unref_extract::normalize;
/// assert_eq!(normalize(r".\Images\Logo.PNG"), "images/logo.png");
/// assert_eq!(normalize("/assets/bg.jpg"), "assets/bg.jpg");
/// assert_eq!(normalize("../assets/bg.jpg"), "../assets/bg.jpg");
/// ```
pub fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.strip_prefix("./").unwrap_or(&path);
    let path = path.strip_prefix('/').unwrap_or(path);
    path.to_lowercase()
}

/// The final `/` separated segment of an already normalized path.
pub(crate) fn basename(normalized: &str) -> &str {
    normalized.rsplit_once('/').map_or(normalized, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("images/logo.png", "images/logo.png")]
    #[case("Images/Logo.PNG", "images/logo.png")]
    #[case("./images/logo.png", "images/logo.png")]
    #[case("/images/logo.png", "images/logo.png")]
    #[case("./images\\logo.png", "images/logo.png")]
    #[case(".\\images\\logo.png", "images/logo.png")]
    #[case("//cdn/logo.png", "/cdn/logo.png")]
    #[case("././logo.png", "./logo.png")]
    #[case("", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("images/logo.png", "logo.png")]
    #[case("logo.png", "logo.png")]
    #[case("images/", "")]
    #[case("../assets/bg.jpg", "bg.jpg")]
    fn test_basename(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(basename(input), expected);
    }
}
