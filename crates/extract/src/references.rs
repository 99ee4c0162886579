//! Candidate asset references pulled out of markup, stylesheets and scripts.

use std::collections::HashSet;

use tracing::instrument;

use crate::consts;
use crate::normalize::{basename, normalize};

/// The normalized set of path-like strings found in one source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct References {
    paths: HashSet<String>,
    basenames: HashSet<String>,
}
impl References {
    /// Runs every reference pattern over `content` and keeps the local,
    /// non-empty captures in normalized form.
    ///
    /// ```rust
    /// use unref_extract::References;
    /// let refs = References::extract(r#"<img src="./Images/Logo.png"><a href="https://example.com/a.png">"#);
    /// assert!(refs.contains("images/logo.png"));
    /// assert_eq!(refs.len(), 1);
    /// ```
    #[instrument(skip(content), fields(content_size = content.len()))]
    pub fn extract(content: &str) -> Self {
        let mut references = Self::default();
        for pattern in consts::REFERENCE_PATTERNS {
            for captures in pattern.captures_iter(content) {
                if let Some(value) = captures.get(1)
                    && let Some(value) = candidate(value.as_str())
                {
                    references.insert(normalize(value));
                }
            }
        }
        tracing::trace!(count = references.len(), "Extracted references");
        references
    }

    fn insert(&mut self, reference: String) {
        // `/` and `./` normalize to nothing, and every path ends with "".
        if reference.is_empty() {
            return;
        }
        let name = basename(&reference);
        if !name.is_empty() {
            self.basenames.insert(name.to_string());
        }
        self.paths.insert(reference);
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.paths.contains(reference)
    }

    /// Whether any reference has `name` as its final path segment.
    pub fn contains_basename(&self, name: &str) -> bool {
        self.basenames.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
impl<S: Into<String>> FromIterator<S> for References {
    /// Builds a set from raw values, normalizing each one. No filtering is
    /// applied; see [`References::extract`] for that.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut references = Self::default();
        for value in iter {
            let value: String = value.into();
            references.insert(normalize(&value));
        }
        references
    }
}

/// Trims a captured value and rejects anything that can't be a local file:
/// empty values, absolute URLs, protocol-relative URLs and fragments.
fn candidate(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.starts_with("//") || value.starts_with('#') || consts::SCHEME_REGEX.is_match(value) {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extracted(content: &str) -> Vec<String> {
        let mut refs: Vec<_> = References::extract(content).iter().map(str::to_string).collect();
        refs.sort();
        refs
    }

    #[rstest]
    #[case(r#"<img src="images/logo.png">"#, &["images/logo.png"])]
    #[case(r#"<img SRC='Images/Logo.png'>"#, &["images/logo.png"])]
    #[case(r#"<link href="/css/style.css" rel="stylesheet">"#, &["css/style.css"])]
    #[case(r#"body { background-image: url('../assets/bg.jpg'); }"#, &["../assets/bg.jpg"])]
    #[case(r#".hero { background-image: url(img/hero.webp) }"#, &["img/hero.webp"])]
    #[case(r#".hero { background: url("img/hero.webp") no-repeat; }"#, &["img/hero.webp", "url"])]
    #[case(r#"{"background": "img/hero.webp"}"#, &["img/hero.webp"])]
    #[case(r#"<div data-background="img/slide-1.jpg"></div>"#, &["img/slide-1.jpg"])]
    #[case(r#"<div data-displacement="img/pattern.png"></div>"#, &["img/pattern.png"])]
    #[case(r#"<video src=" ./media/intro.mp4 "></video>"#, &["media/intro.mp4"])]
    #[case(r#"<img src="a\b\c.png">"#, &["a/b/c.png"])]
    fn test_extract(#[case] content: &str, #[case] expected: &[&str]) {
        assert_eq!(extracted(content), expected);
    }

    #[rstest]
    #[case(r#"<img src="http://cdn.example.com/img.png">"#)]
    #[case(r#"<img src="HTTPS://cdn.example.com/img.png">"#)]
    #[case(r#"<img src="//cdn.example.com/img.png">"#)]
    #[case(r##"<a href="#top">"##)]
    #[case(r#"<a href="mailto:someone@example.com">"#)]
    #[case(r#"<img src="data:image/png;base64,AAAA">"#)]
    #[case(r#".box { background: #fff; }"#)]
    #[case(r#"<img src="   ">"#)]
    #[case(r#"<a href="/">Home</a>"#)]
    #[case(r#"<img src="./">"#)]
    #[case(r#"<a href=".//">"#)]
    fn test_discarded(#[case] content: &str) {
        assert!(References::extract(content).is_empty(), "expected nothing from {content}");
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = r#"<img src="logo.png"><img src="./logo.png"><img src="/LOGO.png">"#;
        assert_eq!(extracted(content), ["logo.png"]);
    }

    #[test]
    fn test_multiple_patterns() {
        let content = r#"
            <link href="css/main.css">
            <section data-background="img/bg.jpg" style="background: url(img/other.png)">
            <script src="js/app.js"></script>
        "#;
        let refs = References::extract(content);
        assert!(refs.contains("css/main.css"));
        assert!(refs.contains("img/bg.jpg"));
        assert!(refs.contains("img/other.png"));
        assert!(refs.contains("js/app.js"));
        assert!(refs.contains_basename("bg.jpg"));
    }

    #[test]
    fn test_from_iter_normalizes() {
        let refs: References = ["./A/B.png", "/c.JPG"].into_iter().collect();
        assert!(refs.contains("a/b.png"));
        assert!(refs.contains("c.jpg"));
        assert!(refs.contains_basename("b.png"));
    }

    #[test]
    fn test_from_iter_drops_empty() {
        let refs: References = ["/", "./", "logo.png"].into_iter().collect();
        assert_eq!(refs.len(), 1);
        assert!(!refs.contains(""));
    }
}
