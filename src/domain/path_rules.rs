//! Path classification for the short-link filter.
//!
//! A single ordered rule table decides which paths are never looked up.
//! Anything that survives the table is checked against the short code shape.
//!
//! | order | matcher   | default values                                             |
//! |-------|-----------|------------------------------------------------------------|
//! | 1     | exact     | `/`                                                        |
//! | 2     | prefix    | `/static`, `/api`, `/work`, `/url-shortner`                |
//! | 3     | exact     | `/favicon.ico`, `/robots.txt`, `/sitemap.xml`              |
//! | 4     | extension | `ico png jpg jpeg svg gif webp css js woff woff2 ttf eot`  |
//! | 5     | shape     | `/` followed by exactly six `[a-z0-9]`                     |

use regex::Regex;

use crate::domain::short_code::ShortCode;

/// Prefixes owned by this site's own routes and assets.
pub const DEFAULT_RESERVED_PREFIXES: &[&str] = &["/static", "/api", "/work", "/url-shortner"];

/// Static files served at fixed paths.
pub const DEFAULT_STATIC_FILES: &[&str] = &["/favicon.ico", "/robots.txt", "/sitemap.xml"];

/// File extensions that always denote a static asset.
pub const DEFAULT_STATIC_EXTENSIONS: &[&str] = &[
    "ico", "png", "jpg", "jpeg", "svg", "gif", "webp", "css", "js", "woff", "woff2", "ttf", "eot",
];

/// One entry in the skip table.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Path equals the value.
    Exact(String),
    /// Path starts with the value (plain string prefix, not segment-aware).
    Prefix(String),
    /// Path ends with `.<ext>` for one of the extensions; `None` never matches.
    Extension(Option<Regex>),
}

impl Matcher {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Builds an extension matcher; an empty list never matches.
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = extensions
            .into_iter()
            .map(|ext| regex::escape(ext.as_ref()))
            .collect();

        if alternatives.is_empty() {
            return Self::Extension(None);
        }

        let pattern = format!(r"\.(?:{})$", alternatives.join("|"));
        // Escaped alternatives always form a valid pattern.
        Self::Extension(Some(
            Regex::new(&pattern).expect("escaped extension pattern"),
        ))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(value) => path == value,
            Self::Prefix(value) => path.starts_with(value.as_str()),
            Self::Extension(re) => re.as_ref().is_some_and(|re| re.is_match(path)),
        }
    }
}

/// Outcome of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Matched a skip rule; never looked up.
    Skip,
    /// Shaped like a short code; pending external confirmation.
    Candidate(ShortCode),
    /// Passed the skip table but has the wrong length or characters.
    NotShortCode,
}

/// Ordered skip table followed by the short code shape check.
#[derive(Debug, Clone)]
pub struct PathRules {
    skip: Vec<Matcher>,
}

impl PathRules {
    pub fn new(skip: Vec<Matcher>) -> Self {
        Self { skip }
    }

    /// Default table extended with site-specific reserved prefixes.
    pub fn with_extra_prefixes<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rules = Self::default();
        let at = 1 + DEFAULT_RESERVED_PREFIXES.len();
        for (offset, prefix) in extra.into_iter().enumerate() {
            rules.skip.insert(at + offset, Matcher::prefix(prefix));
        }
        rules
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.skip
    }

    pub fn classify(&self, path: &str) -> PathClass {
        if self.skip.iter().any(|m| m.matches(path)) {
            return PathClass::Skip;
        }

        match ShortCode::from_path(path) {
            Some(code) => PathClass::Candidate(code),
            None => PathClass::NotShortCode,
        }
    }
}

impl Default for PathRules {
    fn default() -> Self {
        let mut skip = vec![Matcher::exact("/")];
        skip.extend(DEFAULT_RESERVED_PREFIXES.iter().copied().map(Matcher::prefix));
        skip.extend(DEFAULT_STATIC_FILES.iter().copied().map(Matcher::exact));
        skip.push(Matcher::extensions(DEFAULT_STATIC_EXTENSIONS));

        Self { skip }
    }
}
