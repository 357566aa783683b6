//! Route templates and the path matcher.
//!
//! A template is an ordered sequence of `/`-separated segments, each either a
//! literal or a `{name}` capture. Matching is segment-wise and pure: the
//! segment counts must be equal, literals compare byte-for-byte, and a
//! capture accepts any single segment verbatim. There are no wildcards,
//! greedy captures, or optional segments, so `/users/{id}` never matches
//! `/users/42/extra`, and `/users` never matches `/users/`.

use std::fmt;

/// One segment of a parsed [`Template`].
#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Capture(String),
}

/// A parsed route template, e.g. `/users/{id}`.
///
/// The raw template string, together with the method, is the registry's
/// identity key: two templates that differ only in capture names are
/// distinct routes.
#[derive(Clone, Debug)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string.
    ///
    /// The string is split on `/`. A segment wrapped in braces (`{name}`)
    /// captures; every other segment, the empty one included, is a literal.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .map(|segment| {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => Segment::Capture(name.to_owned()),
                    None => Segment::Literal(segment.to_owned()),
                }
            })
            .collect();
        Self { raw: raw.to_owned(), segments }
    }

    /// The raw template string as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Matches a concrete request path against this template.
    ///
    /// Returns the captured values on a match and `None` on any mismatch.
    /// An all-literal template yields an empty [`Captures`], which is still
    /// a match: `Some` versus `None` is the signal, never emptiness.
    pub fn captures(&self, path: &str) -> Option<Captures> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Capture(name) => {
                    captured.push((name.clone(), (*part).to_owned()));
                }
            }
        }
        Some(Captures(captured))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Named values captured from a request path, in template order.
///
/// Handed to the matched handler as its third argument.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Captures(Vec<(String, String)>);

impl Captures {
    /// Returns a captured value by name.
    ///
    /// A template may reuse a capture name (`/{x}/{x}`); lookups resolve to
    /// the last occurrence.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rfind(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Captured (name, value) pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the template had no capture segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_template_matches_exactly() {
        let template = Template::parse("/users");
        assert!(template.captures("/users").is_some());
        assert!(template.captures("/users/").is_none());
        assert!(template.captures("/user").is_none());
        assert!(template.captures("users").is_none());
    }

    #[test]
    fn literal_match_yields_empty_captures() {
        let captures = Template::parse("/health").captures("/health").unwrap();
        assert!(captures.is_empty());
        assert_eq!(captures.len(), 0);
    }

    #[test]
    fn capture_segment_takes_value_verbatim() {
        let captures = Template::parse("/users/{id}").captures("/users/42").unwrap();
        assert_eq!(captures.get("id"), Some("42"));
        assert_eq!(captures.len(), 1);
    }

    #[test]
    fn extra_segments_do_not_match() {
        let template = Template::parse("/users/{id}");
        assert!(template.captures("/users/42/extra").is_none());
        assert!(template.captures("/users").is_none());
    }

    #[test]
    fn mixed_literals_and_captures() {
        let template = Template::parse("/users/{id}/posts/{post_id}");
        let captures = template.captures("/users/7/posts/99").unwrap();
        assert_eq!(captures.get("id"), Some("7"));
        assert_eq!(captures.get("post_id"), Some("99"));
        assert!(template.captures("/users/7/comments/99").is_none());
    }

    #[test]
    fn capture_accepts_empty_segment() {
        // "/users//posts" still has three inner segments; the middle one is "".
        let captures = Template::parse("/users/{id}/posts")
            .captures("/users//posts")
            .unwrap();
        assert_eq!(captures.get("id"), Some(""));
    }

    #[test]
    fn braces_must_wrap_whole_segment() {
        // "{id" and "id}" are literals, not captures.
        assert!(Template::parse("/users/{id").captures("/users/42").is_none());
        assert!(Template::parse("/users/{id").captures("/users/{id").is_some());
    }

    #[test]
    fn repeated_capture_name_resolves_to_last() {
        let captures = Template::parse("/{x}/{x}").captures("/a/b").unwrap();
        assert_eq!(captures.get("x"), Some("b"));
        assert_eq!(captures.len(), 2);
    }

    #[test]
    fn iter_preserves_template_order() {
        let captures = Template::parse("/{a}/{b}").captures("/1/2").unwrap();
        let pairs: Vec<_> = captures.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
