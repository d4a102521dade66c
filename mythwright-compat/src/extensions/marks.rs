//! Baseline mark types.
//!
//! Marks wrap text runs: bold → `<strong>`, italic → `<em>`, strike → `<s>`,
//! underline → `<u>`, code → `<code>`, link → `<a>`.

use super::{match_tags, MarkExtension, MarkupElement, MarkupSpec};
use crate::tree::Attrs;
use serde_json::Value;
use url::Url;

pub struct Bold;

impl MarkExtension for Bold {
    fn name(&self) -> &str {
        "bold"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["strong", "b"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("strong")
    }
}

pub struct Italic;

impl MarkExtension for Italic {
    fn name(&self) -> &str {
        "italic"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["em", "i"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("em")
    }
}

pub struct Strike;

impl MarkExtension for Strike {
    fn name(&self) -> &str {
        "strike"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["s", "del", "strike"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("s")
    }
}

pub struct Underline;

impl MarkExtension for Underline {
    fn name(&self) -> &str {
        "underline"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["u"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("u")
    }
}

pub struct Code;

impl MarkExtension for Code {
    fn name(&self) -> &str {
        "code"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["code"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("code")
    }
}

/// Hyperlinks. Only hrefs with a safe scheme (or relative ones) are kept.
pub struct Link;

impl Link {
    const ALLOWED_SCHEMES: [&'static str; 10] = [
        "http", "https", "ftp", "ftps", "mailto", "tel", "callto", "sms", "cid", "xmpp",
    ];
    const REL: &'static str = "noopener noreferrer nofollow";

    /// Whether `href` may be emitted as a link target.
    pub fn is_allowed_href(href: &str) -> bool {
        match Url::parse(href.trim()) {
            Ok(url) => Self::ALLOWED_SCHEMES.contains(&url.scheme()),
            Err(url::ParseError::RelativeUrlWithoutBase) => true,
            Err(_) => false,
        }
    }
}

impl MarkExtension for Link {
    fn name(&self) -> &str {
        "link"
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        if !element.is("a") {
            return None;
        }
        let href = element.attr("href")?;
        if !Self::is_allowed_href(href) {
            return None;
        }
        let mut attrs = Attrs::new();
        attrs.insert("href".to_string(), Value::from(href));
        attrs.insert(
            "target".to_string(),
            element.attr("target").map_or(Value::Null, Value::from),
        );
        Some(attrs)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let mut spec = MarkupSpec::new("a");
        if let Some(href) = attrs
            .get("href")
            .and_then(Value::as_str)
            .filter(|href| Self::is_allowed_href(href))
        {
            spec = spec.with_attr("href", href);
        }
        let target = attrs
            .get("target")
            .and_then(Value::as_str)
            .unwrap_or("_blank");
        spec.with_attr("target", target).with_attr("rel", Self::REL)
    }
}
