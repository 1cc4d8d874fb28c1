//! Public paths and request-path resolution.
//!
//! ```text
//! /<locale>/<type>/<name>   document in any supported locale
//! /<type>/<name>            document in the default locale
//! /<locale>/<type>, /<locale>, /<type>
//!                           locale index
//! /                         root (redirects to the default index)
//! ```

use crate::config::SiteSectionConfig;
use crate::utils::path::route::{decoded_segments, strip_query_fragment};

use super::slug::Slug;

/// Routing view of a document slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRoute {
    pub locale: String,
    pub content_type: String,
    pub name: String,
}

impl DocRoute {
    pub fn from_slug(slug: &Slug) -> Self {
        Self {
            locale: slug.locale().to_string(),
            content_type: slug.content_type().to_string(),
            name: slug.name().to_string(),
        }
    }

    pub fn slug(&self) -> Slug {
        Slug::new(&self.content_type, &self.locale, &self.name)
    }

    /// `/<locale>/<type>/<name>`
    pub fn public_path(&self) -> String {
        format!("/{}/{}/{}", self.locale, self.content_type, self.name)
    }

    /// `/<type>/<name>`, the unprefixed form served for the default locale.
    pub fn unprefixed_path(&self) -> String {
        format!("/{}/{}", self.content_type, self.name)
    }
}

/// What a request path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Root,
    Index { locale: String },
    Document(DocRoute),
}

/// Resolve a request target against the closed locale set.
///
/// Unsupported locale segments never resolve. Query and fragment are
/// ignored, segments are percent-decoded.
pub fn resolve_request_path(
    target: &str,
    site: &SiteSectionConfig,
    content_type: &str,
) -> Option<RouteMatch> {
    let segments = decoded_segments(strip_query_fragment(target))?;
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let supported = |locale: &str| site.locales.iter().any(|l| l == locale);
    let document = |locale: &str, name: &str| {
        (!name.contains('/')).then(|| {
            RouteMatch::Document(DocRoute {
                locale: locale.to_string(),
                content_type: content_type.to_string(),
                name: name.to_string(),
            })
        })
    };
    let index = |locale: &str| {
        Some(RouteMatch::Index {
            locale: locale.to_string(),
        })
    };

    let default_locale = site.default_locale.as_str();

    match segments[..] {
        [] => Some(RouteMatch::Root),
        [ty] if ty == content_type => index(default_locale),
        [locale] if supported(locale) => index(locale),
        [locale, ty] if supported(locale) && ty == content_type => index(locale),
        [ty, name] if ty == content_type => document(default_locale, name),
        [locale, ty, name] if supported(locale) && ty == content_type => document(locale, name),
        _ => None,
    }
}
