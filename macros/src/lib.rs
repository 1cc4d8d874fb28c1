//! Proc macros for folio.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site identity and locales.
//! pub struct SiteSectionConfig {
//!     /// Title shown on index pages.
//!     #[config(default = "Blog")]
//!     pub title: String,
//!
//!     /// Locale used for unprefixed routes.
//!     #[config(inline_doc = "must be listed in `locales`")]
//!     pub default_locale: String,
//!
//!     /// Resolved at load time.
//!     #[config(skip)]
//!     pub resolved: bool,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(hidden)]` - Hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc = "x")]` - Trailing comment after the value
//! - `#[config(sub)]` - Nested section, rendered with its own header
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ContentConfig` → `content`
//! - `SiteSectionConfig` → `site`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
