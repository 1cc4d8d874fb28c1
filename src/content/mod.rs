//! Content model: discovery, metadata, documents, and the corpus.
//!
//! ```text
//! content/<type>/<locale>/<name>.<ext>
//!        │
//!        ▼  scan         ScannedFile { locale, name, source }
//!        ▼  frontmatter  DocMeta + body
//!        ▼  render       Document { slug, content: RawHtml, headings }
//!        ▼  corpus       Corpus (immutable, slug index)
//! ```

pub mod corpus;
pub mod document;
pub mod frontmatter;
pub mod meta;
pub mod route;
pub mod scan;
pub mod slug;

pub use corpus::{Corpus, StaticPath};
pub use document::{Document, Heading};
pub use route::{DocRoute, RouteMatch};
pub use scan::{ScannedFile, scan_documents};
pub use slug::Slug;
