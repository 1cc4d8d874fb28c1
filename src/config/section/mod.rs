//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module     | TOML Section  | Purpose                              |
//! |------------|---------------|--------------------------------------|
//! | `build`    | `[build]`     | Output directory                     |
//! | `content`  | `[content]`   | Content root, type, file extensions  |
//! | `sanitize` | `[sanitize]`  | Allow-list extensions, code widgets  |
//! | `serve`    | `[serve]`     | Preview server                       |
//! | `site`     | `[site]`      | Title and the closed locale set      |
//! | `toc`      | `[toc]`       | Table-of-contents tracking           |

mod build;
mod content;
mod sanitize;
mod serve;
mod site;
mod toc;

pub use build::BuildConfig;
pub use content::ContentConfig;
pub use sanitize::SanitizeConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use toc::TocConfig;
