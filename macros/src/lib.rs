//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Canonical deployment origin.
//!     pub url: String,
//!
//!     /// URL path prefix the site is served under.
//!     #[config(default = "/")]
//!     pub base: String,
//!
//!     /// Platform name -> profile URL.
//!     #[config(hidden)]
//!     pub social: BTreeMap<String, String>,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.url -> FieldPath("site.url")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(sub)]` - Nested config, rendered with its own header
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ContentConfig` → `content`
//! - `ValidateSectionConfig` → `validate`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
