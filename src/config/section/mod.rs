//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `site`     | `[site]`       | Site metadata, assets, integrations  |
//! | `nav`      | `[[nav]]`      | Sidebar groups and links             |
//! | `content`  | `[content]`    | Content and public directories       |
//! | `validate` | `[validate]`   | Validation levels                    |

mod content;
pub mod nav;
mod site;
mod validate;

pub use content::ContentConfig;
pub use nav::{Autogenerate, GroupKind, NavGroup, NavItem};
pub use site::SiteInfoConfig;
pub use validate::{ValidateConfig, ValidateLevel};
