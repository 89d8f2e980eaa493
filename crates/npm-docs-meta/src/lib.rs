//! Documentation metadata for npm packages.
//!
//! Reads a `package.json` and derives the handful of values a documentation
//! generator's configuration needs: name, version, short version, copyright
//! year and author.

pub mod config;
pub mod copyright;
pub mod error;
pub mod manifest;
pub mod person;
pub mod version;

pub use config::{build_config, get_config, AuthorSource, DocsConfig, DocsDefaults, CONFIG_KEYS};
pub use copyright::{copyright_year, copyright_year_at};
pub use error::{ErrorKind, MetaError, MetaResult};
pub use manifest::{load_package_json, PackageManifest, DEFAULT_MANIFEST_PATH};
pub use person::{parse_person, Person};
pub use version::short_version;
