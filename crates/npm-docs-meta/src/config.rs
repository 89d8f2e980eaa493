//! Documentation Config
//!
//! Combines the manifest, the short version and the copyright year with the
//! fixed defaults into the mapping handed to the documentation generator.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::debug;

use crate::copyright::copyright_year_at;
use crate::error::MetaResult;
use crate::manifest::{load_package_json, PackageManifest, DEFAULT_MANIFEST_PATH};
use crate::person::Person;
use crate::version::short_version;

/// Keys of the generated config, in output order
pub const CONFIG_KEYS: [&str; 7] = [
    "name",
    "version",
    "short_version",
    "organization",
    "copyright_year",
    "docs_author",
    "docs_author_email",
];

/// Where the docs author comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorSource {
    /// Always use the configured author
    #[default]
    Fixed,
    /// Prefer the manifest's `author`, falling back to the configured author
    Manifest,
}

/// Values the config takes from outside the manifest
#[derive(Debug, Clone)]
pub struct DocsDefaults {
    pub manifest_path: PathBuf,
    pub organization: String,
    pub base_year: i32,
    pub docs_author: String,
    pub docs_author_email: String,
    pub author_source: AuthorSource,
}

impl Default for DocsDefaults {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            organization: "oauthjs".to_string(),
            base_year: 2016,
            docs_author: "Max Truxa".to_string(),
            docs_author_email: "dev@maxtruxa.com".to_string(),
            author_source: AuthorSource::Fixed,
        }
    }
}

/// Documentation generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsConfig {
    pub name: String,
    pub version: String,
    pub short_version: String,
    pub organization: String,
    pub copyright_year: String,
    pub docs_author: String,
    pub docs_author_email: String,
}

impl DocsConfig {
    /// Build the config from a loaded manifest.
    pub fn from_manifest(
        manifest: &PackageManifest,
        defaults: &DocsDefaults,
        current_year: i32,
    ) -> MetaResult<Self> {
        let name = manifest.name()?;
        let version = manifest.version()?;
        let (docs_author, docs_author_email) = resolve_author(manifest, defaults);

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            short_version: short_version(version)?,
            organization: defaults.organization.clone(),
            copyright_year: copyright_year_at(defaults.base_year, current_year),
            docs_author,
            docs_author_email,
        })
    }

    /// Value for one of [`CONFIG_KEYS`]
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "version" => &self.version,
            "short_version" => &self.short_version,
            "organization" => &self.organization,
            "copyright_year" => &self.copyright_year,
            "docs_author" => &self.docs_author,
            "docs_author_email" => &self.docs_author_email,
            _ => return None,
        };
        Some(value)
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (key.to_string(), v.to_string())))
            .collect()
    }
}

fn resolve_author(manifest: &PackageManifest, defaults: &DocsDefaults) -> (String, String) {
    let fixed = (defaults.docs_author.clone(), defaults.docs_author_email.clone());
    if defaults.author_source == AuthorSource::Fixed {
        return fixed;
    }

    // Name and email are taken as a pair
    match manifest.get("author").and_then(Person::from_value) {
        Some(Person {
            name,
            email: Some(email),
            ..
        }) => (name, email),
        _ => {
            debug!("Manifest has no author with name and email; using configured docs author");
            fixed
        }
    }
}

/// Load the manifest named by `defaults` and build the config for the current year.
pub fn build_config(defaults: &DocsDefaults) -> MetaResult<DocsConfig> {
    let manifest = load_package_json(&defaults.manifest_path)?;
    DocsConfig::from_manifest(&manifest, defaults, Local::now().year())
}

/// Config for `../package.json` with the stock defaults
pub fn get_config() -> MetaResult<DocsConfig> {
    build_config(&DocsDefaults::default())
}
