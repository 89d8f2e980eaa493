use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use npm_docs_meta::{build_config, AuthorSource, DocsConfig, DocsDefaults, CONFIG_KEYS, DEFAULT_MANIFEST_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "npm-docs-meta", version, about = "Documentation config values from package.json")]
struct Args {
    /// Path to the package manifest
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    #[arg(long)]
    organization: Option<String>,

    /// First year of the copyright notice
    #[arg(long)]
    base_year: Option<i32>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    author_email: Option<String>,

    /// Take the docs author from the manifest's `author` field when present
    #[arg(long, default_value_t = false)]
    author_from_manifest: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print only the value of this key
    #[arg(long)]
    key: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Env,
}

impl Args {
    fn defaults(&self) -> DocsDefaults {
        let base = DocsDefaults::default();
        DocsDefaults {
            manifest_path: self.manifest.clone(),
            organization: self.organization.clone().unwrap_or(base.organization),
            base_year: self.base_year.unwrap_or(base.base_year),
            docs_author: self.author.clone().unwrap_or(base.docs_author),
            docs_author_email: self.author_email.clone().unwrap_or(base.docs_author_email),
            author_source: if self.author_from_manifest {
                AuthorSource::Manifest
            } else {
                AuthorSource::Fixed
            },
        }
    }
}

fn render(config: &DocsConfig, args: &Args) -> anyhow::Result<String> {
    if let Some(key) = &args.key {
        let value = config
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("unknown key: {} (expected one of {})", key, CONFIG_KEYS.join(", ")))?;
        return Ok(value.to_string());
    }

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Env => Ok(CONFIG_KEYS
            .iter()
            .filter_map(|key| config.get(key).map(|value| format!("{}={}", key, value)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let defaults = args.defaults();
    tracing::debug!("Building docs config from {:?}", defaults.manifest_path);

    let config = build_config(&defaults)
        .with_context(|| format!("failed to build docs config from {}", defaults.manifest_path.display()))?;

    println!("{}", render(&config, &args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocsConfig {
        DocsConfig {
            name: "example".into(),
            version: "2.0.0-rc.1".into(),
            short_version: "2.0.0".into(),
            organization: "oauthjs".into(),
            copyright_year: "2016-2026".into(),
            docs_author: "Max Truxa".into(),
            docs_author_email: "dev@maxtruxa.com".into(),
        }
    }

    #[test]
    fn test_args_default_to_stock_defaults() {
        let args = Args::parse_from(["npm-docs-meta"]);
        let defaults = args.defaults();
        assert_eq!(defaults.manifest_path, PathBuf::from("../package.json"));
        assert_eq!(defaults.organization, "oauthjs");
        assert_eq!(defaults.base_year, 2016);
        assert_eq!(defaults.author_source, AuthorSource::Fixed);
    }

    #[test]
    fn test_args_override_defaults() {
        let args = Args::parse_from([
            "npm-docs-meta",
            "--manifest",
            "pkg/package.json",
            "--organization",
            "acme",
            "--base-year",
            "2019",
            "--author-from-manifest",
        ]);
        let defaults = args.defaults();
        assert_eq!(defaults.manifest_path, PathBuf::from("pkg/package.json"));
        assert_eq!(defaults.organization, "acme");
        assert_eq!(defaults.base_year, 2019);
        assert_eq!(defaults.docs_author, "Max Truxa");
        assert_eq!(defaults.author_source, AuthorSource::Manifest);
    }

    #[test]
    fn test_render_env_lines() {
        let args = Args::parse_from(["npm-docs-meta", "--format", "env"]);
        let out = render(&sample(), &args).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "name=example");
        assert_eq!(lines[2], "short_version=2.0.0");
        assert_eq!(lines[6], "docs_author_email=dev@maxtruxa.com");
    }

    #[test]
    fn test_render_json_object() {
        let args = Args::parse_from(["npm-docs-meta"]);
        let out = render(&sample(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(object["copyright_year"], "2016-2026");
    }

    #[test]
    fn test_render_single_key() {
        let args = Args::parse_from(["npm-docs-meta", "--key", "short_version"]);
        assert_eq!(render(&sample(), &args).unwrap(), "2.0.0");

        let args = Args::parse_from(["npm-docs-meta", "--key", "license"]);
        assert!(render(&sample(), &args).is_err());
    }
}
