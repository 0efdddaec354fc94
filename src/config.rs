use crate::errors::CaptureError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_OUTPUT_FILE: &str = "project_source_code.txt";

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    ".git",
    "build",
    "dist",
    "bin",
    "obj",
    "__pycache__",
    ".vs",
    ".idea",
    "packages",
    "vendor",
    "bower_components",
    "jspm_packages",
    "lib",
    "out",
    "target",
    "Debug",
    "Release",
];

pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &[
    // JavaScript/TypeScript
    "*.js",
    "*.jsx",
    "*.ts",
    "*.tsx",
    "*.py",
    "*.cs",
    // Stylesheets
    "*.css",
    "*.scss",
    "*.sass",
    "*.html",
    "*.htm",
    "*.java",
    // C/C++
    "*.cpp",
    "*.hpp",
    "*.c",
    "*.h",
    "*.go",
    "*.rb",
    "*.php",
    "*.swift",
    "*.rs",
    // Web frameworks
    "*.vue",
    "*.svelte",
    // Data and configuration
    "*.xml",
    "*.json",
    "*.yaml",
    "*.yml",
];

pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "*-lock.json",
    "*-weights_manifest.json",
    "*.eslint*",
    "*.prettier*",
    "*.log",
    "*.lock",
    "README.md",
    "*.md",
];

pub const DEFAULT_ALWAYS_INCLUDE: &[&str] = &["package.json"];

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    to_owned_list(DEFAULT_EXCLUDED_DIRS)
}

fn default_include_patterns() -> Vec<String> {
    to_owned_list(DEFAULT_INCLUDE_PATTERNS)
}

fn default_exclude_patterns() -> Vec<String> {
    to_owned_list(DEFAULT_EXCLUDE_PATTERNS)
}

fn default_always_include() -> Vec<String> {
    to_owned_list(DEFAULT_ALWAYS_INCLUDE)
}

/// The four filter lists. Any list omitted from a config file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default = "default_always_include")]
    pub always_include: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            excluded_dirs: default_excluded_dirs(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            always_include: default_always_include(),
        }
    }
}

impl FilterConfig {
    pub fn from_json(content: &str) -> Result<Self, CaptureError> {
        Ok(serde_json::from_str(content)?)
    }

    pub async fn load(path: &Path) -> Result<Self, CaptureError> {
        debug!("Loading filter configuration from {:?}", path);
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CaptureError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Visit directory entries in file-name order instead of filesystem order.
    pub sorted: bool,
    pub stats: bool,
    pub filters: FilterConfig,
}

impl CaptureConfig {
    /// Defaults for `root`: output goes to [`DEFAULT_OUTPUT_FILE`] inside it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output = root.join(DEFAULT_OUTPUT_FILE);
        CaptureConfig {
            root,
            output,
            sorted: false,
            stats: false,
            filters: FilterConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = FilterConfig::from_json(r#"{ "include_patterns": ["*.rs"] }"#).unwrap();
        assert_eq!(config.include_patterns, vec!["*.rs".to_string()]);
        assert_eq!(config.excluded_dirs, default_excluded_dirs());
        assert_eq!(config.always_include, vec!["package.json".to_string()]);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = FilterConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CaptureError::ConfigError(_)));
    }

    #[test]
    fn output_defaults_inside_root() {
        let config = CaptureConfig::new("/tmp/project");
        assert_eq!(
            config.output,
            PathBuf::from("/tmp/project/project_source_code.txt")
        );
        assert!(!config.sorted);
    }
}
