use crate::config::FilterConfig;
use glob::Pattern;
use tracing::{debug, trace, warn};

fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Invalid file pattern '{}': {}", p, e);
                None
            }
        })
        .collect()
}

/// Prunes directories whose lower-cased name starts with any excluded prefix.
///
/// Prefixes are kept as configured; only the candidate name is lower-cased,
/// so `libfoo` is pruned by `lib` and an upper-case prefix never matches.
#[derive(Debug, Clone)]
pub struct DirectoryFilter {
    prefixes: Vec<String>,
}

impl DirectoryFilter {
    pub fn new(prefixes: &[String]) -> Self {
        debug!("Using excluded directory prefixes: {:?}", prefixes);
        DirectoryFilter {
            prefixes: prefixes.to_vec(),
        }
    }

    pub fn should_exclude(&self, dir_name: &str) -> bool {
        let lowered = dir_name.to_lowercase();
        self.prefixes
            .iter()
            .any(|prefix| lowered.starts_with(prefix.as_str()))
    }
}

/// Decides which file names get captured.
///
/// The always-include list is compared against the name as given, the
/// include and exclude patterns against its lower-cased form.
#[derive(Debug, Clone)]
pub struct FileFilter {
    always_include: Vec<String>,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FileFilter {
    pub fn new(include: &[String], exclude: &[String], always_include: &[String]) -> Self {
        debug!("Using include patterns: {:?}", include);
        debug!("Using exclude patterns: {:?}", exclude);
        FileFilter {
            always_include: always_include.to_vec(),
            include: compile_patterns(include),
            exclude: compile_patterns(exclude),
        }
    }

    pub fn is_source_file(&self, file_name: &str) -> bool {
        if self.always_include.iter().any(|name| name == file_name) {
            trace!("{} is explicitly included", file_name);
            return true;
        }

        let lowered = file_name.to_lowercase();
        if !self.include.iter().any(|p| p.matches(&lowered)) {
            return false;
        }
        if let Some(pattern) = self.exclude.iter().find(|p| p.matches(&lowered)) {
            trace!("{} excluded by pattern {}", file_name, pattern);
            return false;
        }
        true
    }
}

/// Both filters, built once from a [`FilterConfig`].
#[derive(Debug, Clone)]
pub struct Filters {
    pub dirs: DirectoryFilter,
    pub files: FileFilter,
}

impl Filters {
    pub fn from_config(config: &FilterConfig) -> Self {
        Filters {
            dirs: DirectoryFilter::new(&config.excluded_dirs),
            files: FileFilter::new(
                &config.include_patterns,
                &config.exclude_patterns,
                &config.always_include,
            ),
        }
    }
}

impl Default for Filters {
    fn default() -> Self {
        Filters::from_config(&FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_directories_by_prefix() {
        let filters = Filters::default();
        assert!(filters.dirs.should_exclude("node_modules"));
        assert!(filters.dirs.should_exclude("libfoo"));
        assert!(filters.dirs.should_exclude("Target"));
        assert!(filters.dirs.should_exclude(".github"));
        assert!(filters.dirs.should_exclude("outputs"));
        assert!(!filters.dirs.should_exclude("src"));
        assert!(!filters.dirs.should_exclude("my_lib"));
    }

    #[test]
    fn upper_case_prefixes_never_match() {
        let filters = Filters::default();
        assert!(!filters.dirs.should_exclude("Debug"));
        assert!(!filters.dirs.should_exclude("Release"));
    }

    #[test]
    fn includes_source_extensions() {
        let filters = Filters::default();
        for name in ["main.rs", "app.py", "index.TSX", "style.scss", "config.yml"] {
            assert!(filters.files.is_source_file(name), "{} should be included", name);
        }
        for name in ["app.pyc", "notes.txt", "Makefile", "image.png"] {
            assert!(!filters.files.is_source_file(name), "{} should be skipped", name);
        }
    }

    #[test]
    fn exclude_patterns_override_include() {
        let filters = Filters::default();
        for name in [
            "thing.lock",
            "README.md",
            "package-lock.json",
            "model-weights_manifest.json",
            ".eslintrc.json",
            ".prettierrc.yml",
            "server.log",
        ] {
            assert!(!filters.files.is_source_file(name), "{} should be skipped", name);
        }
    }

    #[test]
    fn always_include_is_case_sensitive() {
        let filters = Filters::default();
        assert!(filters.files.is_source_file("package.json"));
        // Falls through to the patterns, where *.json includes it.
        assert!(filters.files.is_source_file("Package.json"));

        let config = FilterConfig {
            always_include: vec!["Cargo.toml".to_string()],
            ..FilterConfig::default()
        };
        let filters = Filters::from_config(&config);
        assert!(filters.files.is_source_file("Cargo.toml"));
        assert!(!filters.files.is_source_file("cargo.toml"));
    }

    #[test]
    fn always_include_bypasses_exclude_patterns() {
        let config = FilterConfig {
            always_include: vec!["CHANGELOG.md".to_string()],
            ..FilterConfig::default()
        };
        let filters = Filters::from_config(&config);
        assert!(filters.files.is_source_file("CHANGELOG.md"));
        assert!(!filters.files.is_source_file("NOTES.md"));
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let filter = FileFilter::new(&["[".to_string(), "*.rs".to_string()], &[], &[]);
        assert!(filter.is_source_file("lib.rs"));
        assert!(!filter.is_source_file("["));
    }
}
