use crate::config::CaptureConfig;
use crate::errors::CaptureError;
use crate::filters::Filters;
use crate::format::format_block;
use crate::reporting::print_stats;
use crate::utils::{absolute_path, read_file_content};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFile {
    pub relative_path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one capture run. Failures are per file and never abort the run.
#[derive(Debug, Clone, Default)]
pub struct CaptureSummary {
    pub output: PathBuf,
    pub captured: Vec<CapturedFile>,
    pub failures: Vec<CaptureFailure>,
}

impl CaptureSummary {
    fn record_failure(&mut self, path: &Path, err: &CaptureError) {
        warn!("Error processing file {}: {}", path.display(), err);
        self.failures.push(CaptureFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }
}

#[async_trait]
pub trait SourceCollector {
    async fn capture(&self) -> Result<CaptureSummary, CaptureError>;
}

pub struct BasicSourceCollector {
    config: CaptureConfig,
    filters: Filters,
}

impl BasicSourceCollector {
    pub fn new(config: CaptureConfig) -> Self {
        let filters = Filters::from_config(&config.filters);
        BasicSourceCollector { config, filters }
    }

    fn resolve_root(&self) -> Result<PathBuf, CaptureError> {
        let root_error = |message: String| CaptureError::RootResolution {
            path: self.config.root.clone(),
            message,
        };
        let root = absolute_path(&self.config.root).map_err(|e| root_error(e.to_string()))?;
        let metadata = std::fs::metadata(&root).map_err(|e| root_error(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(root_error("not a directory".to_owned()));
        }
        Ok(root)
    }

    /// Lists one directory level, returning its files and the subdirectories
    /// that survive the directory filter, both in walk order.
    fn list_level(&self, dir: &Path, summary: &mut CaptureSummary) -> Level {
        let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
        if self.config.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut level = Level::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                    summary.record_failure(&path, &CaptureError::from(std::io::Error::from(e)));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                if self
                    .filters
                    .dirs
                    .should_exclude(&entry.file_name().to_string_lossy())
                {
                    trace!("Pruning directory {:?}", entry.path());
                } else {
                    level.subdirs.push(entry.into_path());
                }
            } else {
                level.files.push(entry);
            }
        }
        level
    }

    fn is_candidate(&self, entry: &DirEntry, output: &Path) -> bool {
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            return false;
        }
        if !self
            .filters
            .files
            .is_source_file(&entry.file_name().to_string_lossy())
        {
            return false;
        }
        if std::fs::canonicalize(entry.path()).ok().as_deref() == Some(output) {
            debug!("Skipping the output file itself: {:?}", entry.path());
            return false;
        }
        true
    }
}

#[derive(Default)]
struct Level {
    files: Vec<DirEntry>,
    subdirs: Vec<PathBuf>,
}

#[async_trait]
impl SourceCollector for BasicSourceCollector {
    async fn capture(&self) -> Result<CaptureSummary, CaptureError> {
        let root = self.resolve_root()?;
        debug!("Resolved root directory: {:?}", root);

        let output_path = absolute_path(&self.config.output).map_err(|e| {
            CaptureError::OutputOpen {
                path: self.config.output.clone(),
                message: e.to_string(),
            }
        })?;
        let file = File::create(&output_path)
            .await
            .map_err(|e| CaptureError::OutputOpen {
                path: output_path.clone(),
                message: e.to_string(),
            })?;
        let canonical_output = tokio::fs::canonicalize(&output_path)
            .await
            .unwrap_or_else(|_| output_path.clone());
        let mut writer = BufWriter::new(file);

        let mut summary = CaptureSummary {
            output: output_path.clone(),
            ..CaptureSummary::default()
        };

        // Top-down: every file of a level is written before any subdirectory
        // is entered. Subdirectories go on the stack reversed so they pop in
        // listing order.
        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let Level { files, subdirs } = self.list_level(&dir, &mut summary);

            for entry in files {
                if !self.is_candidate(&entry, &canonical_output) {
                    trace!("Skipping {:?}", entry.path());
                    continue;
                }

                let path = entry.path();
                let relative_path = path.strip_prefix(&root).unwrap_or(path).to_path_buf();
                debug!("Processing file: {}", relative_path.display());

                let content = match read_file_content(path).await {
                    Ok(content) => content,
                    Err(e) => {
                        summary.record_failure(path, &e);
                        continue;
                    }
                };

                let block = format_block(&relative_path, &content);
                if let Err(e) = writer.write_all(block.as_bytes()).await {
                    let err = CaptureError::FileWrite {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    };
                    summary.record_failure(path, &err);
                    continue;
                }

                summary.captured.push(CapturedFile {
                    relative_path,
                    bytes: content.len(),
                });
            }

            pending.extend(subdirs.into_iter().rev());
        }

        writer
            .flush()
            .await
            .map_err(|e| CaptureError::OutputWrite {
                path: output_path.clone(),
                message: e.to_string(),
            })?;

        info!(
            "Captured {} files into {} ({} skipped with errors)",
            summary.captured.len(),
            output_path.display(),
            summary.failures.len()
        );

        if self.config.stats {
            print_stats(&summary);
        }

        Ok(summary)
    }
}

pub async fn capture_source_code(config: CaptureConfig) -> Result<CaptureSummary, CaptureError> {
    let collector = BasicSourceCollector::new(config);
    collector.capture().await
}
