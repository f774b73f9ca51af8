//! crates/logr-sink/src/config.rs
//! Declarative sink configuration.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use super::global::set_global_level;
use super::json::JsonSink;
use super::level::Level;
use super::sink::Sink;

/// Failure to construct a configured sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkInitError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        /// Requested log file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Where a configured JSON sink writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SinkTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
    /// A file opened in append mode, created when missing.
    File(PathBuf),
}

/// Configuration for the JSON sink.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Output destination.
    pub target: SinkTarget,
    /// Attach a `time` field to every record.
    pub timestamp: bool,
    /// Process-wide minimum level applied by [`build`](Self::build).
    pub level: Option<Level>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            target: SinkTarget::Stderr,
            timestamp: true,
            level: None,
        }
    }
}

impl SinkConfig {
    /// Configuration writing to `path`.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: SinkTarget::File(path.into()),
            ..Self::default()
        }
    }

    /// Builds the configured sink.
    ///
    /// When `level` is set it replaces the process-wide minimum, which the
    /// returned sink consults on every gate check.
    pub fn build(&self) -> Result<Arc<dyn Sink>, SinkInitError> {
        let writer: Box<dyn Write + Send> = match &self.target {
            SinkTarget::Stderr => Box::new(io::stderr()),
            SinkTarget::Stdout => Box::new(io::stdout()),
            SinkTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| SinkInitError::OpenFile {
                        path: path.clone(),
                        source,
                    })?;
                Box::new(file)
            }
        };

        if let Some(level) = self.level {
            set_global_level(level);
        }

        Ok(Arc::new(JsonSink::new(writer).with_timestamp(self.timestamp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Record;
    use std::fs;

    #[test]
    fn default_targets_stderr_with_timestamps() {
        let config = SinkConfig::default();
        assert_eq!(config.target, SinkTarget::Stderr);
        assert!(config.timestamp);
        assert_eq!(config.level, None);
    }

    #[test]
    fn file_target_appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").expect("seed file");

        let mut config = SinkConfig::file(&path);
        config.timestamp = false;
        let sink = config.build().expect("sink builds");
        sink.write(&Record {
            level: Level::Info,
            fields: Vec::new(),
            message: "appended".to_owned(),
        });

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(
            contents,
            "existing\n{\"level\":\"info\",\"message\":\"appended\"}\n"
        );
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("app.log");

        let err = SinkConfig::file(&path).build().err().expect("open fails");
        let SinkInitError::OpenFile { path: reported, .. } = &err;
        assert_eq!(reported, &path);
        assert!(err.to_string().starts_with("failed to open log file"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: SinkConfig =
            serde_json::from_str(r#"{"target":{"file":"/var/log/app.log"},"level":"debug"}"#)
                .expect("valid config");
        assert_eq!(config.target, SinkTarget::File(PathBuf::from("/var/log/app.log")));
        assert!(config.timestamp);
        assert_eq!(config.level, Some(Level::Debug));

        let config: SinkConfig = serde_json::from_str(r#"{"target":"stdout"}"#).expect("valid");
        assert_eq!(config.target, SinkTarget::Stdout);
    }
}
