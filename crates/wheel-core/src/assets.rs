//! Wheel asset listing.
//!
//! The wheel shows one sector per image file in the image directory. Each
//! sector's text comes from an optional JSON override file
//! (`{"a.jpg": "Grand Prize"}`) and falls back to the file name without its
//! extension.
//!
//! Listing never fails: a missing image directory is created and yields no
//! entries, and an unreadable or malformed override file is logged and
//! ignored. The listing reads disk only and never touches the state store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;
use wheel_types::WheelEntry;

use crate::config::AssetsConfig;

/// Image extensions shown on the wheel, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Errors raised while reading assets. Absorbed by [`AssetSource::list`].
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// A directory or file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The override file is not a JSON object.
    #[error("malformed override file {path}: {source}")]
    MalformedOverrides {
        /// The override file path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Location of the wheel images and their display-text overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    image_dir: PathBuf,
    url_prefix: String,
    overrides_file: PathBuf,
}

impl AssetSource {
    /// Create a source.
    ///
    /// `url_prefix` is prepended to each file name to form the entry path
    /// the browser fetches relative to the static root.
    pub fn new(
        image_dir: impl Into<PathBuf>,
        url_prefix: impl Into<String>,
        overrides_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_dir: image_dir.into(),
            url_prefix: url_prefix.into(),
            overrides_file: overrides_file.into(),
        }
    }

    /// Build a source from the `assets` config section.
    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(
            config.image_dir(),
            config.image_subdir.clone(),
            config.overrides_file.clone(),
        )
    }

    /// The image directory this source lists.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// List the wheel entries, sorted by file name.
    ///
    /// Never fails; see the module docs for how I/O problems degrade.
    pub fn list(&self) -> Vec<WheelEntry> {
        let filenames = match read_image_names(&self.image_dir) {
            Ok(names) => names,
            Err(error) => {
                warn!(%error, "image directory unavailable, wheel is empty");
                return Vec::new();
            }
        };

        let overrides = load_overrides(&self.overrides_file).unwrap_or_else(|error| {
            warn!(%error, "ignoring display-text overrides");
            BTreeMap::new()
        });

        filenames
            .into_iter()
            .map(|filename| {
                let text = overrides
                    .get(&filename)
                    .cloned()
                    .unwrap_or_else(|| display_stem(&filename));
                WheelEntry {
                    path: format!("{}/{filename}", self.url_prefix),
                    filename,
                    text,
                }
            })
            .collect()
    }
}

/// Whether `filename` has one of the [`ALLOWED_EXTENSIONS`].
pub fn is_wheel_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// The file name without its final extension.
fn display_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
        .to_owned()
}

/// Sorted names of the image files in `dir`, creating `dir` if missing.
fn read_image_names(dir: &Path) -> Result<Vec<String>, AssetError> {
    let io_error = |source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(io_error)?;
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map_err(io_error)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_wheel_image(name))
        .collect();
    names.sort_unstable();
    Ok(names)
}

/// Parse the override file. A missing file means no overrides.
///
/// Entries whose value is not a string are skipped; the rest still apply.
fn load_overrides(path: &Path) -> Result<BTreeMap<String, String>, AssetError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BTreeMap::new());
        }
        Err(source) => {
            return Err(AssetError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: BTreeMap<String, Value> =
        serde_json::from_str(&contents).map_err(|source| AssetError::MalformedOverrides {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .filter_map(|(filename, value)| match value {
            Value::String(text) => Some((filename, text)),
            other => {
                warn!(%filename, value = %other, "skipping non-string override");
                None
            }
        })
        .collect())
}
