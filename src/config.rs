use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;
pub const FETCH_DIR: &str = "Fetched_Images";
pub const DEFAULT_EXTENSION: &str = ".jpg";

const COMMON_IMAGE_EXT: [(&str, &str); 8] = [
    ("image/jpeg", ".jpg"),
    ("image/pjpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
    ("image/bmp", ".bmp"),
    ("image/svg+xml", ".svg"),
    ("image/x-icon", ".ico"),
];

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub fetch_dir: PathBuf,
    pub timeout: Duration,
    pub chunk_size: usize,
    /// Lowercase content type without parameters -> extension with leading dot.
    pub extensions: BTreeMap<String, String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            fetch_dir: PathBuf::from(FETCH_DIR),
            timeout: DEFAULT_TIMEOUT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            extensions: COMMON_IMAGE_EXT
                .iter()
                .map(|(mime, ext)| (mime.to_string(), ext.to_string()))
                .collect(),
        }
    }
}

impl FetchConfig {
    pub fn fetch_dir<P: Into<PathBuf>>(self, fetch_dir: P) -> Self {
        Self {
            fetch_dir: fetch_dir.into(),
            ..self
        }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Map `content_type` to `extension`, adding the leading dot if missing.
    pub fn extension(mut self, content_type: &str, extension: &str) -> Self {
        let extension = if extension.starts_with('.') {
            extension.to_owned()
        } else {
            format!(".{extension}")
        };
        self.extensions
            .insert(content_type.trim().to_lowercase(), extension);
        self
    }

    pub fn extension_for(&self, content_type: &str) -> Option<&str> {
        self.extensions.get(content_type).map(String::as_str)
    }

    /// Apply the values set in `file` over `self`.
    pub fn merge(self, file: ConfigFile) -> Result<Self> {
        let ConfigFile {
            fetch_dir,
            timeout_secs,
            extensions,
        } = file;
        let mut config = self;
        if let Some(fetch_dir) = fetch_dir {
            config = config.fetch_dir(fetch_dir);
        }
        if let Some(secs) = timeout_secs {
            config = config.timeout(timeout_from_secs(secs)?);
        }
        for (content_type, extension) in extensions {
            config = config.extension(&content_type, &extension);
        }
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::default().merge(ConfigFile::read(path)?)
    }
}

/// Defaults, then the optional TOML `file`, then `fetch_dir` and
/// `timeout_secs` given on the command line.
pub fn load(
    file: Option<&Path>,
    fetch_dir: Option<PathBuf>,
    timeout_secs: Option<u64>,
) -> Result<FetchConfig> {
    let mut config = match file {
        Some(path) => FetchConfig::from_toml_file(path)?,
        None => FetchConfig::default(),
    };
    if let Some(fetch_dir) = fetch_dir {
        config = config.fetch_dir(fetch_dir);
    }
    if let Some(secs) = timeout_secs {
        config = config.timeout(timeout_from_secs(secs)?);
    }
    Ok(config)
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        bail!("timeout must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}

/// On-disk configuration. Every field is optional.
///
/// ```toml
/// fetch_dir = "pictures"
/// timeout_secs = 30
///
/// [extensions]
/// "image/avif" = ".avif"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub fetch_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
