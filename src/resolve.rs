//! Picks the name a fetched image is saved under.
//!
//! A name in the URL path with an extension always wins, even if it disagrees
//! with the content type. Only when the URL gives no usable name is one
//! generated from the time, a random suffix and an extension derived from the
//! declared content type.
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use percent_encoding::percent_decode_str;
use rand::Rng;
use reqwest::Url;

use crate::{
    config::{FetchConfig, DEFAULT_EXTENSION},
    file::normalize_content_type,
};

pub fn resolve(config: &FetchConfig, url: &Url, declared_content_type: &str) -> String {
    if let Some(name) = name_from_url(url) {
        debug!("Using name `{name}` from {url}.");
        return name;
    }
    let extension = extension_for(config, declared_content_type);
    generated_name(&extension)
}

/// Final segment of the percent-decoded path, if it looks like `name.ext`.
pub fn name_from_url(url: &Url) -> Option<String> {
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    let name = path.rsplit('/').next().unwrap_or_default();
    if name.is_empty() || !name.contains('.') || name == "." || name == ".." {
        return None;
    }
    Some(name.to_owned())
}

pub fn extension_for(config: &FetchConfig, declared_content_type: &str) -> String {
    let content_type = normalize_content_type(declared_content_type);
    if let Some(extension) = config.extension_for(&content_type) {
        return extension.to_owned();
    }
    match content_type.strip_prefix("image/") {
        Some(subtype) => {
            let subtype = subtype.rsplit('/').next().unwrap_or_default();
            if subtype.is_empty() {
                DEFAULT_EXTENSION.to_owned()
            } else {
                format!(".{subtype}")
            }
        }
        None => DEFAULT_EXTENSION.to_owned(),
    }
}

/// `image_<epoch seconds>_<6 hex chars><extension>`.
pub fn generated_name(extension: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let suffix: u32 = rand::thread_rng().gen_range(0..1 << 24);
    format!("image_{timestamp}_{suffix:06x}{extension}")
}
