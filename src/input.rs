use reqwest::Url;

use crate::outcome::FetchError;

pub const NO_URL: &str = "No URL entered. Exiting.";
pub const BAD_URL: &str = "Please enter a valid HTTP or HTTPS URL.";

/// Trim `input` and accept it only as an absolute http or https URL.
pub fn parse_url(input: &str) -> Result<Url, FetchError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FetchError::InvalidInput(NO_URL.to_owned()));
    }
    let url = Url::parse(input).map_err(|_| FetchError::InvalidInput(BAD_URL.to_owned()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(FetchError::InvalidInput(BAD_URL.to_owned())),
    }
}
