use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use bytes::Bytes;
use log::{debug, info, warn};
use reqwest::{Client, Response, Url};
use tokio::{fs::File, io::AsyncWriteExt, time::timeout};

use crate::{
    config::FetchConfig,
    file::{process_headers, FileType},
    io::{create_file, write_chunked},
    outcome::{FetchError, FetchResult},
    resolve::resolve,
};

#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> reqwest::Result<Self> {
        let client = Fetcher::client_with_timeout(config.timeout)?;
        Ok(Fetcher::from_client(client, config))
    }

    pub fn from_client(client: Client, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Only the connect phase is bounded here. Waiting for headers and each
    /// body read are bounded separately so long transfers are not cut off.
    pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
        Client::builder().connect_timeout(timeout).build()
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub async fn download(&self, url: &Url) -> FetchResult {
        let result = self.try_download(url).await;
        match &result {
            Ok(path) => info!("Saved {url} to {}.", path.display()),
            Err(err) => warn!("{url}: {} ({err})", err.status()),
        }
        result.into()
    }

    pub async fn try_download(&self, url: &Url) -> Result<PathBuf, FetchError> {
        let response = self.request(url).await?;
        let (file_type, content_type) = process_headers(response.headers());
        if let FileType::Other = file_type {
            return Err(FetchError::NotAnImage(content_type));
        }
        let filename = resolve(&self.config, url, &content_type);
        let path = self.config.fetch_dir.join(filename);
        let written = self.save(response, &path).await?;
        debug!("Wrote {written} bytes to {}.", path.display());
        Ok(path)
    }

    async fn request(&self, url: &Url) -> Result<Response, FetchError> {
        debug!("GET {url}.");
        let response = timeout(self.config.timeout, self.client.get(url.clone()).send())
            .await
            .map_err(|_| self.timed_out())??;
        debug!(
            "{url}: {} from {}, headers {:?}.",
            response.status(),
            response.url(),
            response.headers()
        );
        Ok(response.error_for_status()?)
    }

    async fn save(&self, mut response: Response, path: &Path) -> Result<u64, FetchError> {
        let mut file = create_file(path).await?;
        let copied = self.copy_body(&mut response, &mut file).await;
        // Whatever arrived is kept on disk, even when the body failed midway.
        file.flush().await?;
        copied
    }

    async fn copy_body(&self, response: &mut Response, file: &mut File) -> Result<u64, FetchError> {
        let mut written = 0;
        while let Some(bytes) = self.next_chunk(response).await? {
            written += write_chunked(file, &bytes, self.config.chunk_size).await? as u64;
        }
        Ok(written)
    }

    async fn next_chunk(&self, response: &mut Response) -> Result<Option<Bytes>, FetchError> {
        let chunk = timeout(self.config.timeout, response.chunk())
            .await
            .map_err(|_| self.timed_out())??;
        Ok(chunk)
    }

    fn timed_out(&self) -> FetchError {
        FetchError::Network(format!(
            "operation timed out after {}s",
            self.config.timeout.as_secs_f32()
        ))
    }
}
