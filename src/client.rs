use crate::errors::{LogToolsError, Result};
use crate::models::config::ImageUploadHost;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::env;

/// Environment variable holding the base URL of the upload proxy.
pub const PROXY_URL_ENV: &str = "IMAGE_UPLOAD_PROXY_URL";

/// Characters the upload token is drawn from.
const TOKEN_ALPHABET: &[u8] = b"0123456789abcde";
const TOKEN_LEN: usize = 16;

/// Body returned by the proxy on a successful upload.
#[derive(Deserialize, Debug)]
struct ProxyUploadResponse {
    url: Option<String>,
}

/// Re-hosts images pasted into a chat log so the generated HTML can link them.
pub struct ImageUploader {
    http: reqwest::Client,
    proxy_url: String,
}

impl ImageUploader {
    pub fn new(http: reqwest::Client, proxy_url: impl Into<String>) -> Self {
        Self {
            http,
            proxy_url: proxy_url.into(),
        }
    }

    /// Builds an uploader whose proxy URL comes from `IMAGE_UPLOAD_PROXY_URL`.
    /// Call `dotenvy::dotenv().ok();` beforehand to pick it up from a `.env` file.
    pub fn from_env(http: reqwest::Client) -> Result<Self> {
        let proxy_url = env::var(PROXY_URL_ENV)?;
        Ok(Self::new(http, proxy_url))
    }

    /// Uploads one image and returns its public URL.
    ///
    /// # Arguments
    ///
    /// * `host` - Where to upload. Only [`ImageUploadHost::Arca`] is implemented.
    /// * `bytes` - The encoded image.
    /// * `file_name` - File name sent with the multipart part.
    /// * `mime` - MIME type of the image, e.g. `image/png`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty image, `UnsupportedHost` for hosts without
    /// an implementation, `Network` for transport failures and `UploadFailed`
    /// when the host rejects the upload or returns no URL.
    pub async fn upload(
        &self,
        host: ImageUploadHost,
        bytes: Vec<u8>,
        file_name: &str,
        mime: &str,
    ) -> Result<String> {
        if bytes.is_empty() {
            return Err(LogToolsError::InvalidInput(
                "Image data cannot be empty".to_string(),
            ));
        }

        match host {
            ImageUploadHost::Arca => self.upload_via_proxy(bytes, file_name, mime).await,
            ImageUploadHost::Ibb => Err(LogToolsError::UnsupportedHost("ibb".to_string())),
        }
    }

    async fn upload_via_proxy(&self, bytes: Vec<u8>, file_name: &str, mime: &str) -> Result<String> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new()
            .part("upload", part)
            .text("token", upload_token()?)
            .text("saveExif", "false")
            .text("saveFilename", "false");

        let api_url = format!("{}/upload", self.proxy_url.trim_end_matches('/'));
        debug!("Uploading {} to {}", file_name, api_url);

        let response = self
            .http
            .post(&api_url)
            .header(ACCEPT, "*/*")
            .multipart(form)
            .send()
            .await
            .map_err(LogToolsError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.map_err(LogToolsError::Network)?;
            warn!("Upload of {} rejected with status {}", file_name, status);
            return Err(LogToolsError::UploadFailed {
                status,
                message: format!("Upload failed with status {}: {}", status, error_text),
            });
        }

        let body: ProxyUploadResponse = response.json().await.map_err(LogToolsError::Network)?;
        body.url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| LogToolsError::UploadFailed {
                status,
                message: "Upload response did not contain a url".to_string(),
            })
    }
}

/// Random token sent along with every proxy upload.
pub fn upload_token() -> Result<String> {
    let mut token = String::with_capacity(TOKEN_LEN);
    let mut buf = [0u8; TOKEN_LEN];
    while token.len() < TOKEN_LEN {
        getrandom::getrandom(&mut buf)?;
        let missing = TOKEN_LEN - token.len();
        token.extend(buf.iter().filter_map(|b| token_symbol(*b)).take(missing));
    }
    Ok(token)
}

/// Maps a random byte onto the token alphabet, rejecting the bytes above the
/// largest multiple of the alphabet size so every symbol is equally likely.
fn token_symbol(byte: u8) -> Option<char> {
    let alphabet_len = TOKEN_ALPHABET.len();
    let limit = 256 - 256 % alphabet_len;
    let value = byte as usize;
    (value < limit).then(|| TOKEN_ALPHABET[value % alphabet_len] as char)
}

/// Swaps the first occurrence of an image URL for its re-hosted one.
pub fn replace_image_source(text: &str, from: &str, to: &str) -> String {
    text.replacen(from, to, 1)
}
