use std::{env, fs, path::Path};

use anyhow::Context;
use chatlog_tools::{
    client::replace_image_source, converters::html::placeholders::image_directive,
    models::ImageUploadHost, ImageUploader,
};
use dotenvy::dotenv;

/// Uploads an image through the proxy named by `IMAGE_UPLOAD_PROXY_URL` and
/// prints the `{{img::…}}` line to paste into a log.
///
/// Usage: `cargo run --example upload_image -- picture.png`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = env::args().nth(1).context("usage: upload_image <file>")?;
    let bytes = fs::read(&path).with_context(|| format!("reading {}", path))?;
    let file_name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image.png")
        .to_string();
    let mime = match Path::new(&path).extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    };

    let uploader = ImageUploader::from_env(reqwest::Client::new())?;
    let url = uploader
        .upload(ImageUploadHost::Arca, bytes, &file_name, mime)
        .await?;
    log::info!("Uploaded {} to {}", file_name, url);

    let local = image_directive(&path);
    println!("{}", replace_image_source(&local, &path, &url));
    Ok(())
}
