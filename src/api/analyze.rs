use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, trace};
use reqwest::{
    multipart::{Form, Part},
    Body,
};

use super::{decode, error_from, Client};
use crate::{error::ApiError, model::AnalysisResponse};

pub const UPLOAD_FAILED: &str = "There was a problem uploading your photo. Please try again.";

const CHUNK_SIZE: usize = 16 * 1024;

/// A picked photo, already read into memory.
#[derive(Clone)]
pub struct Photo {
    pub source: PathBuf,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't dump the image
        f.debug_struct("Photo")
            .field("source", &self.source)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Photo {
    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Photo> {
        let source = path.as_ref().to_path_buf();
        let bytes = tokio::fs::read(&source).await?;
        trace!("Read {} bytes from {}", bytes.len(), source.display());
        Ok(Photo { source, bytes })
    }
}

impl Client {
    /// Upload a photo for analysis.
    ///
    /// `on_progress` gets the fraction of the image handed to the
    /// connection so far, in `0.0..=1.0`.
    pub async fn analyze_product<F>(
        &self,
        photo: &Photo,
        user_id: &str,
        token: &str,
        on_progress: F,
    ) -> Result<AnalysisResponse, ApiError>
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        let total = photo.bytes.len();
        let file_name = format!("photo-{}.jpg", unix_millis());
        debug!("Uploading {} ({} bytes) for user {}", file_name, total, user_id);

        let chunks: Vec<Vec<u8>> = photo.bytes.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();
        let mut sent = 0;
        let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len();
            on_progress(sent as f32 / total as f32);
            Ok::<_, std::io::Error>(chunk)
        }));

        let image = Part::stream_with_length(Body::wrap_stream(stream), total as u64)
            .file_name(file_name)
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .part("image", image)
            .text("userId", user_id.to_owned());

        let response = self
            .http
            .post(self.api("/api/analyze-product"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Analysis rejected with status {}", response.status());
            return Err(error_from(response, UPLOAD_FAILED).await);
        }

        decode(response).await
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
