use std::{path::Path, sync::Arc};

use log::{debug, error};
use tokio::sync::watch;

use super::Alert;
use crate::{
    api::{Client, Photo},
    error::ScreenError,
    model::{AnalysisResponse, Session},
    routes::{Navigator, Route},
};

/// Used when nobody is signed in; the backend decides what to do with it.
const ANONYMOUS_USER: &str = "1";

#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    Empty,
    Selected,
    Uploading,
    Complete(AnalysisResponse),
    Failed(String),
}

/// The home tab: pick a photo, send it off, show how far along it is.
#[derive(Debug)]
pub struct PhotoUpload {
    photo: Option<Photo>,
    state: UploadState,
    progress: Arc<watch::Sender<f32>>,
}

impl Default for PhotoUpload {
    fn default() -> Self {
        let (progress, _rx) = watch::channel(0.0);
        PhotoUpload {
            photo: None,
            state: UploadState::Empty,
            progress: Arc::new(progress),
        }
    }
}

impl PhotoUpload {
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// The analysis of the last successful upload.
    pub fn response(&self) -> Option<&AnalysisResponse> {
        match &self.state {
            UploadState::Complete(response) => Some(response),
            _ => None,
        }
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Upload progress in `0.0..=1.0`, updated while a request is running.
    pub fn progress(&self) -> watch::Receiver<f32> {
        self.progress.subscribe()
    }

    /// Camera and library buttons are disabled while this is true.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, UploadState::Uploading | UploadState::Complete(_))
    }

    pub async fn select(&mut self, path: impl AsRef<Path>) -> Result<(), ScreenError> {
        if self.is_busy() {
            return Err(ScreenError::Busy);
        }
        let photo = Photo::read(path).await?;
        self.select_photo(photo)
    }

    pub fn select_photo(&mut self, photo: Photo) -> Result<(), ScreenError> {
        if self.is_busy() {
            return Err(ScreenError::Busy);
        }
        debug!("Selected photo {}", photo.source.display());
        self.photo = Some(photo);
        self.state = UploadState::Selected;
        Ok(())
    }

    /// Drop the photo and any error, back to the empty picker.
    pub fn clear(&mut self) {
        self.photo = None;
        self.state = UploadState::Empty;
        self.progress.send_replace(0.0);
    }

    /// Send the selected photo for analysis and open the display screen on
    /// success.
    pub async fn upload(
        &mut self,
        session: Option<&Session>,
        client: &Client,
        navigator: &Navigator,
    ) -> Result<(), Alert> {
        if self.is_busy() {
            return Err(Alert::new("Upload Failed", ScreenError::Busy.to_string()));
        }
        let Some(photo) = &self.photo else {
            return Err(Alert::new("Upload Failed", ScreenError::NoPhoto.to_string()));
        };

        let user_id = session.map_or(ANONYMOUS_USER, |session| session.id.as_str());
        let token = session.map_or("", |session| session.token.expose());

        self.state = UploadState::Uploading;
        self.progress.send_replace(0.0);

        let progress = Arc::clone(&self.progress);
        let result = client
            .analyze_product(photo, user_id, token, move |fraction| {
                progress.send_replace(fraction);
            })
            .await;

        match result {
            Ok(response) => {
                self.progress.send_replace(1.0);
                self.state = UploadState::Complete(response);
                navigator.push(Route::Display);
                Ok(())
            }
            Err(err) => {
                error!("Error uploading photo: {}", err);
                let message = err.to_string();
                self.progress.send_replace(0.0);
                self.state = UploadState::Failed(message.clone());
                Err(Alert::new("Upload Failed", message))
            }
        }
    }
}
