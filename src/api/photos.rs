//! Photo Upload
//!
//! Multipart upload to `recipes/{id}/photos`.

use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::{read_response, ApiClient};
use crate::error::ApiError;
use crate::models::{PhotoUpload, RecipePhoto};

#[derive(Deserialize)]
struct PhotoEnvelope {
    photo: RecipePhoto,
}

fn form_error(value: JsValue) -> ApiError {
    ApiError::Encode(format!("{:?}", value))
}

impl ApiClient {
    pub async fn upload_photo(
        &self,
        recipe_id: u32,
        upload: &PhotoUpload,
        photo: &File,
    ) -> Result<RecipePhoto, ApiError> {
        let form = FormData::new().map_err(form_error)?;
        form.append_with_str("caption", &upload.caption).map_err(form_error)?;
        form.append_with_str("isCoverImage", if upload.is_cover_image { "true" } else { "false" })
            .map_err(form_error)?;
        form.append_with_str("username", &upload.username).map_err(form_error)?;
        form.append_with_blob_and_filename("photo", photo, &photo.name()).map_err(form_error)?;

        let endpoint = format!("recipes/{}/photos", recipe_id);
        tracing::debug!(endpoint = %endpoint, size = photo.size(), "POST multipart");

        // No Content-Type header: the browser adds the multipart boundary
        let request = self
            .authorize(Request::post(&self.url(&endpoint)))
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: PhotoEnvelope = read_response(response).await?;
        Ok(envelope.photo)
    }
}
