//! Image endpoints

use super::EcsApi;
use crate::error::Result;
use ecsapi_schema::Image;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ImageListResponse {
    #[allow(dead_code)]
    status: String,
    images: Vec<Image>,
}

impl EcsApi {
    /// Base operating system images
    pub async fn fetch_images_basics(&self) -> Result<Vec<Image>> {
        let response: ImageListResponse = self.get("/images/basics").await?;
        Ok(response.images)
    }

    /// Cloud-init ready images
    pub async fn fetch_images_cloud(&self) -> Result<Vec<Image>> {
        let response: ImageListResponse = self.get("/images/cloud").await?;
        Ok(response.images)
    }
}
