use crate::{CategoryId, PropertyId, requests, responses};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// A locally selected file ready for multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn send_multipart(
        &self,
        builder: reqwest::RequestBuilder,
        form: Form,
    ) -> ReqwestResult {
        let request = builder.multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn get_categories(
        &self,
    ) -> Result<Vec<responses::Category>, ClientError> {
        let response = self.get("categories").await?;
        ok_body(response).await
    }

    /// Fetch one category with its properties embedded.
    pub async fn get_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<responses::Category, ClientError> {
        let response = self.get(&format!("categories/{category_id}")).await?;
        ok_body(response).await
    }

    pub async fn delete_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("categories/{category_id}")).await?;
        ok_empty(response).await
    }

    pub async fn get_properties(
        &self,
    ) -> Result<Vec<responses::Property>, ClientError> {
        let response = self.get("properties").await?;
        ok_body(response).await
    }

    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, ClientError> {
        let response = self.get(&format!("properties/{property_id}")).await?;
        ok_body(response).await
    }

    /// Create a listing from a validated draft plus its selected images.
    pub async fn create_property(
        &self,
        draft: &requests::PropertyDraft,
        images: &[ImagePart],
    ) -> Result<responses::Property, ClientError> {
        let form = attach_images(property_form(draft), images);
        let builder = self.inner_client.post(self.format_url("properties"));
        let response = self.send_multipart(builder, form).await?;
        ok_body(response).await
    }

    /// Update a listing. `existing_images` lists the already-persisted URLs
    /// the user kept; the backend discards the rest.
    pub async fn update_property(
        &self,
        property_id: &PropertyId,
        draft: &requests::PropertyDraft,
        existing_images: &[String],
        images: &[ImagePart],
    ) -> Result<responses::Property, ClientError> {
        let mut form = attach_images(property_form(draft), images);
        if !existing_images.is_empty() {
            form = form
                .text("existingImages", serde_json::to_string(existing_images)?);
        }
        let builder = self
            .inner_client
            .put(self.format_url(&format!("properties/{property_id}")));
        let response = self.send_multipart(builder, form).await?;
        ok_body(response).await
    }

    pub async fn delete_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("properties/{property_id}")).await?;
        ok_empty(response).await
    }

    pub async fn get_stats(&self) -> Result<responses::Stats, ClientError> {
        let response = self.get("stats").await?;
        ok_body(response).await
    }

    pub async fn create_contact(
        &self,
        details: &requests::ContactDraft,
    ) -> Result<(), ClientError> {
        let response = self.post_json("contacts", details).await?;
        ok_empty(response).await
    }

    /// Resolve a possibly-relative image path against the backend address.
    /// Use this for `<img src>` attributes in the UI.
    pub fn image_url(&self, image: &str) -> String {
        if image.starts_with("http://")
            || image.starts_with("https://")
            || image.starts_with("blob:")
            || image.starts_with("data:")
        {
            image.to_string()
        } else if image.starts_with('/') {
            format!("{}{}", self.address, image)
        } else {
            format!("{}/{}", self.address, image)
        }
    }
}

/// Multipart fields for a property draft. Optional fields are only
/// appended when the user filled them in.
fn property_form(draft: &requests::PropertyDraft) -> Form {
    let mut form = Form::new()
        .text("title", draft.title.trim().to_string())
        .text("categoryId", draft.category_id.to_string())
        .text("location", draft.location.trim().to_string())
        .text("price", draft.price.trim().to_string())
        .text("roi", draft.roi.trim().to_string())
        .text("status", draft.status.trim().to_string())
        .text("area", draft.area.trim().to_string())
        .text("description", draft.description.trim().to_string());

    let area_nepali = draft.area_nepali.trim();
    if !area_nepali.is_empty() {
        form = form.text("areaNepali", area_nepali.to_string());
    }
    if let Some(distance) = draft.distance_value() {
        form = form.text("distanceFromHighway", distance.to_string());
    }
    form
}

fn attach_images(mut form: Form, images: &[ImagePart]) -> Form {
    for image in images {
        form = form.part(
            "images",
            Part::bytes(image.data.clone())
                .file_name(image.file_name.clone()),
        );
    }
    form
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Failed to encode request data.")]
    Encode(#[from] serde_json::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
