//! Locally selected image files awaiting upload.

use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

/// A file picked in an edit form, plus the object URL used to preview it.
///
/// The object URL is a browser resource that is not garbage collected; it
/// is revoked when the last clone of this handle drops, which covers
/// removal from the form, a failed submission, and form teardown alike.
#[derive(Clone)]
pub struct PendingImage {
    inner: Rc<Inner>,
}

struct Inner {
    file: web_sys::File,
    preview_url: String,
}

impl Drop for Inner {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}

impl PartialEq for PendingImage {
    fn eq(&self, other: &Self) -> bool {
        // Object URLs are unique per creation, so they identify the handle.
        self.inner.preview_url == other.inner.preview_url
    }
}

impl std::fmt::Debug for PendingImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingImage")
            .field("file_name", &self.inner.file.name())
            .field("preview_url", &self.inner.preview_url)
            .finish()
    }
}

impl PendingImage {
    pub fn from_file(file: web_sys::File) -> Result<Self, String> {
        let preview_url = Url::create_object_url_with_blob(&file)
            .map_err(|_| format!("Could not preview {}", file.name()))?;
        Ok(Self {
            inner: Rc::new(Inner { file, preview_url }),
        })
    }

    pub fn file_name(&self) -> String {
        self.inner.file.name()
    }

    pub fn preview_url(&self) -> &str {
        &self.inner.preview_url
    }

    /// Read the file contents for multipart upload.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let buffer = JsFuture::from(self.inner.file.array_buffer())
            .await
            .map_err(|_| {
                format!("Could not read {}", self.inner.file.name())
            })?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Read every pending file in the strip into multipart parts. Fails as a
/// whole if any read fails, so a submission never uploads a partial set.
pub async fn collect_image_parts(
    images: &payloads::image_set::ImageSet<PendingImage>,
) -> Result<Vec<payloads::ImagePart>, String> {
    let mut parts = Vec::new();
    for handle in images.new_handles() {
        let data = handle.read_bytes().await?;
        parts.push(payloads::ImagePart {
            file_name: handle.file_name(),
            data,
        });
    }
    Ok(parts)
}
