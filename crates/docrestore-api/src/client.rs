use crate::types::{ApiError, DocumentList, ErrorBody, PageList, ProcessOutcome, Result};

/// Async client for the document-processing backend.
///
/// The base URL is injected once at construction; there is no global
/// endpoint configuration. All calls are single-shot and surface failures
/// as [`ApiError`] with no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn documents_url(&self) -> String {
        format!("{}/api/documents", self.base_url)
    }

    pub fn process_pdfs_url(&self) -> String {
        format!("{}/api/process_pdfs", self.base_url)
    }

    pub fn pages_url(&self, doc_name: &str) -> String {
        format!(
            "{}/api/document/{}/pages",
            self.base_url,
            urlencoding::encode(doc_name)
        )
    }

    pub fn page_image_url(&self, doc_name: &str, page_id: &str) -> String {
        format!(
            "{}/api/document/{}/page/{}",
            self.base_url,
            urlencoding::encode(doc_name),
            urlencoding::encode(page_id)
        )
    }

    /// Names of the documents the backend has finished preprocessing.
    pub async fn list_documents(&self) -> Result<Vec<String>> {
        let response = self.http.get(self.documents_url()).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<DocumentList>().await?.documents)
    }

    /// Trigger preprocessing of the backend's source PDFs. Returns the
    /// backend's completion message.
    pub async fn process_pdfs(&self) -> Result<String> {
        let response = self.http.post(self.process_pdfs_url()).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<ProcessOutcome>().await?.message)
    }

    /// Ordered page identifiers for a document.
    pub async fn document_pages(&self, doc_name: &str) -> Result<Vec<String>> {
        let response = self.http.get(self.pages_url(doc_name)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<PageList>().await?.pages)
    }

    /// Raw bytes of one rendered page image.
    pub async fn page_image(&self, doc_name: &str, page_id: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.page_image_url(doc_name, page_id))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Map non-success statuses to [`ApiError::Server`], pulling the message
/// out of the backend's `{"error": ...}` body when there is one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(e) => {
            log::debug!("error response body was not JSON: {e}");
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        }
    };
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}
