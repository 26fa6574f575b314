use docrestore_api::ApiClient;
use docrestore_async_runtime::{AppUpdate, UpdateSender};

pub async fn handle_fetch_documents(api: &ApiClient, update_tx: &UpdateSender) {
    match api.list_documents().await {
        Ok(documents) => {
            let _ = update_tx.send(AppUpdate::DocumentsLoaded { documents });
        }
        Err(e) => {
            log::error!("failed to fetch document list: {e}");
            let _ = update_tx.send(AppUpdate::Error {
                message: format!("Error loading documents: {e}"),
            });
        }
    }
}

pub async fn handle_process_pdfs(api: &ApiClient, update_tx: &UpdateSender) {
    match api.process_pdfs().await {
        Ok(message) => {
            let _ = update_tx.send(AppUpdate::ProcessComplete { message });
        }
        Err(e) => {
            log::error!("preprocessing failed: {e}");
            let _ = update_tx.send(AppUpdate::Error {
                message: "Error occurred during processing".to_string(),
            });
        }
    }
}
