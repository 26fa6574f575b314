use docrestore_api::ApiClient;
use docrestore_async_runtime::{AppCommand, CommandReceiver, UpdateSender};

use crate::cache::PageCache;
use crate::handlers;

/// Async worker task that owns the API client and processes UI commands
pub async fn worker_task(api: ApiClient, mut command_rx: CommandReceiver, update_tx: UpdateSender) {
    let mut cache = PageCache::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &api, &mut cache, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: AppCommand,
    api: &ApiClient,
    cache: &mut PageCache,
    command_rx: &mut CommandReceiver,
    update_tx: &UpdateSender,
) {
    match cmd {
        AppCommand::FetchDocuments => {
            handlers::documents::handle_fetch_documents(api, update_tx).await;
        }
        AppCommand::ProcessPdfs => {
            handlers::documents::handle_process_pdfs(api, update_tx).await;
        }
        AppCommand::FetchPages { doc_name } => {
            handlers::viewer::handle_fetch_pages(api, doc_name, update_tx).await;
        }
        AppCommand::FetchPageImage {
            mut doc_name,
            mut page_id,
            mut page_index,
        } => {
            // Coalesce queued page fetches, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                match next_cmd {
                    AppCommand::FetchPageImage {
                        doc_name: new_doc_name,
                        page_id: new_page_id,
                        page_index: new_page_index,
                    } => {
                        log::debug!("discarding queued page fetch, using newer request");
                        doc_name = new_doc_name;
                        page_id = new_page_id;
                        page_index = new_page_index;
                    }
                    AppCommand::PrefetchPageImages { .. } => {
                        // A queued prefetch is stale once direct navigation is pending
                        log::debug!("discarding prefetch during page navigation");
                    }
                    other => {
                        // Non-fetch command found, process it before the fetch
                        Box::pin(process_command(other, api, cache, command_rx, update_tx)).await;
                    }
                }
            }

            handlers::viewer::handle_fetch_page_image(
                api, cache, doc_name, page_id, page_index, update_tx,
            )
            .await;
        }
        AppCommand::PrefetchPageImages { doc_name, pages } => {
            handlers::viewer::handle_prefetch_pages(api, cache, doc_name, pages).await;
        }
    }
}
