use docrestore_api::ApiClient;
use docrestore_async_runtime::{AppUpdate, UpdateSender};

use crate::cache::{CachedPage, PageCache};

pub async fn handle_fetch_pages(api: &ApiClient, doc_name: String, update_tx: &UpdateSender) {
    match api.document_pages(&doc_name).await {
        Ok(pages) => {
            let _ = update_tx.send(AppUpdate::PagesLoaded { doc_name, pages });
        }
        Err(e) => {
            log::error!("failed to fetch pages of {doc_name}: {e}");
            let _ = update_tx.send(AppUpdate::Error {
                message: format!("Error loading pages: {e}"),
            });
        }
    }
}

pub async fn handle_fetch_page_image(
    api: &ApiClient,
    cache: &mut PageCache,
    doc_name: String,
    page_id: String,
    page_index: usize,
    update_tx: &UpdateSender,
) {
    let key = (doc_name.clone(), page_index);

    // Check cache first
    if let Some(cached) = cache.get(&key) {
        let _ = update_tx.send(AppUpdate::PageImageLoaded {
            doc_name,
            page_index,
            width: cached.width,
            height: cached.height,
            rgba_data: cached.rgba_data.clone(),
        });
        return;
    }

    match fetch_page(api, &doc_name, &page_id).await {
        Ok(page) => {
            cache.insert(key, page.clone());
            let _ = update_tx.send(AppUpdate::PageImageLoaded {
                doc_name,
                page_index,
                width: page.width,
                height: page.height,
                rgba_data: page.rgba_data,
            });
        }
        Err(message) => {
            log::error!("{message}");
            let _ = update_tx.send(AppUpdate::Error { message });
        }
    }
}

/// Warm the cache for nearby pages without notifying the UI
pub async fn handle_prefetch_pages(
    api: &ApiClient,
    cache: &mut PageCache,
    doc_name: String,
    pages: Vec<(String, usize)>,
) {
    for (page_id, page_index) in pages {
        let key = (doc_name.clone(), page_index);

        // Skip if already cached
        if cache.contains(&key) {
            continue;
        }

        match fetch_page(api, &doc_name, &page_id).await {
            Ok(page) => {
                cache.insert(key, page);
                log::debug!("prefetched {doc_name} page {page_index} into cache");
            }
            Err(message) => {
                log::warn!("failed to prefetch page {page_index}: {message}");
            }
        }
    }
}

/// Fetch one page image and decode it to RGBA. Decoding is CPU-bound and
/// runs on the blocking pool.
async fn fetch_page(api: &ApiClient, doc_name: &str, page_id: &str) -> Result<CachedPage, String> {
    let bytes = match api.page_image(doc_name, page_id).await {
        Ok(bytes) => bytes,
        Err(e) => return Err(format!("Error fetching page image: {e}")),
    };

    match tokio::task::spawn_blocking(move || {
        let image = image::load_from_memory(&bytes)?;
        let rgba = image.to_rgba8();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        Ok::<_, image::ImageError>(CachedPage {
            rgba_data: rgba.into_raw(),
            width,
            height,
        })
    })
    .await
    {
        Ok(Ok(page)) => Ok(page),
        Ok(Err(e)) => Err(format!("Error decoding page image: {e}")),
        Err(e) => Err(format!("Task join error: {e}")),
    }
}
