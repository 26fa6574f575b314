use tokio::sync::mpsc;

// Re-export types from library crates
pub use docrestore_api::{ApiClient, ApiError};
pub use docrestore_viewer::{FitController, FitPoll, ViewerSession};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum AppCommand {
    FetchDocuments,
    ProcessPdfs,
    FetchPages {
        doc_name: String,
    },
    FetchPageImage {
        doc_name: String,
        page_id: String,
        page_index: usize,
    },
    /// Warm the page cache for nearby pages (lower priority than direct fetches)
    PrefetchPageImages {
        doc_name: String,
        pages: Vec<(String, usize)>,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum AppUpdate {
    DocumentsLoaded {
        documents: Vec<String>,
    },
    ProcessComplete {
        message: String,
    },
    PagesLoaded {
        doc_name: String,
        pages: Vec<String>,
    },
    PageImageLoaded {
        doc_name: String,
        page_index: usize,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    Error {
        message: String,
    },
}

pub type CommandSender = mpsc::UnboundedSender<AppCommand>;
pub type CommandReceiver = mpsc::UnboundedReceiver<AppCommand>;
pub type UpdateSender = mpsc::UnboundedSender<AppUpdate>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<AppUpdate>;
