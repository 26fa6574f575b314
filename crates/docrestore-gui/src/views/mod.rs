pub mod documents;
pub mod viewer;

pub use documents::{DocumentsState, show_documents};
pub use viewer::{ViewerPanel, show_viewer};
