use docrestore_api::ApiClient;
use docrestore_async_runtime::{AppCommand, AppUpdate, CommandSender, UpdateReceiver};
use eframe::egui;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{DocumentsState, ViewerPanel, show_documents, show_viewer};

#[derive(Default, PartialEq)]
enum Route {
    #[default]
    Documents,
    Viewer,
}

pub struct DocRestoreApp {
    route: Route,
    documents: DocumentsState,
    viewer: Option<ViewerPanel>,
    status: String,

    // Async infrastructure
    command_tx: CommandSender,
    update_rx: UpdateReceiver,

    // In-app log window
    logger: AppLogger,
    show_log: bool,

    // Runtime handle
    _tokio_handle: tokio::runtime::Handle,
}

impl DocRestoreApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        server_url: String,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        let api = ApiClient::new(server_url);
        log::info!("using backend at {}", api.base_url());
        tokio_handle.spawn(crate::worker::worker_task(api, command_rx, update_tx));

        let _ = command_tx.send(AppCommand::FetchDocuments);

        Self {
            route: Route::default(),
            documents: DocumentsState::default(),
            viewer: None,
            status: "Loading documents...".to_string(),
            command_tx,
            update_rx,
            logger,
            show_log: false,
            _tokio_handle: tokio_handle,
        }
    }

    fn open_document(&mut self, doc_name: String) {
        self.status = format!("Loading pages of {doc_name}...");
        self.viewer = Some(ViewerPanel::new(&doc_name));
        self.route = Route::Viewer;
        let _ = self.command_tx.send(AppCommand::FetchPages { doc_name });
    }

    fn close_viewer(&mut self) {
        if let Some(panel) = &mut self.viewer {
            // Stop any fit poll still in flight before the view goes away
            panel.session.cancel_fit();
        }
        self.viewer = None;
        self.route = Route::Documents;
        self.status.clear();
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: AppUpdate) {
        match update {
            AppUpdate::DocumentsLoaded { documents } => {
                self.status = format!("{} documents available", documents.len());
                self.documents.documents = documents;
            }
            AppUpdate::ProcessComplete { message } => {
                log::info!("backend preprocessing finished: {message}");
                self.documents.processing = false;
                self.status = "Processing completed successfully".to_string();
                // Refresh the document list
                let _ = self.command_tx.send(AppCommand::FetchDocuments);
            }
            AppUpdate::PagesLoaded { doc_name, pages } => {
                let Some(panel) = &mut self.viewer else { return };
                if panel.session.doc_name() != doc_name {
                    log::debug!("dropping stale page list for {doc_name}");
                    return;
                }
                self.status = format!("{} pages", pages.len());
                panel.pages_loaded = true;
                panel.session.set_pages(pages);
                if let Some(page_id) = panel.session.current_page_id() {
                    let _ = self.command_tx.send(AppCommand::FetchPageImage {
                        doc_name,
                        page_id: page_id.to_string(),
                        page_index: panel.session.current_page(),
                    });
                }
            }
            AppUpdate::PageImageLoaded {
                doc_name,
                page_index,
                width,
                height,
                rgba_data,
            } => {
                let Some(panel) = &mut self.viewer else { return };
                // In-flight fetches are not cancelled on navigation; late
                // completions for pages no longer shown are dropped here.
                if panel.session.doc_name() != doc_name
                    || panel.session.current_page() != page_index
                {
                    log::debug!("dropping stale image for {doc_name} page {page_index}");
                    return;
                }
                panel.install_page_image(ctx, page_index, width, height, &rgba_data);
                self.status.clear();

                let pages = panel.session.neighbour_pages();
                if !pages.is_empty() {
                    let _ = self
                        .command_tx
                        .send(AppCommand::PrefetchPageImages { doc_name, pages });
                }
                ctx.request_repaint();
            }
            AppUpdate::Error { message } => {
                self.documents.processing = false;
                self.status = message;
            }
        }
    }
}

impl eframe::App for DocRestoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
        }

        let mut go_home = false;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.route == Route::Documents, "DocRestore")
                    .clicked()
                {
                    go_home = true;
                }
                if let Some(panel) = &self.viewer {
                    ui.separator();
                    ui.label(panel.session.doc_name());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_log, "Log");
                });
            });
        });
        if go_home && self.route != Route::Documents {
            self.close_viewer();
        }

        let mut open_doc = None;
        let mut viewer_gone = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.route {
                Route::Documents => {
                    open_doc =
                        show_documents(ui, &mut self.documents, &self.command_tx, &mut self.status);
                }
                Route::Viewer => match &mut self.viewer {
                    Some(panel) => show_viewer(ui, panel, &self.command_tx, &mut self.status),
                    None => viewer_gone = true,
                },
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
        if viewer_gone {
            self.route = Route::Documents;
        }
        if let Some(doc_name) = open_doc {
            self.open_document(doc_name);
        }

        if self.show_log {
            let entries = self.logger.entries();
            egui::Window::new("Log")
                .open(&mut self.show_log)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in &entries {
                                ui.label(format!(
                                    "{} [{}] {}: {}",
                                    entry.timestamp.format("%H:%M:%S"),
                                    entry.level,
                                    entry.target,
                                    entry.message
                                ));
                            }
                        });
                });
        }
    }
}
