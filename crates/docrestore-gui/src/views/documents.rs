use docrestore_async_runtime::{AppCommand, CommandSender};
use eframe::egui;

#[derive(Default)]
pub struct DocumentsState {
    pub documents: Vec<String>,
    pub selected: String,
    pub processing: bool,
}

/// Document-selection view. Returns the document to open, if any.
pub fn show_documents(
    ui: &mut egui::Ui,
    state: &mut DocumentsState,
    command_tx: &CommandSender,
    status: &mut String,
) -> Option<String> {
    let mut open = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.processing, egui::Button::new("Preprocess PDFs"))
            .clicked()
        {
            state.processing = true;
            *status = "Processing...".to_string();
            let _ = command_tx.send(AppCommand::ProcessPdfs);
        }

        if ui.button("Refresh").clicked() {
            *status = "Loading documents...".to_string();
            let _ = command_tx.send(AppCommand::FetchDocuments);
        }
    });

    ui.add_space(10.0);
    ui.label("Select a document");

    let selected_text = if state.selected.is_empty() {
        "Choose..."
    } else {
        state.selected.as_str()
    };
    egui::ComboBox::from_id_salt("document-select")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for doc in &state.documents {
                ui.selectable_value(&mut state.selected, doc.clone(), doc.as_str());
            }
        });

    ui.add_space(10.0);
    if ui
        .add_enabled(!state.selected.is_empty(), egui::Button::new("View Document"))
        .clicked()
    {
        open = Some(state.selected.clone());
    }

    if state.documents.is_empty() {
        ui.add_space(10.0);
        ui.label("No processed documents yet. Preprocess PDFs to populate the list.");
    }

    open
}
