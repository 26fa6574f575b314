use docrestore_async_runtime::{AppCommand, CommandSender};
use docrestore_viewer::{FIT_POLL_INTERVAL, FitPoll, ViewerSession, available_height};
use eframe::egui;

use crate::ui_components::PageSlider;

/// GUI-side state of the document-viewer view: the pure session plus the
/// texture currently uploaded for it.
pub struct ViewerPanel {
    pub session: ViewerSession,
    pub pages_loaded: bool,
    page_texture: Option<egui::TextureHandle>,
    /// Page index the texture holds; display and fit only trust the texture
    /// when it matches the current page.
    texture_page: Option<usize>,
    last_viewport: egui::Vec2,
}

impl ViewerPanel {
    pub fn new(doc_name: &str) -> Self {
        Self {
            session: ViewerSession::new(doc_name),
            pages_loaded: false,
            page_texture: None,
            texture_page: None,
            last_viewport: egui::Vec2::ZERO,
        }
    }

    /// Upload a freshly decoded page image, reusing the existing texture
    /// allocation when there is one.
    pub fn install_page_image(
        &mut self,
        ctx: &egui::Context,
        page_index: usize,
        width: usize,
        height: usize,
        rgba_data: &[u8],
    ) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied([width, height], rgba_data);
        match &mut self.page_texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::default()),
            None => {
                self.page_texture =
                    Some(ctx.load_texture("page-image", color_image, egui::TextureOptions::default()))
            }
        }
        self.texture_page = Some(page_index);
    }

    fn current_texture(&self) -> Option<&egui::TextureHandle> {
        if self.texture_page == Some(self.session.current_page()) {
            self.page_texture.as_ref()
        } else {
            None
        }
    }

    fn current_intrinsic_height(&self) -> Option<f32> {
        self.current_texture().map(|t| t.size_vec2().y)
    }
}

pub fn show_viewer(
    ui: &mut egui::Ui,
    panel: &mut ViewerPanel,
    command_tx: &CommandSender,
    status: &mut String,
) {
    if panel.session.page_count() == 0 {
        ui.centered_and_justified(|ui| {
            if panel.pages_loaded {
                ui.label("Document has no pages.");
            } else {
                ui.spinner();
                ui.label("Loading pages...");
            }
        });
        return;
    }

    ui.horizontal_top(|ui| {
        page_sidebar(ui, panel, command_tx, status);
        ui.separator();
        ui.vertical(|ui| {
            navigation_bar(ui, panel, command_tx, status);
            ui.separator();
            page_image_area(ui, panel);
        });
    });
}

fn page_sidebar(
    ui: &mut egui::Ui,
    panel: &mut ViewerPanel,
    command_tx: &CommandSender,
    status: &mut String,
) {
    ui.vertical(|ui| {
        ui.set_width(140.0);
        egui::ScrollArea::vertical()
            .id_salt("page-sidebar")
            .show(ui, |ui| {
                let mut clicked = None;
                for index in 0..panel.session.page_count() {
                    let selected = index == panel.session.current_page();
                    if ui
                        .selectable_label(selected, format!("Page {}", index + 1))
                        .clicked()
                    {
                        clicked = Some(index);
                    }
                }
                if let Some(index) = clicked {
                    if panel.session.jump_to_page(index) {
                        request_current_page(panel, command_tx, status);
                    }
                }
            });
    });
}

fn navigation_bar(
    ui: &mut egui::Ui,
    panel: &mut ViewerPanel,
    command_tx: &CommandSender,
    status: &mut String,
) {
    ui.horizontal(|ui| {
        let can_go_back = panel.session.current_page() > 0;
        let can_go_forward = panel.session.current_page() + 1 < panel.session.page_count();

        if ui
            .add_enabled(can_go_back, egui::Button::new("◀ Previous"))
            .clicked()
            && panel.session.previous_page()
        {
            request_current_page(panel, command_tx, status);
        }

        ui.label(format!(
            "Page {} of {}",
            panel.session.current_page() + 1,
            panel.session.page_count()
        ));

        if ui
            .add_enabled(can_go_forward, egui::Button::new("Next ▶"))
            .clicked()
            && panel.session.next_page()
        {
            request_current_page(panel, command_tx, status);
        }

        ui.separator();

        if ui.button("Zoom Out").clicked() {
            panel.session.zoom_out();
        }
        if ui.button("Zoom In").clicked() {
            panel.session.zoom_in();
        }
    });

    ui.horizontal(|ui| {
        let page_count = panel.session.page_count();
        let committed = PageSlider::new(panel.session.slider_page_mut(), page_count).show(ui);
        if committed && panel.session.commit_slider() {
            request_current_page(panel, command_tx, status);
        }
    });
}

fn page_image_area(ui: &mut egui::Ui, panel: &mut ViewerPanel) {
    let ctx = ui.ctx().clone();
    let viewport = ui.max_rect().size();
    let container_top = ui.cursor().top();
    let available = available_height(ui.max_rect().bottom(), container_top);

    let intrinsic = panel.current_intrinsic_height();

    // A viewport resize re-fits the already-loaded image immediately.
    if viewport != panel.last_viewport {
        if panel.last_viewport != egui::Vec2::ZERO {
            if let Some(height) = intrinsic {
                panel.session.fit_resize(height, available);
            }
        }
        panel.last_viewport = viewport;
    }

    match panel.session.poll_fit(intrinsic, available) {
        FitPoll::Retry => ctx.request_repaint_after(FIT_POLL_INTERVAL),
        FitPoll::Fitted(_) | FitPoll::GaveUp | FitPoll::Idle => {}
    }

    if let Some(texture) = panel.current_texture() {
        // Anchored at the top-left so zoom never reflows the layout.
        let size = texture.size_vec2() * panel.session.scale();
        let texture_id = texture.id();
        egui::ScrollArea::both().id_salt("page-image").show(ui, |ui| {
            ui.image((texture_id, size));
        });
    } else {
        ui.spinner();
        ui.label("Loading page...");
    }
}

fn request_current_page(panel: &ViewerPanel, command_tx: &CommandSender, status: &mut String) {
    if let Some(page_id) = panel.session.current_page_id() {
        let _ = command_tx.send(AppCommand::FetchPageImage {
            doc_name: panel.session.doc_name().to_string(),
            page_id: page_id.to_string(),
            page_index: panel.session.current_page(),
        });
        *status = format!("Loading page {}...", panel.session.current_page() + 1);
    }
}
