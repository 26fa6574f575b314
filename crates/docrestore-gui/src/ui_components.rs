use eframe::egui;

/// Slider over 1-based page numbers. Dragging only moves the handle; the
/// caller commits the value once this returns true (drag released), so
/// intermediate positions never trigger a page fetch.
pub struct PageSlider<'a> {
    value: &'a mut usize,
    page_count: usize,
}

impl<'a> PageSlider<'a> {
    pub fn new(value: &'a mut usize, page_count: usize) -> Self {
        Self { value, page_count }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let max = self.page_count.max(1);
        let response = ui.add(egui::Slider::new(self.value, 1..=max).text("Page"));
        response.drag_stopped()
    }
}
