use crate::fit::{
    FitController, FitPoll, MAX_SCALE, MIN_SCALE, ZOOM_STEP, compute_fit_scale,
};

/// State for one document-viewing session.
///
/// Owns the page list, the current page index, the display scale and the
/// slider position. The slider is deliberately decoupled from the current
/// page: dragging only moves `slider_page`, and the page index follows on
/// explicit commit so intermediate drag positions never cost a page fetch.
#[derive(Debug)]
pub struct ViewerSession {
    doc_name: String,
    pages: Vec<String>,
    current_page: usize,
    scale: f32,
    slider_page: usize,
    fit: FitController,
}

impl ViewerSession {
    pub fn new(doc_name: impl Into<String>) -> Self {
        Self {
            doc_name: doc_name.into(),
            pages: Vec::new(),
            current_page: 0,
            scale: 1.0,
            slider_page: 1,
            fit: FitController::new(),
        }
    }

    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Install the ordered page list, resetting the session to the first
    /// page at default scale and arming the fit poll.
    pub fn set_pages(&mut self, pages: Vec<String>) {
        self.pages = pages;
        self.current_page = 0;
        self.scale = 1.0;
        self.slider_page = 1;
        self.fit.arm();
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_page_id(&self) -> Option<&str> {
        self.pages.get(self.current_page).map(String::as_str)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Move one page back. No-op at the first page.
    pub fn previous_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Move one page forward. No-op at the last page.
    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    /// Jump straight to `index` (clamped). Used by the page sidebar.
    pub fn jump_to_page(&mut self, index: usize) -> bool {
        self.go_to(index)
    }

    fn go_to(&mut self, index: usize) -> bool {
        if self.pages.is_empty() {
            return false;
        }
        let index = index.min(self.pages.len() - 1);
        if index == self.current_page {
            return false;
        }
        self.current_page = index;
        self.slider_page = index + 1;
        self.fit.arm();
        true
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + ZOOM_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - ZOOM_STEP).max(MIN_SCALE);
    }

    /// 1-based page number shown by the slider while dragging.
    pub fn slider_page(&self) -> usize {
        self.slider_page
    }

    pub fn slider_page_mut(&mut self) -> &mut usize {
        &mut self.slider_page
    }

    /// Apply the slider position to the current page. Returns whether the
    /// page actually changed; the slider is resynced either way.
    pub fn commit_slider(&mut self) -> bool {
        let moved = self.go_to(self.slider_page.saturating_sub(1));
        if !self.pages.is_empty() {
            self.slider_page = self.current_page + 1;
        }
        moved
    }

    /// Tick the fit poll, applying the fitted scale on success.
    pub fn poll_fit(&mut self, intrinsic_height: Option<f32>, available_height: f32) -> FitPoll {
        let poll = self.fit.poll(intrinsic_height, available_height);
        if let FitPoll::Fitted(scale) = poll {
            self.scale = scale;
        }
        poll
    }

    /// Immediate re-fit after a viewport resize; the image is already
    /// loaded so no polling is involved.
    pub fn fit_resize(&mut self, intrinsic_height: f32, available_height: f32) {
        self.scale = compute_fit_scale(intrinsic_height, available_height);
    }

    pub fn fit_armed(&self) -> bool {
        self.fit.is_armed()
    }

    pub fn cancel_fit(&mut self) {
        self.fit.cancel();
    }

    /// Pages adjacent to the current one, for cache prefetch.
    pub fn neighbour_pages(&self) -> Vec<(String, usize)> {
        let mut neighbours = Vec::new();
        if self.current_page > 0 {
            let index = self.current_page - 1;
            neighbours.push((self.pages[index].clone(), index));
        }
        if self.current_page + 1 < self.pages.len() {
            let index = self.current_page + 1;
            neighbours.push((self.pages[index].clone(), index));
        }
        neighbours
    }
}
