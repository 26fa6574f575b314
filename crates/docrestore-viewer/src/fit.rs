use std::time::Duration;

/// Step used when scanning downward for a fitting scale.
pub const FIT_SCALE_STEP: f32 = 0.05;
/// Hard lower bound for any scale, fit-derived or manual.
pub const MIN_SCALE: f32 = 0.1;
/// Upper bound for manual zoom.
pub const MAX_SCALE: f32 = 3.0;
/// Manual zoom increment.
pub const ZOOM_STEP: f32 = 0.1;
/// Vertical space reserved for navigation chrome below the page image, in px.
pub const FIT_CHROME_PX: f32 = 150.0;
/// How many times to poll for image readiness before giving up.
pub const FIT_POLL_ATTEMPTS: u32 = 20;
/// Cadence of the readiness poll.
pub const FIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Height left for the page image below its container top.
pub fn available_height(viewport_height: f32, container_top: f32) -> f32 {
    viewport_height - container_top - FIT_CHROME_PX
}

/// Largest scale of the form `1 - 0.05k` at which an image of
/// `intrinsic_height` fits within `available_height`, bottoming out at
/// [`MIN_SCALE`]. The floor is never crossed.
pub fn compute_fit_scale(intrinsic_height: f32, available_height: f32) -> f32 {
    let mut scale = 1.0_f32;
    if intrinsic_height <= 0.0 {
        return scale;
    }
    while intrinsic_height * scale > available_height && scale > MIN_SCALE {
        scale = (scale - FIT_SCALE_STEP).max(MIN_SCALE);
    }
    scale
}

/// Outcome of one readiness-poll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitPoll {
    /// Controller is disarmed; nothing to do.
    Idle,
    /// Image not ready yet; poll again after [`FIT_POLL_INTERVAL`].
    Retry,
    /// Image ready; the contained scale makes it fit.
    Fitted(f32),
    /// Attempt budget exhausted; the current scale stands.
    GaveUp,
}

/// Bounded readiness poll for the auto-fit pass.
///
/// Image decoding completes asynchronously, so after a page change the
/// controller is armed and ticked until the image reports a non-zero
/// intrinsic height or the attempt budget runs out. Cancelling zeroes the
/// budget, making any still-pending tick a no-op, so nothing fires after
/// the owning view is gone or for a page no longer shown.
#[derive(Debug, Default)]
pub struct FitController {
    attempts_left: u32,
}

impl FitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a fresh poll, replacing any poll still in flight.
    pub fn arm(&mut self) {
        self.attempts_left = FIT_POLL_ATTEMPTS;
    }

    /// Disarm; pending ticks become no-ops.
    pub fn cancel(&mut self) {
        self.attempts_left = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.attempts_left > 0
    }

    /// One poll tick. `intrinsic_height` is the image's natural height if it
    /// has finished loading.
    pub fn poll(&mut self, intrinsic_height: Option<f32>, available_height: f32) -> FitPoll {
        if self.attempts_left == 0 {
            return FitPoll::Idle;
        }
        match intrinsic_height {
            Some(height) if height > 0.0 => {
                self.attempts_left = 0;
                FitPoll::Fitted(compute_fit_scale(height, available_height))
            }
            _ => {
                self.attempts_left -= 1;
                if self.attempts_left == 0 {
                    log::debug!("fit poll exhausted before page image was ready");
                    FitPoll::GaveUp
                } else {
                    FitPoll::Retry
                }
            }
        }
    }
}
