use docrestore_viewer::*;

#[test]
fn test_fit_scale_scans_downward() {
    // 1000 px tall into 600 px: 0.60 is the first step that fits.
    let scale = compute_fit_scale(1000.0, 600.0);
    assert!((scale - 0.60).abs() < 1e-3, "got {scale}");
}

#[test]
fn test_fit_scale_keeps_full_size_when_it_fits() {
    assert_eq!(compute_fit_scale(500.0, 600.0), 1.0);
    assert_eq!(compute_fit_scale(600.0, 600.0), 1.0);
}

#[test]
fn test_fit_scale_never_crosses_floor() {
    let scale = compute_fit_scale(10_000.0, 100.0);
    assert_eq!(scale, MIN_SCALE);

    // Even a degenerate viewport stops exactly at the floor.
    assert_eq!(compute_fit_scale(1000.0, 0.0), MIN_SCALE);
    assert_eq!(compute_fit_scale(1000.0, -50.0), MIN_SCALE);
}

#[test]
fn test_fit_scale_ignores_unloaded_image() {
    // A non-positive intrinsic height means the image has not loaded;
    // the default scale stands.
    assert_eq!(compute_fit_scale(0.0, 600.0), 1.0);
}

#[test]
fn test_available_height_reserves_chrome() {
    assert_eq!(available_height(800.0, 50.0), 800.0 - 50.0 - FIT_CHROME_PX);
}

#[test]
fn test_poll_fits_once_image_is_ready() {
    let mut fit = FitController::new();
    fit.arm();

    assert_eq!(fit.poll(None, 600.0), FitPoll::Retry);
    let poll = fit.poll(Some(1000.0), 600.0);
    match poll {
        FitPoll::Fitted(scale) => assert!((scale - 0.60).abs() < 1e-3),
        other => panic!("expected Fitted, got {other:?}"),
    }

    // A successful fit disarms the controller.
    assert!(!fit.is_armed());
    assert_eq!(fit.poll(Some(1000.0), 600.0), FitPoll::Idle);
}

#[test]
fn test_poll_gives_up_after_budget() {
    let mut fit = FitController::new();
    fit.arm();

    for _ in 0..FIT_POLL_ATTEMPTS - 1 {
        assert_eq!(fit.poll(None, 600.0), FitPoll::Retry);
    }
    assert_eq!(fit.poll(None, 600.0), FitPoll::GaveUp);
    assert_eq!(fit.poll(None, 600.0), FitPoll::Idle);
}

#[test]
fn test_zero_height_image_is_not_ready() {
    let mut fit = FitController::new();
    fit.arm();
    assert_eq!(fit.poll(Some(0.0), 600.0), FitPoll::Retry);
}

#[test]
fn test_cancel_makes_pending_ticks_no_ops() {
    let mut fit = FitController::new();
    fit.arm();
    assert!(fit.is_armed());

    fit.cancel();
    assert!(!fit.is_armed());
    assert_eq!(fit.poll(Some(1000.0), 600.0), FitPoll::Idle);
}

#[test]
fn test_rearm_restores_full_budget() {
    let mut fit = FitController::new();
    fit.arm();
    for _ in 0..5 {
        fit.poll(None, 600.0);
    }

    fit.arm();
    for _ in 0..FIT_POLL_ATTEMPTS - 1 {
        assert_eq!(fit.poll(None, 600.0), FitPoll::Retry);
    }
    assert_eq!(fit.poll(None, 600.0), FitPoll::GaveUp);
}
