use docrestore_viewer::*;

fn session_with_pages(count: usize) -> ViewerSession {
    let mut session = ViewerSession::new("sample.pdf");
    session.set_pages((1..=count).map(|i| format!("page_{i}.jpg")).collect());
    session
}

#[test]
fn test_navigation_stays_in_bounds() {
    let mut session = session_with_pages(3);

    assert_eq!(session.current_page(), 0);
    assert!(!session.previous_page());
    assert_eq!(session.current_page(), 0);

    assert!(session.next_page());
    assert_eq!(session.current_page(), 1);
    assert!(session.next_page());
    assert_eq!(session.current_page(), 2);

    // At the last page, next is a no-op.
    assert!(!session.next_page());
    assert_eq!(session.current_page(), 2);
}

#[test]
fn test_jump_clamps_to_last_page() {
    let mut session = session_with_pages(3);
    assert!(session.jump_to_page(99));
    assert_eq!(session.current_page(), 2);
    assert_eq!(session.current_page_id(), Some("page_3.jpg"));
}

#[test]
fn test_navigation_on_empty_page_list_is_a_no_op() {
    let mut session = ViewerSession::new("sample.pdf");
    assert!(!session.next_page());
    assert!(!session.previous_page());
    assert!(!session.jump_to_page(5));
    assert_eq!(session.current_page(), 0);
    assert_eq!(session.current_page_id(), None);
}

#[test]
fn test_zoom_is_clamped() {
    let mut session = session_with_pages(1);

    for _ in 0..40 {
        session.zoom_in();
    }
    assert_eq!(session.scale(), MAX_SCALE);

    for _ in 0..40 {
        session.zoom_out();
    }
    assert_eq!(session.scale(), MIN_SCALE);
}

#[test]
fn test_slider_drag_does_not_change_page() {
    let mut session = session_with_pages(5);

    // Dragging through intermediate values only moves the slider.
    *session.slider_page_mut() = 2;
    *session.slider_page_mut() = 3;
    *session.slider_page_mut() = 4;
    assert_eq!(session.current_page(), 0);

    assert!(session.commit_slider());
    assert_eq!(session.current_page(), 3);
    assert_eq!(session.slider_page(), 4);
}

#[test]
fn test_slider_commit_on_same_page_is_a_no_op() {
    let mut session = session_with_pages(5);
    *session.slider_page_mut() = 1;
    assert!(!session.commit_slider());
    assert_eq!(session.current_page(), 0);
}

#[test]
fn test_slider_commit_clamps_and_resyncs() {
    let mut session = session_with_pages(3);
    *session.slider_page_mut() = 99;
    assert!(session.commit_slider());
    assert_eq!(session.current_page(), 2);
    assert_eq!(session.slider_page(), 3);
}

#[test]
fn test_navigation_keeps_slider_in_sync() {
    let mut session = session_with_pages(3);
    session.next_page();
    assert_eq!(session.slider_page(), 2);
    session.jump_to_page(0);
    assert_eq!(session.slider_page(), 1);
}

#[test]
fn test_set_pages_resets_session_and_arms_fit() {
    let mut session = session_with_pages(5);
    session.jump_to_page(4);
    session.zoom_in();

    session.set_pages(vec!["page_1.jpg".into(), "page_2.jpg".into()]);
    assert_eq!(session.current_page(), 0);
    assert_eq!(session.scale(), 1.0);
    assert_eq!(session.slider_page(), 1);
    assert!(session.fit_armed());
}

#[test]
fn test_page_change_arms_fit_poll() {
    let mut session = session_with_pages(3);
    session.cancel_fit();
    assert!(!session.fit_armed());

    session.next_page();
    assert!(session.fit_armed());
}

#[test]
fn test_poll_fit_applies_scale() {
    let mut session = session_with_pages(3);

    assert_eq!(session.poll_fit(None, 600.0), FitPoll::Retry);
    match session.poll_fit(Some(1000.0), 600.0) {
        FitPoll::Fitted(_) => {}
        other => panic!("expected Fitted, got {other:?}"),
    }
    assert!((session.scale() - 0.60).abs() < 1e-3);
}

#[test]
fn test_manual_zoom_survives_until_next_fit() {
    let mut session = session_with_pages(3);
    session.cancel_fit();

    session.zoom_in();
    let zoomed = session.scale();

    // A disarmed poll leaves manual zoom alone.
    assert_eq!(session.poll_fit(Some(1000.0), 600.0), FitPoll::Idle);
    assert_eq!(session.scale(), zoomed);

    // A resize re-fit overrides it.
    session.fit_resize(1000.0, 600.0);
    assert!((session.scale() - 0.60).abs() < 1e-3);
}

#[test]
fn test_neighbour_pages() {
    let mut session = session_with_pages(3);
    assert_eq!(session.neighbour_pages(), vec![("page_2.jpg".to_string(), 1)]);

    session.next_page();
    assert_eq!(
        session.neighbour_pages(),
        vec![
            ("page_1.jpg".to_string(), 0),
            ("page_3.jpg".to_string(), 2)
        ]
    );

    session.next_page();
    assert_eq!(session.neighbour_pages(), vec![("page_2.jpg".to_string(), 1)]);
}
