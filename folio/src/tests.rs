use crate::partition::{Keyframes, PropRoute, Target, classify_class, route_prop};
use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

fn carousel(count: usize) -> Reconciler {
    Reconciler::new(CarouselOptions::new(count))
}

/// Reports item `index` as the only one in view.
fn show_only(r: &mut Reconciler, index: usize) {
    for i in 0..r.count() {
        r.on_visibility_changed(i, if i == index { 1.0 } else { 0.0 });
    }
}

fn mid_scroll() -> ScrollProgress {
    ScrollProgress::new(0.5, true)
}

#[test]
fn select_discrete_clamps_into_range() {
    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let count = rng.gen_range_usize(1, 40);
        let mut r = carousel(count);
        let start = rng.gen_range_usize(0, count);
        r.select_discrete(start, 0);
        let requested = rng.gen_range_usize(0, count * 3);
        let got = r.select_discrete(requested, 1).unwrap();
        assert!(got < count);
        assert_eq!(got, requested.min(count - 1));
        assert_eq!(r.selected(), Some(got));
    }
}

#[test]
fn initial_selection_is_clamped() {
    let r = Reconciler::new(CarouselOptions::new(3).with_initial_selected(10));
    assert_eq!(r.selected(), Some(2));
    assert_eq!(r.mode(), Mode::Free);
}

#[test]
fn next_at_last_and_previous_at_first_do_not_wrap() {
    let mut r = carousel(4);
    assert_eq!(r.previous(0), Some(0));
    assert_eq!(r.selected(), Some(0));

    r.select_discrete(3, 10);
    assert_eq!(r.next(20), Some(3));
    assert_eq!(r.selected(), Some(3));
    assert!(!r.can_go_next());
    assert!(r.can_go_previous());
}

#[test]
fn discrete_input_enters_directed_and_expires_to_free() {
    let mut r = carousel(4);
    r.next(1_000);
    assert_eq!(
        r.mode(),
        Mode::Directed {
            deadline_ms: 1_000 + DEFAULT_DISCRETE_WINDOW_MS
        }
    );

    assert!(!r.tick(1_199));
    assert!(r.is_directed());
    assert!(r.tick(1_200));
    assert_eq!(r.mode(), Mode::Free);
    assert!(!r.tick(5_000));
}

#[test]
fn later_discrete_input_restarts_the_window() {
    let mut r = carousel(4);
    r.next(0);
    r.next(150);
    assert_eq!(r.mode().deadline_ms(), Some(350));
    assert!(!r.tick(300));
    assert!(r.tick(350));
}

#[test]
fn directed_ignores_passive_visibility_and_rearms() {
    let mut r = carousel(5);
    r.select_discrete(3, 0);
    show_only(&mut r, 1);

    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 150), None);
    assert_eq!(r.selected(), Some(3));
    // The stray scroll event pushed the deadline out from 200 to 350.
    assert_eq!(r.mode().deadline_ms(), Some(350));
    assert!(!r.tick(300));
}

#[test]
fn free_scroll_selects_the_single_visible_item() {
    let mut r = carousel(5);
    show_only(&mut r, 2);
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 0), Some(2));
    assert_eq!(r.selected(), Some(2));
    assert_eq!(r.mode(), Mode::Free);
    // No scroll request: the view is already there.
    assert_eq!(r.take_scroll_request(0), None);
}

#[test]
fn free_scroll_prefers_the_first_visible_item() {
    let mut r = carousel(5);
    r.on_visibility_changed(3, 0.95);
    r.on_visibility_changed(4, 1.0);
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 0), Some(3));
}

#[test]
fn free_scroll_without_visible_items_keeps_selection() {
    let mut r = carousel(5);
    r.on_visibility_changed(2, 0.5);
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 0), None);
    assert_eq!(r.selected(), Some(0));
}

#[test]
fn late_scroll_event_after_expiry_takes_the_free_path() {
    let mut r = carousel(4);
    r.select_discrete(1, 0);
    show_only(&mut r, 2);
    // No tick in between: the scroll event itself notices the expired window.
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 400), Some(2));
    assert!(!r.is_directed());
}

#[test]
fn rapid_next_clicks_coalesce_into_one_scroll_request() {
    let mut r = carousel(4);
    r.next(0);
    r.next(40);
    r.next(80);
    assert_eq!(r.selected(), Some(3));

    let req = r.take_scroll_request(90).unwrap();
    assert_eq!(req.index, 3);
    assert_eq!(req.requested_at_ms, 80);
    assert_eq!(r.take_scroll_request(91), None);
}

#[test]
fn expired_scroll_request_is_dropped() {
    let mut r = carousel(4);
    r.next(0);
    assert!(r.has_pending_scroll());
    assert_eq!(r.take_scroll_request(500), None);
    assert!(!r.has_pending_scroll());
}

#[test]
fn wheel_steps_one_item_and_prevents_default() {
    let mut r = carousel(4);
    r.select_discrete(1, 0);
    r.tick(1_000);

    let out = r.on_wheel(5.0, 1_000);
    assert_eq!(
        out,
        WheelOutcome {
            prevent_default: true,
            selected: Some(2)
        }
    );
    assert!(r.is_directed());

    let out = r.on_wheel(-120.0, 1_010);
    assert_eq!(out.selected, Some(1));
}

#[test]
fn wheel_at_the_edges_clamps_but_stays_consumed() {
    let mut r = carousel(2);
    let out = r.on_wheel(-1.0, 0);
    assert!(out.prevent_default);
    assert_eq!(out.selected, Some(0));

    r.on_wheel(1.0, 10);
    let out = r.on_wheel(1.0, 20);
    assert!(out.prevent_default);
    assert_eq!(out.selected, Some(1));
}

#[test]
fn zero_wheel_delta_is_consumed_without_arming() {
    let mut r = carousel(3);
    let out = r.on_wheel(0.0, 0);
    assert!(out.prevent_default);
    assert_eq!(out.selected, Some(0));
    assert_eq!(r.mode(), Mode::Free);
    assert!(!r.has_pending_scroll());

    let out = r.on_wheel(f32::NAN, 0);
    assert!(out.prevent_default);
    assert_eq!(r.mode(), Mode::Free);
}

#[test]
fn empty_carousel_is_inert() {
    let mut r = carousel(0);
    assert_eq!(r.selected(), None);
    assert!(!r.can_navigate());
    assert_eq!(r.next(0), None);
    assert_eq!(r.previous(0), None);
    assert_eq!(r.select_discrete(4, 0), None);
    assert_eq!(r.select_dot(0, 0), None);
    assert_eq!(
        r.on_wheel(3.0, 0),
        WheelOutcome {
            prevent_default: false,
            selected: None
        }
    );
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 0), None);
    assert_eq!(r.take_scroll_request(0), None);
    assert_eq!(r.mode(), Mode::Free);
    assert_eq!(r.edge_mask(), EdgeMask::NoneNeeded);
}

#[test]
fn unmount_cancels_timer_and_ignores_late_callbacks() {
    let mut r = carousel(4);
    r.next(0);
    r.unmount();
    assert!(!r.is_mounted());
    assert_eq!(r.mode(), Mode::Free);
    assert!(!r.has_pending_scroll());
    assert!(r.visibility().is_detached());

    r.on_visibility_changed(3, 1.0);
    assert!(!r.visibility().is_visible(3));
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 10), None);
    assert_eq!(r.next(20), None);
    assert!(!r.on_wheel(1.0, 30).prevent_default);
    assert_eq!(r.take_scroll_request(40), None);
    assert!(!r.tick(10_000));
    assert_eq!(r.selected(), Some(1));

    // Idempotent.
    r.unmount();
}

#[test]
fn on_change_reports_source_and_skips_no_ops() {
    let log: Arc<Mutex<Vec<SelectionChange>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let mut r = Reconciler::new(CarouselOptions::new(4).with_on_change(Some(
        move |change: SelectionChange| sink.lock().unwrap().push(change),
    )));

    r.next(0);
    r.previous(10);
    r.previous(20); // already at 0
    r.select_dot(3, 30);
    r.on_wheel(-1.0, 40);
    r.tick(1_000);
    show_only(&mut r, 0);
    r.on_scroll_progress_changed(ScrollProgress::new(0.0, true), 1_000);

    let sources: Vec<_> = log.lock().unwrap().iter().map(|c| c.source).collect();
    assert_eq!(
        sources,
        [
            SelectionSource::Next,
            SelectionSource::Previous,
            SelectionSource::Dot,
            SelectionSource::Wheel,
            SelectionSource::Scroll,
        ]
    );
    let last = *log.lock().unwrap().last().unwrap();
    assert_eq!(
        last,
        SelectionChange {
            previous: 2,
            selected: 0,
            source: SelectionSource::Scroll
        }
    );
}

#[test]
fn edge_mask_follows_progress_when_free() {
    let mut r = carousel(4);
    assert_eq!(r.edge_mask(), EdgeMask::NoneNeeded);

    r.on_scroll_progress_changed(ScrollProgress::new(0.0, true), 0);
    assert_eq!(r.edge_mask(), EdgeMask::Start);
    r.on_scroll_progress_changed(ScrollProgress::new(0.4, true), 0);
    assert_eq!(r.edge_mask(), EdgeMask::Middle);
    r.on_scroll_progress_changed(ScrollProgress::new(1.0, true), 0);
    assert_eq!(r.edge_mask(), EdgeMask::End);
    r.on_scroll_progress_changed(ScrollProgress::FITS, 0);
    assert_eq!(r.edge_mask(), EdgeMask::NoneNeeded);
}

#[test]
fn edge_mask_follows_selection_when_directed() {
    let mut r = carousel(4);
    r.on_scroll_progress_changed(ScrollProgress::new(0.0, true), 0);
    r.select_discrete(3, 10);
    // Viewport is still at the start, but the mask already shows the destination.
    assert_eq!(r.edge_mask(), EdgeMask::End);
    r.select_discrete(1, 20);
    assert_eq!(r.edge_mask(), EdgeMask::Middle);
    r.select_discrete(0, 30);
    assert_eq!(r.edge_mask(), EdgeMask::Start);

    r.tick(1_000);
    r.on_scroll_progress_changed(ScrollProgress::new(1.0, true), 1_000);
    assert_eq!(r.edge_mask(), EdgeMask::End);
}

#[test]
fn edge_mask_gradients_fade_the_right_edges() {
    assert_eq!(EdgeMask::NoneNeeded.css_gradient(), "none");
    assert!(EdgeMask::Start.css_gradient().ends_with("#0000)"));
    assert!(EdgeMask::End.css_gradient().starts_with("linear-gradient(90deg, #0000"));
    let middle = EdgeMask::Middle.css_gradient();
    assert!(middle.starts_with("linear-gradient(90deg, #0000") && middle.ends_with("#0000)"));
}

#[test]
fn state_snapshot_reflects_reconciler() {
    let mut r = carousel(3);
    r.on_scroll_progress_changed(ScrollProgress::new(0.0, true), 0);
    r.next(0);
    assert_eq!(
        r.state(),
        CarouselState {
            selected: Some(1),
            mode: Mode::Directed { deadline_ms: 200 },
            edge_mask: EdgeMask::Middle,
        }
    );
}

#[test]
fn scroll_progress_normalizes_offsets() {
    assert_eq!(ScrollProgress::from_offset(10, 0), ScrollProgress::FITS);
    let p = ScrollProgress::from_offset(50, 200);
    assert!(p.overflows());
    assert_eq!(p.value(), 0.25);
    assert!(ScrollProgress::from_offset(500, 200).is_at_end());
    assert!(ScrollProgress::new(-3.0, true).is_at_start());
    assert_eq!(ScrollProgress::new(f32::NAN, true).value(), 0.0);
}

#[test]
fn visibility_tracker_thresholds_and_bounds() {
    let mut t = VisibilityTracker::new(3, 0.9);
    assert!(!t.report(0, 0.89));
    assert!(t.report(0, 0.9));
    assert!(!t.report(0, 1.0));
    assert!(t.is_visible(0));
    assert!(!t.report(7, 1.0));
    assert!(!t.report(1, f32::NAN));
    assert_eq!(t.first_visible(), Some(0));
    assert_eq!(t.visible_count(), 1);

    t.set_visible(2, true);
    assert_eq!(t.iter().collect::<Vec<_>>(), [true, false, true]);

    t.detach();
    assert_eq!(t.first_visible(), None);
    assert!(!t.set_visible(1, true));
}

#[test]
fn visibility_tracker_sanitizes_threshold() {
    assert_eq!(VisibilityTracker::new(1, 3.0).threshold(), 1.0);
    assert_eq!(
        VisibilityTracker::new(1, f32::NAN).threshold(),
        DEFAULT_VISIBILITY_THRESHOLD
    );
}

#[test]
fn visibility_samples_may_arrive_out_of_order() {
    let mut r = carousel(4);
    // Item 2 reported in view before item 1 reports leaving it.
    r.on_visibility_changed(1, 1.0);
    r.on_visibility_changed(2, 1.0);
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 0), Some(1));
    r.on_visibility_changed(1, 0.2);
    assert_eq!(r.on_scroll_progress_changed(mid_scroll(), 5), Some(2));
}

#[test]
fn paged_buttons_wrap_and_drags_do_not() {
    let mut p = PagedCarousel::new(3);
    assert_eq!(p.previous(), Some(2));
    assert_eq!(p.next(), Some(0));
    assert_eq!(p.next(), Some(1));

    assert!(!p.on_drag_end(40.0));
    assert!(p.on_drag_end(120.0));
    assert_eq!(p.selected(), Some(0));
    assert!(!p.on_drag_end(120.0));
    p.select(2);
    assert!(!p.on_drag_end(-120.0));
    assert!(!p.on_drag_end(-81.0));
    assert_eq!(p.selected(), Some(2));
}

#[test]
fn paged_roles_and_clicks() {
    let mut p = PagedCarousel::new(5);
    p.select(2);
    let roles: Vec<_> = (0..5).map(|i| p.role(i)).collect();
    assert_eq!(
        roles,
        [
            CardRole::Hidden,
            CardRole::Left,
            CardRole::Selected,
            CardRole::Right,
            CardRole::Hidden
        ]
    );
    assert_eq!(CardRole::Left.opacity(), 0.5);
    assert!(!p.click(4));
    assert!(p.click(3));
    assert_eq!(p.selected(), Some(3));

    let mut empty = PagedCarousel::new(0);
    assert_eq!(empty.next(), None);
    assert_eq!(empty.select(3), None);
    assert_eq!(empty.role(0), CardRole::Hidden);
    assert!(!empty.on_drag_end(500.0));
}

fn keyframes(pairs: &[(&str, &str)]) -> PropValue {
    let map: Keyframes = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PropValue::Keyframes(map)
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn classes_split_by_prefix_ignoring_variants() {
    assert_eq!(classify_class("mx-4"), Target::Frame);
    assert_eq!(classify_class("md:h-100"), Target::Frame);
    assert_eq!(classify_class("not-md:max-w-70"), Target::Frame);
    assert_eq!(classify_class("overflow-hidden"), Target::Frame);
    assert_eq!(classify_class("size-12"), Target::Frame);
    assert_eq!(classify_class("rounded-lg"), Target::Image);
    assert_eq!(classify_class("pointer-events-none"), Target::Image);
    assert_eq!(classify_class("min-w-0"), Target::Frame);
    assert_eq!(classify_class("shadow-md"), Target::Image);

    let p = partition(
        &PhotoStyle::new().with_auto_classes("rounded-lg shadow-md h-100 object-cover w-max mx-4"),
    );
    assert_eq!(p.image.classes, strings(&["rounded-lg", "shadow-md", "object-cover"]));
    assert_eq!(p.frame.classes, strings(&["h-100", "w-max", "mx-4"]));
    assert_eq!(p.frame.class_list(), "h-100 w-max mx-4");
}

#[test]
fn class_overrides_displace_auto_classes_with_same_indicator() {
    let style = PhotoStyle::new()
        .with_auto_classes("rounded-lg shadow-md mx-2 w-max")
        .with_image_classes("rounded-xl outline-2")
        .with_frame_classes("mx-4");
    let p = partition(&style);
    assert_eq!(p.image.classes, strings(&["rounded-xl", "outline-2", "shadow-md"]));
    assert_eq!(p.frame.classes, strings(&["mx-4", "w-max"]));
}

#[test]
fn props_route_by_kind() {
    assert_eq!(route_prop("transition", &"x".into()), PropRoute::Both);
    assert_eq!(route_prop("draggable", &false.into()), PropRoute::Image);
    assert_eq!(route_prop("animate", &keyframes(&[])), PropRoute::Split);
    assert_eq!(route_prop("whileHover", &"hovered".into()), PropRoute::Frame);
    assert_eq!(route_prop("onClick", &"open".into()), PropRoute::Frame);

    let style = PhotoStyle::new()
        .with_auto_prop(
            "animate",
            keyframes(&[("opacity", "1"), ("width", "auto"), ("marginLeft", "1rem")]),
        )
        .with_auto_prop("initial", keyframes(&[("opacity", "0")]))
        .with_auto_prop("transition", "easeInOut 10s")
        .with_auto_prop("draggable", false)
        .with_auto_prop("data-role", "card");
    let p = partition(&style);

    assert_eq!(p.image.props["animate"], keyframes(&[("opacity", "1")]));
    assert_eq!(
        p.frame.props["animate"],
        keyframes(&[("marginLeft", "1rem"), ("width", "auto")])
    );
    assert_eq!(p.image.props["initial"], keyframes(&[("opacity", "0")]));
    assert!(!p.frame.props.contains_key("initial"));
    assert_eq!(p.image.props["transition"], p.frame.props["transition"]);
    assert_eq!(p.image.props["draggable"], PropValue::Bool(false));
    assert!(!p.frame.props.contains_key("draggable"));
    // Unrecognized keys default to the frame instead of being dropped.
    assert_eq!(p.frame.props["data-role"], PropValue::from("card"));
    assert!(!p.image.props.contains_key("data-role"));
}

#[test]
fn prop_overrides_win_over_auto_routing() {
    let style = PhotoStyle::new()
        .with_auto_prop("animate", keyframes(&[("opacity", "1")]))
        .with_image_prop("animate", keyframes(&[("outlineColor", "cyan")]))
        .with_frame_prop("draggable", true);
    let p = partition(&style);
    assert_eq!(p.image.props["animate"], keyframes(&[("outlineColor", "cyan")]));
    assert_eq!(p.frame.props["draggable"], PropValue::Bool(true));
}

#[test]
fn partition_is_idempotent() {
    let style = PhotoStyle::new()
        .with_auto_classes("rounded-lg md:h-100 outline-2 select-none not-md:max-w-70 px-3")
        .with_frame_classes("mx-4")
        .with_auto_prop(
            "animate",
            keyframes(&[("outlineColor", "rgba(0,184,219,1)"), ("paddingTop", "2px")]),
        )
        .with_auto_prop("transition", "0.2s")
        .with_auto_prop("draggable", false)
        .with_image_prop("title", "caption");
    let once = partition(&style);
    assert_eq!(partition(&once.to_style()), once);
    assert_eq!(partition(&partition(&once.to_style()).to_style()), once);
}

#[test]
fn repartitioning_merged_auto_output_is_stable() {
    let style = PhotoStyle::new()
        .with_auto_classes("rounded-lg shadow-md object-cover h-100 w-max min-w-0 overflow-hidden")
        .with_auto_prop(
            "animate",
            keyframes(&[("opacity", "0.5"), ("width", "100px"), ("margin", "0rem 1rem")]),
        )
        .with_auto_prop("exit", keyframes(&[("opacity", "0")]))
        .with_auto_prop("transition", "10s")
        .with_auto_prop("draggable", "false")
        .with_auto_prop("layout", true);
    let once = partition(&style);
    let twice = partition(&once.merged());
    assert_eq!(twice, once);
}

#[test]
fn layout_change_updates_mask_without_selecting() {
    let mut r = carousel(4);
    show_only(&mut r, 2);
    r.on_layout_changed(ScrollProgress::new(1.0, true));
    assert_eq!(r.selected(), Some(0));
    assert_eq!(r.mode(), Mode::Free);
    assert_eq!(r.edge_mask(), EdgeMask::End);

    r.on_layout_changed(ScrollProgress::FITS);
    assert_eq!(r.edge_mask(), EdgeMask::NoneNeeded);
}

#[test]
fn animation_frames_keep_the_window_open_past_its_deadline() {
    let mut r = carousel(4);
    r.select_dot(3, 0);
    show_only(&mut r, 1);

    // Deadline was 200; an animation frame at 450 still belongs to the directed scroll.
    assert_eq!(r.on_animation_frame(mid_scroll(), 450), None);
    assert_eq!(r.selected(), Some(3));
    assert_eq!(r.mode().deadline_ms(), Some(650));

    r.tick(650);
    assert_eq!(r.mode(), Mode::Free);
    // In Free mode a frame samples like any scroll event.
    assert_eq!(r.on_animation_frame(mid_scroll(), 700), Some(1));
}

#[test]
fn visibility_tracker_clamps_out_of_range_ratios() {
    let mut t = VisibilityTracker::new(3, 0.9);
    assert!(t.report(0, 1.5));
    assert!(t.is_visible(0));
    assert!(!t.report(1, -0.25));
    assert!(!t.is_visible(1));
    assert!(t.report(0, f32::NAN));
    assert!(!t.is_visible(0));
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_scroll_progress_is_clamped() {
    use crate::types::ScrollProgressRepr;

    let p = ScrollProgress::from(ScrollProgressRepr {
        value: 3.0,
        overflows: true,
    });
    assert_eq!(p, ScrollProgress::new(1.0, true));

    let p = ScrollProgress::from(ScrollProgressRepr {
        value: f32::NAN,
        overflows: true,
    });
    assert_eq!(p.value(), 0.0);
}
