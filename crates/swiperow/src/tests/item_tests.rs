use super::*;

use crate::events::SwipeThresholdEvent;
use crate::template::SwipePanel;
use std::cell::RefCell;
use std::rc::Rc;
use swiperow_graphics::Rect;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

const ITEM_WIDTH: f32 = 300.0;
const ITEM_HEIGHT: f32 = 60.0;

fn pump(clock: &FrameClock) {
    let mut frame_time = 0u64;
    let mut frames = 0u32;
    while clock.has_pending_callbacks() {
        frame_time += FRAME_NANOS;
        clock.drain_frame_callbacks(frame_time);
        frames += 1;
        assert!(frames < 1_000, "release animation never settled");
    }
}

fn item_with(props: SwipeItemProps) -> (SwipeListItem<&'static str>, FrameClock) {
    let clock = FrameClock::new();
    let mut item = SwipeListItem::new(props, clock.clone());
    item.apply_template(SwipeTemplate::with_parts());
    item.load(Size::new(ITEM_WIDTH, ITEM_HEIGHT));
    (item, clock)
}

fn drag_to(item: &SwipeListItem<&'static str>, offset_x: f32) {
    // First delta commits the direction without moving.
    item.on_manipulation_delta(0.0, offset_x.signum());
    let current = item.config().borrow().main_offset_x();
    item.on_manipulation_delta(offset_x, offset_x - current);
}

#[derive(Default)]
struct ReleaseLog {
    begin_trigger: Vec<SwipeReleaseEvent>,
    trigger_complete: Vec<SwipeCompleteEvent>,
    begin_restore: Vec<SwipeReleaseEvent>,
    restore_complete: Vec<SwipeCompleteEvent>,
}

fn record_release(item: &SwipeListItem<&'static str>) -> Rc<RefCell<ReleaseLog>> {
    let log = Rc::new(RefCell::new(ReleaseLog::default()));
    {
        let log = Rc::clone(&log);
        item.on_swipe_begin_trigger(move |event| log.borrow_mut().begin_trigger.push(*event));
    }
    {
        let log = Rc::clone(&log);
        item.on_swipe_trigger_complete(move |event| {
            log.borrow_mut().trigger_complete.push(*event)
        });
    }
    {
        let log = Rc::clone(&log);
        item.on_swipe_begin_restore(move |event| log.borrow_mut().begin_restore.push(*event));
    }
    {
        let log = Rc::clone(&log);
        item.on_swipe_restore_complete(move |event| {
            log.borrow_mut().restore_complete.push(*event)
        });
    }
    log
}

#[test]
fn first_delta_commits_direction_without_moving() {
    let (item, _clock) = item_with(SwipeItemProps {
        right_swipe_mode: SwipeMode::None,
        ..SwipeItemProps::default()
    });

    item.on_manipulation_delta(40.0, 40.0);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.direction, SwipeDirection::Left);
    assert_eq!(config.main_offset_x(), 0.0);
    assert!(config.clip_rect().is_empty());
    drop(config);
    assert!(item.left_panel_visible());
    assert!(!item.right_panel_visible());
}

#[test]
fn negative_first_delta_commits_right() {
    let (item, _clock) = item_with(SwipeItemProps::default());
    item.on_manipulation_delta(-10.0, -10.0);
    assert_eq!(item.direction(), SwipeDirection::Right);
    assert!(item.left_panel_visible());
    assert!(item.right_panel_visible());
}

#[test]
fn drag_updates_offset_clip_and_progress() {
    let (item, _clock) = item_with(SwipeItemProps::default());
    let progress = Rc::new(RefCell::new(Vec::new()));
    {
        let progress = Rc::clone(&progress);
        item.on_swipe_progress(move |event| progress.borrow_mut().push(*event));
    }

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(40.0, 40.0);
    item.on_manipulation_delta(70.0, 30.0);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), 70.0);
    assert_eq!(config.clip_rect(), Rect::new(0.0, 0.0, 70.0, ITEM_HEIGHT));
    drop(config);

    let progress = progress.borrow();
    assert_eq!(progress.len(), 2);
    assert_eq!(progress[0].cumulative_x, 40.0);
    assert_eq!(progress[0].delta_x, 40.0);
    assert_eq!(progress[1].cumulative_x, 70.0);
    assert!((progress[1].rate - 70.0 / ITEM_WIDTH).abs() < 1e-6);
    assert!(progress.iter().all(|e| e.direction == SwipeDirection::Left));
}

#[test]
fn right_drag_clips_from_the_right_edge() {
    let (item, _clock) = item_with(SwipeItemProps::default());

    item.on_manipulation_delta(0.0, -1.0);
    item.on_manipulation_delta(-80.0, -80.0);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), -80.0);
    assert_eq!(
        config.clip_rect(),
        Rect::new(ITEM_WIDTH - 80.0, 0.0, 80.0, ITEM_HEIGHT)
    );
}

#[test]
fn offset_clamps_at_length_rate() {
    let (item, _clock) = item_with(SwipeItemProps {
        left_swipe_length_rate: 0.5,
        left_action_rate: 0.25,
        ..SwipeItemProps::default()
    });
    let progress = Rc::new(RefCell::new(0u32));
    {
        let progress = Rc::clone(&progress);
        item.on_swipe_progress(move |_| *progress.borrow_mut() += 1);
    }

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(100.0, 100.0);
    // Would land at 200 = rate 0.667 > 0.5: clamped, no visual change,
    // no progress event.
    item.on_manipulation_delta(200.0, 100.0);

    let config = item.config();
    assert_eq!(config.borrow().main_offset_x(), 100.0);
    assert_eq!(*progress.borrow(), 1);
}

#[test]
fn sign_reversal_resets_to_neutral() {
    let (item, _clock) = item_with(SwipeItemProps::default());

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(50.0, 50.0);
    assert_eq!(item.direction(), SwipeDirection::Left);

    item.on_manipulation_delta(-10.0, -60.0);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.direction, SwipeDirection::None);
    assert_eq!(config.main_offset_x(), 0.0);
    assert!(config.clip_rect().is_empty());
}

#[test]
fn threshold_event_fires_only_on_transitions() {
    let (item, _clock) = item_with(SwipeItemProps::default());
    let events: Rc<RefCell<Vec<SwipeThresholdEvent>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        item.on_swipe_threshold_crossed(move |event| events.borrow_mut().push(*event));
    }

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(120.0, 120.0); // rate 0.4, under
    assert!(events.borrow().is_empty());

    item.on_manipulation_delta(180.0, 60.0); // rate 0.6, over
    item.on_manipulation_delta(210.0, 30.0); // still over, no new event
    assert_eq!(events.borrow().len(), 1);
    assert!(events.borrow()[0].over_threshold);

    item.on_manipulation_delta(120.0, -90.0); // rate 0.4, back under
    assert_eq!(events.borrow().len(), 2);
    assert!(!events.borrow()[1].over_threshold);
}

#[test]
fn release_under_threshold_restores_once() {
    let (item, clock) = item_with(SwipeItemProps::default());
    let log = record_release(&item);

    drag_to(&item, 100.0); // rate 0.333 < 0.5
    item.on_manipulation_completed();

    assert_eq!(item.direction(), SwipeDirection::None);
    {
        let log = log.borrow();
        assert_eq!(log.begin_restore.len(), 1);
        let begin = log.begin_restore[0];
        assert_eq!(begin.direction, SwipeDirection::Left);
        assert_eq!(begin.target_x, 0.0);
        assert_eq!(begin.duration_millis, 200);
        assert!(log.restore_complete.is_empty(), "completes only after frames");
    }

    pump(&clock);

    let log = log.borrow();
    assert_eq!(log.restore_complete.len(), 1);
    assert!(log.begin_trigger.is_empty());
    assert!(log.trigger_complete.is_empty());

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), 0.0);
    assert!(config.clip_rect().is_empty());
    assert_eq!(config.clip_scale_x(), 1.0);
}

#[test]
fn fixed_release_settles_at_the_configured_reveal_width() {
    let (item, clock) = item_with(SwipeItemProps {
        fixed_reveal_width: Some(100.0),
        ..SwipeItemProps::default()
    });
    let log = record_release(&item);

    let scale_at_complete = Rc::new(RefCell::new(None));
    {
        let scale_at_complete = Rc::clone(&scale_at_complete);
        let config = item.config();
        item.on_swipe_trigger_complete(move |_| {
            // Trigger-complete fires before the clip snaps, so the scale
            // still holds the animated target here.
            scale_at_complete
                .borrow_mut()
                .replace(config.borrow().clip_scale_x());
        });
    }

    drag_to(&item, 200.0); // rate 0.667 >= 0.5
    item.on_manipulation_completed();

    assert_eq!(item.direction(), SwipeDirection::None);
    {
        let log = log.borrow();
        assert_eq!(log.begin_trigger.len(), 1);
        assert_eq!(log.begin_trigger[0].target_x, 100.0);
        assert!(log.begin_restore.is_empty());
    }

    pump(&clock);

    let log = log.borrow();
    assert_eq!(log.trigger_complete.len(), 1);
    assert!(log.restore_complete.is_empty());

    // Clip scale target was 100 / 200.
    let scale = scale_at_complete.borrow().expect("trigger completed");
    assert!((scale - 0.5).abs() < 1e-6, "got {scale}");

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), 100.0);
    assert_eq!(config.clip_rect(), Rect::new(0.0, 0.0, 100.0, ITEM_HEIGHT));
    assert_eq!(config.clip_scale_x(), 1.0);
}

#[test]
fn fixed_release_to_the_right_anchors_at_the_right_edge() {
    let (item, clock) = item_with(SwipeItemProps {
        fixed_reveal_width: Some(80.0),
        ..SwipeItemProps::default()
    });

    drag_to(&item, -180.0); // rate 0.6 >= 0.5
    item.on_manipulation_completed();
    pump(&clock);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), -80.0);
    assert_eq!(
        config.clip_rect(),
        Rect::new(ITEM_WIDTH - 80.0, 0.0, 80.0, ITEM_HEIGHT)
    );
}

#[test]
fn expand_release_covers_the_full_row() {
    let (item, clock) = item_with(SwipeItemProps {
        left_swipe_mode: SwipeMode::Expand,
        ..SwipeItemProps::default()
    });
    let log = record_release(&item);

    drag_to(&item, 160.0);
    item.on_manipulation_completed();

    assert_eq!(log.borrow().begin_trigger[0].target_x, ITEM_WIDTH);
    pump(&clock);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), ITEM_WIDTH);
    assert!(config.clip_rect().is_empty());
    assert_eq!(config.clip_scale_x(), 1.0);
    assert_eq!(log.borrow().trigger_complete.len(), 1);
}

#[test]
fn collapse_release_snaps_shut() {
    let (item, clock) = item_with(SwipeItemProps {
        left_swipe_mode: SwipeMode::Collapse,
        ..SwipeItemProps::default()
    });
    let log = record_release(&item);

    drag_to(&item, 200.0);
    item.on_manipulation_completed();

    assert_eq!(log.borrow().begin_trigger[0].target_x, 0.0);
    pump(&clock);

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.main_offset_x(), 0.0);
    assert!(config.clip_rect().is_empty());
    assert_eq!(log.borrow().trigger_complete.len(), 1);
}

#[test]
fn release_toward_disabled_side_is_a_no_op() {
    let (item, clock) = item_with(SwipeItemProps {
        right_swipe_mode: SwipeMode::None,
        ..SwipeItemProps::default()
    });
    let log = record_release(&item);

    item.on_manipulation_delta(0.0, -1.0); // commits Right, which is disabled
    item.on_manipulation_delta(-50.0, -50.0); // ignored
    item.on_manipulation_completed();
    pump(&clock);

    assert_eq!(item.config().borrow().main_offset_x(), 0.0);
    let log = log.borrow();
    assert!(log.begin_trigger.is_empty());
    assert!(log.begin_restore.is_empty());
}

#[test]
fn release_without_gesture_fires_nothing() {
    let (item, clock) = item_with(SwipeItemProps::default());
    let log = record_release(&item);

    item.on_manipulation_completed();
    pump(&clock);

    let log = log.borrow();
    assert!(log.begin_trigger.is_empty());
    assert!(log.begin_restore.is_empty());
}

#[test]
fn unreachable_threshold_always_restores() {
    // length rate < action rate: valid configuration, trigger can never
    // be reached by dragging.
    let (item, clock) = item_with(SwipeItemProps {
        left_swipe_length_rate: 0.3,
        left_action_rate: 0.5,
        ..SwipeItemProps::default()
    });
    let log = record_release(&item);
    let crossed = Rc::new(RefCell::new(0u32));
    {
        let crossed = Rc::clone(&crossed);
        item.on_swipe_threshold_crossed(move |_| *crossed.borrow_mut() += 1);
    }

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(90.0, 90.0); // clamp boundary: rate 0.3
    item.on_manipulation_delta(200.0, 110.0); // beyond: no-op
    item.on_manipulation_completed();
    pump(&clock);

    assert_eq!(*crossed.borrow(), 0);
    let log = log.borrow();
    assert!(log.begin_trigger.is_empty());
    assert_eq!(log.restore_complete.len(), 1);
}

#[test]
fn content_change_resets_mid_gesture() {
    let (item, _clock) = item_with(SwipeItemProps::default());

    drag_to(&item, 180.0);
    assert_eq!(item.direction(), SwipeDirection::Left);

    item.content_changed();

    let config = item.config();
    let config = config.borrow();
    assert_eq!(config.direction, SwipeDirection::None);
    assert_eq!(config.main_offset_x(), 0.0);
    assert!(config.clip_rect().is_empty());
}

#[test]
fn new_gesture_continues_from_settled_fixed_offset() {
    let (item, clock) = item_with(SwipeItemProps {
        fixed_reveal_width: Some(100.0),
        ..SwipeItemProps::default()
    });

    drag_to(&item, 200.0);
    item.on_manipulation_completed();
    pump(&clock);
    assert_eq!(item.config().borrow().main_offset_x(), 100.0);

    // The next drag accumulates from the live transform value.
    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(20.0, 20.0);
    assert_eq!(item.config().borrow().main_offset_x(), 120.0);
}

#[test]
fn swipe_control_resolves_named_elements_per_direction() {
    let clock = FrameClock::new();
    let mut item = SwipeListItem::new(SwipeItemProps::default(), clock);
    let mut template = SwipeTemplate::with_parts();
    template.left_content = Some(Rc::new(
        SwipePanel::new().with_element("delete", "left-delete"),
    ));
    template.right_content = Some(Rc::new(
        SwipePanel::new().with_element("archive", "right-archive"),
    ));
    item.apply_template(template);
    item.load(Size::new(ITEM_WIDTH, ITEM_HEIGHT));

    assert_eq!(
        item.swipe_control(SwipeDirection::Left, "delete"),
        Some("left-delete")
    );
    assert_eq!(item.swipe_control(SwipeDirection::Left, "archive"), None);
    assert_eq!(
        item.swipe_control(SwipeDirection::Right, "archive"),
        Some("right-archive")
    );
    assert_eq!(item.swipe_control(SwipeDirection::None, "delete"), None);
}

#[test]
fn missing_template_parts_never_panic() {
    let clock = FrameClock::new();
    let item: SwipeListItem<&'static str> =
        SwipeListItem::new(SwipeItemProps::default(), clock.clone());
    item.load(Size::new(ITEM_WIDTH, ITEM_HEIGHT));
    let log = record_release(&item);

    item.on_manipulation_delta(0.0, 1.0);
    item.on_manipulation_delta(50.0, 50.0);
    item.on_manipulation_completed();
    pump(&clock);

    // Without a transform the offset never moves, so the release is a
    // restore; the callbacks still fire exactly once.
    let log = log.borrow();
    assert_eq!(log.begin_restore.len(), 1);
    assert_eq!(log.restore_complete.len(), 1);
    assert!(item.swipe_control(SwipeDirection::Left, "anything").is_none());
}
