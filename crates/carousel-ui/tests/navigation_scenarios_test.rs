//! End-to-end navigation scenarios driven through the test rule.

use carousel_core::Size;
use carousel_testing::assertions::{assert_approx_eq, assert_centered, assert_selected};
use carousel_testing::CarouselTestRule;
use carousel_ui::{CarouselConfig, CarouselEvent, ItemLayout, NavigationPhase};

const CONTAINER: Size = Size::new(400.0, 300.0);

fn finite_rule(count: usize, initial: i64) -> CarouselTestRule {
    let config = CarouselConfig::new(ItemLayout::fixed(300.0)).with_initial_index(initial);
    let mut rule = CarouselTestRule::new(config, count).expect("valid config");
    rule.mount_with_container(CONTAINER);
    rule
}

#[test]
fn swipe_past_threshold_moves_to_next_item() {
    let mut rule = finite_rule(4, 0);
    rule.swipe(-120.0);
    rule.wait_for_idle().expect("settles");

    assert_selected(rule.engine(), 1, "after swipe");
    assert_centered(rule.engine(), 1e-3, "strip rests on item 1");
    assert_eq!(rule.selection_changes(), vec![(0, 1)]);
}

#[test]
fn short_swipe_at_last_item_stays() {
    let mut rule = finite_rule(4, 3);
    rule.swipe(-50.0);
    rule.wait_for_idle().expect("settles");

    assert_selected(rule.engine(), 3, "short swipe at the end");
    assert!(rule.selection_changes().is_empty());
}

#[test]
fn sub_threshold_swipe_springs_back() {
    let mut rule = finite_rule(4, 1);
    let resting = rule.rendered_x(1).expect("item 1 visible");

    rule.engine_mut().on_drag_changed(-80.0);
    rule.advance_by(carousel_testing::FRAME);
    let dragged = rule.rendered_x(1).expect("item 1 visible");
    assert_approx_eq(dragged, resting - 80.0, 1e-3, "strip follows the finger");

    rule.engine_mut().on_drag_ended(-80.0);
    assert_approx_eq(
        rule.rendered_x(1).expect("item 1 visible"),
        dragged,
        1e-3,
        "release does not jump",
    );
    rule.wait_for_idle().expect("settles");
    assert_selected(rule.engine(), 1, "sub-threshold");
    assert_approx_eq(
        rule.rendered_x(1).expect("item 1 visible"),
        resting,
        1e-3,
        "back at rest",
    );
}

#[test]
fn drags_never_leave_the_data_range() {
    let mut rule = finite_rule(3, 0);
    let drags = [
        200.0, -200.0, -200.0, -200.0, -200.0, 95.0, 200.0, 200.0, 200.0, -91.0,
    ];
    for tx in drags {
        rule.swipe(tx);
        rule.wait_for_idle().expect("settles");
        let index = rule.engine().selected_index();
        assert!((0..3).contains(&index), "index {index} escaped after {tx}");
    }
    assert_selected(rule.engine(), 1, "after the sequence");
}

#[test]
fn each_commit_moves_exactly_one_item() {
    let mut rule = finite_rule(10, 5);
    for (tx, expected) in [(-91.0, 6), (-299.0, 7), (91.0, 6), (400.0, 5), (-89.0, 5)] {
        rule.swipe(tx);
        rule.wait_for_idle().expect("settles");
        assert_selected(rule.engine(), expected, &format!("after {tx}"));
    }
}

#[test]
fn external_writes_are_clamped() {
    let mut rule = finite_rule(4, 0);
    rule.engine_mut().set_selected_index(17);
    assert_selected(rule.engine(), 3, "above range");
    rule.engine_mut().set_selected_index(-4);
    assert_selected(rule.engine(), 0, "below range");
}

#[test]
fn out_of_range_initial_index_is_clamped() {
    let rule = finite_rule(4, 9);
    assert_selected(rule.engine(), 3, "initial index");
}

#[test]
fn last_trigger_wins_while_animating() {
    let mut rule = finite_rule(6, 0);
    rule.engine_mut().next();
    rule.advance_by(std::time::Duration::from_millis(100));
    rule.engine_mut().next();
    rule.advance_by(std::time::Duration::from_millis(50));
    rule.engine_mut().set_selected_index(4);
    assert_eq!(rule.engine().navigation_phase(), NavigationPhase::Animating);

    rule.wait_for_idle().expect("settles");
    assert_selected(rule.engine(), 4, "last write");
    assert_centered(rule.engine(), 1e-3, "exact rest position");
    let settled: Vec<_> = rule
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, CarouselEvent::Settled { .. }))
        .collect();
    assert_eq!(settled, vec![CarouselEvent::Settled { index: 4 }]);
}

#[test]
fn container_resize_snaps_without_animation() {
    let mut rule = finite_rule(4, 2);
    rule.engine_mut()
        .on_geometry_measured(carousel_ui::MeasureReport::Container(Size::new(800.0, 300.0)));
    assert_eq!(rule.engine().navigation_phase(), NavigationPhase::Settled);
    assert_centered(rule.engine(), 1e-3, "re-centered for the new width");
}

#[test]
fn measured_width_drives_the_threshold() {
    let mut rule = CarouselTestRule::new(CarouselConfig::default(), 4).expect("valid config");
    rule.mount_with_geometry(Size::new(200.0, 120.0), CONTAINER);
    // 30% of 200 is 60.
    rule.swipe(-61.0);
    rule.wait_for_idle().expect("settles");
    assert_selected(rule.engine(), 1, "measured width");
}

#[test]
fn input_is_ignored_while_measuring() {
    let mut rule = CarouselTestRule::new(CarouselConfig::default(), 4).expect("valid config");
    rule.mount_with_container(CONTAINER);
    rule.swipe(-200.0);
    rule.wait_for_idle().expect("nothing to settle");
    assert_selected(rule.engine(), 0, "measuring");
    assert!(rule.engine().visible_items().is_empty());
}
