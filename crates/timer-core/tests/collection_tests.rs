// Host-side tests for team ordering and the drag protocol.

use timer_core::{DragSession, TimerId, TimerOrder};

fn order_of(n: u32) -> TimerOrder {
    let mut order = TimerOrder::new();
    for _ in 0..n {
        order.add();
    }
    order
}

fn ids(order: &TimerOrder) -> Vec<u32> {
    order.ids().iter().map(|id| id.0).collect()
}

#[test]
fn add_hands_out_increasing_ids_never_reused() {
    let mut order = TimerOrder::new();
    let a = order.add();
    let b = order.add();
    order.remove(b);
    let c = order.add();
    assert_eq!(a, TimerId(1));
    assert!(b > a);
    assert!(c > b, "removed id must not come back");
    assert_eq!(ids(&order), vec![1, 3]);
}

#[test]
fn reorder_onto_self_is_identity() {
    let mut order = order_of(4);
    for x in 1..=4 {
        assert!(!order.reorder(TimerId(x), TimerId(x)));
        assert_eq!(ids(&order), vec![1, 2, 3, 4]);
    }
}

#[test]
fn reorder_backward_lands_before_target() {
    let mut order = order_of(4);
    assert!(order.reorder(TimerId(4), TimerId(2)));
    assert_eq!(ids(&order), vec![1, 4, 2, 3]);
}

#[test]
fn reorder_forward_lands_after_target() {
    let mut order = order_of(4);
    assert!(order.reorder(TimerId(1), TimerId(3)));
    assert_eq!(ids(&order), vec![2, 3, 1, 4]);
}

#[test]
fn reorder_with_missing_id_is_noop() {
    let mut order = order_of(3);
    assert!(!order.reorder(TimerId(9), TimerId(1)));
    assert!(!order.reorder(TimerId(1), TimerId(9)));
    assert_eq!(ids(&order), vec![1, 2, 3]);
}

#[test]
fn remove_present_and_absent() {
    let mut order = order_of(3);
    assert!(order.remove(TimerId(2)));
    assert_eq!(ids(&order), vec![1, 3]);

    let mut order = order_of(3);
    assert!(!order.remove(TimerId(99)));
    assert_eq!(ids(&order), vec![1, 2, 3]);
}

#[test]
fn drag_over_reorders_on_every_hover() {
    let mut order = order_of(4);
    let mut drag = DragSession::default();
    drag.start(TimerId(4));
    assert!(drag.over(TimerId(3), &mut order));
    assert_eq!(ids(&order), vec![1, 2, 4, 3]);
    assert!(drag.over(TimerId(2), &mut order));
    assert_eq!(ids(&order), vec![1, 4, 2, 3]);
    // hovering the dragged card itself
    assert!(!drag.over(TimerId(4), &mut order));
    assert_eq!(ids(&order), vec![1, 4, 2, 3]);
}

#[test]
fn adjacent_hovers_can_oscillate() {
    let mut order = order_of(2);
    let mut drag = DragSession::default();
    drag.start(TimerId(1));
    drag.over(TimerId(2), &mut order);
    assert_eq!(ids(&order), vec![2, 1]);
    drag.over(TimerId(2), &mut order);
    assert_eq!(ids(&order), vec![1, 2]);
}

#[test]
fn drag_over_without_start_does_nothing() {
    let mut order = order_of(3);
    let mut drag = DragSession::default();
    assert!(!drag.over(TimerId(1), &mut order));
    drag.enter_delete_zone();
    assert!(!drag.is_over_delete_zone());
    assert_eq!(drag.drop_on_delete_zone(), None);
}

#[test]
fn delete_zone_drop_returns_dragged_and_ends() {
    let mut drag = DragSession::default();
    drag.start(TimerId(2));
    drag.enter_delete_zone();
    assert!(drag.is_over_delete_zone());
    assert_eq!(drag.drop_on_delete_zone(), Some(TimerId(2)));
    assert!(!drag.is_active());
    assert!(!drag.is_over_delete_zone());
}

#[test]
fn end_clears_dragged_and_hover() {
    let mut drag = DragSession::default();
    drag.start(TimerId(1));
    drag.enter_delete_zone();
    drag.end();
    assert_eq!(drag, DragSession::default());
}
