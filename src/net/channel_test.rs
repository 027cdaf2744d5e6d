use super::*;

// =============================================================
// ChannelStatus
// =============================================================

#[test]
fn initial_status_is_connecting() {
    assert_eq!(ChannelStatus::default(), ChannelStatus::Connecting);
}

#[test]
fn status_labels_are_distinct() {
    let labels = [
        ChannelStatus::Connecting.label(),
        ChannelStatus::Open.label(),
        ChannelStatus::Closed.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Send availability
// =============================================================

#[test]
fn send_is_only_available_when_open() {
    assert!(!can_send(ChannelStatus::Connecting));
    assert!(can_send(ChannelStatus::Open));
    assert!(!can_send(ChannelStatus::Closed));
}

// =============================================================
// Close idempotence
// =============================================================

#[test]
fn first_close_performs_the_close() {
    let (tx, _rx) = futures::channel::oneshot::channel::<()>();
    let mut guard = CloseGuard::new(tx);
    assert!(!guard.is_closed());
    assert!(guard.close());
    assert!(guard.is_closed());
}

#[test]
fn second_close_is_a_no_op() {
    let (tx, _rx) = futures::channel::oneshot::channel::<()>();
    let mut guard = CloseGuard::new(tx);
    assert!(guard.close());
    assert!(!guard.close());
    assert!(!guard.close());
}

#[test]
fn close_counts_even_when_the_loop_already_ended() {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    drop(rx);
    let mut guard = CloseGuard::new(tx);
    assert!(guard.close());
    assert!(guard.is_closed());
}
