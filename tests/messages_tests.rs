// Host-side tests for rejection banner bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod messages {
    include!("../src/core/messages.rs");
}

use constants::REJECT_MESSAGES;
use messages::*;

fn next_message(cycle: &mut MessageCycle) -> &'static str {
    let (index, _) = cycle.advance(REJECT_MESSAGES.len());
    message_for(REJECT_MESSAGES, index).unwrap()
}

#[test]
fn first_click_shows_first_message() {
    let mut cycle = MessageCycle::new();
    assert_eq!(next_message(&mut cycle), "Not a valid choice");
    assert_eq!(cycle.clicks(), 1);
}

#[test]
fn tenth_click_wraps_to_first_message() {
    let mut cycle = MessageCycle::new();
    let shown: Vec<&str> = (0..10).map(|_| next_message(&mut cycle)).collect();
    assert_eq!(REJECT_MESSAGES.len(), 9);
    assert_eq!(shown[9], shown[0]);
    assert_eq!(&shown[..9], REJECT_MESSAGES);
}

#[test]
fn latest_token_is_current() {
    let mut cycle = MessageCycle::new();
    let (_, first) = cycle.advance(9);
    assert!(cycle.is_current(first));
    let (_, second) = cycle.advance(9);
    assert!(!cycle.is_current(first), "stale hide must not fire");
    assert!(cycle.is_current(second));
}

#[test]
fn empty_message_list_does_not_panic() {
    let mut cycle = MessageCycle::new();
    let (index, _) = cycle.advance(0);
    assert_eq!(index, 0);
    assert_eq!(message_for(&[], index), None);
}
