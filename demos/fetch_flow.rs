//! Fetch Flow
//!
//! This example drives a request lifecycle from idle through loading to success.
//!
//! Key concepts:
//! - Declaring states with `state_enum!`
//! - Registering transitions on a `Configuration`
//! - Observing every applied transition
//! - Events with no registered transition leave the state alone
//!
//! Run with: cargo run --example fetch_flow

use statecraft::{state_enum, Configuration, SendOutcome, StateMachine, Transition};

state_enum! {
    enum FetchState {
        Idle,
        Loading,
        Success,
        Error,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum FetchEvent {
    Start,
    Resolve,
    Reject,
    Retry,
}

fn main() {
    println!("=== Fetch Flow Example ===\n");

    let config = Configuration::new(
        FetchState::Idle,
        vec![
            Transition::new(FetchState::Idle, FetchEvent::Start, FetchState::Loading),
            Transition::new(FetchState::Loading, FetchEvent::Resolve, FetchState::Success),
            Transition::new(FetchState::Loading, FetchEvent::Reject, FetchState::Error),
            Transition::new(FetchState::Error, FetchEvent::Retry, FetchState::Loading),
        ],
    )
    .on_state_change(|prev, next| println!("  observer: {:?} -> {:?}", prev, next))
    .with_history();

    let mut machine = StateMachine::new(config);

    println!("Initial state: {:?}", machine.current_state());
    println!("Progress: {:.2}", machine.progress());

    // Resolve is only registered from Loading
    println!("\nSending Resolve while idle...");
    if machine.send(FetchEvent::Resolve) == SendOutcome::NoTransition {
        println!("  ignored, still {:?}", machine.current_state());
    }

    for event in [FetchEvent::Start, FetchEvent::Resolve] {
        println!("\nSending {:?}...", event);
        if let SendOutcome::Applied { from, to } = machine.send(event) {
            println!("  applied: {:?} -> {:?}", from, to);
        }
        println!("  progress: {:.2}", machine.progress());
    }

    let path: Vec<_> = machine.history().get_path();
    println!("\nPath: {:?}", path);
    println!("Transitions applied: {}", machine.transition_count());
    println!("Is terminal: {}", machine.is_terminal());

    println!("\n=== Example Complete ===");
}
