//! End-to-end dispatch scenarios.

use statecraft::core::State;
use statecraft::{state_enum, ConfigError, Configuration, SendOutcome, StateMachine, Transition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

state_enum! {
    enum Request {
        Idle,
        Loading,
        Success,
        Error,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum RequestEvent {
    Start,
    Succeed,
    Fail,
    Retry,
}

fn observed_log() -> (Arc<Mutex<Vec<String>>>, impl Fn(&Request, &Request) + Send + Sync) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let observer = move |prev: &Request, next: &Request| {
        let entry = format!(
            "{}->{}",
            prev.name().to_lowercase(),
            next.name().to_lowercase()
        );
        sink.lock().unwrap().push(entry);
    };
    (log, observer)
}

#[test]
fn idle_loading_success() {
    let (log, observer) = observed_log();
    let config = Configuration::new(
        Request::Idle,
        vec![
            Transition::new(Request::Idle, RequestEvent::Start, Request::Loading),
            Transition::new(Request::Loading, RequestEvent::Succeed, Request::Success),
        ],
    )
    .on_state_change(observer);
    let mut machine = StateMachine::new(config);

    machine.send(RequestEvent::Start);
    machine.send(RequestEvent::Succeed);

    assert_eq!(machine.current_state(), &Request::Success);
    assert_eq!(
        *log.lock().unwrap(),
        vec!["idle->loading".to_string(), "loading->success".to_string()]
    );
}

#[test]
fn retry_loop_reaches_success() {
    let states = Arc::new(Mutex::new(vec![Request::Idle]));
    let sink = Arc::clone(&states);
    let config = Configuration::new(
        Request::Idle,
        vec![
            Transition::new(Request::Idle, RequestEvent::Start, Request::Loading),
            Transition::new(Request::Loading, RequestEvent::Fail, Request::Error),
            Transition::new(Request::Error, RequestEvent::Retry, Request::Loading),
            Transition::new(Request::Loading, RequestEvent::Succeed, Request::Success),
        ],
    )
    .on_state_change(move |_, next| sink.lock().unwrap().push(*next))
    .with_history();
    let mut machine = StateMachine::new(config);

    for event in [
        RequestEvent::Start,
        RequestEvent::Fail,
        RequestEvent::Retry,
        RequestEvent::Succeed,
    ] {
        assert!(machine.send(event).is_applied());
    }

    assert_eq!(machine.current_state(), &Request::Success);
    assert_eq!(
        *states.lock().unwrap(),
        vec![
            Request::Idle,
            Request::Loading,
            Request::Error,
            Request::Loading,
            Request::Success
        ]
    );
    assert_eq!(
        machine.history().get_path(),
        vec![
            &Request::Idle,
            &Request::Loading,
            &Request::Error,
            &Request::Loading,
            &Request::Success
        ]
    );
}

state_enum! {
    enum Form {
        Editing,
        Submitted,
    }
}

#[test]
fn guarded_submit_is_rejected() {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluations);
    let config = Configuration::new(
        Form::Editing,
        vec![
            Transition::new(Form::Editing, "submit", Form::Submitted).with_guard(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            }),
        ],
    );
    let mut machine = StateMachine::new(config);

    assert_eq!(machine.send("submit"), SendOutcome::GuardRejected);
    assert_eq!(machine.current_state(), &Form::Editing);
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    assert!(machine.available_transitions().contains(&"submit"));
}

#[test]
fn guard_reads_caller_owned_state() {
    let valid = Arc::new(Mutex::new(false));
    let check = Arc::clone(&valid);
    let config = Configuration::new(
        Form::Editing,
        vec![Transition::new(Form::Editing, "submit", Form::Submitted)
            .with_guard(move |_, _| *check.lock().unwrap())],
    );
    let mut machine = StateMachine::new(config);

    assert!(!machine.can_transition(&"submit"));
    assert_eq!(machine.send("submit"), SendOutcome::GuardRejected);

    *valid.lock().unwrap() = true;

    assert!(machine.can_transition(&"submit"));
    assert_eq!(
        machine.send("submit"),
        SendOutcome::Applied {
            from: Form::Editing,
            to: Form::Submitted
        }
    );
}

#[test]
fn action_observes_pre_transition_state() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let config = Configuration::new(
        Request::Idle,
        vec![
            Transition::new(Request::Idle, RequestEvent::Start, Request::Loading).with_action(
                move |state, event| sink.lock().unwrap().push((*state, *event)),
            ),
        ],
    );
    let mut machine = StateMachine::new(config);

    machine.send(RequestEvent::Start);
    machine.send(RequestEvent::Start);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Request::Idle, RequestEvent::Start)]
    );
}

#[test]
fn repeated_unmatched_events_are_idempotent() {
    let (log, observer) = observed_log();
    let config = Configuration::new(
        Request::Success,
        vec![Transition::new(Request::Idle, RequestEvent::Start, Request::Loading)],
    )
    .on_state_change(observer);
    let mut machine = StateMachine::new(config);

    for _ in 0..10 {
        assert_eq!(machine.send(RequestEvent::Start), SendOutcome::NoTransition);
    }

    assert_eq!(machine.current_state(), &Request::Success);
    assert!(machine.is_terminal());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn progress_is_positional_not_path_based() {
    let config = Configuration::new(
        Request::Idle,
        vec![Transition::new(Request::Idle, RequestEvent::Fail, Request::Error)],
    );
    let mut machine = StateMachine::new(config);

    machine.send(RequestEvent::Fail);

    assert_eq!(machine.current_state(), &Request::Error);
    assert_eq!(machine.progress(), 1.0);
}

#[test]
fn lenient_and_strict_construction_disagree_on_duplicates() {
    let transitions = || {
        vec![
            Transition::new(Request::Idle, RequestEvent::Start, Request::Loading),
            Transition::new(Request::Idle, RequestEvent::Start, Request::Error),
        ]
    };

    let mut lenient = StateMachine::new(Configuration::new(Request::Idle, transitions()));
    lenient.send(RequestEvent::Start);
    assert_eq!(lenient.current_state(), &Request::Error);

    let strict = StateMachine::try_new(Configuration::new(Request::Idle, transitions()));
    assert!(matches!(strict, Err(ConfigError::Invalid(problems)) if problems.len() == 1));
}

#[tokio::test]
async fn machine_confined_to_single_owner_task() {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<RequestEvent>(8);
    let (log, observer) = observed_log();

    let owner = tokio::spawn(async move {
        let config = Configuration::new(
            Request::Idle,
            vec![
                Transition::new(Request::Idle, RequestEvent::Start, Request::Loading),
                Transition::new(Request::Loading, RequestEvent::Succeed, Request::Success),
            ],
        )
        .on_state_change(observer);
        let mut machine = StateMachine::new(config);
        while let Some(event) = rx.recv().await {
            machine.send(event);
        }
        *machine.current_state()
    });

    for event in [RequestEvent::Start, RequestEvent::Fail, RequestEvent::Succeed] {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    assert_eq!(owner.await.unwrap(), Request::Success);
    assert_eq!(log.lock().unwrap().len(), 2);
}
