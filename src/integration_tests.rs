//! Integration tests for mesinyer
//!
//! These tests exercise full workflows across multiple modules: the
//! session thread, the roster, the invitation dialog and the logging queue.

use std::time::Duration;

use crossbeam_channel::Receiver;

use crate::app::MesinyerApp;
use crate::backend::SessionHandle;
use crate::config::Settings;
use crate::decision_set::PendingInvitation;
use crate::dialog_manager::DialogManager;
use crate::logging::{QueueLayer, Severity, SharedLogQueue};
use crate::protocol::{SessionAction, SessionEvent};
use crate::roster::Roster;
use crate::ui::dialogs::{DialogAction, EntryPurpose, Response};
use tracing_subscriber::layer::SubscriberExt;

fn next_event(rx: &Receiver<SessionEvent>) -> SessionEvent {
    rx.recv_timeout(Duration::from_secs(2)).expect("session event")
}

/// Wait for the next roster snapshot, skipping other events.
fn next_roster(rx: &Receiver<SessionEvent>) -> SessionEvent {
    loop {
        let event = next_event(rx);
        if matches!(event, SessionEvent::RosterChanged { .. }) {
            return event;
        }
    }
}

/// Invitations arrive from the session, are decided in the paged dialog
/// and the decisions flow back into the roster.
#[test]
fn test_invitation_round_trip() {
    let session = SessionHandle::spawn(Roster::new("me")).unwrap();
    next_roster(&session.event_rx);

    for (account, nick) in [
        ("ann@example.com", "Ann"),
        ("bob@example.com", "Bob"),
        ("cy@example.com", "Cy"),
    ] {
        session
            .action_tx
            .send(SessionAction::SimulateInvitation {
                account: account.into(),
                nick: nick.into(),
            })
            .unwrap();
    }

    let mut dialogs = DialogManager::new();
    for _ in 0..3 {
        match next_event(&session.event_rx) {
            SessionEvent::ContactAddedYou { account, nick } => {
                dialogs.add_invitation(PendingInvitation::new(account, nick), &session.action_tx);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(dialogs.pending_invitations(), 3);

    // Accept the first, reject the second, leave the third undecided
    let set = dialogs.add_buddy.as_mut().unwrap().decisions_mut();
    assert_eq!(set.current().map(|i| i.account.as_str()), Some("ann@example.com"));
    set.accept();
    set.reject();
    assert_eq!(set.current().map(|i| i.account.as_str()), Some("cy@example.com"));
    dialogs.close_invitations();

    match next_roster(&session.event_rx) {
        SessionEvent::RosterChanged { contacts, .. } => {
            let accounts: Vec<&str> = contacts.iter().map(|c| c.account.as_str()).collect();
            assert_eq!(accounts, vec!["ann@example.com"]);
            assert_eq!(contacts[0].nick, "Ann");
        }
        _ => unreachable!(),
    }
}

/// Accepted invitations become contacts, rejected ones are blocked.
#[test]
fn test_resolution_updates_roster() {
    let mut roster = Roster::new("me");
    roster.receive_invitation("ann@example.com", "Ann").unwrap();
    roster.receive_invitation("bob@example.com", "Bob").unwrap();

    let events = roster.handle(SessionAction::ResolveInvitations {
        accepted: vec!["ann@example.com".into()],
        rejected: vec!["bob@example.com".into()],
    });

    assert!(matches!(events.last(), Some(SessionEvent::RosterChanged { .. })));
    assert!(roster.contact("ann@example.com").is_some());
    assert!(roster.contact("bob@example.com").is_none());
    assert_eq!(roster.blocked(), ["bob@example.com".to_string()]);
    assert!(roster.pending().is_empty());
}

/// Dialog actions go out to the session and the resulting events come
/// back into the app state.
#[test]
fn test_app_drives_session() {
    let session = SessionHandle::spawn(Roster::new("me")).unwrap();
    let mut app =
        MesinyerApp::with_session(Settings::default(), SharedLogQueue::default(), session);
    let first = next_event(&app.session.event_rx);
    app.process_event(first);

    app.handle_dialog_action(DialogAction::Entry {
        purpose: EntryPurpose::AddGroup,
        response: Response::Accept,
        text: "Work".into(),
    });
    app.handle_dialog_action(DialogAction::AddContact {
        account: "ann@example.com".into(),
        group: Some("Work".into()),
    });

    for _ in 0..2 {
        let event = next_event(&app.session.event_rx);
        app.process_event(event);
    }

    assert_eq!(app.groups, vec!["Work"]);
    assert_eq!(app.contacts.len(), 1);
    assert_eq!(app.contacts[0].group.as_deref(), Some("Work"));

    // Duplicate contact comes back as an error dialog
    app.handle_dialog_action(DialogAction::AddContact {
        account: "ann@example.com".into(),
        group: None,
    });
    let event = next_event(&app.session.event_rx);
    assert!(matches!(event, SessionEvent::Error(_)));
    app.process_event(event);
    assert_eq!(app.dialogs.messages.len(), 1);
}

/// Roster warnings end up in the bounded log queue with their caller.
#[test]
fn test_roster_warnings_are_captured() {
    let queue = SharedLogQueue::with_capacity(3).unwrap();
    let subscriber = tracing_subscriber::registry().with(QueueLayer::new(queue.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let mut roster = Roster::new("me");
        for _ in 0..5 {
            roster.handle(SessionAction::RemoveGroup("Nope".into()));
        }
        crate::logging::error("giving up", Some("test"));
    });

    let records = queue.snapshot();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].severity, Severity::Warning);
    let last = records.last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.caller, "test");
    assert_eq!(last.message, "giving up");
}
