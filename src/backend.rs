//! Session thread: owns the roster and answers UI actions with events.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::protocol::{SessionAction, SessionEvent};
use crate::roster::Roster;

/// Run the session loop until `Shutdown` arrives or the UI side hangs up.
pub fn run_backend(
    action_rx: Receiver<SessionAction>,
    event_tx: Sender<SessionEvent>,
    mut roster: Roster,
) {
    tracing::info!(nick = roster.nick(), "session started");

    // Let the UI render the initial roster
    let _ = event_tx.send(roster.snapshot());

    while let Ok(action) = action_rx.recv() {
        if action == SessionAction::Shutdown {
            break;
        }

        tracing::debug!(?action, "session action");
        for event in roster.handle(action) {
            if event_tx.send(event).is_err() {
                tracing::debug!("UI hung up, stopping session");
                return;
            }
        }
    }

    tracing::info!("session stopped");
}

/// UI-side ends of the session channels plus the thread handle.
pub struct SessionHandle {
    pub action_tx: Sender<SessionAction>,
    pub event_rx: Receiver<SessionEvent>,
    thread: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Spawn the session thread over `roster`.
    pub fn spawn(roster: Roster) -> std::io::Result<Self> {
        let (action_tx, action_rx) = unbounded::<SessionAction>();
        let (event_tx, event_rx) = unbounded::<SessionEvent>();

        let thread = thread::Builder::new()
            .name("session".into())
            .spawn(move || run_backend(action_rx, event_tx, roster))?;

        Ok(Self {
            action_tx,
            event_rx,
            thread: Some(thread),
        })
    }

    /// Ask the session to stop and wait for it.
    pub fn shutdown(&mut self) {
        let _ = self.action_tx.send(SessionAction::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("session thread panicked");
            }
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn recv(rx: &Receiver<SessionEvent>) -> SessionEvent {
        rx.recv_timeout(Duration::from_secs(2)).expect("session event")
    }

    #[test]
    fn test_initial_snapshot_and_actions() {
        let mut handle = SessionHandle::spawn(Roster::new("me")).unwrap();
        assert!(matches!(recv(&handle.event_rx), SessionEvent::RosterChanged { .. }));

        handle
            .action_tx
            .send(SessionAction::AddGroup("Friends".into()))
            .unwrap();
        match recv(&handle.event_rx) {
            SessionEvent::RosterChanged { groups, .. } => assert_eq!(groups, vec!["Friends"]),
            other => panic!("unexpected event: {:?}", other),
        }

        handle.shutdown();
        assert!(handle.event_rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_loop_stops_when_ui_drops_actions() {
        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        drop(action_tx);

        run_backend(action_rx, event_tx, Roster::new("me"));
        assert!(matches!(event_rx.try_recv(), Ok(SessionEvent::RosterChanged { .. })));
    }
}
