//! Ready-made dialogs. Each function returns a configured dialog value for
//! the [`DialogManager`](crate::dialog_manager::DialogManager) to show.

use crossbeam_channel::Sender;

use super::{
    AboutDialog, AboutInfo, AddBuddyDialog, AddContactDialog, ConfirmButtons, ConfirmDialog,
    ConfirmPurpose, EmotePicker, EntryDialog, EntryPurpose, InviteDialog, LoginPreferencesDialog,
    MessageDialog, MessageKind, StyleDialog, StyleMode,
};
use crate::config::{Color, MessageStyle, ProxySettings};
use crate::decision_set::{PagedDecisionSet, PendingInvitation};
use crate::logging::SharedLogQueue;
use crate::protocol::{Contact, SessionAction};

pub fn error(message: &str) -> MessageDialog {
    MessageDialog::new(MessageKind::Error, message)
}

pub fn warning(message: &str) -> MessageDialog {
    MessageDialog::new(MessageKind::Warning, message)
}

pub fn information(message: &str) -> MessageDialog {
    MessageDialog::new(MessageKind::Information, message)
}

/// Report an unexpected failure with its details collapsed underneath.
pub fn exception(message: &str, details: &str) -> MessageDialog {
    MessageDialog::new(MessageKind::Exception, message).with_details(details.to_string())
}

/// Error dialog whose details are the most recent log records.
pub fn exc_error(message: &str, queue: &SharedLogQueue) -> MessageDialog {
    let details = queue
        .snapshot()
        .iter()
        .map(|record| format!("{} {}", record.severity.label(), record))
        .collect::<Vec<_>>()
        .join("\n");
    let dialog = MessageDialog::new(MessageKind::Error, message);
    if details.is_empty() {
        dialog
    } else {
        dialog.with_details(details)
    }
}

pub fn yes_no(message: &str, purpose: ConfirmPurpose) -> ConfirmDialog {
    ConfirmDialog::new(message, ConfirmButtons::YesNo, purpose)
}

pub fn yes_no_cancel(message: &str, purpose: ConfirmPurpose) -> ConfirmDialog {
    ConfirmDialog::new(message, ConfirmButtons::YesNoCancel, purpose)
}

pub fn accept_cancel(message: &str, purpose: ConfirmPurpose) -> ConfirmDialog {
    ConfirmDialog::new(message, ConfirmButtons::AcceptCancel, purpose)
}

pub fn add_group() -> EntryDialog {
    EntryDialog::new("Add group", "Group name:", EntryPurpose::AddGroup, "")
}

pub fn set_nick(old: &str) -> EntryDialog {
    EntryDialog::new(
        "Change nick",
        "Enter your new nick:",
        EntryPurpose::SetNick { old: old.to_string() },
        old,
    )
}

pub fn set_message(old: &str) -> EntryDialog {
    EntryDialog::new(
        "Personal message",
        "Enter your personal message:",
        EntryPurpose::SetPersonalMessage { old: old.to_string() },
        old,
    )
}

pub fn rename_group(old: &str) -> EntryDialog {
    EntryDialog::new(
        "Rename group",
        "New group name:",
        EntryPurpose::RenameGroup { old: old.to_string() },
        old,
    )
}

pub fn set_contact_alias(account: &str, old: Option<&str>) -> EntryDialog {
    EntryDialog::new(
        "Contact alias",
        &format!("Alias for {}:", account),
        EntryPurpose::SetAlias {
            account: account.to_string(),
            old: old.map(str::to_string),
        },
        old.unwrap_or(""),
    )
    .with_clear_button()
}

/// Ask for an account that will pretend to add us.
pub fn simulate_invitation() -> EntryDialog {
    EntryDialog::new(
        "Simulate invitation",
        "Account that adds you:",
        EntryPurpose::SimulateInvitation,
        "",
    )
}

pub fn add_contact(groups: &[String], selected_group: Option<&str>) -> AddContactDialog {
    AddContactDialog::new(groups, selected_group)
}

/// Paged dialog over `invitations`. When it finishes, the decisions are
/// sent to the session as [`SessionAction::ResolveInvitations`].
pub fn contact_added_you(
    invitations: Vec<PendingInvitation>,
    action_tx: Sender<SessionAction>,
) -> AddBuddyDialog {
    let set = PagedDecisionSet::with_items(invitations, move |accepted, rejected| {
        tracing::info!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            "invitations resolved"
        );
        let _ = action_tx.send(SessionAction::ResolveInvitations { accepted, rejected });
    });
    AddBuddyDialog::new(set)
}

pub fn select_emote(columns: usize) -> EmotePicker {
    EmotePicker::new(columns)
}

pub fn invite_dialog(contacts: Vec<Contact>) -> InviteDialog {
    InviteDialog::new(contacts)
}

pub fn login_preferences(
    session: &str,
    use_http: bool,
    proxy: ProxySettings,
) -> LoginPreferencesDialog {
    LoginPreferencesDialog::new(session, use_http, proxy)
}

pub fn select_font(style: &MessageStyle) -> StyleDialog {
    StyleDialog::new(StyleMode::Font, style.clone())
}

/// Color picker. The rest of `style` is carried through unchanged.
pub fn select_color(style: &MessageStyle, color: Color) -> StyleDialog {
    let mut style = style.clone();
    style.color = color;
    StyleDialog::new(StyleMode::Color, style)
}

pub fn select_style(style: &MessageStyle) -> StyleDialog {
    StyleDialog::new(StyleMode::Style, style.clone())
}

pub fn about_dialog(info: AboutInfo) -> AboutDialog {
    AboutDialog::new(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogRecord, Severity};
    use crossbeam_channel::unbounded;

    #[test]
    fn test_entry_presets_carry_old_values() {
        let dialog = set_nick("me");
        assert_eq!(dialog.input, "me");
        assert_eq!(dialog.purpose, EntryPurpose::SetNick { old: "me".into() });
        assert!(!dialog.clear_button);

        let alias = set_contact_alias("ann@example.com", None);
        assert!(alias.clear_button);
        assert_eq!(alias.input, "");
    }

    #[test]
    fn test_exc_error_includes_recent_records() {
        let queue = SharedLogQueue::with_capacity(4).unwrap();
        let empty = exc_error("boom", &queue);
        assert!(empty.details.is_none());

        queue.push(LogRecord::new(Severity::Error, "session", "lost roster"));
        let dialog = exc_error("boom", &queue);
        let details = dialog.details.unwrap();
        assert!(details.contains("ERROR"));
        assert!(details.contains("lost roster"));
    }

    #[test]
    fn test_contact_added_you_sends_resolution() {
        let (tx, rx) = unbounded();
        let mut dialog = contact_added_you(
            vec![
                PendingInvitation::new("ann@example.com", "Ann"),
                PendingInvitation::new("bob@example.com", "Bob"),
            ],
            tx,
        );
        assert_eq!(dialog.decisions().len(), 2);
        assert!(rx.try_recv().is_err());

        assert!(dialog.append(PendingInvitation::new("cy@example.com", "Cy")));
        assert_eq!(dialog.decisions().len(), 3);

        dialog.close();
        assert_eq!(
            rx.try_recv().unwrap(),
            SessionAction::ResolveInvitations {
                accepted: Vec::new(),
                rejected: Vec::new(),
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_select_color_keeps_style() {
        let mut style = MessageStyle::default();
        style.bold = true;
        let dialog = select_color(&style, Color::new(1, 2, 3));
        assert_eq!(dialog.mode, StyleMode::Color);
        assert!(dialog.style.bold);
        assert_eq!(dialog.style.color, Color::new(1, 2, 3));
    }
}
