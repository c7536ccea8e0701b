//! In-memory contact roster owned by the session thread.

use crate::protocol::{Contact, SessionAction, SessionEvent};
use crate::validation::{sanitize_display_text, validate_account, validate_group_name};

#[derive(Debug, Default)]
pub struct Roster {
    contacts: Vec<Contact>,
    groups: Vec<String>,
    nick: String,
    personal_message: String,
    /// Contacts that added us, awaiting a decision: (account, nick)
    pending: Vec<(String, String)>,
    /// Accounts whose invitation was rejected
    blocked: Vec<String>,
}

impl Roster {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            ..Self::default()
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn personal_message(&self) -> &str {
        &self.personal_message
    }

    pub fn pending(&self) -> &[(String, String)] {
        &self.pending
    }

    pub fn blocked(&self) -> &[String] {
        &self.blocked
    }

    pub fn contact(&self, account: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.account == account)
    }

    fn contact_mut(&mut self, account: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.account == account)
    }

    /// Snapshot event describing the whole roster
    pub fn snapshot(&self) -> SessionEvent {
        SessionEvent::RosterChanged {
            contacts: self.contacts.clone(),
            groups: self.groups.clone(),
        }
    }

    pub fn add_contact(
        &mut self,
        account: &str,
        nick: &str,
        group: Option<&str>,
    ) -> Result<(), String> {
        let account = account.trim();
        validate_account(account)?;
        if self.contact(account).is_some() {
            return Err(format!("{} is already in your contact list", account));
        }
        if let Some(group) = group {
            if !self.groups.iter().any(|g| g == group) {
                return Err(format!("Group '{}' does not exist", group));
            }
        }

        let mut contact = Contact::new(account, nick);
        contact.group = group.map(str::to_string);
        self.contacts.push(contact);
        self.blocked.retain(|b| b != account);
        Ok(())
    }

    pub fn remove_contact(&mut self, account: &str) -> Result<(), String> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.account != account);
        if self.contacts.len() == before {
            return Err(format!("{} is not in your contact list", account));
        }
        Ok(())
    }

    pub fn add_group(&mut self, name: &str) -> Result<(), String> {
        let name = name.trim();
        validate_group_name(name)?;
        if self.groups.iter().any(|g| g == name) {
            return Err(format!("Group '{}' already exists", name));
        }
        self.groups.push(name.to_string());
        Ok(())
    }

    pub fn rename_group(&mut self, old: &str, new: &str) -> Result<(), String> {
        let new = new.trim();
        validate_group_name(new)?;
        if old == new {
            return Ok(());
        }
        if self.groups.iter().any(|g| g == new) {
            return Err(format!("Group '{}' already exists", new));
        }

        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.as_str() == old)
            .ok_or_else(|| format!("Group '{}' does not exist", old))?;
        *slot = new.to_string();

        for contact in &mut self.contacts {
            if contact.group.as_deref() == Some(old) {
                contact.group = Some(new.to_string());
            }
        }
        Ok(())
    }

    /// Remove a group; its contacts become ungrouped.
    pub fn remove_group(&mut self, name: &str) -> Result<(), String> {
        let before = self.groups.len();
        self.groups.retain(|g| g != name);
        if self.groups.len() == before {
            return Err(format!("Group '{}' does not exist", name));
        }

        for contact in &mut self.contacts {
            if contact.group.as_deref() == Some(name) {
                contact.group = None;
            }
        }
        Ok(())
    }

    pub fn set_alias(&mut self, account: &str, alias: Option<&str>) -> Result<(), String> {
        let contact = self
            .contact_mut(account)
            .ok_or_else(|| format!("{} is not in your contact list", account))?;
        contact.alias = alias
            .map(sanitize_display_text)
            .filter(|alias| !alias.trim().is_empty());
        Ok(())
    }

    /// Record that `account` added us. Known contacts and blocked accounts
    /// are not asked about again; an account still pending (deferred) is
    /// raised again with its nick refreshed.
    pub fn receive_invitation(&mut self, account: &str, nick: &str) -> Result<bool, String> {
        let account = account.trim();
        validate_account(account)?;
        if self.contact(account).is_some() || self.blocked.iter().any(|b| b == account) {
            return Ok(false);
        }
        match self.pending.iter_mut().find(|(a, _)| a == account) {
            Some(entry) => entry.1 = nick.to_string(),
            None => self.pending.push((account.to_string(), nick.to_string())),
        }
        Ok(true)
    }

    /// Apply the user's decisions. Accounts in neither list stay pending.
    pub fn resolve_invitations(&mut self, accepted: &[String], rejected: &[String]) -> Vec<String> {
        let mut errors = Vec::new();

        for account in accepted {
            let nick = self
                .pending
                .iter()
                .find(|(a, _)| a == account)
                .map(|(_, n)| n.clone())
                .unwrap_or_else(|| account.clone());
            if let Err(e) = self.add_contact(account, &nick, None) {
                errors.push(e);
            }
        }

        for account in rejected {
            if !self.blocked.contains(account) {
                self.blocked.push(account.clone());
            }
        }

        self.pending
            .retain(|(a, _)| !accepted.contains(a) && !rejected.contains(a));
        errors
    }

    /// Apply a UI action and return the events it produces.
    pub fn handle(&mut self, action: SessionAction) -> Vec<SessionEvent> {
        let result = match action {
            SessionAction::AddContact { account, group } => {
                self.add_contact(&account, "", group.as_deref())
            }
            SessionAction::RemoveContact(account) => self.remove_contact(&account),
            SessionAction::AddGroup(name) => self.add_group(&name),
            SessionAction::RenameGroup { old, new } => self.rename_group(&old, &new),
            SessionAction::RemoveGroup(name) => self.remove_group(&name),
            SessionAction::SetAlias { account, alias } => {
                self.set_alias(&account, alias.as_deref())
            }
            SessionAction::SetNick(nick) => {
                self.nick = sanitize_display_text(&nick);
                return vec![SessionEvent::NickChanged(self.nick.clone())];
            }
            SessionAction::SetPersonalMessage(message) => {
                self.personal_message = sanitize_display_text(&message);
                return vec![SessionEvent::PersonalMessageChanged(
                    self.personal_message.clone(),
                )];
            }
            SessionAction::InviteToConversation(account) => {
                return match self.contact(&account) {
                    Some(_) => vec![SessionEvent::Invited(account)],
                    None => vec![SessionEvent::Error(format!(
                        "{} is not in your contact list",
                        account
                    ))],
                };
            }
            SessionAction::ResolveInvitations { accepted, rejected } => {
                let mut events: Vec<SessionEvent> = self
                    .resolve_invitations(&accepted, &rejected)
                    .into_iter()
                    .map(SessionEvent::Error)
                    .collect();
                events.push(self.snapshot());
                return events;
            }
            SessionAction::SimulateInvitation { account, nick } => {
                return match self.receive_invitation(&account, &nick) {
                    Ok(true) => vec![SessionEvent::ContactAddedYou { account, nick }],
                    Ok(false) => {
                        tracing::debug!(%account, "ignoring invitation from a known account");
                        Vec::new()
                    }
                    Err(e) => vec![SessionEvent::Error(e)],
                };
            }
            SessionAction::Shutdown => return Vec::new(),
        };

        match result {
            Ok(()) => vec![self.snapshot()],
            Err(e) => {
                tracing::warn!("{}", e);
                vec![SessionEvent::Error(e)]
            }
        }
    }
}
