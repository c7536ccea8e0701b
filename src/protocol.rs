//! Messages exchanged between the UI and the session thread.

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub account: String,
    pub nick: String,
    pub alias: Option<String>,
    pub group: Option<String>,
}

impl Contact {
    pub fn new(account: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            nick: nick.into(),
            alias: None,
            group: None,
        }
    }

    /// Alias if set, otherwise nick, otherwise the account
    pub fn display_name(&self) -> &str {
        match &self.alias {
            Some(alias) if !alias.is_empty() => alias,
            _ if !self.nick.is_empty() => &self.nick,
            _ => &self.account,
        }
    }
}

/// Actions sent from the UI to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    AddContact { account: String, group: Option<String> },
    RemoveContact(String),
    AddGroup(String),
    RenameGroup { old: String, new: String },
    RemoveGroup(String),
    SetNick(String),
    SetPersonalMessage(String),
    /// `None` removes the alias
    SetAlias { account: String, alias: Option<String> },
    InviteToConversation(String),
    /// Final decisions on contacts that added us
    ResolveInvitations { accepted: Vec<String>, rejected: Vec<String> },
    /// Pretend `account` added us to their list
    SimulateInvitation { account: String, nick: String },
    Shutdown,
}

/// Events sent from the session to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Full roster after any change: contacts and group names
    RosterChanged { contacts: Vec<Contact>, groups: Vec<String> },
    /// Someone added us to their contact list
    ContactAddedYou { account: String, nick: String },
    NickChanged(String),
    PersonalMessageChanged(String),
    Invited(String),
    Error(String),
}
