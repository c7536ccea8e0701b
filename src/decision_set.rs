//! Paged accept/reject/defer decisions over pending invitations.
//!
//! Backs the "someone added you" dialog: items are shown one page at a
//! time, each one is accepted, rejected or deferred, and the final
//! accepted/rejected partition is reported exactly once.

/// A contact that added us and is waiting for a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInvitation {
    /// Account identifier (e-mail style)
    pub account: String,
    /// Display name chosen by the other side
    pub nick: String,
}

impl PendingInvitation {
    pub fn new(account: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            nick: nick.into(),
        }
    }

    /// Whether the nick adds anything over the bare account.
    pub fn has_distinct_nick(&self) -> bool {
        !self.nick.is_empty() && self.nick != self.account
    }
}

/// Whether the set still has an item under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionState {
    Active,
    Empty,
}

/// Called once with `(accepted, rejected)` account lists.
pub type CompletionCallback = Box<dyn FnOnce(Vec<String>, Vec<String>)>;

/// Pending invitations plus a cursor and the decisions taken so far.
///
/// The completion callback fires the first time the set becomes empty or
/// is closed, provided it ever held an item. Afterwards every operation
/// is a no-op.
pub struct PagedDecisionSet {
    items: Vec<PendingInvitation>,
    cursor: usize,
    accepted: Vec<String>,
    rejected: Vec<String>,
    on_complete: Option<CompletionCallback>,
    ever_populated: bool,
    completed: bool,
}

impl PagedDecisionSet {
    pub fn new(on_complete: impl FnOnce(Vec<String>, Vec<String>) + 'static) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            accepted: Vec::new(),
            rejected: Vec::new(),
            on_complete: Some(Box::new(on_complete)),
            ever_populated: false,
            completed: false,
        }
    }

    /// Build a set already holding `items`, cursor on the first one.
    pub fn with_items(
        items: impl IntoIterator<Item = PendingInvitation>,
        on_complete: impl FnOnce(Vec<String>, Vec<String>) + 'static,
    ) -> Self {
        let mut set = Self::new(on_complete);
        for item in items {
            set.append(item);
        }
        set
    }

    /// Queue another invitation. The cursor stays where it is unless the
    /// set was empty, in which case it lands on the new item.
    ///
    /// Returns `false` if the set already completed and ignored the item.
    pub fn append(&mut self, item: PendingInvitation) -> bool {
        if self.completed {
            return false;
        }

        if self.items.is_empty() {
            self.cursor = 0;
        }
        self.items.push(item);
        self.ever_populated = true;
        true
    }

    pub fn accept(&mut self) {
        if let Some(item) = self.take_current() {
            self.accepted.push(item.account);
            self.after_removal();
        }
    }

    pub fn reject(&mut self) {
        if let Some(item) = self.take_current() {
            self.rejected.push(item.account);
            self.after_removal();
        }
    }

    /// Drop the current item without classifying it ("remind me later").
    pub fn defer(&mut self) {
        if self.take_current().is_some() {
            self.after_removal();
        }
    }

    /// Move the cursor by `step` pages, wrapping around both ends.
    pub fn navigate(&mut self, step: isize) {
        if self.completed || self.items.is_empty() {
            return;
        }

        let len = self.items.len() as isize;
        self.cursor = (self.cursor as isize + step).rem_euclid(len) as usize;
    }

    /// End the interaction, reporting whatever was decided so far.
    pub fn close(&mut self) {
        self.complete();
    }

    pub fn state(&self) -> DecisionState {
        if self.items.is_empty() {
            DecisionState::Empty
        } else {
            DecisionState::Active
        }
    }

    pub fn current(&self) -> Option<&PendingInvitation> {
        self.items.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[PendingInvitation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// One-based page indicator, e.g. `(2/5)`.
    pub fn page_label(&self) -> String {
        if self.items.is_empty() {
            return "(0/0)".to_string();
        }
        format!("({}/{})", self.cursor + 1, self.items.len())
    }

    /// Whether the "previous" arrow should be enabled.
    pub fn can_go_back(&self) -> bool {
        !self.items.is_empty() && self.cursor > 0
    }

    /// Whether the "next" arrow should be enabled.
    pub fn can_go_forward(&self) -> bool {
        !self.items.is_empty() && self.cursor + 1 < self.items.len()
    }

    fn take_current(&mut self) -> Option<PendingInvitation> {
        if self.completed || self.cursor >= self.items.len() {
            return None;
        }
        Some(self.items.remove(self.cursor))
    }

    fn after_removal(&mut self) {
        if self.items.is_empty() {
            self.cursor = 0;
            self.complete();
        } else {
            self.cursor = self.cursor.min(self.items.len() - 1);
        }
    }

    fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;

        if !self.ever_populated {
            self.on_complete = None;
            return;
        }

        if let Some(callback) = self.on_complete.take() {
            tracing::debug!(
                accepted = self.accepted.len(),
                rejected = self.rejected.len(),
                "invitation decisions complete"
            );
            callback(self.accepted.clone(), self.rejected.clone());
        }
    }
}

impl std::fmt::Debug for PagedDecisionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedDecisionSet")
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .field("accepted", &self.accepted)
            .field("rejected", &self.rejected)
            .field("completed", &self.completed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(Vec<String>, Vec<String>)>>>;

    fn recording_set(accounts: &[&str]) -> (PagedDecisionSet, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let set = PagedDecisionSet::with_items(
            accounts.iter().map(|a| PendingInvitation::new(*a, *a)),
            move |accepted, rejected| sink.borrow_mut().push((accepted, rejected)),
        );
        (set, calls)
    }

    fn current_account(set: &PagedDecisionSet) -> Option<&str> {
        set.current().map(|item| item.account.as_str())
    }

    #[test]
    fn test_reject_then_accept_all() {
        let (mut set, calls) = recording_set(&["A", "B", "C"]);
        assert_eq!(set.cursor(), 0);

        set.reject();
        assert_eq!(set.rejected(), ["A"]);
        assert_eq!(set.cursor(), 0);
        assert_eq!(current_account(&set), Some("B"));

        set.accept();
        assert_eq!(set.accepted(), ["B"]);
        assert_eq!(current_account(&set), Some("C"));
        assert!(calls.borrow().is_empty());

        set.accept();
        assert_eq!(set.state(), DecisionState::Empty);
        assert_eq!(
            *calls.borrow(),
            vec![(vec!["B".to_string(), "C".to_string()], vec!["A".to_string()])]
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut set, _) = recording_set(&["A", "B", "C"]);

        set.navigate(-1);
        assert_eq!(set.cursor(), 2);
        assert_eq!(current_account(&set), Some("C"));

        set.navigate(1);
        assert_eq!(set.cursor(), 0);
        assert_eq!(current_account(&set), Some("A"));
    }

    #[test]
    fn test_removing_last_page_clamps_cursor() {
        let (mut set, _) = recording_set(&["A", "B", "C"]);
        set.navigate(2);
        set.accept();

        assert_eq!(set.cursor(), 1);
        assert_eq!(current_account(&set), Some("B"));
    }

    #[test]
    fn test_append_to_empty_set() {
        let (mut set, calls) = recording_set(&[]);
        assert_eq!(set.state(), DecisionState::Empty);

        assert!(set.append(PendingInvitation::new("a@example.com", "Ann")));
        assert_eq!(set.state(), DecisionState::Active);
        assert_eq!(set.cursor(), 0);

        set.navigate(0);
        assert!(set.append(PendingInvitation::new("b@example.com", "Bob")));
        assert_eq!(set.cursor(), 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_append_keeps_cursor() {
        let (mut set, _) = recording_set(&["A", "B"]);
        set.navigate(1);
        set.append(PendingInvitation::new("C", "C"));

        assert_eq!(set.cursor(), 1);
        assert_eq!(set.page_label(), "(2/3)");
    }

    #[test]
    fn test_defer_last_item_completes_without_classifying() {
        let (mut set, calls) = recording_set(&["A"]);
        set.defer();

        assert!(set.is_completed());
        assert_eq!(*calls.borrow(), vec![(Vec::<String>::new(), Vec::<String>::new())]);
    }

    #[test]
    fn test_operations_on_empty_set_are_noops() {
        let (mut set, calls) = recording_set(&[]);
        set.accept();
        set.reject();
        set.defer();
        set.navigate(1);

        assert_eq!(set.state(), DecisionState::Empty);
        assert!(!set.is_completed());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_close_reports_partial_decisions_once() {
        let (mut set, calls) = recording_set(&["A", "B", "C"]);
        set.accept();
        set.close();
        set.close();
        set.reject();

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].0, vec!["A".to_string()]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_close_never_populated_does_not_fire() {
        let (mut set, calls) = recording_set(&[]);
        set.close();

        assert!(set.is_completed());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_append_after_completion_is_ignored() {
        let (mut set, calls) = recording_set(&["A"]);
        set.accept();

        assert!(!set.append(PendingInvitation::new("B", "B")));
        assert!(set.is_empty());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_arrow_sensitivity() {
        let (mut set, _) = recording_set(&["A", "B", "C"]);
        assert!(!set.can_go_back());
        assert!(set.can_go_forward());

        set.navigate(1);
        assert!(set.can_go_back());
        assert!(set.can_go_forward());

        set.navigate(1);
        assert!(!set.can_go_forward());
    }

    #[test]
    fn test_distinct_nick() {
        assert!(PendingInvitation::new("a@example.com", "Ann").has_distinct_nick());
        assert!(!PendingInvitation::new("a@example.com", "a@example.com").has_distinct_nick());
        assert!(!PendingInvitation::new("a@example.com", "").has_distinct_nick());
    }
}
