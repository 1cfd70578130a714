/*!

# Observable Actions

Every demonstration in this crate "does something" only in the sense that it reports what
it did. Rather than printing straight to stdout, operations record each action into an
[`ActionLog`] that the caller owns and passes down explicitly as `&mut ActionLog`. This
keeps the examples free of global state and makes the exact order in which the dispatch
machinery reached each implementation observable in tests.

Each recorded action is also forwarded to the [`log`] facade at `info` level, so a binary
that installs a logger (`env_logger`, say) sees the same lines the original console
programs would have printed. The library itself never installs a logger.

*/

use log::info;

/// An ordered, append-only record of the actions performed by dispatched operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action. Actions are kept in call order.
    pub fn record(&mut self, action: impl Into<String>) {
        let action = action.into();
        info!("{action}");
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn last(&self) -> Option<&str> {
        self.actions.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Forgets every recorded action.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn into_actions(self) -> Vec<String> {
        self.actions
    }
}
