/*!

# Errors

There is exactly one way to misuse the dispatch machinery: invoking an abstract
capability (a [callback slot](crate::dispatch::callback_slot) with no default) before anything
has been bound to it. That is a violation of the programming contract, not a runtime
condition, so there is nothing to retry or recover. The error is surfaced to the caller
immediately.

The other two dispatch strategies cannot produce it: [direct overriding](crate::dispatch::direct)
and [self-parameter dispatch](crate::dispatch::self_parameter) always carry an
implementation, and the compiler checks that for us.

*/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A capability was invoked (or validated) on an entity that never had an
    /// implementation bound to it.
    #[error("capability '{capability}' is not bound on entity '{entity}'")]
    UnboundCapability {
        entity: String,
        capability: &'static str,
    },
}
