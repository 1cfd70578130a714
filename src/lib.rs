#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# Dispatch as Data

Every module in this crate answers the same question from a different angle: when a type
"derives" from another by owning it, which implementation runs when the base calls a method
on itself? In languages with classes, the answer is hidden in the object model. Here it is
always spelled out, and there are only ever three answers:

1. the base's own, because the base only knows `&Self` ([`dispatch::direct`],
   [`inheritance::shadowing`]);
2. whatever was stored in a function-valued field ([`dispatch::callback_slot`],
   [`inheritance::function_field`]);
3. whatever the caller passed as an explicit `this` trait object ([`dispatch::self_parameter`]).

A trait object is itself just a pointer plus a table of function pointers, so (2) and (3)
are the same mechanism at different granularity: a hand-written one-entry vtable versus the
compiler's full one. Choosing between them is a question of who gets to decide the
implementation, and when.

## Observability

Operations report what they did by recording it into an [`action::ActionLog`] that the
caller owns. That is how every example and test in the crate observes dispatch. The records
also go through the [`log`] facade, so an application with a logger installed sees them
as they happen.

*/

pub mod action;
pub mod dispatch;
pub mod encapsulation;
pub mod error;
pub mod inheritance;
pub mod polymorphism;

pub use error::{DispatchError, Result};

// Re-exported for use in exported macros
pub use paste;
