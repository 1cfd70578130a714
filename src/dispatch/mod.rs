/*!

# Overridable Methods Without Inheritance

In a language with classes, an abstract base class can implement a "template method" that
calls an abstract (or virtual) method, and a subclass fills in the blank. The call from the
base's code lands in the subclass's implementation: _virtual dispatch from base to derived_.

Rust has no inheritance, and composition alone does not give you this. If a derived type
owns its base as a field and forwards to it, the base's code only ever sees `&Base`, never
the derived value around it. Any call the base makes "on itself" reaches the base's own
implementation. There are three ways to deal with this, each in its own module:

| Strategy                                     | Base reaches derived? | Can be unbound? |
| -------------------------------------------- | --------------------- | --------------- |
| 1. [`direct`] override, explicit delegation  | no                    | no              |
| 2. [`callback_slot`] (function-valued field) | yes, via the slot     | yes, if abstract |
| 3. [`self_parameter`] (explicit `this`)      | yes, via `this`       | no              |

1. **Direct override.** The derived type implements the overridable method itself and
   calls into the base where it wants shared behavior. The base's fixed method never calls
   the overridable one. This is plain delegation, and it is what you get by default.
2. **Callback slot.** The base stores the overridable operation as a function-valued field
   with a documented default. The derived type binds its own implementation into the slot,
   and the base's fixed method calls whatever is in the slot. This is a hand-rolled vtable
   with exactly one entry.
3. **Self parameter.** The fixed method takes the most-derived value as an explicit
   `this: &dyn Trait` parameter and calls the overridable method through it. The dispatch
   happens through the trait object's vtable, so it always reaches the outermost wrapper.

All three can be driven through the one capability abstraction in this module,
[`Dispatchable`], whose capability set is `{work, common}`: `work` is the overridable
operation and `common` the fixed one. A caller holding a `&dyn Dispatchable` neither knows
nor cares which strategy sits behind it.

*/

pub mod callback_slot;
pub mod direct;
pub mod self_parameter;

use std::fmt::{Display, Formatter};

use crate::{action::ActionLog, error::Result};

/// The text the base's default `work` records for an entity called `identity`.
pub fn default_work_action(identity: &str) -> String {
    format!("default work for {identity}")
}

/// The action recorded by every fixed `common` implementation.
pub const COMMON_ACTION: &str = "common called";

/// The capability set `{work, common}` shared by every dispatch strategy.
pub trait Dispatchable {
    /// The label the entity was constructed with.
    fn identity(&self) -> &str;

    /// The overridable operation.
    fn work(&self, log: &mut ActionLog) -> Result<()>;

    /// The fixed operation. Whether it reaches `work`, and which `work`, depends on the strategy.
    fn common(&self, log: &mut ActionLog) -> Result<()>;
}

/// Names one member of the [`Dispatchable`] capability set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    Work,
    Common,
}

impl Capability {
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Work => "work",
            Capability::Common => "common",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Invokes the fixed operation of `entity`.
pub fn invoke_fixed(entity: &dyn Dispatchable, log: &mut ActionLog) -> Result<()> {
    entity.common(log)
}

/// Invokes the requested `capability` on `entity` knowing nothing about its concrete type.
pub fn invoke_via_capability(
    entity: &dyn Dispatchable,
    capability: Capability,
    log: &mut ActionLog,
) -> Result<()> {
    log::trace!("invoking '{capability}' on '{}'", entity.identity());
    match capability {
        Capability::Work => entity.work(log),
        Capability::Common => entity.common(log),
    }
}
