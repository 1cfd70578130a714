/*!

# Strategy 2: A Callback Slot as a One-Entry VTable

The base [`Entity`] stores its overridable operation in a [`Slot`], a function-valued field
with a documented default. Its fixed operation, [`Entity::invoke_fixed`], calls whatever is
currently in the slot. A derived type gets "virtual dispatch" simply by binding its own
implementation into the slot of the base it owns.

```rust
use dispatch_patterns::{action::ActionLog, dispatch::callback_slot::{Derived, Entity}};

let mut derived = Derived::new(Entity::construct("test"));
derived.bind_own_work();

let mut log = ActionLog::new();
derived.invoke_fixed(&mut log).unwrap();
assert_eq!(log.actions(), ["common called", "work called", "name is test"]);
```

Because the slot lives in the base, it does not matter whether it is bound before or after
the base is wrapped: [`Derived::override_with`] just forwards to [`Entity::override_with`],
and the slot is only read when the fixed operation runs.

## The `this` Problem

A bound method value in a garbage-collected language can capture the derived object it was
taken from. A boxed closure stored inside the base cannot borrow the derived value that
owns that base; that would be a self-referential struct. So the operations stored here
receive the entity's identity as an argument instead of capturing it. Anything else they
need has to be moved into the closure when it is bound.

## Abstract Slots

A base built with [`Entity::abstract_base`] has no default. Invoking it before anything has
been bound is a contract violation and yields [`DispatchError::UnboundCapability`]. Callers
who would rather find out when composing than when invoking can use [`Derived::try_new`] or
[`Entity::validate`].

*/

use std::fmt::{Debug, Formatter};

use log::debug;

use crate::{
    action::ActionLog,
    dispatch::{self, COMMON_ACTION, Capability, default_work_action},
    error::{DispatchError, Result},
};

/// A bindable implementation of the overridable operation. It receives the entity's identity.
pub type Operation = Box<dyn Fn(&str, &mut ActionLog)>;

/// What the overridable operation is currently bound to.
pub enum Slot {
    /// The base's own implementation, which records [`default_work_action`].
    Default,
    /// No implementation at all. Invoking it is an error.
    Abstract,
    /// An implementation supplied by a derived value.
    Bound(Operation),
}

impl Slot {
    pub fn is_bound(&self) -> bool {
        !matches!(self, Slot::Abstract)
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Default => f.write_str("Default"),
            Slot::Abstract => f.write_str("Abstract"),
            Slot::Bound(_) => f.write_str("Bound(..)"),
        }
    }
}

/// The base entity. Its identity is fixed at construction; only the slot can change.
#[derive(Debug)]
pub struct Entity {
    identity: String,
    work: Slot,
}

impl Entity {
    /// A base whose overridable operation starts out bound to the default.
    pub fn construct(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            work: Slot::Default,
        }
    }

    /// A base with no default; something must be bound before the fixed operation is usable.
    pub fn abstract_base(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            work: Slot::Abstract,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn slot(&self) -> &Slot {
        &self.work
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self.work, Slot::Bound(_))
    }

    /// Binds `operation` as this entity's overridable operation, replacing whatever was there.
    pub fn override_with<F>(&mut self, operation: F)
    where
        F: Fn(&str, &mut ActionLog) + 'static,
    {
        debug!("binding work slot of '{}'", self.identity);
        self.work = Slot::Bound(Box::new(operation));
    }

    /// Fails if the overridable operation has nothing bound to it.
    pub fn validate(&self) -> Result<()> {
        if self.work.is_bound() {
            Ok(())
        } else {
            Err(self.unbound())
        }
    }

    fn unbound(&self) -> DispatchError {
        DispatchError::UnboundCapability {
            entity: self.identity.clone(),
            capability: Capability::Work.name(),
        }
    }

    /// Runs whatever the slot is currently bound to.
    pub fn invoke_overridable(&self, log: &mut ActionLog) -> Result<()> {
        match &self.work {
            Slot::Default => {
                debug!("'{}' reached the default work", self.identity);
                log.record(default_work_action(&self.identity));
            }
            Slot::Abstract => return Err(self.unbound()),
            Slot::Bound(operation) => {
                debug!("'{}' reached a bound work", self.identity);
                operation(&self.identity, log);
            }
        }
        Ok(())
    }

    /// The fixed operation: records [`COMMON_ACTION`] and then calls through the slot. An
    /// unbound slot is reported before anything is recorded.
    pub fn invoke_fixed(&self, log: &mut ActionLog) -> Result<()> {
        self.validate()?;
        log.record(COMMON_ACTION);
        self.invoke_overridable(log)
    }
}

/// A derived entity composed of a base [`Entity`].
#[derive(Debug)]
pub struct Derived {
    base: Entity,
}

crate::embed_base!(Derived { base: Entity });

impl Derived {
    pub fn new(base: Entity) -> Self {
        Self { base }
    }

    /// Composes, rejecting a base whose slot is still abstract.
    pub fn try_new(base: Entity) -> Result<Self> {
        base.validate()?;
        Ok(Self::new(base))
    }

    /// Composes and binds the derived implementation in one step.
    pub fn with_own_work(base: Entity) -> Self {
        let mut derived = Self::new(base);
        derived.bind_own_work();
        derived
    }

    /// The derived implementation of the overridable operation.
    pub fn work(identity: &str, log: &mut ActionLog) {
        log.record("work called");
        log.record(format!("name is {identity}"));
    }

    /// Binds [`Derived::work`] into the base's slot.
    pub fn bind_own_work(&mut self) {
        self.base.override_with(Self::work);
    }

    pub fn override_with<F>(&mut self, operation: F)
    where
        F: Fn(&str, &mut ActionLog) + 'static,
    {
        self.base.override_with(operation);
    }

    pub fn invoke_fixed(&self, log: &mut ActionLog) -> Result<()> {
        self.base.invoke_fixed(log)
    }

    pub fn into_base(self) -> Entity {
        self.base
    }
}

impl dispatch::Dispatchable for Entity {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        self.invoke_overridable(log)
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        self.invoke_fixed(log)
    }
}

impl dispatch::Dispatchable for Derived {
    fn identity(&self) -> &str {
        self.base.identity()
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        self.base.invoke_overridable(log)
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        self.base.invoke_fixed(log)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn shout(identity: &str, log: &mut ActionLog) {
        log.record(format!("{} overridden", identity.to_uppercase()));
    }

    #[test]
    fn standalone_base_reaches_default() {
        let entity = Entity::construct("test");
        let mut log = ActionLog::new();

        entity.invoke_fixed(&mut log).unwrap();

        assert!(!entity.is_overridden());
        assert_eq!(log.actions(), ["common called", "default work for test"]);
    }

    #[test]
    fn override_replaces_default() {
        let mut entity = Entity::construct("test");
        entity.override_with(shout);
        let mut log = ActionLog::new();

        entity.invoke_fixed(&mut log).unwrap();

        assert!(entity.is_overridden());
        assert_eq!(log.actions(), ["common called", "TEST overridden"]);
    }

    #[test]
    fn configure_then_compose_matches_compose_then_configure() {
        let mut configured = Entity::construct("test");
        configured.override_with(shout);
        let configure_then_compose = Derived::new(configured);

        let mut compose_then_configure = Derived::new(Entity::construct("test"));
        compose_then_configure.override_with(shout);

        let mut first = ActionLog::new();
        let mut second = ActionLog::new();
        configure_then_compose.invoke_fixed(&mut first).unwrap();
        compose_then_configure.invoke_fixed(&mut second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.last(), Some("TEST overridden"));
    }

    #[test]
    fn derived_binds_its_own_work() {
        let derived = Derived::with_own_work(Entity::construct("test"));
        let mut log = ActionLog::new();

        derived.invoke_fixed(&mut log).unwrap();

        assert_eq!(
            log.actions(),
            ["common called", "work called", "name is test"]
        );
    }

    #[test]
    fn later_binding_wins() {
        let mut derived = Derived::with_own_work(Entity::construct("test"));
        derived.override_with(shout);
        let mut log = ActionLog::new();

        derived.invoke_fixed(&mut log).unwrap();

        assert_eq!(log.actions(), ["common called", "TEST overridden"]);
    }

    #[test]
    fn override_does_not_leak_between_entities() {
        let mut overridden = Entity::construct("one");
        let untouched = Entity::construct("two");
        overridden.override_with(shout);

        let mut log = ActionLog::new();
        untouched.invoke_fixed(&mut log).unwrap();

        assert_eq!(log.last(), Some("default work for two"));
    }

    #[test]
    fn closures_can_carry_state() {
        let style = String::from("somestyle");
        let mut entity = Entity::construct("test");
        entity.override_with(move |identity, log| {
            log.record(format!("{identity} with {style}"));
        });
        let mut log = ActionLog::new();

        entity.invoke_overridable(&mut log).unwrap();

        assert_eq!(log.actions(), ["test with somestyle"]);
    }

    #[test]
    fn abstract_base_is_unbound_until_bound() {
        let entity = Entity::abstract_base("test");
        let mut log = ActionLog::new();

        let expected = DispatchError::UnboundCapability {
            entity: "test".into(),
            capability: "work",
        };
        assert_eq!(entity.invoke_fixed(&mut log), Err(expected.clone()));
        assert_eq!(entity.invoke_overridable(&mut log), Err(expected));
        assert!(log.is_empty());
    }

    #[test]
    fn try_new_validates_at_composition() {
        let error = Derived::try_new(Entity::abstract_base("test")).unwrap_err();
        assert_eq!(
            error,
            DispatchError::UnboundCapability {
                entity: "test".into(),
                capability: "work",
            }
        );

        let mut base = Entity::abstract_base("test");
        base.override_with(Derived::work);
        let derived = Derived::try_new(base).unwrap();
        assert!(derived.base().is_overridden());
    }

    #[test]
    fn abstract_base_composed_then_bound() {
        let mut derived = Derived::new(Entity::abstract_base("test"));
        let mut log = ActionLog::new();
        assert!(derived.invoke_fixed(&mut log).is_err());

        derived.bind_own_work();
        derived.invoke_fixed(&mut log).unwrap();

        assert_eq!(
            log.actions(),
            ["common called", "work called", "name is test"]
        );
    }

    #[test]
    fn slot_debug_hides_closure() {
        let mut entity = Entity::construct("test");
        assert_eq!(format!("{:?}", entity.slot()), "Default");
        entity.override_with(shout);
        assert_eq!(format!("{:?}", entity.slot()), "Bound(..)");
        assert_eq!(format!("{:?}", Entity::abstract_base("x").slot()), "Abstract");
        assert_eq!(entity.identity(), "test");
    }
}
