/*!

# Strategy 3: Virtual Dispatch Through an Explicit Self Parameter

The fixed operation [`Alpha::common`] is a provided trait method that takes the
most-derived value as an explicit `this: &dyn Alpha` argument and calls `this.work(..)`.
Since `this` is a trait object, the call goes through its vtable and lands in whatever type
the caller passed in, not in the type whose `common` happens to be running.

The catch is that nothing forces the caller to pass the outermost value. Passing the
embedded base as `this` quietly reaches the base's default `work`. [`call_common`] bakes the
right choice in: it always passes the handle it was given as its own `this`.

Unlike a [callback slot](super::callback_slot), every implementor of [`Alpha`] must supply
`work`, so there is no way to end up with an unbound operation. The compiler rejects it:

```rust,compile_fail
use dispatch_patterns::{action::ActionLog, dispatch::self_parameter::Alpha};

struct Incomplete;

impl Alpha for Incomplete {
    fn name(&self) -> &str {
        "incomplete"
    }
    // error[E0046]: missing `work` in implementation
}
```

*/

use crate::{
    action::ActionLog,
    dispatch::{self, COMMON_ACTION, default_work_action},
    error::Result,
};

/// The capability set of this strategy, with the shared behavior as provided methods.
pub trait Alpha {
    fn name(&self) -> &str;

    /// The overridable operation.
    fn work(&self, log: &mut ActionLog);

    /// The fixed operation. Calls `work` on `this`, which should be the most-derived value.
    fn common(&self, this: &dyn Alpha, log: &mut ActionLog) {
        log.record(COMMON_ACTION);
        this.work(log);
    }
}

/// Calls `entity.common(entity)`, so `work` always dispatches to the outermost value.
pub fn call_common(entity: &dyn Alpha, log: &mut ActionLog) {
    entity.common(entity, log);
}

/// The base. Standalone, its `work` is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaBase {
    name: String,
}

impl AlphaBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Alpha for AlphaBase {
    fn name(&self) -> &str {
        &self.name
    }

    fn work(&self, log: &mut ActionLog) {
        log.record(default_work_action(&self.name));
    }
}

/// The derived type, overriding `work` and forwarding everything else to its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beta {
    alpha: AlphaBase,
}

crate::embed_base!(Beta { alpha: AlphaBase });

impl Beta {
    pub fn new(alpha: AlphaBase) -> Self {
        Self { alpha }
    }
}

impl Alpha for Beta {
    fn name(&self) -> &str {
        self.alpha.name()
    }

    fn work(&self, log: &mut ActionLog) {
        log.record("work called");
        log.record(format!("Name is {}", self.name()));
    }

    fn common(&self, this: &dyn Alpha, log: &mut ActionLog) {
        self.alpha.common(this, log);
    }
}

impl dispatch::Dispatchable for AlphaBase {
    fn identity(&self) -> &str {
        Alpha::name(self)
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        Alpha::work(self, log);
        Ok(())
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        call_common(self, log);
        Ok(())
    }
}

impl dispatch::Dispatchable for Beta {
    fn identity(&self) -> &str {
        Alpha::name(self)
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        Alpha::work(self, log);
        Ok(())
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        call_common(self, log);
        Ok(())
    }
}
