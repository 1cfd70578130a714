/*!

# Composition With Explicit Forwarding

[`Child`] owns a [`Base`]. Calling `say` on the child works only because the child forwards
it, and reading the base's `color` goes through an explicit accessor.

A function that takes a `&Base` does not accept a `&Child`. There is no subtyping between
them, so the caller has to hand over the embedded base itself:

```rust,compile_fail
use dispatch_patterns::{
    action::ActionLog,
    inheritance::embedding::{Base, Child, check},
};

let child = Child::new(Base::new("Red"), "somestyle");
let mut log = ActionLog::new();
check(&child, &mut log); // expected `&Base`, found `&Child`
```

```rust
# use dispatch_patterns::{
#     action::ActionLog,
#     inheritance::embedding::{Base, Child, check},
# };
let child = Child::new(Base::new("Red"), "somestyle");
let mut log = ActionLog::new();
check(child.base(), &mut log);
assert_eq!(log.actions(), ["Hi from say function"]);
```

*/

use crate::action::ActionLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    color: String,
}

impl Base {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn say(&self, log: &mut ActionLog) {
        log.record("Hi from say function");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    base: Base,
    style: String,
}

crate::embed_base!(Child { base: Base });

impl Child {
    pub fn new(base: Base, style: impl Into<String>) -> Self {
        Self {
            base,
            style: style.into(),
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// The base's field, reached by explicit delegation.
    pub fn color(&self) -> &str {
        self.base.color()
    }

    pub fn say(&self, log: &mut ActionLog) {
        self.base.say(log);
    }

    /// Records `say` followed by the promoted color, as a single demonstration.
    pub fn describe(&self, log: &mut ActionLog) {
        self.say(log);
        log.record(format!("The color is {}", self.color()));
    }
}

/// Accepts only the base type.
pub fn check(base: &Base, log: &mut ActionLog) {
    base.say(log);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn child_forwards_to_base() {
        let child = Child::new(Base::new("Red"), "somestyle");
        let mut log = ActionLog::new();

        child.describe(&mut log);

        assert_eq!(
            log.actions(),
            ["Hi from say function", "The color is Red"]
        );
        assert_eq!(child.style(), "somestyle");
    }

    #[test]
    fn base_can_be_replaced_through_accessor() {
        let mut child = Child::new(Base::new("Red"), "somestyle");
        *child.base_mut() = Base::new("Blue");
        assert_eq!(child.color(), "Blue");
        assert_eq!(child.base().color(), "Blue");
    }

    #[test]
    fn check_takes_the_embedded_base() {
        let child = Child::new(Base::new("Red"), "somestyle");
        let mut log = ActionLog::new();

        child.say(&mut log);
        check(child.base(), &mut log);

        assert_eq!(
            log.actions(),
            ["Hi from say function", "Hi from say function"]
        );
    }
}
