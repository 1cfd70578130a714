/*!

# Shadowing Is Not Overriding

[`Base::say`] calls [`Base::clear`]. [`Child`] defines its own `clear` and forwards `say` to
its base. A reader used to virtual methods expects `child.say()` to reach the child's
`clear`. It doesn't: inside `Base::say`, `self` is a `&Base`, and a `&Base` has only one
`clear`. The child's method merely _shadows_ the base's when called on a `Child` directly.

To make the base's self-call reach the child, use one of the
[dispatch strategies](crate::dispatch), e.g. an injected
[function field](super::function_field).

*/

use crate::action::ActionLog;

/// The capability `{say}`.
pub trait Say {
    fn say(&self, log: &mut ActionLog);
}

/// Calls `say` through the capability handle.
pub fn check(speaker: &dyn Say, log: &mut ActionLog) {
    speaker.say(log);
}

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

    pub fn clear(&self, log: &mut ActionLog) {
        log.record("Clear from base's function");
    }
}

impl Say for Base {
    fn say(&self, log: &mut ActionLog) {
        self.clear(log);
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

    /// Shadows [`Base::clear`]. Only reachable when called on a `Child`.
    pub fn clear(&self, log: &mut ActionLog) {
        log.record("Clear from child's function");
    }
}

impl Say for Child {
    fn say(&self, log: &mut ActionLog) {
        self.base.say(log);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn forwarded_say_reaches_base_clear() {
        let child = Child::new(Base::new("Red"), "somestyle");
        let mut log = ActionLog::new();

        child.say(&mut log);
        check(&child, &mut log);

        assert_eq!(
            log.actions(),
            ["Clear from base's function", "Clear from base's function"]
        );
    }

    #[test]
    fn shadowing_method_is_reachable_directly() {
        let child = Child::new(Base::new("Red"), "somestyle");
        let mut log = ActionLog::new();

        child.clear(&mut log);
        child.base().clear(&mut log);

        assert_eq!(
            log.actions(),
            ["Clear from child's function", "Clear from base's function"]
        );
        assert_eq!(child.base().color(), "Red");
        assert_eq!(child.style(), "somestyle");
    }
}
