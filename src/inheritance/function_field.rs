/*!

# Routing a Self-Call Through an Injected Function

The fix for [shadowing](super::shadowing): instead of calling a method on itself, the
base's `say` calls a function stored in one of its fields. Whoever builds the base decides
what `clear` does, so a child can supply its own behavior at construction time. This is the
same idea as a [callback slot](crate::dispatch::callback_slot), minus the default and the
rebinding.

*/

use std::fmt::{Debug, Formatter};

use crate::{action::ActionLog, inheritance::shadowing::Say};

pub type ClearFn = Box<dyn Fn(&mut ActionLog)>;

pub struct Base {
    color: String,
    clear: ClearFn,
}

impl Base {
    pub fn new<F>(color: impl Into<String>, clear: F) -> Self
    where
        F: Fn(&mut ActionLog) + 'static,
    {
        Self {
            color: color.into(),
            clear: Box::new(clear),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Debug for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Base")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Say for Base {
    fn say(&self, log: &mut ActionLog) {
        (self.clear)(log);
    }
}

#[derive(Debug)]
pub struct Child {
    base: Base,
    style: String,
}

crate::embed_base!(Child { base: Base });

impl Child {
    /// Builds the base with the child's own `clear` injected.
    pub fn new(color: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            base: Base::new(color, Self::clear),
            style: style.into(),
        }
    }

    pub fn clear(log: &mut ActionLog) {
        log.record("Clear from child's function");
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}

impl Say for Child {
    fn say(&self, log: &mut ActionLog) {
        self.base.say(log);
    }
}
