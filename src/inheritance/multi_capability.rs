/*!

# One Child, Two Capabilities

[`Child`] embeds two independent providers, a [`Speaker`] and a [`Walker`], and implements
[`Say`] and [`Walk`] by forwarding each capability to its own provider. Each capability is
independently callable through its own capability-typed handle ([`check_say`],
[`check_walk`]), and invoking one never touches the other provider.

The providers count their own invocations so that independence is observable.

*/

use std::cell::Cell;

use crate::{action::ActionLog, inheritance::shadowing::Say};

/// The capability `{walk}`.
pub trait Walk {
    fn walk(&self, log: &mut ActionLog);
}

pub fn check_say(speaker: &dyn Say, log: &mut ActionLog) {
    speaker.say(log);
}

pub fn check_walk(walker: &dyn Walk, log: &mut ActionLog) {
    walker.walk(log);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Speaker {
    color: String,
    said: Cell<usize>,
}

impl Speaker {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            said: Cell::new(0),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// How many times `say` has been invoked on this provider.
    pub fn said(&self) -> usize {
        self.said.get()
    }
}

impl Say for Speaker {
    fn say(&self, log: &mut ActionLog) {
        self.said.set(self.said.get() + 1);
        log.record("Hi from say function");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Walker {
    walked: Cell<usize>,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `walk` has been invoked on this provider.
    pub fn walked(&self) -> usize {
        self.walked.get()
    }
}

impl Walk for Walker {
    fn walk(&self, log: &mut ActionLog) {
        self.walked.set(self.walked.get() + 1);
        log.record("Hi from walk function");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    speaker: Speaker,
    walker: Walker,
    style: String,
}

crate::embed_base!(Child {
    speaker: Speaker,
    walker: Walker,
});

impl Child {
    pub fn new(speaker: Speaker, walker: Walker, style: impl Into<String>) -> Self {
        Self {
            speaker,
            walker,
            style: style.into(),
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}

impl Say for Child {
    fn say(&self, log: &mut ActionLog) {
        self.speaker.say(log);
    }
}

impl Walk for Child {
    fn walk(&self, log: &mut ActionLog) {
        self.walker.walk(log);
    }
}
