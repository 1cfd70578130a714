/*!

# Strategy 1: Direct Override, Explicit Delegation

The derived type [`Beta`] owns its base [`Alpha`] and implements the overridable `work`
itself. Where it wants the base's shared behavior it asks for it explicitly, via
`Worker::common(self.alpha(), log)`. The base's `common` never calls `work`, so there is nothing
to dispatch "back down" to the derived type and nothing that can be left unbound.

This is the plainest of the three strategies and the one Rust nudges you towards. Its
limitation is exactly the thing the other two strategies fix: the base cannot implement a
template method in terms of an operation the derived type supplies.

*/

use crate::{
    action::ActionLog,
    dispatch::{self, COMMON_ACTION, default_work_action},
    error::Result,
};

/// The capability set of this strategy. Both methods are infallible.
pub trait Worker {
    fn name(&self) -> &str;
    fn work(&self, log: &mut ActionLog);
    fn common(&self, log: &mut ActionLog);
}

/// The "abstract" base. Used standalone, its `work` is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alpha {
    name: String,
}

impl Alpha {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Worker for Alpha {
    fn name(&self) -> &str {
        &self.name
    }

    fn work(&self, log: &mut ActionLog) {
        log.record(default_work_action(&self.name));
    }

    fn common(&self, log: &mut ActionLog) {
        log.record(COMMON_ACTION);
    }
}

/// The derived type. It holds its base and forwards to it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beta {
    alpha: Alpha,
}

crate::embed_base!(Beta { alpha: Alpha });

impl Beta {
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }
}

impl Worker for Beta {
    fn name(&self) -> &str {
        self.alpha.name()
    }

    fn work(&self, log: &mut ActionLog) {
        log.record("work called");
        log.record(format!("name is {}", self.name()));
        Worker::common(self.alpha(), log);
    }

    fn common(&self, log: &mut ActionLog) {
        Worker::common(&self.alpha, log);
    }
}

impl dispatch::Dispatchable for Alpha {
    fn identity(&self) -> &str {
        Worker::name(self)
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        Worker::work(self, log);
        Ok(())
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        Worker::common(self, log);
        Ok(())
    }
}

impl dispatch::Dispatchable for Beta {
    fn identity(&self) -> &str {
        Worker::name(self)
    }

    fn work(&self, log: &mut ActionLog) -> Result<()> {
        Worker::work(self, log);
        Ok(())
    }

    fn common(&self, log: &mut ActionLog) -> Result<()> {
        Worker::common(self, log);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derived_work_calls_base_common() {
        let beta = Beta::new(Alpha::new("test"));
        let mut log = ActionLog::new();

        Worker::work(&beta, &mut log);

        assert_eq!(
            log.actions(),
            ["work called", "name is test", "common called"]
        );
    }

    #[test]
    fn common_never_reaches_work() {
        let beta = Beta::new(Alpha::new("test"));
        let mut log = ActionLog::new();

        Worker::common(&beta, &mut log);
        Worker::common(beta.alpha(), &mut log);

        assert_eq!(log.actions(), ["common called", "common called"]);
    }

    #[test]
    fn standalone_base_uses_default_work() {
        let alpha = Alpha::new("plain");
        let mut log = ActionLog::new();

        Worker::work(&alpha, &mut log);

        assert_eq!(log.actions(), ["default work for plain"]);
    }

    #[test]
    fn worker_handle_hides_concrete_type() {
        let workers: [&dyn Worker; 2] = [&Alpha::new("a"), &Beta::new(Alpha::new("b"))];
        let mut log = ActionLog::new();
        for worker in workers {
            worker.work(&mut log);
        }
        assert_eq!(
            log.actions(),
            [
                "default work for a",
                "work called",
                "name is b",
                "common called"
            ]
        );
    }
}
