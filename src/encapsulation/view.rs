//! A consumer of [`model`](super::model) that stays within its public surface.

use crate::{action::ActionLog, encapsulation::model};

/// Exercises every public item of the model, in the order a reader would discover them.
pub fn test(log: &mut ActionLog) -> model::Person {
    // Public constructor, since `age` cannot be set from here.
    let p = model::Person::new("test", 21);
    log.record(format!("{p:?}"));

    log.record(p.get_age().to_string());
    log.record(p.name.clone());

    let person = model::get_person(log);
    log.record(format!("{person:?}"));

    model::describe_company(log);
    log.record(model::COMPANY_NAME);
    person
}
