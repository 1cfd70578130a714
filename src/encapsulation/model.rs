/*!

# The Defining Module

Everything here is visible inside this module. Outside, only the `pub` items are: the
[`Person`] type and its `name` field, [`Person::new`], [`Person::get_age`], [`get_person`],
[`describe_company`], and [`COMPANY_NAME`]. The `age` field, `Person::get_name`, the `Company` type,
`company_name`, and `COMPANY_LOCATION` are private.

Each of these is rejected by the compiler when used from outside:

```rust,compile_fail
use dispatch_patterns::encapsulation::model::Person;
// error[E0451]: field `age` of struct `Person` is private
let p = Person { name: "test".into(), age: 21 };
```

```rust,compile_fail
use dispatch_patterns::encapsulation::model::Person;
let p = Person::new("test", 21);
// error[E0616]: field `age` of struct `Person` is private
let age = p.age;
```

```rust,compile_fail
use dispatch_patterns::encapsulation::model::Person;
let p = Person::new("test", 21);
// error[E0624]: method `get_name` is private
let name = p.get_name();
```

```rust,compile_fail
// error[E0603]: struct `Company` is private
use dispatch_patterns::encapsulation::model::Company;
```

```rust,compile_fail
// error[E0603]: function `company_name` is private
let name = dispatch_patterns::encapsulation::model::company_name();
```

```rust,compile_fail
// error[E0603]: static `COMPANY_LOCATION` is private
let location = dispatch_patterns::encapsulation::model::COMPANY_LOCATION;
```

*/

use crate::action::ActionLog;

pub static COMPANY_NAME: &str = "test";
static COMPANY_LOCATION: &str = "somecity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn get_age(&self) -> u32 {
        self.age
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
struct Company {
    location: &'static str,
}

/// Builds the sample person, recording what only this module can see.
pub fn get_person(log: &mut ActionLog) -> Person {
    let p = Person::new("test", 21);
    log.record("Model Package:");
    log.record(p.get_name());
    log.record(p.age.to_string());
    p
}

fn company_name() -> &'static str {
    COMPANY_NAME
}

fn company() -> Company {
    Company {
        location: COMPANY_LOCATION,
    }
}

/// Reports the company through the public surface; the `Company` itself never leaves.
pub fn describe_company(log: &mut ActionLog) {
    let company = company();
    log.record(format!("{} is located in {}", company_name(), company.location));
}
