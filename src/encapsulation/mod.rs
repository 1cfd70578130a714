/*!

# Encapsulation With Module Boundaries

Where some languages decide visibility by the case of an identifier's first letter, Rust
uses explicit modifiers. Items and fields are private to their module (and its descendants)
unless marked `pub`. There is no behavioral difference, only an access-control mapping.

- [`model`] defines a mix of public and private items and uses all of them freely.
- [`view`] sits outside `model` and can only reach its public surface.

The interesting part is what `view` _cannot_ do: construct a `Person` with its private
`age`, read `age`, call `get_name`, or name the private `Company`. Rather than carrying that
code around in a form that doesn't compile, each violation is a `compile_fail` doctest in
[`model`], so the compiler's rejection is itself checked.

*/

pub mod model;
pub mod view;
