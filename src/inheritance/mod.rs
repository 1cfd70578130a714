/*!

# Embedding Is Not Inheritance

Some languages let a struct _embed_ another one and then silently promote the embedded
value's fields and methods, so `child.say()` and `child.color` just work. It looks like
inheritance. It isn't: the embedded value never learns that it is embedded, and a function
that accepts the base type still rejects the outer one.

Rust has no promotion at all. You _could_ fake it with `Deref`, but that is widely
considered an anti-pattern: it is meant for smart pointers, it only promotes from a single
base, and it hides exactly the delegation a reader needs to see. Instead we model embedding
as what it really is, composition plus explicit forwarding:

- [`embedding`]: a child owning its base, forwarding `say` and exposing the base's field.
- [`shadowing`]: what happens when the child "overrides" a method the base calls on itself.
- [`function_field`]: the base's self-call routed through an injected function field.
- [`multi_capability`]: one child embedding two providers, each behind its own capability.

## `embed_base!`

Writing accessors for every embedded base is boilerplate, so [`embed_base!`](crate::embed_base)
generates them: for each `field: Type` it emits `fn field(&self) -> &Type` and
`fn field_mut(&mut self) -> &mut Type`. It deliberately does not implement `Deref` or forward
any methods; delegation stays visible at every call site.

```rust
use dispatch_patterns::embed_base;

pub struct Base {
    pub color: String,
}

pub struct Child {
    base: Base,
}

embed_base!(Child { base: Base });

let mut child = Child { base: Base { color: "Red".into() } };
child.base_mut().color.push_str("dish");
assert_eq!(child.base().color, "Reddish");
```

*/

pub mod embedding;
pub mod function_field;
pub mod multi_capability;
pub mod shadowing;

/// Generates explicit accessors for the embedded bases of a struct. Must be invoked in the
/// module that defines the struct, since it reads the (usually private) fields directly.
#[macro_export]
macro_rules! embed_base {
    ($derived:ident { $($field:ident : $base:ty),+ $(,)? }) => {
        $crate::paste::paste! {
            impl $derived {
                $(
                    #[doc = "Shared access to the embedded `" $field "`."]
                    #[allow(dead_code)]
                    pub fn $field(&self) -> &$base {
                        &self.$field
                    }

                    #[doc = "Exclusive access to the embedded `" $field "`."]
                    #[allow(dead_code)]
                    pub fn [<$field _mut>](&mut self) -> &mut $base {
                        &mut self.$field
                    }
                )+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    struct First(u8);
    struct Second(&'static str);

    struct Both {
        first: First,
        second: Second,
    }

    crate::embed_base!(Both { first: First, second: Second });

    #[test]
    fn generates_accessors_for_every_base() {
        let mut both = Both {
            first: First(1),
            second: Second("two"),
        };

        both.first_mut().0 += 1;
        both.second_mut().0 = "three";

        assert_eq!(both.first().0, 2);
        assert_eq!(both.second().0, "three");
    }
}
