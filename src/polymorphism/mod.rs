/*!

# Runtime and Compile-Time Polymorphism

## Runtime: a Collection Typed Only by a Capability

[`calculate_total_tax`] accepts a slice of `&dyn TaxSystem` and sums `calculate_tax` over
it. It knows nothing about [`IndianTax`], [`SingaporeTax`], or [`UsaTax`]; each element
dispatches through its own vtable. The sum is taken in input order, and [`tax_breakdown`]
exposes the per-element amounts in that same order.

The three tax types happen to share a formula. They are still separate types, because
the point is that the aggregation does not care.

## Compile Time: Variadic Arguments

A function "overloaded" on its argument count is expressed in Rust by taking a slice:
[`Maths::add`] accepts any number of integers.

*/

use log::trace;

/// The capability "can calculate an amount of tax".
pub trait TaxSystem {
    fn calculate_tax(&self) -> i64;
}

fn percentage_of(income: i64, tax_percentage: i64) -> i64 {
    income * tax_percentage / 100
}

macro_rules! tax_system {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Copy, Clone, PartialEq, Eq)]
            pub struct $name {
                pub tax_percentage: i64,
                pub income: i64,
            }

            impl $name {
                pub fn new(tax_percentage: i64, income: i64) -> Self {
                    Self { tax_percentage, income }
                }
            }

            impl TaxSystem for $name {
                fn calculate_tax(&self) -> i64 {
                    percentage_of(self.income, self.tax_percentage)
                }
            }
        )+
    };
}

tax_system!(IndianTax, SingaporeTax, UsaTax);

/// The amount each element contributes, in input order.
pub fn tax_breakdown(tax_systems: &[&dyn TaxSystem]) -> Vec<i64> {
    tax_systems.iter().map(|t| t.calculate_tax()).collect()
}

/// Sums the tax of every element, in input order.
pub fn calculate_total_tax(tax_systems: &[&dyn TaxSystem]) -> i64 {
    let mut total_tax = 0;
    for (position, tax_system) in tax_systems.iter().enumerate() {
        let tax = tax_system.calculate_tax();
        trace!("tax system {position} contributes {tax}");
        total_tax += tax;
    }
    total_tax
}

/// Same as [`calculate_total_tax`] for owned, boxed tax systems.
pub fn calculate_total_boxed_tax(tax_systems: &[Box<dyn TaxSystem>]) -> i64 {
    let borrowed: Vec<&dyn TaxSystem> = tax_systems.iter().map(|t| t.as_ref()).collect();
    calculate_total_tax(&borrowed)
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Maths;

impl Maths {
    pub fn add(&self, numbers: &[i64]) -> i64 {
        numbers.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tax_systems() -> (IndianTax, SingaporeTax, UsaTax) {
        (
            IndianTax::new(30, 1000),
            SingaporeTax::new(10, 2000),
            UsaTax::new(40, 500),
        )
    }

    #[test]
    fn total_tax_over_mixed_collection() {
        let (indian, singapore, usa) = tax_systems();
        let all: [&dyn TaxSystem; 3] = [&indian, &singapore, &usa];

        assert_eq!(tax_breakdown(&all), [300, 200, 200]);
        assert_eq!(calculate_total_tax(&all), 700);
    }

    #[test]
    fn breakdown_follows_input_order() {
        let (indian, singapore, usa) = tax_systems();
        let reversed: [&dyn TaxSystem; 3] = [&usa, &singapore, &indian];

        assert_eq!(tax_breakdown(&reversed), [200, 200, 300]);
        assert_eq!(calculate_total_tax(&reversed), 700);
    }

    #[test]
    fn boxed_collection() {
        let (indian, singapore, usa) = tax_systems();
        let all: Vec<Box<dyn TaxSystem>> =
            vec![Box::new(indian), Box::new(singapore), Box::new(usa)];

        assert_eq!(calculate_total_boxed_tax(&all), 700);
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(calculate_total_tax(&[]), 0);
    }

    #[test]
    fn tax_truncates() {
        assert_eq!(UsaTax::new(33, 10).calculate_tax(), 3);
    }

    #[test]
    fn variadic_add() {
        let m = Maths;
        assert_eq!(m.add(&[2, 3]), 5);
        assert_eq!(m.add(&[2, 3, 4]), 9);
        assert_eq!(m.add(&[]), 0);
    }
}
