//! Products, budgets and the shape of an optimization result.

use crate::error::{PlanError, Result};

/// Largest value accepted for any rate, price or budget.
///
/// Keeps the product of any two inputs inside the signed 32-bit range.
pub const MAX_INPUT: u32 = 46340;

/// Longest accepted product name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// A producible good and what one unit of it costs and earns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// Raw material consumed per unit.
    pub material: u32,
    /// Labor-hours consumed per unit.
    pub labor: u32,
    /// Revenue per unit sold.
    pub price: u32,
}

impl Product {
    /// Creates a product, rejecting one that consumes nothing.
    pub fn new(name: impl Into<String>, material: u32, labor: u32, price: u32) -> Result<Self> {
        let name = name.into();
        if material == 0 && labor == 0 {
            return Err(PlanError::IdleProduct(name));
        }
        Ok(Self {
            name,
            material,
            labor,
            price,
        })
    }

    /// Checks that no single unit needs more of a resource than the budget holds.
    pub fn check_fits(&self, budget: &ResourceBudget) -> Result<()> {
        if self.material > budget.material {
            return Err(PlanError::RateExceedsBudget {
                product: self.name.clone(),
                resource: "material",
                rate: self.material,
                available: budget.material,
            });
        }
        if self.labor > budget.labor {
            return Err(PlanError::RateExceedsBudget {
                product: self.name.clone(),
                resource: "labor",
                rate: self.labor,
                available: budget.labor,
            });
        }
        Ok(())
    }
}

/// Total material and labor available for the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceBudget {
    pub material: u32,
    pub labor: u32,
}

impl ResourceBudget {
    pub fn new(material: u32, labor: u32) -> Self {
        Self { material, labor }
    }

    pub fn is_empty(&self) -> bool {
        self.material == 0 && self.labor == 0
    }
}

/// The one or two product types a plan is made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductMix {
    Single(Product),
    Pair(Product, Product),
}

impl ProductMix {
    pub fn products(&self) -> Vec<&Product> {
        match self {
            ProductMix::Single(p) => vec![p],
            ProductMix::Pair(p1, p2) => vec![p1, p2],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ProductMix::Single(_) => 1,
            ProductMix::Pair(..) => 2,
        }
    }

    /// Always false; a mix holds at least one product.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Product>> for ProductMix {
    type Error = PlanError;

    fn try_from(products: Vec<Product>) -> Result<Self> {
        let count = products.len();
        let mut iter = products.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(p), None, None) => Ok(ProductMix::Single(p)),
            (Some(p1), Some(p2), None) => Ok(ProductMix::Pair(p1, p2)),
            _ => Err(PlanError::ProductCount(count)),
        }
    }
}

/// Resources consumed by one combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceUsage {
    pub material: u64,
    pub labor: u64,
}

/// Production quantities, one per product in mix order, with the usage they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub quantities: Vec<u32>,
    pub usage: ResourceUsage,
}

impl Combination {
    /// Builds a combination and derives its usage from the product rates.
    pub fn new(products: &[&Product], quantities: Vec<u32>) -> Self {
        debug_assert_eq!(products.len(), quantities.len());
        let usage = products
            .iter()
            .zip(&quantities)
            .fold(ResourceUsage::default(), |acc, (p, &q)| ResourceUsage {
                material: acc.material + u64::from(q) * u64::from(p.material),
                labor: acc.labor + u64::from(q) * u64::from(p.labor),
            });
        Self { quantities, usage }
    }
}

/// Best revenue and every combination reaching it, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptimizationResult {
    pub best_revenue: u64,
    pub combinations: Vec<Combination>,
}

/// Converts a raw input value to `u32`, enforcing `[0, MAX_INPUT]`.
pub fn check_range(field: &'static str, value: i64) -> Result<u32> {
    if (0..=i64::from(MAX_INPUT)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(PlanError::ValueOutOfRange {
            field,
            value,
            max: MAX_INPUT,
        })
    }
}

/// Enforces a non-empty name of at most `MAX_NAME_LEN` characters.
pub fn check_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(PlanError::NameLength {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_product_is_rejected() {
        let err = Product::new("air", 0, 0, 10).unwrap_err();
        assert!(matches!(err, PlanError::IdleProduct(name) if name == "air"));
        assert!(Product::new("hours", 0, 1, 10).is_ok());
    }

    #[test]
    fn mix_requires_one_or_two_products() {
        let p = Product::new("a", 1, 1, 1).unwrap();
        assert!(matches!(
            ProductMix::try_from(Vec::<Product>::new()),
            Err(PlanError::ProductCount(0))
        ));
        assert_eq!(ProductMix::try_from(vec![p.clone()]).unwrap().len(), 1);
        assert_eq!(
            ProductMix::try_from(vec![p.clone(), p.clone()]).unwrap().len(),
            2
        );
        assert!(matches!(
            ProductMix::try_from(vec![p.clone(), p.clone(), p]),
            Err(PlanError::ProductCount(3))
        ));
    }

    #[test]
    fn combination_usage_is_dot_product() {
        let p1 = Product::new("a", 2, 3, 1).unwrap();
        let p2 = Product::new("b", 5, 0, 1).unwrap();
        let c = Combination::new(&[&p1, &p2], vec![4, 7]);
        assert_eq!(c.usage.material, 4 * 2 + 7 * 5);
        assert_eq!(c.usage.labor, 12);
    }

    #[test]
    fn rate_above_budget_is_rejected() {
        let budget = ResourceBudget::new(10, 3);
        let p = Product::new("a", 2, 4, 1).unwrap();
        assert!(matches!(
            p.check_fits(&budget),
            Err(PlanError::RateExceedsBudget { resource: "labor", rate: 4, available: 3, .. })
        ));
        assert!(Product::new("b", 10, 3, 1).unwrap().check_fits(&budget).is_ok());
    }

    #[test]
    fn range_and_name_limits() {
        assert_eq!(check_range("price", 46340).unwrap(), MAX_INPUT);
        assert!(check_range("price", 46341).is_err());
        assert!(check_range("price", -1).is_err());
        assert!(check_name("").is_err());
        assert!(check_name(&"x".repeat(50)).is_ok());
        assert!(check_name(&"x".repeat(51)).is_err());
        // Characters, not bytes.
        assert!(check_name(&"ж".repeat(50)).is_ok());
    }
}
