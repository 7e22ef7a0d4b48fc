//! Exhaustive search for revenue-maximizing production quantities.

use tracing::{debug, trace};

use crate::capacity::compute_max_count;
use crate::model::{Combination, OptimizationResult, Product, ProductMix, ResourceBudget};

/// Finds the best revenue and every combination of quantities that reaches it.
///
/// With one product the quantity is fixed by its capacity, so exactly one
/// combination comes back. With two products the first product's count is swept
/// from zero to its capacity and the second is set to whatever the leftover
/// resources allow. Taking the most of the second product is exact: prices are
/// non-negative and unused capacity earns nothing, so for a fixed first count no
/// smaller second count can earn more. The sweep therefore covers the whole
/// feasible region in `O(max_count)` steps.
///
/// Ties are kept only at a strictly positive revenue. A pair whose best revenue
/// is zero returns no combination at all.
pub fn find_optimal_combinations(mix: &ProductMix, budget: &ResourceBudget) -> OptimizationResult {
    match mix {
        ProductMix::Single(product) => single(product, budget),
        ProductMix::Pair(first, second) => pair(first, second, budget),
    }
}

fn single(product: &Product, budget: &ResourceBudget) -> OptimizationResult {
    let count = compute_max_count(budget.material, budget.labor, product.material, product.labor);
    debug!(product = %product.name, count, "single product capacity");

    OptimizationResult {
        best_revenue: u64::from(count) * u64::from(product.price),
        combinations: vec![Combination::new(&[product], vec![count])],
    }
}

fn pair(first: &Product, second: &Product, budget: &ResourceBudget) -> OptimizationResult {
    let max_first = compute_max_count(budget.material, budget.labor, first.material, first.labor);
    debug!(first = %first.name, max_first, "sweeping first product count");

    let mut result = OptimizationResult::default();
    for count_first in 0..=max_first {
        // Non-negative because count_first never exceeds the first product's capacity.
        let remaining_material = budget.material - count_first * first.material;
        let remaining_labor = budget.labor - count_first * first.labor;
        let count_second =
            compute_max_count(remaining_material, remaining_labor, second.material, second.labor);

        let revenue = u64::from(count_first) * u64::from(first.price)
            + u64::from(count_second) * u64::from(second.price);

        if revenue > result.best_revenue {
            trace!(count_first, count_second, revenue, "new best");
            result.best_revenue = revenue;
            result.combinations.clear();
        } else if revenue == result.best_revenue && revenue > 0 {
            trace!(count_first, count_second, revenue, "tie");
        } else {
            continue;
        }
        result
            .combinations
            .push(Combination::new(&[first, second], vec![count_first, count_second]));
    }

    debug!(
        best_revenue = result.best_revenue,
        optimal = result.combinations.len(),
        "sweep finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceUsage;

    fn product(name: &str, material: u32, labor: u32, price: u32) -> Product {
        Product::new(name, material, labor, price).unwrap()
    }

    fn pair_mix(a: Product, b: Product) -> ProductMix {
        ProductMix::Pair(a, b)
    }

    #[test]
    fn single_product_uses_its_capacity() {
        let mix = ProductMix::Single(product("bolt", 2, 0, 5));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(10, 0));

        assert_eq!(result.best_revenue, 25);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].quantities, vec![5]);
        assert_eq!(
            result.combinations[0].usage,
            ResourceUsage { material: 10, labor: 0 }
        );
    }

    #[test]
    fn single_product_at_zero_revenue_still_reports_its_count() {
        let mix = ProductMix::Single(product("free", 1, 1, 0));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(4, 6));
        assert_eq!(result.best_revenue, 0);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].quantities, vec![4]);
    }

    #[test]
    fn two_products_without_ties() {
        let mix = pair_mix(product("p1", 1, 0, 1), product("p2", 0, 1, 2));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(3, 3));

        assert_eq!(result.best_revenue, 9);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].quantities, vec![3, 3]);
        assert_eq!(
            result.combinations[0].usage,
            ResourceUsage { material: 3, labor: 3 }
        );
    }

    #[test]
    fn equal_price_ratios_produce_ties() {
        // Both earn 1 per unit of material, labor is plentiful.
        let mix = pair_mix(product("a", 2, 1, 2), product("b", 1, 1, 1));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(4, 100));

        assert_eq!(result.best_revenue, 4);
        let quantities: Vec<_> = result
            .combinations
            .iter()
            .map(|c| c.quantities.clone())
            .collect();
        assert_eq!(quantities, vec![vec![0, 4], vec![1, 2], vec![2, 0]]);

        let usages: Vec<_> = result.combinations.iter().map(|c| c.usage).collect();
        assert_eq!(
            usages,
            vec![
                ResourceUsage { material: 4, labor: 4 },
                ResourceUsage { material: 4, labor: 3 },
                ResourceUsage { material: 4, labor: 2 },
            ]
        );
    }

    #[test]
    fn factory_example_has_unique_optimum() {
        // A: 40 per unit, 1 material, 2 labor. B: 30 per unit, 2 material, 1 labor.
        let mix = pair_mix(product("A", 1, 2, 40), product("B", 2, 1, 30));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(80, 100));

        assert_eq!(result.best_revenue, 2200);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].quantities, vec![40, 20]);
    }

    #[test]
    fn zero_budget_gives_zero_revenue() {
        let budget = ResourceBudget::new(0, 0);
        let single = find_optimal_combinations(&ProductMix::Single(product("a", 1, 1, 9)), &budget);
        assert_eq!(single.best_revenue, 0);
        assert_eq!(single.combinations[0].quantities, vec![0]);

        let mix = pair_mix(product("a", 1, 1, 9), product("b", 0, 2, 3));
        let pair = find_optimal_combinations(&mix, &budget);
        assert_eq!(pair.best_revenue, 0);
        assert!(pair.combinations.is_empty());
    }

    #[test]
    fn zero_revenue_ties_are_not_recorded() {
        let mix = pair_mix(product("a", 1, 0, 0), product("b", 0, 1, 0));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(5, 5));
        assert_eq!(result.best_revenue, 0);
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn later_better_revenue_replaces_earlier_ties() {
        // First counts 0 and 1 both earn 1, first count 2 earns 2.
        let mix = pair_mix(product("a", 1, 0, 1), product("b", 2, 0, 1));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(2, 0));
        assert_eq!(result.best_revenue, 2);
        assert_eq!(result.combinations.len(), 1);
        assert_eq!(result.combinations[0].quantities, vec![2, 0]);
    }

    #[test]
    fn matches_full_grid_search() {
        let cases = [
            (product("a", 3, 1, 7), product("b", 1, 2, 4), ResourceBudget::new(30, 25)),
            (product("a", 2, 2, 5), product("b", 1, 1, 2), ResourceBudget::new(17, 40)),
            (product("a", 0, 3, 4), product("b", 5, 0, 6), ResourceBudget::new(21, 22)),
            (product("a", 4, 1, 0), product("b", 1, 3, 3), ResourceBudget::new(12, 12)),
        ];
        for (a, b, budget) in cases {
            let mut best = 0u64;
            for x in 0..=50u32 {
                for y in 0..=50u32 {
                    let material = x * a.material + y * b.material;
                    let labor = x * a.labor + y * b.labor;
                    if material <= budget.material && labor <= budget.labor {
                        best = best.max(u64::from(x * a.price + y * b.price));
                    }
                }
            }
            let mix = pair_mix(a, b);
            let result = find_optimal_combinations(&mix, &budget);
            assert_eq!(result.best_revenue, best);

            let max_first = match &mix {
                ProductMix::Pair(a, _) => {
                    compute_max_count(budget.material, budget.labor, a.material, a.labor)
                }
                ProductMix::Single(_) => unreachable!(),
            };
            assert!(result.combinations.len() <= max_first as usize + 1);
            for c in &result.combinations {
                assert!(c.usage.material <= u64::from(budget.material));
                assert!(c.usage.labor <= u64::from(budget.labor));
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mix = pair_mix(product("a", 2, 1, 2), product("b", 1, 1, 1));
        let budget = ResourceBudget::new(40, 30);
        assert_eq!(
            find_optimal_combinations(&mix, &budget),
            find_optimal_combinations(&mix, &budget)
        );
    }

    #[test]
    fn largest_inputs_do_not_overflow() {
        let mix = pair_mix(product("a", 1, 1, 46340), product("b", 1, 0, 46340));
        let result = find_optimal_combinations(&mix, &ResourceBudget::new(46340, 46340));
        assert_eq!(result.best_revenue, 46340 * 46340);
    }
}
