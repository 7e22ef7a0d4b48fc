/// Maximum whole units of a product that fit in the given budgets if it used them alone.
///
/// The binding constraint is whichever resource runs out first. A zero rate means
/// that resource never limits production.
///
/// # Panics
///
/// When both rates are zero. Callers build rates through [`crate::Product::new`],
/// which rejects that case.
pub fn compute_max_count(
    budget_material: u32,
    budget_labor: u32,
    rate_material: u32,
    rate_labor: u32,
) -> u32 {
    debug_assert!(
        rate_material > 0 || rate_labor > 0,
        "product consumes no resource"
    );
    match (rate_material, rate_labor) {
        (0, labor) => budget_labor / labor,
        (material, 0) => budget_material / material,
        (material, labor) => (budget_material / material).min(budget_labor / labor),
    }
}
