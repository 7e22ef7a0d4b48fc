//! Human-readable rendering of an optimization result.

use std::fmt;

use crate::model::{OptimizationResult, ProductMix, ResourceBudget};

/// Share of `total` taken by `used`, one decimal, e.g. `"62.5%"`.
pub fn format_percentage(used: u64, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", used as f64 / f64::from(total) * 100.0)
}

/// Guidance for budgets where only one resource is available.
pub fn budget_hints(budget: &ResourceBudget) -> Option<&'static str> {
    match (budget.material, budget.labor) {
        (0, labor) if labor > 0 => Some(
            "- Only working time is available: treat one unit of product as one standard hour.\n\
             - Enter the unit price as your rate for one hour of work.",
        ),
        (material, 0) if material > 0 => Some(
            "- Only raw material is available: treat one unit of product as a convenient batch (kg, quintal, tonne).\n\
             - Enter the unit price as the sale price of the whole batch.",
        ),
        _ => None,
    }
}

/// The result banner with every optimal combination and its resource utilisation.
pub struct Report<'a> {
    pub mix: &'a ProductMix,
    pub result: &'a OptimizationResult,
    pub budget: &'a ResourceBudget,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        let products = self.mix.products();
        let budget = self.budget;

        writeln!(f, "\n{rule}")?;
        writeln!(f, "PRODUCTION OPTIMIZATION RESULTS")?;
        writeln!(f, "{rule}\n")?;
        writeln!(f, "Best revenue: {}\n", self.result.best_revenue)?;

        if self.result.combinations.is_empty() {
            writeln!(f, "No combination earns a positive revenue.")?;
        } else {
            writeln!(f, "Optimal production combinations:")?;
        }

        for (i, combination) in self.result.combinations.iter().enumerate() {
            writeln!(f, "\nOption {}:", i + 1)?;
            for (product, quantity) in products.iter().zip(&combination.quantities) {
                writeln!(f, "  {}: {} units", product.name, quantity)?;
            }
            let usage = combination.usage;
            writeln!(f, "  Resource usage:")?;
            writeln!(
                f,
                "    Raw material: {} / {} kg ({})",
                usage.material,
                budget.material,
                format_percentage(usage.material, budget.material)
            )?;
            writeln!(
                f,
                "    Working time: {} / {} hours ({})",
                usage.labor,
                budget.labor,
                format_percentage(usage.labor, budget.labor)
            )?;
        }

        writeln!(f, "\n{rule}")
    }
}

pub fn render_report(mix: &ProductMix, result: &OptimizationResult, budget: &ResourceBudget) -> String {
    Report { mix, result, budget }.to_string()
}
