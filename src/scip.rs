//! The same production problem stated as an integer program and handed to SCIP.
//!
//! Used to cross-check the exhaustive search: both must agree on the best revenue,
//! though SCIP reports just one of possibly several optimal combinations.

use anyhow::Result;
use russcip::prelude::*;
use tracing::{debug, warn};

use crate::capacity::compute_max_count;
use crate::model::{OptimizationResult, ProductMix, ResourceBudget};

/// One optimal plan as found by SCIP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScipSolution {
    pub revenue: u64,
    pub quantities: Vec<u32>,
}

pub fn solve_with_scip(mix: &ProductMix, budget: &ResourceBudget) -> Result<ScipSolution> {
    let products = mix.products();

    let mut model = Model::new()
        .hide_output()
        .include_default_plugins()
        .create_prob("production_planning")
        .set_obj_sense(ObjSense::Maximize);

    // quantity[i] is how many units of product i are produced
    let quantities: Vec<_> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let upper = compute_max_count(budget.material, budget.labor, p.material, p.labor);
            model.add_var(
                0.,
                f64::from(upper),
                f64::from(p.price),
                &format!("quantity_{i}"),
                VarType::Integer,
            )
        })
        .collect();

    let material: Vec<f64> = products.iter().map(|p| f64::from(p.material)).collect();
    model.add_cons(
        quantities.iter().collect(),
        &material,
        -f64::INFINITY,
        f64::from(budget.material),
        "material_constraint",
    );

    let labor: Vec<f64> = products.iter().map(|p| f64::from(p.labor)).collect();
    model.add_cons(
        quantities.iter().collect(),
        &labor,
        -f64::INFINITY,
        f64::from(budget.labor),
        "labor_constraint",
    );

    let solved_model = model.solve();
    if solved_model.status() != Status::Optimal {
        anyhow::bail!("Solver finished with status: {:?}", solved_model.status());
    }

    let Some(sol) = solved_model.best_sol() else {
        anyhow::bail!("Solver reported optimal but returned no solution");
    };

    let solution = ScipSolution {
        revenue: solved_model.obj_val().round() as u64,
        quantities: quantities
            .iter()
            .map(|q| sol.val(q).round() as u32)
            .collect(),
    };
    debug!(revenue = solution.revenue, quantities = ?solution.quantities, "scip solved");
    Ok(solution)
}

/// Whether SCIP and the exhaustive search agree on the best revenue.
pub fn cross_check(result: &OptimizationResult, solution: &ScipSolution) -> bool {
    let agrees = result.best_revenue == solution.revenue;
    if !agrees {
        warn!(
            search = result.best_revenue,
            scip = solution.revenue,
            "best revenue disagrees with SCIP"
        );
    }
    agrees
}
