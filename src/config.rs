//! Scenario files for running a plan without prompting.
//!
//! ```yaml
//! budget: { material: 100, labor: 80 }
//! products:
//!   - { name: A, material: 1, labor: 2, price: 40 }
//!   - { name: B, material: 2, labor: 1, price: 30 }
//! plot: region.png
//! cross_check: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::model::{Product, ProductMix, ResourceBudget, check_name, check_range};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSpec {
    pub material: i64,
    pub labor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub material: i64,
    pub labor: i64,
    pub price: i64,
}

/// A planning scenario as written on disk.
///
/// Numbers are kept signed so out-of-range values are reported by field rather
/// than as a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub budget: BudgetSpec,
    pub products: Vec<ProductSpec>,

    /// Where to write the feasible region PNG, if anywhere.
    #[serde(default)]
    pub plot: Option<PathBuf>,

    /// Re-solve with SCIP and compare revenues.
    #[serde(default)]
    pub cross_check: bool,
}

impl ScenarioFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scenario = Self::from_yaml(&contents)?;
        info!(path = %path.display(), products = scenario.products.len(), "loaded scenario");
        Ok(scenario)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn budget(&self) -> Result<ResourceBudget> {
        Ok(ResourceBudget::new(
            check_range("budget.material", self.budget.material)?,
            check_range("budget.labor", self.budget.labor)?,
        ))
    }

    /// Validates the scenario with the same rules the interactive prompts apply.
    pub fn to_plan(&self) -> Result<(ProductMix, ResourceBudget)> {
        let budget = self.budget()?;

        let products = self
            .products
            .iter()
            .map(|spec| -> Result<Product> {
                check_name(&spec.name)?;
                let product = Product::new(
                    spec.name.clone(),
                    check_range("product.material", spec.material)?,
                    check_range("product.labor", spec.labor)?,
                    check_range("product.price", spec.price)?,
                )?;
                product.check_fits(&budget)?;
                Ok(product)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((ProductMix::try_from(products)?, budget))
    }
}
