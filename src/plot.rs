use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::info;

use crate::capacity::compute_max_count;
use crate::error::{PlanError, Result};
use crate::model::{OptimizationResult, Product, ProductMix, ResourceBudget};

/// Largest number of cells drawn along either axis.
pub const MAX_PLOT_CELLS: u32 = 256;

const CELL_SIZE: u32 = 9;
const BORDER_SIZE: u32 = 1;

/// Draw the feasible production region as a PNG grid.
///
/// Columns are counts of the first product, rows (bottom to top) counts of the
/// second. Each cell is a 9x9 square with 1px white borders: optimal combinations
/// are blue, other feasible cells are grey (darker earns more), infeasible cells
/// are left near-white. A single product is drawn as one row.
pub fn render_feasible_region(
    mix: &ProductMix,
    budget: &ResourceBudget,
    result: &OptimizationResult,
    path: impl AsRef<Path>,
) -> Result<()> {
    let products = mix.products();
    let capacity = |p: &Product| compute_max_count(budget.material, budget.labor, p.material, p.labor);

    let columns = capacity(products[0]) + 1;
    let rows = products.get(1).map_or(1, |p| capacity(*p) + 1);
    let cells = columns.max(rows);
    if cells > MAX_PLOT_CELLS {
        return Err(PlanError::PlotTooLarge {
            cells,
            limit: MAX_PLOT_CELLS,
        });
    }

    let width = columns * CELL_SIZE + (columns + 1) * BORDER_SIZE;
    let height = rows * CELL_SIZE + (rows + 1) * BORDER_SIZE;

    // Start from white; untouched pixels become the borders.
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([255, 255, 255]));

    let blue = Rgb([0, 100, 200]);
    let infeasible = Rgb([245, 245, 245]);
    let color_scale = 128.0;

    for row in 0..rows {
        for col in 0..columns {
            let quantities: Vec<u32> = if products.len() == 1 { vec![col] } else { vec![col, row] };
            let (material, labor, revenue) = products.iter().zip(&quantities).fold(
                (0u64, 0u64, 0u64),
                |(m, l, r), (p, &q)| {
                    let q = u64::from(q);
                    (
                        m + q * u64::from(p.material),
                        l + q * u64::from(p.labor),
                        r + q * u64::from(p.price),
                    )
                },
            );

            let feasible = material <= u64::from(budget.material) && labor <= u64::from(budget.labor);
            let optimal = result.combinations.iter().any(|c| c.quantities == quantities);

            let color = if optimal {
                blue
            } else if feasible {
                let ratio = if result.best_revenue == 0 {
                    0.0
                } else {
                    revenue as f32 / result.best_revenue as f32
                };
                let grey = (240.0 - ratio.min(1.0) * color_scale) as u8;
                Rgb([grey, grey, grey])
            } else {
                infeasible
            };

            let start_x = BORDER_SIZE + col * (CELL_SIZE + BORDER_SIZE);
            // Row 0 sits at the bottom.
            let start_y = BORDER_SIZE + (rows - 1 - row) * (CELL_SIZE + BORDER_SIZE);
            for dy in 0..CELL_SIZE {
                for dx in 0..CELL_SIZE {
                    img.put_pixel(start_x + dx, start_y + dy, color);
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)?;
    info!(path = %path.display(), columns, rows, "feasible region saved");

    Ok(())
}
