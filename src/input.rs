//! Interactive prompting with strict validation.
//!
//! Every prompt loops until it gets an acceptable answer. The only way out of a
//! loop without a value is the input stream closing.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::model::{MAX_INPUT, MAX_NAME_LEN, Product, ResourceBudget, check_name};

/// Parses a line holding exactly one integer.
///
/// Leading whitespace is allowed; anything after the number, trailing spaces
/// included, rejects the line. Values that do not fit an `i32` are rejected too.
pub fn read_int_strict(line: &str) -> Option<i64> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    let token = line.trim_start();
    token.parse::<i32>().ok().map(i64::from)
}

/// Reads answers from `reader` and writes prompts and complaints to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(PlanError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other bad line.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "Error: {message}")?;
        Ok(())
    }

    /// Asks until the answer is a single integer in `[0, MAX_INPUT]`.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let line = self.ask(prompt)?;
            let Some(value) = read_int_strict(&line) else {
                self.complain("enter a single integer with no other characters.")?;
                continue;
            };
            if !(0..=i64::from(MAX_INPUT)).contains(&value) {
                self.complain(&format!("the number must be between 0 and {MAX_INPUT}."))?;
                continue;
            }
            return Ok(value as u32);
        }
    }

    /// Asks until the answer is 1 or 2.
    pub fn prompt_product_count(&mut self) -> Result<usize> {
        loop {
            let line = self.ask("Number of product types (1 or 2): ")?;
            match read_int_strict(&line) {
                Some(count @ (1 | 2)) => return Ok(count as usize),
                Some(_) => self.complain("allowed values are 1 or 2.")?,
                None => self.complain("enter a single integer with no other characters.")?,
            }
        }
    }

    /// Asks until the name is between 1 and `MAX_NAME_LEN` characters.
    pub fn prompt_product_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.ask(prompt)?;
            let name = line.trim_end_matches(['\r', '\n']);
            if check_name(name).is_err() {
                self.complain(&format!(
                    "the name must be 1 to {MAX_NAME_LEN} characters long."
                ))?;
                continue;
            }
            return Ok(name.to_string());
        }
    }

    /// Reads the available material and labor.
    pub fn prompt_budget(&mut self) -> Result<ResourceBudget> {
        writeln!(self.writer, "\nEnter the available resources:")?;
        let material = self.prompt_int("  Total raw material (kg): ")?;
        let labor = self.prompt_int("  Total working time (hours): ")?;
        Ok(ResourceBudget::new(material, labor))
    }

    /// Reads one product. Rates are asked again while both are zero or while
    /// either exceeds what the budget holds.
    pub fn prompt_product(&mut self, budget: &ResourceBudget, index: usize) -> Result<Product> {
        writeln!(self.writer, "\n=== Product {index} ===")?;
        let name = self.prompt_product_name("Product name: ")?;

        let product = loop {
            writeln!(self.writer, "\nResource usage per unit of '{name}':")?;
            let material = self.prompt_int("  Raw material (kg): ")?;
            let labor = self.prompt_int("  Working time (hours): ")?;

            let candidate = match Product::new(name.clone(), material, labor, 0) {
                Ok(product) => product,
                Err(_) => {
                    self.complain("both usages cannot be zero.")?;
                    continue;
                }
            };
            match candidate.check_fits(budget) {
                Ok(()) => break candidate,
                Err(PlanError::RateExceedsBudget {
                    resource,
                    rate,
                    available,
                    ..
                }) => {
                    self.complain(&format!(
                        "{resource} usage ({rate}) exceeds the available amount ({available})."
                    ))?;
                }
                Err(e) => return Err(e),
            }
        };

        let price = self.prompt_int("Unit price: ")?;
        debug!(name = %product.name, material = product.material, labor = product.labor, price, "product entered");
        Ok(Product { price, ..product })
    }
}
