//! The fixed table of registered formulas.
//!
//! The table is a `static` built at compile time. It is read-only and shared
//! freely across threads.

use crate::{Error, Formula, FormulaId, definitions};

/// Registered formulas, indexed by `FormulaId as usize`.
static FORMULAS: [Formula; 9] = [
    Formula::new(FormulaId::F0, 2, "x[0] + sin(x[1]) / 5", definitions::f0),
    Formula::new(FormulaId::F1, 1, "sin(x[0])", definitions::f1),
    Formula::new(
        FormulaId::F2,
        3,
        "((x[0] + (x[1] + x[1])) * cos(sqrt(abs(x[0] + x[2]))) \
         + ((x[2] + x[1]) * (sin(x[0]) / (x[0] + 1e-20)) + (sin(x[0]) + x[0]) * 2)) * 700000",
        definitions::f2,
    ),
    Formula::new(
        FormulaId::F3,
        3,
        "((4 - x[2] * (7 / 2)) + x[0] * (x[0] + x[0])) + (x[1] * x[1]) * (0 - x[1])",
        definitions::f3,
    ),
    Formula::new(
        FormulaId::F4,
        2,
        "(7 * cos(x[1]) + ln(27)) + (7 * x[0]) / -75",
        definitions::f4,
    ),
    Formula::new(
        FormulaId::F5,
        2,
        "(sin((x[1] / 100) * (x[0] / 50)) - (x[1] / 100) * (x[0] / 50)) \
         * (cos(cos(x[1])) * cos(cos(x[1])))",
        definitions::f5,
    ),
    Formula::new(
        FormulaId::F6,
        2,
        "(7 / 10) * (x[1] - x[0]) + x[1]",
        definitions::f6,
    ),
    Formula::new(
        FormulaId::F7,
        2,
        "abs(((-71 * x[0]) * ((x[0] / 24) * x[1])) / (abs(x[0] - x[1]) + sin(-66)))",
        definitions::f7,
    ),
    Formula::new(
        FormulaId::F8,
        6,
        "(((x[5] * x[5]) * x[5]) * abs((x[5] * x[5]) * x[5]) + (x[5] * sqrt(abs(x[5]))) * 90) \
         + x[4] * (x[4] * -75)",
        definitions::f8,
    ),
];

/// Returns every registered formula, in identifier order.
#[must_use]
pub fn all() -> &'static [Formula] {
    &FORMULAS
}

/// Looks up a formula by its registered name, e.g. `"f4"`.
///
/// # Errors
///
/// Returns [`Error::UnknownFormula`] if no formula is registered as `name`.
pub fn get(name: &str) -> Result<&'static Formula, Error> {
    let id = name
        .parse::<FormulaId>()
        .inspect_err(|_| log::debug!("lookup of unregistered formula `{name}`"))?;

    Ok(id.formula())
}
