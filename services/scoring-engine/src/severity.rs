//! Data severity value

/// Calculate the data severity value (DSV).
///
/// `dsv = exposure × sensitivity_weight`
///
/// Pure multiplication. Both factors are in [0, 1] from the upstream
/// mappings, so the product is too; no further bounds are enforced here.
pub fn data_severity(sensitivity_weight: f64, exposure: f64) -> f64 {
    exposure * sensitivity_weight
}
