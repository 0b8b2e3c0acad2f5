/// Input that cannot be turned into a calculator request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed request body: {0}")]
    Malformed(String),
    #[error("required field `{0}` is missing or blank")]
    MissingField(&'static str),
    #[error("unsupported loan type `{0}`")]
    UnknownLoanType(String),
}

/// Arithmetic that left the finite range, typically from adversarial magnitudes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{calculation} produced a non-finite {field}")]
pub struct ComputationError {
    pub calculation: &'static str,
    pub field: &'static str,
}

impl ComputationError {
    pub(crate) fn ensure_finite(
        calculation: &'static str,
        field: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self { calculation, field })
        }
    }
}

/// Failure of a single calculator invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}
