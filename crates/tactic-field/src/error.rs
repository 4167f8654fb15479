use thiserror::Error;

/// Errors raised while building a [`HazardField`](crate::HazardField) or a
/// [`RoutePlanner`](crate::RoutePlanner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Width or height is zero or negative.
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// The cell count does not fit in memory addressing.
    #[error("field of {width}x{height} cells is too large")]
    TooLarge { width: i32, height: i32 },
    /// A cost weight is not finite, or some cell would cost zero or less to
    /// enter.
    #[error("step costs must be finite and positive, cheapest step would cost {min_step}")]
    InvalidCostModel { min_step: f64 },
}
