use thiserror::Error;

/// Rejection of a coordinate or radius argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Not an indexable value with exactly two items.
    #[error("\"{field}\" must be an indexable type with two items, not {value}")]
    Shape { field: &'static str, value: String },

    /// Two items (or a scalar radius) present, but not integer-convertible.
    #[error("\"{field}\" must {expected}, not {value}")]
    Value {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl CoordError {
    pub fn field(&self) -> &'static str {
        match self {
            CoordError::Shape { field, .. } | CoordError::Value { field, .. } => field,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, CoordError::Shape { .. })
    }

    pub fn is_value(&self) -> bool {
        matches!(self, CoordError::Value { .. })
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Toml(String),
    #[error("circle {index}: {source}")]
    Circle {
        index: usize,
        #[source]
        source: CoordError,
    },
}
