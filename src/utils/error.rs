use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid weight: {value} (must be a positive, finite number of kilograms)")]
    InvalidWeight { value: f64 },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Courier not found: {id}")]
    CourierNotFound { id: u32 },

    #[error("Order not found: {id}")]
    OrderNotFound { id: u64 },

    #[error("Invalid order status: {value}")]
    InvalidStatus { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl QuoteError {
    /// Validation failures reject a request before the rate core runs;
    /// everything else is a computation or data-access failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, QuoteError::MissingField { .. })
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
