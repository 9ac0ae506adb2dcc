// crates/domain/src/model/vehicle.rs
use namedata_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Structured decomposition of a record's free-text vehicle description,
/// e.g. "2009 Dodge Grand Caravan".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub year: i32,
    pub manufacturer: String,
    pub model: String,
}

impl VehicleInfo {
    /// Parse a vehicle description by splitting on the first two space
    /// boundaries. The model keeps any further whitespace ("Grand Caravan").
    pub fn parse(text: &str) -> DomainResult<Self> {
        let mut parts = text.splitn(3, ' ');
        let year_token = parts.next().unwrap_or_default();
        let manufacturer = parts.next();
        let model = parts.next();

        let (Some(manufacturer), Some(model)) = (manufacturer, model) else {
            return Err(DomainError::VehicleFormat {
                text: text.to_string(),
                reason: "expected 'year manufacturer model'".to_string(),
            });
        };

        let year: i32 = year_token.parse().map_err(|_| DomainError::VehicleFormat {
            text: text.to_string(),
            reason: format!("'{year_token}' is not a valid year"),
        })?;

        Ok(Self {
            year,
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
        })
    }
}

impl std::fmt::Display for VehicleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.manufacturer, self.model)
    }
}
