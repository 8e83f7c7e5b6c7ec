//! Source-mapping deserialization.
//!
//! The `sources` input is accepted in two serializations: it is first
//! interpreted as YAML and, on failure, re-interpreted as JSON. A failure
//! of both is a fatal configuration error carrying both parse messages.

use crate::error::ConfigError;
use crate::types::SourceMapping;

/// Parse the raw `sources` input into validated mappings.
///
/// Tries YAML first, then JSON. The parsed list must be non-empty and every
/// entry must carry non-empty `from` and `to` fields.
pub fn parse_mappings(input: &str) -> Result<Vec<SourceMapping>, ConfigError> {
    let mappings = match serde_yaml::from_str::<Vec<SourceMapping>>(input) {
        Ok(mappings) => mappings,
        Err(yaml_err) => match serde_json::from_str::<Vec<SourceMapping>>(input) {
            Ok(mappings) => mappings,
            Err(json_err) => {
                return Err(ConfigError::UnparsableMappings {
                    yaml: yaml_err.to_string(),
                    json: json_err.to_string(),
                })
            }
        },
    };
    validate_mappings(&mappings)?;
    Ok(mappings)
}

fn validate_mappings(mappings: &[SourceMapping]) -> Result<(), ConfigError> {
    if mappings.is_empty() {
        return Err(ConfigError::EmptyMappings);
    }
    for (index, mapping) in mappings.iter().enumerate() {
        if mapping.from.as_os_str().is_empty() {
            return Err(ConfigError::MappingField {
                index,
                field: "from",
            });
        }
        if mapping.to.as_os_str().is_empty() {
            return Err(ConfigError::MappingField { index, field: "to" });
        }
    }
    Ok(())
}
