//! Block-style YAML encoding via `serde_yaml`.

use invgen_core::{
    application::{ApplicationError, ports::InventoryFormat},
    domain::InventoryDocument,
    error::InventoryResult,
};

/// YAML inventory format, as read by `ansible-inventory`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl YamlFormat {
    pub fn new() -> Self {
        Self
    }
}

impl InventoryFormat for YamlFormat {
    fn render(&self, document: &InventoryDocument) -> InventoryResult<String> {
        serde_yaml::to_string(document).map_err(|e| {
            ApplicationError::Encoding {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn parse(&self, text: &str) -> InventoryResult<InventoryDocument> {
        serde_yaml::from_str(text).map_err(|e| {
            ApplicationError::Encoding {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
