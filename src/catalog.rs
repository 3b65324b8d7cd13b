use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// A single manageable capability within a module (e.g. "Master calendar").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFunction {
    pub name: String,
    pub description: String,
}

/// A named group of related administrative functions (e.g. "Booking").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub functions: Vec<CatalogFunction>,
}

/// The fixed table of modules and functions that permissions range over.
///
/// Loaded from a JSON configuration table so catalog changes do not require
/// code changes in consuming components. Immutable after load: the public
/// surface is read-only and validated on construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCatalog {
    modules: Vec<CatalogModule>,
}

impl PermissionCatalog {
    /// Parse and validate a catalog from its JSON representation.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let catalog: PermissionCatalog = serde_json::from_str(json)
            .map_err(|e| DomainError::ValidationError(format!("Invalid catalog JSON: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DomainError::Internal(format!(
                "Failed to read catalog file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the crate (config/permission_catalog.json).
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../config/permission_catalog.json"))
            .expect("built-in permission catalog is valid")
    }

    fn validate(&self) -> DomainResult<()> {
        if self.modules.is_empty() {
            return Err(DomainError::ValidationError(
                "Catalog must contain at least one module".to_string(),
            ));
        }

        let mut module_ids = HashSet::new();
        for module in &self.modules {
            if module.id.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "Module id must not be empty".to_string(),
                ));
            }
            if !module_ids.insert(module.id.as_str()) {
                return Err(DomainError::ValidationError(format!(
                    "Duplicate module id: {}",
                    module.id
                )));
            }
            if module.functions.is_empty() {
                return Err(DomainError::ValidationError(format!(
                    "Module {} has no functions",
                    module.id
                )));
            }

            let mut function_names = HashSet::new();
            for function in &module.functions {
                if function.name.trim().is_empty() {
                    return Err(DomainError::ValidationError(format!(
                        "Module {} has a function with an empty name",
                        module.id
                    )));
                }
                if !function_names.insert(function.name.as_str()) {
                    return Err(DomainError::ValidationError(format!(
                        "Duplicate function {} in module {}",
                        function.name, module.id
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn modules(&self) -> &[CatalogModule] {
        &self.modules
    }

    pub fn module(&self, module_id: &str) -> Option<&CatalogModule> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Whether the given module/function pair exists in the catalog.
    pub fn contains(&self, module_id: &str, function_name: &str) -> bool {
        self.module(module_id)
            .map(|m| m.functions.iter().any(|f| f.name == function_name))
            .unwrap_or(false)
    }

    /// Total number of functions across all modules.
    pub fn function_count(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.modules().len(), 9);
        assert_eq!(catalog.function_count(), 15);
    }

    #[test]
    fn test_builtin_catalog_contains_known_pairs() {
        let catalog = PermissionCatalog::builtin();
        assert!(catalog.contains("booking", "Master calendar"));
        assert!(catalog.contains("admin", "Users"));
        assert!(catalog.contains("access-permissions", "Access & permissions"));
        assert!(!catalog.contains("booking", "Users"));
        assert!(!catalog.contains("nonexistent", "Master calendar"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = PermissionCatalog::from_json(r#"{"modules": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_module_id_rejected() {
        let json = r#"{
            "modules": [
                {"id": "a", "name": "A", "description": "", "functions": [{"name": "x", "description": ""}]},
                {"id": "a", "name": "A2", "description": "", "functions": [{"name": "y", "description": ""}]}
            ]
        }"#;
        assert!(PermissionCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_duplicate_function_name_rejected() {
        let json = r#"{
            "modules": [
                {"id": "a", "name": "A", "description": "", "functions": [
                    {"name": "x", "description": ""},
                    {"name": "x", "description": ""}
                ]}
            ]
        }"#;
        assert!(PermissionCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(PermissionCatalog::from_json("not json").is_err());
    }
}
