use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::PermissionCatalog;
use crate::errors::{DomainError, DomainResult};

/// Access granted to a role for one function.
///
/// The derived order (Forbidden < ReadOnly < FullAccess) is used for bulk
/// state summarization only; no access enforcement exists in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PermissionLevel {
    Forbidden = 0,
    ReadOnly = 1,
    FullAccess = 2,
}

impl Default for PermissionLevel {
    fn default() -> Self {
        PermissionLevel::Forbidden
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionLevel::Forbidden => write!(f, "Forbidden"),
            PermissionLevel::ReadOnly => write!(f, "Read Only"),
            PermissionLevel::FullAccess => write!(f, "Full Access"),
        }
    }
}

impl TryFrom<u8> for PermissionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PermissionLevel::Forbidden),
            1 => Ok(PermissionLevel::ReadOnly),
            2 => Ok(PermissionLevel::FullAccess),
            _ => Err(format!("Invalid permission level: {}", value)),
        }
    }
}

// Serialized as the numeric level (0/1/2), matching the stored matrix shape.
impl Serialize for PermissionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for PermissionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        PermissionLevel::try_from(value).map_err(D::Error::custom)
    }
}

/// Aggregate state of one module's permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    Full,
    ReadOnly,
    Mixed,
    None,
}

impl std::fmt::Display for ModuleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleState::Full => write!(f, "full"),
            ModuleState::ReadOnly => write!(f, "readonly"),
            ModuleState::Mixed => write!(f, "mixed"),
            ModuleState::None => write!(f, "none"),
        }
    }
}

/// Mapping from module id to function name to permission level.
///
/// Invariant, maintained by `normalize`: every module/function pair in the
/// catalog has an entry, and no entry exists for a pair outside the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix {
    entries: BTreeMap<String, BTreeMap<String, PermissionLevel>>,
}

impl PermissionMatrix {
    /// A matrix covering the full catalog with every function Forbidden.
    pub fn forbidden_for(catalog: &PermissionCatalog) -> Self {
        let mut matrix = Self::default();
        matrix.normalize(catalog);
        matrix
    }

    /// Build a matrix by applying `level_for(module id)` to every catalog pair.
    pub fn from_module_levels<F>(catalog: &PermissionCatalog, level_for: F) -> Self
    where
        F: Fn(&str) -> PermissionLevel,
    {
        let mut entries = BTreeMap::new();
        for module in catalog.modules() {
            let level = level_for(&module.id);
            let functions = module
                .functions
                .iter()
                .map(|f| (f.name.clone(), level))
                .collect();
            entries.insert(module.id.clone(), functions);
        }
        Self { entries }
    }

    /// Restore the coverage invariant: fill missing catalog pairs with
    /// Forbidden and drop entries for pairs the catalog does not define.
    pub fn normalize(&mut self, catalog: &PermissionCatalog) {
        self.entries
            .retain(|module_id, _| catalog.module(module_id).is_some());

        for module in catalog.modules() {
            let functions = self.entries.entry(module.id.clone()).or_default();
            functions.retain(|name, _| module.functions.iter().any(|f| &f.name == name));
            for function in &module.functions {
                functions
                    .entry(function.name.clone())
                    .or_insert(PermissionLevel::Forbidden);
            }
        }
    }

    /// Level for one function; Forbidden when the pair has no entry.
    pub fn get(&self, module_id: &str, function_name: &str) -> PermissionLevel {
        self.entries
            .get(module_id)
            .and_then(|m| m.get(function_name))
            .copied()
            .unwrap_or_default()
    }

    /// Point update. Rejects pairs outside the catalog.
    pub fn set(
        &mut self,
        catalog: &PermissionCatalog,
        module_id: &str,
        function_name: &str,
        level: PermissionLevel,
    ) -> DomainResult<()> {
        if !catalog.contains(module_id, function_name) {
            return Err(DomainError::NotFound(format!(
                "Unknown function {} in module {}",
                function_name, module_id
            )));
        }
        self.entries
            .entry(module_id.to_string())
            .or_default()
            .insert(function_name.to_string(), level);
        Ok(())
    }

    /// Set every function in every catalog module to `level`.
    pub fn set_all(&mut self, catalog: &PermissionCatalog, level: PermissionLevel) {
        *self = Self::from_module_levels(catalog, |_| level);
    }

    /// Set every function within one module to `level`.
    pub fn set_module(
        &mut self,
        catalog: &PermissionCatalog,
        module_id: &str,
        level: PermissionLevel,
    ) -> DomainResult<()> {
        let module = catalog
            .module(module_id)
            .ok_or_else(|| DomainError::NotFound(format!("Unknown module: {}", module_id)))?;

        let functions = self.entries.entry(module_id.to_string()).or_default();
        for function in &module.functions {
            functions.insert(function.name.clone(), level);
        }
        Ok(())
    }

    /// Number of entries granted more than Forbidden.
    pub fn selected_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|m| m.values())
            .filter(|level| **level > PermissionLevel::Forbidden)
            .count()
    }

    /// Aggregate state for one module: full iff all FullAccess, readonly iff
    /// all ReadOnly, none iff all Forbidden (or no entries), mixed otherwise.
    pub fn module_state(&self, module_id: &str) -> ModuleState {
        let levels: Vec<PermissionLevel> = self
            .entries
            .get(module_id)
            .map(|m| m.values().copied().collect())
            .unwrap_or_default();

        if levels.is_empty() {
            return ModuleState::None;
        }

        let has_any = levels.iter().any(|l| *l > PermissionLevel::Forbidden);
        let all_full = levels.iter().all(|l| *l == PermissionLevel::FullAccess);
        let all_read_only = levels.iter().all(|l| *l == PermissionLevel::ReadOnly);

        if all_full {
            ModuleState::Full
        } else if all_read_only {
            ModuleState::ReadOnly
        } else if has_any {
            ModuleState::Mixed
        } else {
            ModuleState::None
        }
    }

    /// Total number of entries in the matrix.
    pub fn len(&self) -> usize {
        self.entries.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
