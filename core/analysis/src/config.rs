//! Analysis settings.
//!
//! Hosts usually receive these as JSON initialization options, so every field
//! has a default and unknown fields are ignored.
//!
//! ```
//! use move_ide_analysis::config::{AnalysisConfig, ModuleNamePolicy};
//!
//! let config: AnalysisConfig =
//!     serde_json::from_str(r#"{ "moduleNamePolicy": "nearest", "nodeBudget": 50000 }"#).unwrap();
//! assert_eq!(config.module_name_policy, ModuleNamePolicy::Nearest);
//! assert_eq!(config.node_budget, Some(50000));
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub module_name_policy: ModuleNamePolicy,
    pub native_flag: NativeFlagPolicy,
    /// Maximum number of nodes one extraction or scope walk may visit.
    /// `None` leaves walks unbounded.
    pub node_budget: Option<usize>,
    /// Whether function definitions contribute
    /// [`ContextKind::FunctionDefinition`](crate::scope::ContextKind::FunctionDefinition)
    /// to scope stacks. Off by default, so a function body resolves to
    /// `[FunctionBody, Module]`.
    pub function_definition_context: bool,
}

/// Which `module_definition` names the scope when several enclose a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleNamePolicy {
    /// Every module met on the upward walk overwrites the previous name, so the
    /// one closest to the root wins.
    #[default]
    Outermost,
    /// The first module met on the upward walk wins.
    Nearest,
}

/// How `FunctionDeclaration::is_native` is settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NativeFlagPolicy {
    /// Native definitions are native, ordinary definitions are not.
    #[default]
    ByDeclarationKind,
    /// Every function keeps the `native` default, ordinary ones included.
    AlwaysNative,
}

impl NativeFlagPolicy {
    #[must_use]
    pub fn is_native(self, native_definition: bool) -> bool {
        match self {
            NativeFlagPolicy::ByDeclarationKind => native_definition,
            NativeFlagPolicy::AlwaysNative => true,
        }
    }
}
