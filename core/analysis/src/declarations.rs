//! Declaration records produced by the extractor.
//!
//! All records are plain values. They serialize with camelCase field names so
//! they can be handed to an editor client as JSON.

use serde::{Deserialize, Serialize};

/// One `module` block of a source file.
///
/// `name` is empty when the module identifier could not be found. Callers must
/// treat that as unresolved, not as an anonymous module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDeclaration {
    pub name: String,
    /// Literal of the closest preceding `address` block, if any.
    pub address: Option<String>,
    /// Raw text of each `const` declaration.
    pub constants: Vec<String>,
    pub imports: Vec<ImportDeclaration>,
    /// Raw text of each struct definition.
    pub types: Vec<String>,
    pub functions: Vec<FunctionDeclaration>,
}

impl ModuleDeclaration {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.name.is_empty()
    }

    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|function| function.name == name)
    }
}

/// A `use` declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub source_address: String,
    pub module_name: String,
    /// Members in source order.
    pub imported_members: Vec<String>,
    pub raw_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    pub generics: String,
    pub is_public: bool,
    pub is_native: bool,
    pub parameters_text: String,
    /// Declaration text up to the body. Native functions keep their full text.
    pub signature_text: String,
    pub return_type_text: String,
    /// Acquired resources. The leading keyword is stripped for ordinary functions only.
    pub acquires_text: String,
}
