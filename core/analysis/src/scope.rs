//! Positional scope resolution.
//!
//! Given a cursor point, finds the most specific node at that point and walks
//! parent links up to the root, classifying each ancestor. The result is the
//! lexical context stack, innermost first, plus the name of the enclosing
//! module. It drives completion and hover: "inside a function body of module
//! `Coin`" or "inside the generic list of a struct".
//!
//! The root node itself is never classified, so a point that only hits the
//! root produces an empty stack.

use std::fmt::{self, Display, Formatter};

use move_ide_syntax::tree::{Node, Point, SyntaxTree};
use serde::{Deserialize, Serialize};

use crate::budget::NodeBudget;
use crate::config::{AnalysisConfig, ModuleNamePolicy};
use crate::grammar;

/// Syntactic region enclosing a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    StructField,
    StructGeneric,
    StructDefinition,
    Module,
    Script,
    Import,
    FunctionDefinition,
    FunctionArguments,
    FunctionBody,
}

impl Display for ContextKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ContextKind::StructField => write!(f, "struct field"),
            ContextKind::StructGeneric => write!(f, "struct generics"),
            ContextKind::StructDefinition => write!(f, "struct definition"),
            ContextKind::Module => write!(f, "module"),
            ContextKind::Script => write!(f, "script"),
            ContextKind::Import => write!(f, "import"),
            ContextKind::FunctionDefinition => write!(f, "function definition"),
            ContextKind::FunctionArguments => write!(f, "function arguments"),
            ContextKind::FunctionBody => write!(f, "function body"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQueryResult {
    pub enclosing_module_name: Option<String>,
    /// Innermost context first.
    pub context_stack: Vec<ContextKind>,
}

impl ScopeQueryResult {
    #[must_use]
    pub fn innermost(&self) -> Option<ContextKind> {
        self.context_stack.first().copied()
    }

    #[must_use]
    pub fn is_inside(&self, kind: ContextKind) -> bool {
        self.context_stack.contains(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.context_stack.is_empty() && self.enclosing_module_name.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScopeResolver {
    config: AnalysisConfig,
}

impl ScopeResolver {
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Resolves the context stack around `point`.
    ///
    /// Never fails: unknown node kinds contribute nothing, and a point outside
    /// the tree yields an empty result.
    #[must_use]
    pub fn resolve(&self, tree: &SyntaxTree, source: &str, point: Point) -> ScopeQueryResult {
        let mut result = ScopeQueryResult::default();
        let mut budget = NodeBudget::new(self.config.node_budget);
        let mut current = tree.descendant_at(point);

        while let Some(parent) = current.parent() {
            if !budget.spend() {
                tracing::warn!("Scope walk at {point} ran out of node budget");
                break;
            }
            match current.kind() {
                grammar::FIELD_ANNOTATION if parent.kind() == grammar::STRUCT_DEF_FIELDS => {
                    result.context_stack.push(ContextKind::StructField);
                }
                grammar::STRUCT_DEF_FIELDS => result.context_stack.push(ContextKind::StructField),
                grammar::STRUCT_DEFINITION => {
                    result.context_stack.push(ContextKind::StructDefinition);
                }
                grammar::MODULE_BODY => result.context_stack.push(ContextKind::Module),
                grammar::SCRIPT_BLOCK => result.context_stack.push(ContextKind::Script),
                grammar::USE_DECL => result.context_stack.push(ContextKind::Import),
                grammar::USUAL_FUNCTION_DEFINITION | grammar::NATIVE_FUNCTION_DEFINITION
                    if self.config.function_definition_context =>
                {
                    result.context_stack.push(ContextKind::FunctionDefinition);
                }
                grammar::BLOCK if parent.kind() == grammar::USUAL_FUNCTION_DEFINITION => {
                    result.context_stack.push(ContextKind::FunctionBody);
                }
                grammar::FUNC_PARAMS if parent.kind() == grammar::USUAL_FUNCTION_DEFINITION => {
                    result.context_stack.push(ContextKind::FunctionArguments);
                }
                grammar::TYPE_PARAMETERS if parent.kind() == grammar::STRUCT_DEFINITION => {
                    result.context_stack.push(ContextKind::StructGeneric);
                }
                grammar::MODULE_DEFINITION => self.record_module(current, source, &mut result),
                _ => {}
            }
            current = parent;
        }

        tracing::debug!(
            "Scope at {point}: module {:?}, stack {:?}",
            result.enclosing_module_name,
            result.context_stack
        );
        result
    }

    fn record_module(&self, module: Node<'_>, source: &str, result: &mut ScopeQueryResult) {
        if self.config.module_name_policy == ModuleNamePolicy::Nearest
            && result.enclosing_module_name.is_some()
        {
            return;
        }
        // Skip the `module` keyword, then take the first identifier sibling.
        if let Some(identifier) = module
            .children()
            .skip(1)
            .find(|child| child.kind() == grammar::MODULE_IDENTIFIER)
        {
            result.enclosing_module_name = Some(identifier.utf8_text(source).to_string());
        }
    }
}
