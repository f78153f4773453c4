//! Declaration extraction.
//!
//! Walks a parsed Move source file and collects a simplified model of its
//! modules: imports, constants, struct definitions and function signatures.
//! There is no semantic layer behind this, the walk classifies nodes purely by
//! kind tag, so it works on partially typed or broken files as well.
//!
//! The outer walk looks for `module_definition` nodes anywhere in the file and
//! tracks the most recent `address <literal>` pair on the way, since address
//! blocks lexically precede the modules they hold. Each module body is then
//! handled by its own walk, which the outer walk never re-enters.
//!
//! Malformed shapes never abort extraction: a field that cannot be found keeps
//! its default value and the walk moves on.

use move_ide_syntax::tree::{Node, SyntaxTree};

use crate::budget::NodeBudget;
use crate::config::AnalysisConfig;
use crate::declarations::{FunctionDeclaration, ImportDeclaration, ModuleDeclaration};
use crate::grammar;

#[derive(Clone, Debug, Default)]
pub struct DeclarationExtractor {
    config: AnalysisConfig,
}

impl DeclarationExtractor {
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Extracts every module declared in `source`.
    ///
    /// `tree` must have been parsed from `source`. Empty text yields no modules
    /// without looking at the tree at all.
    #[must_use]
    pub fn extract(&self, tree: &SyntaxTree, source: &str) -> Vec<ModuleDeclaration> {
        if source.is_empty() {
            return Vec::new();
        }
        let mut walk = ExtractionWalk {
            source,
            config: &self.config,
            budget: NodeBudget::new(self.config.node_budget),
            address: None,
            modules: Vec::new(),
        };
        walk.visit_children(tree.root_node());
        if walk.budget.is_exhausted() {
            tracing::warn!(
                "Declaration walk stopped after {:?} nodes, returning {} module(s) found so far",
                self.config.node_budget,
                walk.modules.len()
            );
        }
        walk.modules
    }
}

struct ExtractionWalk<'a> {
    source: &'a str,
    config: &'a AnalysisConfig,
    budget: NodeBudget,
    address: Option<String>,
    modules: Vec<ModuleDeclaration>,
}

impl ExtractionWalk<'_> {
    fn visit_children(&mut self, node: Node<'_>) {
        for child in node.children() {
            if !self.budget.spend() {
                return;
            }
            if child.kind() == grammar::ADDRESS
                && let Some(literal) = child
                    .next_sibling()
                    .filter(|next| next.kind() == grammar::ADDRESS_LITERAL)
            {
                self.address = Some(self.text(literal));
            }
            if child.kind() == grammar::MODULE_DEFINITION {
                let module = self.module(child);
                self.modules.push(module);
                continue;
            }
            self.visit_children(child);
        }
    }

    fn module(&mut self, node: Node<'_>) -> ModuleDeclaration {
        let mut module = ModuleDeclaration {
            address: self.address.clone(),
            ..ModuleDeclaration::default()
        };
        // The first child is the `module` keyword.
        if let Some(identifier) = node
            .child(1)
            .filter(|child| child.kind() == grammar::MODULE_IDENTIFIER)
        {
            module.name = self.text(identifier);
        }

        for child in node.descendants().skip(1) {
            if !self.budget.spend() {
                break;
            }
            match child.kind() {
                grammar::CONSTANT => module.constants.push(self.text(child)),
                grammar::USE_DECL => module.imports.push(self.import(child)),
                grammar::STRUCT_DEFINITION => module.types.push(self.text(child)),
                grammar::USUAL_FUNCTION_DEFINITION => {
                    module.functions.push(self.function(child, false));
                }
                grammar::NATIVE_FUNCTION_DEFINITION => {
                    module.functions.push(self.function(child, true));
                }
                _ => {}
            }
        }
        module
    }

    /// Address and module tokens may sit flat next to the member list or be
    /// nested under path nodes depending on the grammar revision, so the whole
    /// subtree is searched: the first address and module identifier win, and
    /// every member is collected in source order.
    fn import(&self, node: Node<'_>) -> ImportDeclaration {
        let mut import = ImportDeclaration {
            raw_text: self.text(node),
            ..ImportDeclaration::default()
        };
        let mut address = None;
        let mut module_name = None;
        let mut stack: Vec<Node<'_>> = node.children().collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            match current.kind() {
                grammar::ADDRESS_LITERAL if address.is_none() => address = Some(current),
                grammar::MODULE_IDENTIFIER if module_name.is_none() => module_name = Some(current),
                grammar::USE_MEMBER => {
                    import.imported_members.push(self.text(current));
                    continue;
                }
                _ => {}
            }
            let mark = stack.len();
            stack.extend(current.children());
            stack[mark..].reverse();
        }
        if let Some(address) = address {
            import.source_address = self.text(address);
        }
        if let Some(module_name) = module_name {
            import.module_name = self.text(module_name);
        }
        import
    }

    fn function(&self, node: Node<'_>, native: bool) -> FunctionDeclaration {
        let text = node.utf8_text(self.source);
        let mut function = FunctionDeclaration {
            is_native: self.config.native_flag.is_native(native),
            signature_text: if native {
                text.to_string()
            } else {
                signature_of(text).to_string()
            },
            ..FunctionDeclaration::default()
        };

        function.is_public = if native {
            // `native` and `public` may come in either order before `fun`.
            node.children()
                .take_while(|child| child.kind() != grammar::FUN)
                .any(|child| child.kind() == grammar::PUBLIC)
        } else {
            node.child(0)
                .is_some_and(|first| first.kind() == grammar::PUBLIC)
        };
        for child in node.children() {
            match child.kind() {
                grammar::FUNCTION_IDENTIFIER => function.name = self.text(child),
                grammar::FUNC_PARAMS => function.parameters_text = self.text(child),
                grammar::TYPE_PARAMETERS => function.generics = self.text(child),
                grammar::APPLY_TYPE | grammar::TUPLE_TYPE => {
                    function.return_type_text = self.text(child);
                }
                grammar::RESOURCE_ACQUIRES if native => function.acquires_text = self.text(child),
                grammar::RESOURCE_ACQUIRES => {
                    function.acquires_text = child
                        .utf8_text(self.source)
                        .replacen(grammar::ACQUIRES_KEYWORD, "", 1)
                        .trim()
                        .to_string();
                }
                _ => {}
            }
        }
        function
    }

    fn text(&self, node: Node<'_>) -> String {
        node.utf8_text(self.source).to_string()
    }
}

/// Declaration text before the body, trimmed. Text without a body is kept whole.
fn signature_of(text: &str) -> &str {
    text.find(grammar::BODY_OPEN)
        .map_or(text, |body| &text[..body])
        .trim()
}
