use crate::fixtures::{
    COIN, COIN_TREE, EMPTY_PUBLIC_FUN, EMPTY_PUBLIC_FUN_TREE, SCRIPT, SCRIPT_TREE,
};
use crate::utils::{build_tree, point_at};
use move_ide_analysis::config::{AnalysisConfig, ModuleNamePolicy};
use move_ide_analysis::resolve_scope;
use move_ide_analysis::scope::{ContextKind, ScopeQueryResult, ScopeResolver};
use move_ide_syntax::tree::Point;

fn coin_scope(needle: &str, offset: usize) -> ScopeQueryResult {
    let tree = build_tree(COIN, COIN_TREE);
    resolve_scope(&tree, COIN, point_at(COIN, needle, offset))
}

#[test]
fn test_scope_in_function_body() {
    let scope = coin_scope("= b.value", 2);
    assert_eq!(scope.innermost(), Some(ContextKind::FunctionBody));
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::FunctionBody, ContextKind::Module]
    );
    assert_eq!(scope.enclosing_module_name.as_deref(), Some("Coin"));
}

#[test]
fn test_function_definition_context_when_enabled() {
    let tree = build_tree(COIN, COIN_TREE);
    let resolver = ScopeResolver::new(AnalysisConfig {
        function_definition_context: true,
        ..AnalysisConfig::default()
    });
    let body = resolver.resolve(&tree, COIN, point_at(COIN, "= b.value", 2));
    assert_eq!(
        body.context_stack,
        vec![
            ContextKind::FunctionBody,
            ContextKind::FunctionDefinition,
            ContextKind::Module
        ]
    );

    let native = resolver.resolve(&tree, COIN, point_at(COIN, "(x: u64)", 1));
    assert_eq!(
        native.context_stack,
        vec![ContextKind::FunctionDefinition, ContextKind::Module]
    );
}

#[test]
fn test_scope_in_empty_public_function_body() {
    let tree = build_tree(EMPTY_PUBLIC_FUN, EMPTY_PUBLIC_FUN_TREE);
    let scope = resolve_scope(
        &tree,
        EMPTY_PUBLIC_FUN,
        point_at(EMPTY_PUBLIC_FUN, "{ }", 1),
    );
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::FunctionBody, ContextKind::Module]
    );
    assert_eq!(scope.enclosing_module_name.as_deref(), Some("M"));
}

#[test]
fn test_scope_just_after_function_body_close() {
    // A cursor right after `}` still touches the body it closes.
    let scope = coin_scope("        v\n    }", 15);
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::FunctionBody, ContextKind::Module]
    );
}

#[test]
fn test_scope_in_struct_generics() {
    let scope = coin_scope("Balance<Token> {", 8);
    assert_eq!(
        scope.context_stack,
        vec![
            ContextKind::StructGeneric,
            ContextKind::StructDefinition,
            ContextKind::Module
        ]
    );
}

#[test]
fn test_scope_in_struct_field() {
    let scope = coin_scope("value: u64,", 0);
    assert_eq!(
        scope.context_stack,
        vec![
            ContextKind::StructField,
            ContextKind::StructField,
            ContextKind::StructDefinition,
            ContextKind::Module
        ]
    );
}

#[test]
fn test_scope_in_function_generics_is_not_struct_generic() {
    let scope = coin_scope("value<Token>", 6);
    assert_eq!(scope.context_stack, vec![ContextKind::Module]);
}

#[test]
fn test_scope_in_function_arguments() {
    let scope = coin_scope("(b: &Balance", 1);
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::FunctionArguments, ContextKind::Module]
    );
}

#[test]
fn test_scope_in_native_function_arguments() {
    let scope = coin_scope("(x: u64)", 1);
    assert_eq!(scope.context_stack, vec![ContextKind::Module]);
}

#[test]
fn test_scope_in_import() {
    let scope = coin_scope("Signer", 0);
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::Import, ContextKind::Module]
    );
    assert!(scope.is_inside(ContextKind::Import));
}

#[test]
fn test_scope_between_declarations() {
    let scope = coin_scope("\n\n    const", 1);
    assert_eq!(scope.context_stack, vec![ContextKind::Module]);
    assert_eq!(scope.enclosing_module_name.as_deref(), Some("Coin"));
}

#[test]
fn test_scope_in_script() {
    let tree = build_tree(SCRIPT, SCRIPT_TREE);
    let scope = resolve_scope(&tree, SCRIPT, point_at(SCRIPT, "(account)", 1));
    assert_eq!(
        scope.context_stack,
        vec![ContextKind::FunctionBody, ContextKind::Script]
    );
    assert_eq!(scope.enclosing_module_name, None);
}

#[test]
fn test_scope_outside_tree_is_empty() {
    let tree = build_tree(COIN, COIN_TREE);
    let scope = resolve_scope(&tree, COIN, Point::new(1000, 0));
    assert!(scope.is_empty());
    assert_eq!(scope.innermost(), None);
}

#[test]
fn test_scope_on_unknown_node_kinds_is_empty() {
    let source = "widget gadget { thing }";
    let tree = build_tree(
        source,
        r#"(source_file (widget_definition (widget_name "widget") (gadget "gadget")
             (gadget_body "{" (thing "thing") "}")))"#,
    );
    let scope = resolve_scope(&tree, source, point_at(source, "thing", 1));
    assert_eq!(scope, ScopeQueryResult::default());
}

#[test]
fn test_field_annotation_outside_struct_fields() {
    let source = "module M { spec S { value: u64 } }";
    let tree = build_tree(
        source,
        r#"
        (source_file
          (module_definition "module" (module_identifier "M")
            (module_body "{"
              (spec_block "spec" (identifier "S") "{"
                (field_annotation (field_identifier "value") ":" (primitive_type "u64"))
                "}")
              "}")))
        "#,
    );
    let scope = resolve_scope(&tree, source, point_at(source, "value", 0));
    assert_eq!(scope.context_stack, vec![ContextKind::Module]);
}

#[test]
fn test_block_outside_ordinary_function_is_not_body() {
    let source = "module M { spec f { } }";
    let tree = build_tree(
        source,
        r#"
        (source_file
          (module_definition "module" (module_identifier "M")
            (module_body "{"
              (spec_block "spec" (identifier "f") (block "{" "}"))
              "}")))
        "#,
    );
    let scope = resolve_scope(&tree, source, point_at(source, "{ }", 1));
    assert_eq!(scope.context_stack, vec![ContextKind::Module]);
}

const NESTED: &str = "module Outer { module Inner { fun f() { x } } }";

const NESTED_TREE: &str = r#"
(source_file
  (module_definition "module" (module_identifier "Outer")
    (module_body "{"
      (module_definition "module" (module_identifier "Inner")
        (module_body "{"
          (usual_function_definition "fun" (function_identifier "f")
            (func_params "(" ")")
            (block "{" (name_expression "x") "}"))
          "}"))
      "}")))
"#;

#[test]
fn test_nested_modules_outermost_policy() {
    let tree = build_tree(NESTED, NESTED_TREE);
    let resolver = ScopeResolver::new(AnalysisConfig::default());
    let scope = resolver.resolve(&tree, NESTED, point_at(NESTED, "x", 0));
    assert_eq!(scope.enclosing_module_name.as_deref(), Some("Outer"));
    assert_eq!(
        scope.context_stack,
        vec![
            ContextKind::FunctionBody,
            ContextKind::Module,
            ContextKind::Module
        ]
    );
}

#[test]
fn test_nested_modules_nearest_policy() {
    let tree = build_tree(NESTED, NESTED_TREE);
    let resolver = ScopeResolver::new(AnalysisConfig {
        module_name_policy: ModuleNamePolicy::Nearest,
        ..AnalysisConfig::default()
    });
    let scope = resolver.resolve(&tree, NESTED, point_at(NESTED, "x", 0));
    assert_eq!(scope.enclosing_module_name.as_deref(), Some("Inner"));
}

#[test]
fn test_scope_node_budget_stops_walk() {
    let tree = build_tree(COIN, COIN_TREE);
    let resolver = ScopeResolver::new(AnalysisConfig {
        node_budget: Some(0),
        ..AnalysisConfig::default()
    });
    let scope = resolver.resolve(&tree, COIN, point_at(COIN, "= b.value", 2));
    assert!(scope.is_empty());
}

#[test]
fn test_scope_serializes_for_clients() -> anyhow::Result<()> {
    let scope = coin_scope("= b.value", 2);
    let json = serde_json::to_value(&scope)?;
    assert_eq!(
        json,
        serde_json::json!({
            "enclosingModuleName": "Coin",
            "contextStack": ["FunctionBody", "Module"]
        })
    );
    Ok(())
}

#[test]
fn test_context_kind_display() {
    assert_eq!(ContextKind::FunctionArguments.to_string(), "function arguments");
    assert_eq!(ContextKind::StructGeneric.to_string(), "struct generics");
}
