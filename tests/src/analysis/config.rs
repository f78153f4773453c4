use move_ide_analysis::config::{AnalysisConfig, ModuleNamePolicy, NativeFlagPolicy};

#[test]
fn test_config_defaults() {
    let config = AnalysisConfig::default();
    assert_eq!(config.module_name_policy, ModuleNamePolicy::Outermost);
    assert_eq!(config.native_flag, NativeFlagPolicy::ByDeclarationKind);
    assert_eq!(config.node_budget, None);
    assert!(!config.function_definition_context);
}

#[test]
fn test_config_enables_function_definition_context() -> anyhow::Result<()> {
    let config: AnalysisConfig =
        serde_json::from_str(r#"{ "functionDefinitionContext": true }"#)?;
    assert!(config.function_definition_context);
    assert_eq!(config.native_flag, NativeFlagPolicy::ByDeclarationKind);
    Ok(())
}

#[test]
fn test_config_from_partial_json() -> anyhow::Result<()> {
    let config: AnalysisConfig = serde_json::from_str(r#"{ "nativeFlag": "alwaysNative" }"#)?;
    assert_eq!(config.native_flag, NativeFlagPolicy::AlwaysNative);
    assert_eq!(config.module_name_policy, ModuleNamePolicy::Outermost);
    Ok(())
}

#[test]
fn test_config_from_empty_json() -> anyhow::Result<()> {
    let config: AnalysisConfig = serde_json::from_str("{}")?;
    assert_eq!(config, AnalysisConfig::default());
    Ok(())
}

#[test]
fn test_config_rejects_unknown_policy() {
    let result = serde_json::from_str::<AnalysisConfig>(r#"{ "moduleNamePolicy": "innermost" }"#);
    assert!(result.is_err());
}

#[test]
fn test_native_flag_policy() {
    assert!(NativeFlagPolicy::ByDeclarationKind.is_native(true));
    assert!(!NativeFlagPolicy::ByDeclarationKind.is_native(false));
    assert!(NativeFlagPolicy::AlwaysNative.is_native(false));
}
