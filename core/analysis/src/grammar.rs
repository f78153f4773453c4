//! Node kind tags of the Move tree-sitter grammar that analysis matches on.

pub const ADDRESS: &str = "address";
pub const ADDRESS_LITERAL: &str = "address_literal";

pub const MODULE_DEFINITION: &str = "module_definition";
pub const MODULE_IDENTIFIER: &str = "module_identifier";
pub const MODULE_BODY: &str = "module_body";
pub const SCRIPT_BLOCK: &str = "script_block";

pub const CONSTANT: &str = "constant";
pub const USE_DECL: &str = "use_decl";
pub const USE_MEMBER: &str = "use_member";

pub const STRUCT_DEFINITION: &str = "struct_definition";
pub const STRUCT_DEF_FIELDS: &str = "struct_def_fields";
pub const FIELD_ANNOTATION: &str = "field_annotation";
pub const TYPE_PARAMETERS: &str = "type_parameters";

pub const USUAL_FUNCTION_DEFINITION: &str = "usual_function_definition";
pub const NATIVE_FUNCTION_DEFINITION: &str = "native_function_definition";
pub const FUNCTION_IDENTIFIER: &str = "function_identifier";
pub const FUNC_PARAMS: &str = "func_params";
pub const APPLY_TYPE: &str = "apply_type";
pub const TUPLE_TYPE: &str = "tuple_type";
/// Spelled this way by the grammar.
pub const RESOURCE_ACQUIRES: &str = "resource_accquires";
pub const BLOCK: &str = "block";

pub const PUBLIC: &str = "public";
pub const FUN: &str = "fun";
pub const ACQUIRES_KEYWORD: &str = "acquires";
pub const BODY_OPEN: char = '{';
