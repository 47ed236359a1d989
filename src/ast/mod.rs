/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the typed syntax tree
///
/// Submodules:
/// - ast: The node sum type and tree helpers
/// - types: Data type descriptors carried by typed nodes
pub mod ast;
pub mod types;
