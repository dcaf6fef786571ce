/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree of a TINY program
///
/// Submodules:
/// - ast: Node kinds and the numbered child-slot view shared by both node families
/// - expressions: Expression nodes (operators, constants, identifiers)
/// - statements: Statement nodes and sibling chains
/// - printer: Indented tree listing
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
