use super::{expressions::ExprNode, statements::StmtNode};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    If,
    Repeat,
    Assign,
    Read,
    Write,
    While,
    DoWhile,
    For,
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Op,
    Const,
    Id,
}

/// Number of child slots every node exposes through `child()`.
pub const MAX_CHILDREN: usize = 3;

/// A borrowed node of either family.
///
/// Used for generic traversal over the numbered child slots, where a slot
/// can hold a statement sequence or an expression depending on position.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Stmt(&'a StmtNode),
    Expr(&'a ExprNode),
}

impl<'a> NodeRef<'a> {
    pub fn line(&self) -> u32 {
        match self {
            NodeRef::Stmt(stmt) => stmt.line,
            NodeRef::Expr(expr) => expr.line,
        }
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        match self {
            NodeRef::Stmt(stmt) => stmt.child(index),
            NodeRef::Expr(expr) => expr.child(index),
        }
    }

    /// All populated child slots, in slot order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let node = *self;
        (0..MAX_CHILDREN).filter_map(move |index| node.child(index))
    }

    pub fn sibling(&self) -> Option<&'a StmtNode> {
        match self {
            NodeRef::Stmt(stmt) => stmt.sibling.as_deref(),
            NodeRef::Expr(_) => None,
        }
    }
}

impl<'a> From<&'a StmtNode> for NodeRef<'a> {
    fn from(stmt: &'a StmtNode) -> Self {
        NodeRef::Stmt(stmt)
    }
}

impl<'a> From<&'a ExprNode> for NodeRef<'a> {
    fn from(expr: &'a ExprNode) -> Self {
        NodeRef::Expr(expr)
    }
}
