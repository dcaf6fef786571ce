use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::ast::{ExprType, NodeRef};

/// Binary operator carried by an `Op` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Less,
    Equal,
    Greater,
    Plus,
    Minus,
    Times,
    Over,
    Mod,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Less => Some(Operator::Less),
            TokenKind::Equals => Some(Operator::Equal),
            TokenKind::Greater => Some(Operator::Greater),
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Dash => Some(Operator::Minus),
            TokenKind::Star => Some(Operator::Times),
            TokenKind::Slash => Some(Operator::Over),
            TokenKind::Mod => Some(Operator::Mod),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::Equal => "=",
            Operator::Greater => ">",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Over => "/",
            Operator::Mod => "mod",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(self, Operator::Less | Operator::Equal | Operator::Greater)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Either operand may be missing when its subexpression failed to parse.
    Op {
        operator: Operator,
        left: Option<Box<ExprNode>>,
        right: Option<Box<ExprNode>>,
    },
    Const {
        value: i64,
    },
    Id {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub kind: ExprKind,
    pub line: u32,
}

impl ExprNode {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        ExprNode { kind, line }
    }

    pub fn op(operator: Operator, left: Option<ExprNode>, right: Option<ExprNode>, line: u32) -> Self {
        ExprNode::new(
            ExprKind::Op {
                operator,
                left: left.map(Box::new),
                right: right.map(Box::new),
            },
            line,
        )
    }

    pub fn constant(value: i64, line: u32) -> Self {
        ExprNode::new(ExprKind::Const { value }, line)
    }

    pub fn id(name: impl Into<String>, line: u32) -> Self {
        ExprNode::new(ExprKind::Id { name: name.into() }, line)
    }

    pub fn get_expr_type(&self) -> ExprType {
        match self.kind {
            ExprKind::Op { .. } => ExprType::Op,
            ExprKind::Const { .. } => ExprType::Const,
            ExprKind::Id { .. } => ExprType::Id,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            ExprKind::Op { operator, .. } => Some(operator),
            _ => None,
        }
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'_>> {
        match (&self.kind, index) {
            (ExprKind::Op { left, .. }, 0) => left.as_deref().map(NodeRef::Expr),
            (ExprKind::Op { right, .. }, 1) => right.as_deref().map(NodeRef::Expr),
            _ => None,
        }
    }
}

impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_operands(&mut self.kind, &mut pending);

        while let Some(mut node) = pending.pop() {
            take_operands(&mut node.kind, &mut pending);
        }
    }
}

fn take_operands(kind: &mut ExprKind, pending: &mut Vec<Box<ExprNode>>) {
    if let ExprKind::Op { left, right, .. } = kind {
        pending.extend(left.take());
        pending.extend(right.take());
    }
}
