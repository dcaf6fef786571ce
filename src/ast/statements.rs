use std::fmt::Display;

use super::{
    ast::{NodeRef, StmtType},
    expressions::ExprNode,
};

/// Which way a `for` loop counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForDirection {
    To,
    DownTo,
}

impl Display for ForDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForDirection::To => write!(f, "to"),
            ForDirection::DownTo => write!(f, "downto"),
        }
    }
}

/// Statement variants with only the fields each one needs.
///
/// Every slot is optional: a production always yields its node, but a
/// sub-part that failed to parse is left empty. Bodies are statement
/// sequences (the head of a sibling chain). Names are `None` when the
/// identifier was missing.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    If {
        condition: Option<Box<ExprNode>>,
        then_body: Option<Box<StmtNode>>,
        else_body: Option<Box<StmtNode>>,
    },
    Repeat {
        body: Option<Box<StmtNode>>,
        condition: Option<Box<ExprNode>>,
    },
    Assign {
        name: Option<String>,
        value: Option<Box<ExprNode>>,
    },
    Read {
        name: Option<String>,
    },
    Write {
        value: Option<Box<ExprNode>>,
    },
    While {
        condition: Option<Box<ExprNode>>,
        body: Option<Box<StmtNode>>,
    },
    DoWhile {
        body: Option<Box<StmtNode>>,
        condition: Option<Box<ExprNode>>,
    },
    For {
        name: Option<String>,
        direction: Option<ForDirection>,
        start: Option<Box<ExprNode>>,
        end: Option<Box<ExprNode>>,
        body: Option<Box<StmtNode>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub line: u32,
    pub sibling: Option<Box<StmtNode>>,
}

impl StmtNode {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        StmtNode {
            kind,
            line,
            sibling: None,
        }
    }

    pub fn get_stmt_type(&self) -> StmtType {
        match self.kind {
            StmtKind::If { .. } => StmtType::If,
            StmtKind::Repeat { .. } => StmtType::Repeat,
            StmtKind::Assign { .. } => StmtType::Assign,
            StmtKind::Read { .. } => StmtType::Read,
            StmtKind::Write { .. } => StmtType::Write,
            StmtKind::While { .. } => StmtType::While,
            StmtKind::DoWhile { .. } => StmtType::DoWhile,
            StmtKind::For { .. } => StmtType::For,
        }
    }

    /// Identifier attribute of `Assign`, `Read` and `For`.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            StmtKind::Assign { name, .. } | StmtKind::Read { name } | StmtKind::For { name, .. } => {
                name.as_deref()
            }
            _ => None,
        }
    }

    /// Numbered slot view, in the order the grammar lists each statement's parts.
    pub fn child(&self, index: usize) -> Option<NodeRef<'_>> {
        fn expr(slot: &Option<Box<ExprNode>>) -> Option<NodeRef<'_>> {
            slot.as_deref().map(NodeRef::Expr)
        }
        fn stmt(slot: &Option<Box<StmtNode>>) -> Option<NodeRef<'_>> {
            slot.as_deref().map(NodeRef::Stmt)
        }

        match (&self.kind, index) {
            (StmtKind::If { condition, .. }, 0) => expr(condition),
            (StmtKind::If { then_body, .. }, 1) => stmt(then_body),
            (StmtKind::If { else_body, .. }, 2) => stmt(else_body),
            (StmtKind::Repeat { body, .. }, 0) => stmt(body),
            (StmtKind::Repeat { condition, .. }, 1) => expr(condition),
            (StmtKind::Assign { value, .. }, 0) => expr(value),
            (StmtKind::Write { value }, 0) => expr(value),
            (StmtKind::While { condition, .. }, 0) => expr(condition),
            (StmtKind::While { body, .. }, 1) => stmt(body),
            (StmtKind::DoWhile { body, .. }, 0) => stmt(body),
            (StmtKind::DoWhile { condition, .. }, 1) => expr(condition),
            (StmtKind::For { start, .. }, 0) => expr(start),
            (StmtKind::For { end, .. }, 1) => expr(end),
            (StmtKind::For { body, .. }, 2) => stmt(body),
            _ => None,
        }
    }

    /// Iterates over this statement and every statement after it in its sequence.
    pub fn iter(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }
}

// Sequences can be long; unlink the chain so dropping it does not recurse per statement.
impl Drop for StmtNode {
    fn drop(&mut self) {
        let mut next = self.sibling.take();
        while let Some(mut node) = next {
            next = node.sibling.take();
        }
    }
}

pub struct Siblings<'a> {
    next: Option<&'a StmtNode>,
}

impl<'a> Siblings<'a> {
    pub fn new(head: Option<&'a StmtNode>) -> Self {
        Siblings { next: head }
    }
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a StmtNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.sibling.as_deref();
        Some(current)
    }
}

/// Links statements, in order, into a sibling chain and returns its head.
pub fn link_siblings(statements: Vec<StmtNode>) -> Option<Box<StmtNode>> {
    let mut head: Option<Box<StmtNode>> = None;

    for mut statement in statements.into_iter().rev() {
        statement.sibling = head;
        head = Some(Box::new(statement));
    }

    head
}
