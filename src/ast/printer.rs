//! Indented listing of a syntax tree.
//!
//! Each node is printed on its own line, children two spaces deeper than
//! their parent, statements of a sequence at the same depth:
//!
//! ```text
//! If
//!   Op: <
//!     Id: x
//!     Const: 10
//!   Write
//!     Id: x
//! ```

use super::{
    ast::NodeRef,
    expressions::ExprKind,
    statements::{Siblings, StmtKind, StmtNode},
};

const INDENT: usize = 2;

pub fn print_tree(root: Option<&StmtNode>) -> String {
    let mut result = String::new();
    let mut pending: Vec<(NodeRef<'_>, usize)> = Vec::new();

    push_sequence(&mut pending, root, 0);

    while let Some((node, indent)) = pending.pop() {
        result.push_str(&" ".repeat(indent));
        result.push_str(&label(node));
        result.push('\n');

        let children: Vec<NodeRef<'_>> = node.children().collect();
        for child in children.into_iter().rev() {
            match child {
                NodeRef::Stmt(head) => push_sequence(&mut pending, Some(head), indent + INDENT),
                NodeRef::Expr(_) => pending.push((child, indent + INDENT)),
            }
        }
    }

    result
}

fn push_sequence<'a>(pending: &mut Vec<(NodeRef<'a>, usize)>, head: Option<&'a StmtNode>, indent: usize) {
    let statements: Vec<&StmtNode> = Siblings::new(head).collect();
    pending.extend(statements.into_iter().rev().map(|stmt| (NodeRef::Stmt(stmt), indent)));
}

fn label(node: NodeRef<'_>) -> String {
    match node {
        NodeRef::Stmt(stmt) => match &stmt.kind {
            StmtKind::If { .. } => String::from("If"),
            StmtKind::Repeat { .. } => String::from("Repeat"),
            StmtKind::Assign { name, .. } => format!("Assign to: {}", name_or_missing(name)),
            StmtKind::Read { name } => format!("Read: {}", name_or_missing(name)),
            StmtKind::Write { .. } => String::from("Write"),
            StmtKind::While { .. } => String::from("While"),
            StmtKind::DoWhile { .. } => String::from("Do-While"),
            StmtKind::For { name, direction, .. } => match direction {
                Some(direction) => format!("For: {} ({})", name_or_missing(name), direction),
                None => format!("For: {}", name_or_missing(name)),
            },
        },
        NodeRef::Expr(expr) => match &expr.kind {
            ExprKind::Op { operator, .. } => format!("Op: {}", operator),
            ExprKind::Const { value } => format!("Const: {}", value),
            ExprKind::Id { name } => format!("Id: {}", name),
        },
    }
}

fn name_or_missing(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<missing>")
}
