#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A source location: 1-based line number and the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "read x;\n  write x\r\nend";

        assert_eq!(super::get_line_at_position(source, 1), Some("read x;"));
        assert_eq!(super::get_line_at_position(source, 2), Some("  write x"));
        assert_eq!(super::get_line_at_position(source, 3), Some("end"));
        assert_eq!(super::get_line_at_position(source, 4), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_render_error_points_at_line() {
        use crate::errors::errors::{Error, ErrorImpl};
        use crate::Position;
        use std::rc::Rc;

        let source = "read x;\n   x := ;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from(";"),
            },
            Position(2, Rc::new(String::from("sample.tny"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: `;`, did you miss a semicolon?)");
        assert_eq!(lines[1], "-> sample.tny");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := ;");
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (...)
        -> sample.tny
          |
        2 | x := ;
          |
    */

    let position = error.get_position();
    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line_at_position(source, position.line()) {
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}
