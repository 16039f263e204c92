// Main menu choices and operand prompts

use crate::domain::OperationKind;

/// A valid selection from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Operation(OperationKind),
}

impl MenuChoice {
    /// Parse a menu line: a (whitespace-trimmed) integer from 0 to 6.
    ///
    /// Anything else yields `None` and the menu is shown again.
    pub fn parse(line: &str) -> Option<Self> {
        let code: i32 = line.trim().parse().ok()?;
        let choice = match code {
            0 => MenuChoice::Exit,
            1 => MenuChoice::Operation(OperationKind::Add),
            2 => MenuChoice::Operation(OperationKind::Subtract),
            3 => MenuChoice::Operation(OperationKind::Multiply),
            4 => MenuChoice::Operation(OperationKind::Divide),
            5 => MenuChoice::Operation(OperationKind::Power),
            6 => MenuChoice::Operation(OperationKind::SquareRoot),
            _ => return None,
        };
        Some(choice)
    }
}

/// Heading used by every screen of an operation
pub fn heading(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Add => "Addition",
        OperationKind::Subtract => "Subtraction",
        OperationKind::Multiply => "Multiplication",
        OperationKind::Divide => "Division",
        OperationKind::Power => "Exponentiation",
        OperationKind::SquareRoot => "Square root extraction",
    }
}

/// One prompt per operand, in the order the operands are collected
pub fn operand_prompts(kind: OperationKind) -> &'static [&'static str] {
    match kind {
        OperationKind::Add => &[
            "Enter the first term and press enter!",
            "Enter the second term and press enter!",
        ],
        OperationKind::Subtract => &[
            "Enter the minuend and press enter!",
            "Enter the subtrahend and press enter!",
        ],
        OperationKind::Multiply => &[
            "Enter the multiplicand and press enter!",
            "Enter the multiplier and press enter!",
        ],
        OperationKind::Divide => &[
            "Enter the dividend and press enter!",
            "Enter the divisor and press enter!",
        ],
        OperationKind::Power => &[
            "Enter the base and press enter!",
            "Enter the exponent and press enter!",
        ],
        OperationKind::SquareRoot => &["Enter the radicand and press enter!"],
    }
}
