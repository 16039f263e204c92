// View - renders calculator screens through a TextOutput port

use crate::domain::{OperationError, OperationKind};
use crate::port::TextOutput;
use std::io;

const SEPARATOR: &str = "---------------------";

const MAIN_MENU: &[&str] = &[
    "*** Calculator ***",
    SEPARATOR,
    "",
    "1 - Addition",
    "2 - Subtraction",
    "3 - Multiplication",
    "4 - Division",
    "5 - Exponentiation",
    "6 - Square root extraction",
    "",
    "0 - Exit application",
    "",
    SEPARATOR,
    "Enter a numeric choice from the menu above and press enter!",
    "",
];

pub struct View<O: TextOutput> {
    output: O,
    clear_screen: bool,
}

impl<O: TextOutput> View<O> {
    pub fn new(output: O, clear_screen: bool) -> Self {
        Self {
            output,
            clear_screen,
        }
    }

    /// Display the main menu
    pub fn show_main_menu(&mut self) -> io::Result<()> {
        self.begin_screen()?;
        MAIN_MENU
            .iter()
            .try_for_each(|line| self.output.write_line(line))
    }

    /// Display a dialog asking the user for input
    pub fn show_dialog(&mut self, heading: &str, message: &str) -> io::Result<()> {
        self.begin_screen()?;
        self.output.write_line(&format!("*** {heading} ***"))?;
        self.output.write_line(SEPARATOR)?;
        self.output.write_line(message)?;
        self.output.write_line("")
    }

    /// Display a result and ask the user to acknowledge it
    pub fn display_result(&mut self, heading: &str, message: &str) -> io::Result<()> {
        self.begin_screen()?;
        self.output.write_line(&format!("*** {heading} ***"))?;
        self.output.write_line(SEPARATOR)?;
        self.output.write_line("")?;
        self.output.write_line(message)?;
        self.output.write_line("")?;
        self.output.write_line(SEPARATOR)?;
        self.output.write_line("Press enter to continue ...")?;
        self.output.write_line("")
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn begin_screen(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.output.clear()?;
        }
        Ok(())
    }
}

/// Message shown when an operation produced a value
pub fn success_message(kind: OperationKind, operands: &[f64], value: f64) -> String {
    match (kind, operands) {
        (OperationKind::Add, _) => format!("The sum of the addition is {value}."),
        (OperationKind::Subtract, _) => format!("The difference of the subtraction is {value}."),
        (OperationKind::Multiply, _) => {
            format!("The product of the multiplication is {value}.")
        }
        (OperationKind::Divide, _) => format!("The quotient of the division is {value}."),
        (OperationKind::Power, &[base, exponent]) => {
            format!("{base} raised to the power of {exponent} is equal to {value}.")
        }
        (OperationKind::Power, _) => format!("The result of the exponentiation is {value}."),
        (OperationKind::SquareRoot, _) => format!("The root extracted is {value}."),
    }
}

/// Message shown when power/square root has no real result
pub fn uncomputable_message(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Power => "The exponentiation could not be computed.",
        OperationKind::SquareRoot => "The square root extraction could not be computed.",
        _ => "The operation could not be computed.",
    }
}

/// User-facing text for a hard failure
pub fn failure_message(err: &OperationError) -> String {
    match err {
        OperationError::DivideByZero => "You can not divide by zero, please try again.".to_string(),
        OperationError::Overflow => {
            "The result is outside the range of representable numbers, please try again."
                .to_string()
        }
        OperationError::InvalidArgument(reason) => format!("Invalid input: {reason}."),
    }
}
