// Interactive Shell - menu loop driving the Operations engine

pub mod config;
pub mod menu;
pub mod view;

pub use config::{OverflowPolicy, ShellConfig};
pub use menu::MenuChoice;
pub use view::View;

use crate::application::Operations;
use crate::domain::{OperationError, OperationKind, OperationRequest, Outcome};
use crate::error::Result;
use crate::port::{TextInput, TextOutput};
use tracing::{debug, error, info, warn};

/// Whether the session keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Text-menu calculator session
///
/// Reads menu selections and operands from a [`TextInput`], evaluates them
/// with [`Operations`] and renders every screen through a [`View`]. The
/// session ends on menu choice `0` or when the input is exhausted.
pub struct Shell<I: TextInput, O: TextOutput> {
    input: I,
    view: View<O>,
    operations: Operations,
    overflow_policy: OverflowPolicy,
}

impl<I: TextInput, O: TextOutput> Shell<I, O> {
    pub fn new(input: I, output: O, config: &ShellConfig) -> Self {
        Self {
            input,
            view: View::new(output, config.clear_screen),
            operations: Operations::new(),
            overflow_policy: config.overflow_policy,
        }
    }

    /// Run the menu loop until the user exits
    ///
    /// # Errors
    /// - `AppError::Io` if the console fails
    /// - `AppError::Operation(Overflow)` under [`OverflowPolicy::Abort`]
    pub fn run(&mut self) -> Result<()> {
        info!(overflow_policy = ?self.overflow_policy, "Calculator session started");

        while self.handle_menu_selection()? == Flow::Continue {}

        info!("Calculator session ended");
        Ok(())
    }

    /// Give back the output port (lets callers inspect what was rendered)
    pub fn into_output(self) -> O {
        self.view.into_output()
    }

    fn handle_menu_selection(&mut self) -> Result<Flow> {
        self.view.show_main_menu()?;

        let Some(line) = self.input.read_line()? else {
            debug!("Input exhausted at main menu");
            return Ok(Flow::Exit);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => Ok(Flow::Exit),
            Some(MenuChoice::Operation(kind)) => self.perform(kind),
            None => {
                debug!(input = %line, "Ignoring invalid menu selection");
                Ok(Flow::Continue)
            }
        }
    }

    /// Collect operands, evaluate, show the result and wait for enter
    fn perform(&mut self, kind: OperationKind) -> Result<Flow> {
        let heading = menu::heading(kind);
        let prompts = menu::operand_prompts(kind);

        let mut operands = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.read_number(heading, prompt)? {
                Some(value) => operands.push(value),
                None => return Ok(Flow::Exit),
            }
        }

        let request = OperationRequest::new(kind, operands);
        let message = match self.operations.evaluate(&request) {
            Ok(Outcome::Value(value)) => view::success_message(kind, &request.operands, value),
            Ok(Outcome::Uncomputable) => {
                info!(operation = %kind, operands = ?request.operands, "Result could not be computed");
                view::uncomputable_message(kind).to_string()
            }
            Err(OperationError::Overflow) if self.overflow_policy == OverflowPolicy::Abort => {
                error!(operation = %kind, operands = ?request.operands, "Overflow, aborting session");
                return Err(OperationError::Overflow.into());
            }
            Err(err) => {
                warn!(operation = %kind, operands = ?request.operands, error = %err, "Operation failed");
                view::failure_message(&err)
            }
        };

        self.view.display_result(heading, &message)?;

        match self.input.read_line()? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }

    /// Prompt until a line parses as a number; `None` if input runs out
    fn read_number(&mut self, heading: &str, prompt: &str) -> Result<Option<f64>> {
        loop {
            self.view.show_dialog(heading, prompt)?;

            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => debug!(input = %line, "Re-prompting for numeric input"),
            }
        }
    }
}
