//! Terminal rendering for notices and roster inputs.

use jobchart_core::{Grade, Notice, Notifier, RosterInputs};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Prints each notice as one line; warnings get a `warning:` prefix.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl TerminalNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, notice: Notice) {
        let prefix = if notice.is_warning() { "warning: " } else { "" };
        // A closed stdout must not abort the action that already ran.
        let _ = writeln!(self.out, "{prefix}{}", notice.message());
    }
}

/// Saved roster inputs, one indented name per line under each grade heading.
pub fn render_inputs(inputs: &RosterInputs) -> String {
    let mut out = String::new();
    for grade in Grade::ALL {
        let _ = writeln!(out, "{}:", grade.label());
        let text = inputs.text(grade);
        if text.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for name in text.lines() {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_inputs, TerminalNotifier};
    use jobchart_core::{Notice, Notifier, RosterInputs};

    #[test]
    fn notices_print_one_line_each() {
        let mut notifier = TerminalNotifier::new(Vec::new());
        notifier.notify(Notice::ListsSaved);
        notifier.notify(Notice::EmptyRosters);

        let printed = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            printed,
            "Lists saved!\nwarning: Please enter at least one student in either list.\n"
        );
    }

    #[test]
    fn inputs_render_under_grade_headings() {
        let inputs = RosterInputs {
            third: "Ann\nBo".to_string(),
            second: String::new(),
        };
        assert_eq!(
            render_inputs(&inputs),
            "3rd grade:\n  Ann\n  Bo\n2nd grade:\n  (empty)\n"
        );
    }
}
