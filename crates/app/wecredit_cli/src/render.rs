//! Terminal rendering of a [`FormView`].

use std::io::{self, Write};

use wecredit_core::FormView;

pub fn banner(out: &mut impl Write, view: &FormView) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.len()))?;
    writeln!(out, "{} (/quit to exit)", view.placeholder)
}

/// Input prompt; shows the button state so a pending request is visible.
pub fn prompt(out: &mut impl Write, view: &FormView) -> io::Result<()> {
    write!(out, "[{}] > ", view.button_label)?;
    out.flush()
}

/// Error and response lines of a settled form.
pub fn settled(out: &mut impl Write, view: &FormView) -> io::Result<()> {
    if let Some(error) = &view.error {
        writeln!(out, "error: {error}")?;
    }
    if let Some(response) = &view.response {
        writeln!(out, "{response}")?;
    }
    Ok(())
}
