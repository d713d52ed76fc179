use fcmp_common::{CompareOptions, Diagnostics, FcError};
use fcmp_core::binary_diff::SizeRelation;
use fcmp_core::path::to_native;
use fcmp_core::text_diff::{HunkSide, TextLine};
use fcmp_core::{BinaryReport, FileReport, TextReport};
use std::io::{self, Write};

pub const NO_DIFFERENCES: &str = "FC: no differences encountered";
pub const RESYNC_FAILED: &str = "Resync failed.  Files are too different.";

/// Renders comparison results in the classic FC layout
pub struct ConsoleReporter<W: Write> {
    out: W,
    abbreviated: bool,
    line_numbers: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(options: &CompareOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, options: &CompareOptions) -> Self {
        Self {
            out,
            abbreviated: options.abbreviated,
            line_numbers: options.line_numbers,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn comparing(&mut self, left: &str, right: &str) -> io::Result<()> {
        writeln!(self.out, "Comparing files {} and {}", display(left), display(right))
    }

    /// Writes the body for one pair followed by the separating blank line
    pub fn file_report(&mut self, left: &str, right: &str, report: &FileReport) -> io::Result<()> {
        match report {
            FileReport::SamePath => writeln!(self.out, "{NO_DIFFERENCES}")?,
            FileReport::Binary(binary) => self.binary(left, right, binary)?,
            FileReport::Text(text) => self.text(left, right, text)?,
            FileReport::CannotOpen { path, .. } => cannot_open(path),
            FileReport::CannotRead { path, reason } => {
                eprintln!("FC: cannot read from {} - {}", display(path), reason)
            }
        }
        writeln!(self.out)
    }

    fn binary(&mut self, left: &str, right: &str, report: &BinaryReport) -> io::Result<()> {
        for diff in &report.differences {
            writeln!(self.out, "{}", report.format_difference(diff))?;
        }
        match report.size_relation() {
            SizeRelation::LeftLonger => self.longer_than(left, right),
            SizeRelation::RightLonger => self.longer_than(right, left),
            SizeRelation::Equal if report.differences.is_empty() => {
                writeln!(self.out, "{NO_DIFFERENCES}")
            }
            SizeRelation::Equal => Ok(()),
        }
    }

    fn longer_than(&mut self, longer: &str, shorter: &str) -> io::Result<()> {
        writeln!(self.out, "FC: {} longer than {}", display(longer), display(shorter))
    }

    fn text(&mut self, left: &str, right: &str, report: &TextReport) -> io::Result<()> {
        if report.hunks.is_empty() && !report.resync_failed {
            return writeln!(self.out, "{NO_DIFFERENCES}");
        }
        for hunk in &report.hunks {
            self.hunk_side(left, &hunk.left)?;
            self.hunk_side(right, &hunk.right)?;
            writeln!(self.out, "*****")?;
            writeln!(self.out)?;
        }
        if report.resync_failed {
            writeln!(self.out, "{RESYNC_FAILED}")?;
        }
        Ok(())
    }

    fn hunk_side(&mut self, name: &str, side: &HunkSide) -> io::Result<()> {
        writeln!(self.out, "***** {}", display(name))?;
        let lines = side.display_lines();
        match lines.as_slice() {
            [first, .., last] if self.abbreviated && lines.len() > 2 => {
                self.line(first)?;
                writeln!(self.out, "...")?;
                self.line(last)
            }
            _ => lines.iter().try_for_each(|line| self.line(line)),
        }
    }

    fn line(&mut self, line: &TextLine) -> io::Result<()> {
        if self.line_numbers {
            writeln!(self.out, "{:5}:  {}", line.number, line.text)
        } else {
            writeln!(self.out, "{}", line.text)
        }
    }
}

/// Notices from the wildcard matcher go to stderr
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report(&mut self, notice: &FcError) {
        match notice {
            FcError::NotFound(pattern) => cannot_open(pattern),
            FcError::Desynchronized { missing, .. } => cannot_open(missing),
            other => eprintln!("FC: {other}"),
        }
    }
}

fn cannot_open(name: &str) {
    eprintln!("FC: cannot open {} - No such file or folder", display(name));
}

/// Backslash form to what the user typed on this platform
fn display(path: &str) -> String {
    to_native(path).display().to_string()
}
