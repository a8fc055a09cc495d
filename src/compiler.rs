//! Turning an opcode reference table into the emulator's opcode list is a
//! single forward pass:
//!
//!  1. Pull lines until the first empty line (or the end of the input)
//!  2. Tokenize each line into its five significant columns
//!  3. Validate the columns and build an OpcodeEntry
//!  4. Once every line has compiled, render the entries in input order
//!
//! Any bad field stops the whole run. Nothing is rendered until the last line
//! has compiled, so a failed run never leaves half a table behind.
use super::opcode::OpcodeEntry;
use super::parse::OpcodeLine;
use super::source::UntilBlank;
use super::*;

use std::fs::File;
use std::io::BufRead;

/// How the compiled entries are laid out in the generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// one statement per line, nothing else
    Bare,
    /// statements wrapped in a `const <name>: &[OpcodeEntry]` item
    Wrapped(String),
}

pub struct OpcodeCompiler {
    layout: Layout,
}
impl OpcodeCompiler {
    pub fn new(layout: Layout) -> Result<OpcodeCompiler, Error> {
        if let Layout::Wrapped(name) = &layout {
            if !catalog::is_identifier(name) {
                return Err(general_err!(format!("\"{}\" is not a valid const name", name)));
            }
        }
        Ok(OpcodeCompiler { layout })
    }

    /// Compile a single reference line.
    pub fn compile_line(&self, line: usize, src: &str) -> Result<OpcodeEntry, Error> {
        OpcodeLine::tokenize(line, src)?.to_entry()
    }

    /// Compile every line up to the first empty line. Entries come back in input order.
    pub fn compile<R: BufRead>(&self, reader: R) -> Result<Vec<OpcodeEntry>, Error> {
        let mut entries = Vec::new();
        for line in UntilBlank::new(reader.lines()) {
            let (line_num, src) = line?;
            let entry = self.compile_line(line_num, &src)?;
            verbose!("line {}: {}", line_num, entry);
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Compile the named file, or stdin for `None` or `-`.
    pub fn compile_from_file(&self, path: Option<&str>) -> Result<Vec<OpcodeEntry>, Error> {
        match path.filter(|&p| p != "-") {
            Some(p) => {
                info!("Compiling opcode table {}", p);
                let file = File::open(p).map_err(|e| general_err!(format!("can't open \"{}\": {}", p, e)))?;
                self.compile(io::BufReader::new(file))
            }
            None => {
                info!("Compiling opcode table from stdin");
                self.compile(io::stdin().lock())
            }
        }
    }

    /// Render compiled entries as Rust source.
    pub fn write_entries(&self, entries: &[OpcodeEntry], f: &mut dyn io::Write) -> Result<(), Error> {
        match &self.layout {
            Layout::Bare => {
                for e in entries {
                    writeln!(f, "{}", e)?;
                }
            }
            Layout::Wrapped(name) => {
                writeln!(f, "#[rustfmt::skip]")?;
                writeln!(f, "pub const {}: &[OpcodeEntry] = &[", name)?;
                for e in entries {
                    writeln!(f, "    {}", e)?;
                }
                writeln!(f, "];")?;
            }
        }
        Ok(())
    }
}
