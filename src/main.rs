//! # Opcode table generator for a MOS 6502 emulator
//!
//! Turns hand-maintained reference text into the Rust sources the emulator's
//! decoder is built from.
//!
//! ## Getting Started
//! To compile an opcode reference table:
//! ```text
//! tablegen opcodes opcodes.txt > opcode_list.rs
//! ```
//! ...or pipe the table in on stdin, ending it with an empty line. To generate
//! the `Instruction` enum from the catalog of mnemonics:
//! ```text
//! tablegen instructions instructions.txt > instructions.rs
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod addressing;
mod catalog;
mod compiler;
mod config;
mod error;
mod opcode;
mod parse;
mod source;
use crate::catalog::Catalog;
use crate::compiler::{Layout, OpcodeCompiler};
use config::Command;
use std::collections::HashMap;
use std::fs::File;
use std::result::Result;
use std::{fmt, io};
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    // process_command does all the work
    if let Err(e) = process_command(&config::ARGS.command, config::output_path()) {
        eprintln!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}

/// Generate the requested source into memory, then hand it to the output file
/// (or stdout). A failed generation never creates the output file.
fn process_command(cmd: &Command, output: Option<&str>) -> Result<(), Error> {
    let generated = generate(cmd)?;
    match output {
        Some(path) => {
            File::create(path)
                .and_then(|mut f| io::Write::write_all(&mut f, generated.as_bytes()))
                .map_err(|e| general_err!(format!("can't write \"{}\": {}", path, e)))?;
            info!("Wrote {}", path);
        }
        None => io::Write::write_all(&mut io::stdout().lock(), generated.as_bytes())?,
    }
    Ok(())
}

fn generate(cmd: &Command) -> Result<String, Error> {
    let mut out = Vec::new();
    match cmd {
        Command::Opcodes {
            file,
            wrap,
            name,
            dup_warn,
        } => {
            let layout = if *wrap {
                Layout::Wrapped(name.clone())
            } else {
                Layout::Bare
            };
            let compiler = OpcodeCompiler::new(layout)?;
            let entries = compiler.compile_from_file(file.as_deref())?;
            if *dup_warn {
                for (op, count) in opcode::duplicate_opcodes(&entries) {
                    warn!("opcode 0x{:02X} appears {} times", op, count);
                }
            }
            compiler.write_entries(&entries, &mut out)?;
            verbose!("{} opcode entries compiled", entries.len());
        }
        Command::Instructions {
            file,
            allow_unpaired,
            enum_name,
        } => {
            let catalog = Catalog::read_from_file(enum_name, file, *allow_unpaired)?;
            catalog.write_rust(&mut out)?;
        }
    }
    String::from_utf8(out).map_err(|e| general_err!(e))
}
