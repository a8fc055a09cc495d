//! Field extraction for opcode reference lines.
//!
//! A line looks like:
//! ```text
//! zeropage,X    LDA oper,X    b5  2  4*
//! ```
//! Only the first two and the last three whitespace separated columns carry
//! meaning. Anything in between (operand syntax, flags, notes) is skipped.
//!
//! | column | meaning | example |
//! | --- | --- | --- |
//! | first | addressing-mode token | `zeropage,X` |
//! | second | instruction mnemonic | `LDA` |
//! | third from last | opcode, two hex digits | `b5` |
//! | second from last | instruction length in bytes | `2` |
//! | last | base cycles, then 0-2 `*` markers | `4*` |
use super::addressing::AddressingMode;
use super::opcode::{CycleRule, OpcodeEntry};
use super::*;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_OPCODE: Regex = Regex::new(r"^[0-9A-Fa-f]{2}$").unwrap();
    static ref RE_COUNT: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref RE_CYCLES: Regex = Regex::new(r"^([0-9]+)(\**)$").unwrap();
}

/// The significant columns of one reference line, borrowed from the line.
#[derive(Debug, PartialEq, Eq)]
pub struct OpcodeLine<'a> {
    pub line: usize,
    pub addressing: &'a str,
    pub instruction: &'a str,
    pub opcode: &'a str,
    pub length: &'a str,
    pub cycles: &'a str,
}

impl<'a> OpcodeLine<'a> {
    /// Split a line into its significant columns. Fewer than five columns is a
    /// syntax error since the leading and trailing fields would overlap.
    pub fn tokenize(line: usize, src: &'a str) -> Result<Self, Error> {
        let fields: Vec<&str> = src.split_whitespace().collect();
        if fields.len() < 5 {
            return Err(syntax_err_line!(
                line,
                "expected at least 5 columns but found {} in \"{}\"",
                fields.len(),
                src.trim()
            ));
        }
        let n = fields.len();
        Ok(OpcodeLine {
            line,
            addressing: fields[0],
            instruction: fields[1],
            opcode: fields[n - 3],
            length: fields[n - 2],
            cycles: fields[n - 1],
        })
    }

    /// Validate every field and build the entry. Fields are checked in column
    /// significance order: mode, opcode, length, then cycles.
    pub fn to_entry(&self) -> Result<OpcodeEntry, Error> {
        let mode = AddressingMode::resolve(self.line, self.addressing)?;
        let opcode = parse_opcode(self.line, self.opcode)?;
        let length = parse_length(self.line, self.length)?;
        let (base_cycles, rule) = parse_cycles(self.line, self.cycles)?;
        Ok(OpcodeEntry {
            opcode,
            instruction: self.instruction.to_string(),
            mode,
            length,
            base_cycles,
            rule,
        })
    }
}

/// Parse a two-hex-digit opcode byte.
pub fn parse_opcode(line: usize, token: &str) -> Result<u8, Error> {
    let bad = || line_err!(line, ErrorKind::InvalidOpcode, "invalid opcode \"{}\"", token);
    if !RE_OPCODE.is_match(token) {
        return Err(bad());
    }
    u8::from_str_radix(token, 16).map_err(|_| bad())
}

/// Parse the instruction length; it must be a decimal byte count of at least 1.
pub fn parse_length(line: usize, token: &str) -> Result<u8, Error> {
    RE_COUNT
        .is_match(token)
        .then(|| token.parse::<u8>().ok())
        .flatten()
        .filter(|&n| n > 0)
        .ok_or_else(|| line_err!(line, ErrorKind::InvalidLength, "invalid instruction length \"{}\"", token))
}

/// Split a cycle count such as `5*` into the base count and its rule.
pub fn parse_cycles(line: usize, token: &str) -> Result<(u8, CycleRule), Error> {
    let bad = |why: &str| line_err!(line, ErrorKind::InvalidCycleSpec, "invalid cycle count \"{}\" ({})", token, why);
    let c = RE_CYCLES.captures(token).ok_or_else(|| bad("expected digits followed by up to two '*'"))?;
    let markers = c.get(2).map_or(0, |m| m.as_str().len());
    let rule = CycleRule::from_markers(markers).ok_or_else(|| bad("more than two '*' markers"))?;
    let base = c[1]
        .parse::<u8>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| bad("base count must be 1-255"))?;
    Ok((base, rule))
}
