use super::addressing::AddressingMode;
use super::*;

/// How the base cycle count of an instruction may grow at runtime. Written in
/// the reference table as trailing `*` markers on the cycle count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleRule {
    /// The operation always takes the listed number of cycles.
    None,
    /// Add 1 to cycles if a page boundary is crossed.
    AddOnCross,
    /// Add 1 to cycles if the branch is taken to the same page, 2 if to another page.
    AddOneTwo,
}
impl CycleRule {
    /// Map a count of trailing markers to its rule. Only 0, 1 and 2 are meaningful.
    pub fn from_markers(count: usize) -> Option<CycleRule> {
        match count {
            0 => Some(CycleRule::None),
            1 => Some(CycleRule::AddOnCross),
            2 => Some(CycleRule::AddOneTwo),
            _ => None,
        }
    }
}
impl fmt::Display for CycleRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:?}", self) }
}

/// One row of the emulator's opcode table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub opcode: u8,
    /// instruction symbol, taken verbatim from the source line
    pub instruction: String,
    pub mode: AddressingMode,
    /// instruction size in bytes, including the operand
    pub length: u8,
    pub base_cycles: u8,
    pub rule: CycleRule,
}

impl fmt::Display for OpcodeEntry {
    /// Renders the entry as the statement the emulator's opcode list is made of.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "OpcodeEntry::new(0x{:02X}, Instruction::{}, AddressingMode::{}, {}, {}, CycleRule::{}),",
            self.opcode, self.instruction, self.mode, self.length, self.base_cycles, self.rule
        )
    }
}

/// Opcode values that occur more than once, with their number of occurrences,
/// in order of first appearance.
pub fn duplicate_opcodes(entries: &[OpcodeEntry]) -> Vec<(u8, usize)> {
    let mut counts = [0usize; 256];
    let mut order = Vec::new();
    for e in entries {
        if counts[e.opcode as usize] == 0 {
            order.push(e.opcode);
        }
        counts[e.opcode as usize] += 1;
    }
    order
        .into_iter()
        .filter(|&op| counts[op as usize] > 1)
        .map(|op| (op, counts[op as usize]))
        .collect()
}
