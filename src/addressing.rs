//! Addressing-mode tokens as they appear in the first column of the 6502
//! opcode reference table, and the emulator's `AddressingMode` they stand for.
use super::*;
use lazy_static::lazy_static;

/// Operand-encoding shapes known to the emulator's decoder.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AddressingMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Implied,
    Relative,
}

lazy_static! {
    /// Every token the reference table uses. `accumulator` folds into `Implied`.
    static ref MODE_BY_TOKEN: HashMap<&'static str, AddressingMode> = HashMap::from([
        ("immediate", AddressingMode::Immediate),
        ("zeropage", AddressingMode::ZeroPage),
        ("zeropage,X", AddressingMode::ZeroPageX),
        ("zeropage,Y", AddressingMode::ZeroPageY),
        ("absolute", AddressingMode::Absolute),
        ("absolute,X", AddressingMode::AbsoluteX),
        ("absolute,Y", AddressingMode::AbsoluteY),
        ("indirect", AddressingMode::Indirect),
        ("(indirect,X)", AddressingMode::IndirectX),
        ("(indirect),Y", AddressingMode::IndirectY),
        ("accumulator", AddressingMode::Implied),
        ("implied", AddressingMode::Implied),
        ("relative", AddressingMode::Relative),
    ]);
}

impl AddressingMode {
    /// Look up an addressing-mode token. Tokens are case sensitive, exactly as
    /// printed in the reference table.
    pub fn from_token(token: &str) -> Option<AddressingMode> { MODE_BY_TOKEN.get(token).copied() }

    /// Like from_token, but an unknown token is an `UnknownAddressingMode` error.
    pub fn resolve(line: usize, token: &str) -> Result<AddressingMode, Error> {
        AddressingMode::from_token(token).ok_or_else(|| {
            line_err!(
                line,
                ErrorKind::UnknownAddressingMode,
                "unknown addressing mode \"{}\"",
                token
            )
        })
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:?}", self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_resolves() {
        let expected = [
            ("immediate", AddressingMode::Immediate),
            ("zeropage", AddressingMode::ZeroPage),
            ("zeropage,X", AddressingMode::ZeroPageX),
            ("zeropage,Y", AddressingMode::ZeroPageY),
            ("absolute", AddressingMode::Absolute),
            ("absolute,X", AddressingMode::AbsoluteX),
            ("absolute,Y", AddressingMode::AbsoluteY),
            ("indirect", AddressingMode::Indirect),
            ("(indirect,X)", AddressingMode::IndirectX),
            ("(indirect),Y", AddressingMode::IndirectY),
            ("accumulator", AddressingMode::Implied),
            ("implied", AddressingMode::Implied),
            ("relative", AddressingMode::Relative),
        ];
        for (token, mode) in expected {
            assert_eq!(AddressingMode::resolve(1, token).unwrap(), mode, "token {}", token);
        }
        assert_eq!(MODE_BY_TOKEN.len(), expected.len());
    }
    #[test]
    fn unknown_tokens() {
        for token in ["bogus", "Immediate", "zeropage,x", "(indirect)", ""] {
            let e = AddressingMode::resolve(7, token).unwrap_err();
            assert_eq!(e.kind, ErrorKind::UnknownAddressingMode);
            assert_eq!(e.line, Some(7));
        }
    }
    #[test]
    fn display_matches_variant() {
        assert_eq!(AddressingMode::IndirectY.to_string(), "IndirectY");
        assert_eq!(AddressingMode::ZeroPage.to_string(), "ZeroPage");
    }
}
