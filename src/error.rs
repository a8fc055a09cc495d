use std::{convert::From, fmt};

/// Simple custom Error for the table generator
pub struct Error {
    pub kind: ErrorKind,
    /// 1-based input line the error was found on, if it came from a line
    pub line: Option<usize>,
    pub msg: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// addressing-mode token not in the mode table
    UnknownAddressingMode,
    /// opcode token is not a two-digit hex byte
    InvalidOpcode,
    /// instruction length is not a positive byte count
    InvalidLength,
    /// cycle count is malformed or carries more than two markers
    InvalidCycleSpec,
    /// line doesn't have the expected fields
    Syntax,
    /// catalog lines don't form complete mnemonic/description pairs
    Shape,
    /// underlying io error
    IO,
    /// catch-all for other errors
    General,
}

impl Error {
    pub fn new(kind: ErrorKind, line: Option<usize>, message: &str) -> Error {
        Error {
            kind,
            line,
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}: {}", red!("tablegen::Error"), self) }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        if self.kind != ErrorKind::General {
            write!(f, "{:?}: ", self.kind)?;
        }
        write!(f, "{}", self.msg)
    }
}
impl std::error::Error for Error {}
