#![allow(unused_macros, dead_code)]
// Standard output carries the generated source, so every diagnostic goes to stderr.
macro_rules! verbose {
    ($($p:expr),+) => {
        if config::ARGS.verbose {
            eprintln!(concat!(green!("VERBOSE"),": {}"),format_args!($($p),+));
        }
    }
}
macro_rules! info {
    ($($p:expr),+) => {
        eprintln!(concat!(blue!("INFO"),": {}"),format_args!($($p),+))
    }
}

macro_rules! warn {
    ($($p:expr),+) => {
        eprintln!(concat!(yellow!("WARNING"),": {}"),format_args!($($p),+))
    }
}
macro_rules! line_err {
    ($line:expr, $kind:expr, $($msg:expr),+) => {
        Error::new($kind, Some($line), format!($($msg),+).as_str())
    };
}
macro_rules! general_err {
    ($msg:expr) => {
        Error::new(crate::ErrorKind::General, None, format!("{}", $msg).as_str())
    };
}
macro_rules! syntax_err_line {
    ($line:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::Syntax,
            Some($line),
            format!($($msg),+).as_str(),
        )
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! green {
    ($msg:expr) => {
        color!(92, $msg)
    };
}
macro_rules! yellow {
    ($msg:expr) => {
        color!(93, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
