use clap::{Parser, Subcommand};
use lazy_static::lazy_static;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Write the generated source to this file rather than stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Enable verbose output (on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile opcode reference lines into OpcodeEntry records
    Opcodes {
        /// Opcode reference text (reads stdin if omitted or "-")
        file: Option<String>,

        /// Wrap the records in a complete const slice item
        #[arg(short, long)]
        wrap: bool,

        /// Name of the const item used with --wrap
        #[arg(long, default_value = "OPCODE_LIST")]
        name: String,

        /// Warn (on stderr) about opcode values that appear more than once
        #[arg(long)]
        dup_warn: bool,
    },
    /// Generate the Instruction enum and its Display impl from a catalog
    Instructions {
        /// Alternating mnemonic/description lines
        #[arg(default_value = "instructions.txt")]
        file: String,

        /// Drop a trailing unpaired mnemonic instead of failing
        #[arg(long)]
        allow_unpaired: bool,

        /// Name of the generated enum
        #[arg(long, default_value = "Instruction")]
        enum_name: String,
    },
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "opcodes"])
    } else {
        Args::parse()
    };
}

pub fn init() { lazy_static::initialize(&ARGS); }
pub fn output_path() -> Option<&'static str> { ARGS.output.as_deref().filter(|p| *p != "-") }
