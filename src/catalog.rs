//! The instruction catalog is a plain list of alternating lines:
//! ```text
//! LDA
//! load accumulator
//! STA
//! store accumulator
//! ```
//! From it we generate the emulator's `Instruction` enum, each variant
//! documented with its description, and a `Display` impl mapping each variant
//! back to that description.
use super::*;

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;

lazy_static! {
    static ref RE_IDENT: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    /// Strict and reserved keywords of every edition; none can name an item or variant.
    static ref KEYWORDS: HashSet<&'static str> = HashSet::from([
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false",
        "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
        "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
        "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try", "typeof",
        "unsized", "virtual", "yield",
    ]);
}

/// True if `s` can name a generated item: ASCII identifier syntax, not `_`, not a keyword.
pub fn is_identifier(s: &str) -> bool { RE_IDENT.is_match(s) && s != "_" && !KEYWORDS.contains(s) }

/// Titlecase form of a leading character where it differs from upper case:
/// Latin digraphs, Greek letters carrying iota subscript, and the Latin
/// ligatures and sharp s whose titlecase is two characters.
fn titlecase(c: char) -> Option<String> {
    let t = match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)?
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => c,
        '\u{1FB3}' | '\u{1FBC}' => '\u{1FBC}',
        '\u{1FC3}' | '\u{1FCC}' => '\u{1FCC}',
        '\u{1FF3}' | '\u{1FFC}' => '\u{1FFC}',
        '\u{00DF}' => return Some("Ss".to_string()),
        '\u{0149}' => return Some("\u{02BC}N".to_string()),
        '\u{FB00}' => return Some("Ff".to_string()),
        '\u{FB01}' => return Some("Fi".to_string()),
        '\u{FB02}' => return Some("Fl".to_string()),
        '\u{FB03}' => return Some("Ffi".to_string()),
        '\u{FB04}' => return Some("Ffl".to_string()),
        '\u{FB05}' | '\u{FB06}' => return Some("St".to_string()),
        _ => return None,
    };
    Some(t.to_string())
}

/// First character title-cased and everything after it lower-cased, so
/// "compare with X" becomes "Compare with x" and "ǆ" becomes "ǅ".
pub fn capitalize(s: &str) -> String {
    match s.chars().next() {
        Some(first) => {
            let mut out = titlecase(first).unwrap_or_else(|| first.to_uppercase().collect());
            // lower-case the whole string so word-final sigma sees the first character
            let lower = s.to_lowercase();
            let skip: usize = first.to_lowercase().map(char::len_utf8).sum();
            out.push_str(&lower[skip..]);
            out
        }
        None => String::new(),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InstructionDefinition {
    pub mnemonic: String,
    pub description: String,
}

#[derive(Debug)]
pub struct Catalog {
    pub enum_name: String,
    pub defs: Vec<InstructionDefinition>,
}

impl Catalog {
    /// Build a catalog from alternating mnemonic/description lines. Lines are
    /// trimmed and trailing blank lines are ignored. An odd number of lines is a
    /// Shape error unless `allow_unpaired` is set, in which case the last line is
    /// dropped.
    pub fn from_lines<I, T>(enum_name: &str, lines: I, allow_unpaired: bool) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        if !is_identifier(enum_name) {
            return Err(general_err!(format!("\"{}\" is not a valid enum name", enum_name)));
        }
        let mut lines: Vec<String> = lines.into_iter().map(|s| s.as_ref().trim().to_string()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.len() % 2 != 0 {
            let last = lines.len();
            if !allow_unpaired {
                return Err(line_err!(
                    last,
                    ErrorKind::Shape,
                    "mnemonic \"{}\" has no description",
                    lines[last - 1]
                ));
            }
            warn!("line {}: dropping unpaired mnemonic \"{}\"", last, lines[last - 1]);
            lines.pop();
        }
        let mut defs = Vec::with_capacity(lines.len() / 2);
        for (i, pair) in lines.chunks(2).enumerate() {
            let line = 2 * i + 1;
            if !is_identifier(&pair[0]) {
                return Err(syntax_err_line!(line, "\"{}\" is not a valid mnemonic", pair[0]));
            }
            if let Some(prev) = defs.iter().position(|d: &InstructionDefinition| d.mnemonic == pair[0]) {
                return Err(syntax_err_line!(
                    line,
                    "mnemonic \"{}\" already defined on line {}",
                    pair[0],
                    2 * prev + 1
                ));
            }
            defs.push(InstructionDefinition {
                mnemonic: pair[0].clone(),
                description: capitalize(&pair[1]),
            });
        }
        Ok(Catalog {
            enum_name: enum_name.to_string(),
            defs,
        })
    }

    pub fn read_from_file(enum_name: &str, path: &str, allow_unpaired: bool) -> Result<Self, Error> {
        info!("Reading instruction catalog {}", path);
        let file = File::open(path).map_err(|e| general_err!(format!("can't open \"{}\": {}", path, e)))?;
        let lines = io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, io::Error>>()?;
        let catalog = Catalog::from_lines(enum_name, lines, allow_unpaired)?;
        verbose!("{} instructions in {}", catalog.defs.len(), path);
        Ok(catalog)
    }

    /// Write the enum definition followed by its Display impl.
    pub fn write_rust(&self, f: &mut dyn io::Write) -> Result<(), Error> {
        writeln!(f, "#[derive(Copy, Clone, Debug)]")?;
        writeln!(f, "pub enum {} {{", self.enum_name)?;
        for d in &self.defs {
            writeln!(f, "    /// {}", d.description)?;
            writeln!(f, "    {},", d.mnemonic)?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "impl std::fmt::Display for {} {{", self.enum_name)?;
        writeln!(f, "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{")?;
        writeln!(f, "        use {}::*;", self.enum_name)?;
        writeln!(f, "        f.write_str(match *self {{")?;
        for d in &self.defs {
            writeln!(f, "            {} => {:?},", d.mnemonic, d.description)?;
        }
        writeln!(f, "        }})")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(c: &Catalog) -> String {
        let mut out = Vec::new();
        c.write_rust(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
    #[test]
    fn capitalization() {
        assert_eq!(capitalize("load accumulator"), "Load accumulator");
        assert_eq!(capitalize("compare with X"), "Compare with x");
        assert_eq!(capitalize("NO OPERATION"), "No operation");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("\u{01C6}x"), "\u{01C5}x");
        assert_eq!(capitalize("\u{01CA}A"), "\u{01CB}a");
        assert_eq!(capitalize("\u{1FB3}\u{0391}"), "\u{1FBC}\u{03B1}");
        assert_eq!(capitalize("\u{00DF}x"), "Ssx");
        assert_eq!(capitalize("\u{FB01}X"), "Fix");
        assert_eq!(capitalize("\u{1F80}"), "\u{1F88}");
        assert_eq!(capitalize("x \u{03A3}\u{0391}\u{03A3}"), "X \u{03C3}\u{03B1}\u{03C2}");
        assert_eq!(capitalize("a\u{03A3}"), "A\u{03C2}");
    }
    #[test]
    fn keywords_are_not_identifiers() {
        for kw in ["const", "enum", "fn", "type", "self", "Self", "match", "async", "yield", "try", "gen"] {
            assert!(!is_identifier(kw), "{}", kw);
        }
        for ok in ["LDA", "Instruction", "OPCODE_LIST", "Type", "selfie"] {
            assert!(is_identifier(ok), "{}", ok);
        }
        assert!(!is_identifier("_"));
    }
    #[test]
    fn keyword_mnemonics_and_enum_names() {
        let e = Catalog::from_lines("Instruction", ["LDA", "load accumulator", "type", "a"], false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        assert_eq!(e.line, Some(3));
        let e = Catalog::from_lines("Instruction", ["fn", "a"], false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        assert_eq!(e.line, Some(1));
        let e = Catalog::from_lines("enum", ["LDA", "load accumulator"], false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::General);
    }
    #[test]
    fn load_and_store() {
        let c = Catalog::from_lines(
            "Instruction",
            ["LDA", "load accumulator", "STA", "store accumulator"],
            false,
        )
        .unwrap();
        assert_eq!(
            c.defs,
            vec![
                InstructionDefinition {
                    mnemonic: "LDA".to_string(),
                    description: "Load accumulator".to_string(),
                },
                InstructionDefinition {
                    mnemonic: "STA".to_string(),
                    description: "Store accumulator".to_string(),
                },
            ]
        );
        assert_eq!(
            render(&c),
            r#"#[derive(Copy, Clone, Debug)]
pub enum Instruction {
    /// Load accumulator
    LDA,
    /// Store accumulator
    STA,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Instruction::*;
        f.write_str(match *self {
            LDA => "Load accumulator",
            STA => "Store accumulator",
        })
    }
}
"#
        );
    }
    #[test]
    fn unpaired_trailing_line() {
        let lines = ["LDA", "load accumulator", "STA"];
        let e = Catalog::from_lines("Instruction", lines, false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Shape);
        assert_eq!(e.line, Some(3));
        let c = Catalog::from_lines("Instruction", lines, true).unwrap();
        assert_eq!(c.defs.len(), 1);
    }
    #[test]
    fn trailing_blank_lines_and_padding() {
        let c = Catalog::from_lines("Op", ["  NOP ", "no operation  ", "", ""], false).unwrap();
        assert_eq!(c.defs[0].mnemonic, "NOP");
        assert_eq!(c.defs[0].description, "No operation");
        assert!(render(&c).contains("pub enum Op {"));
    }
    #[test]
    fn bad_mnemonics() {
        let e = Catalog::from_lines("Instruction", ["load accumulator", "LDA"], false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        let e = Catalog::from_lines("Instruction", ["LDA", "a", "STA", "b", "LDA", "c"], false).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        assert_eq!(e.line, Some(5));
        assert!(Catalog::from_lines("my enum", ["LDA", "a"], false).is_err());
    }
    #[test]
    fn descriptions_are_escaped() {
        let c = Catalog::from_lines("Instruction", ["XYZ", "say \"hi\""], false).unwrap();
        assert!(render(&c).contains(r#"XYZ => "Say \"hi\"","#));
    }
}
