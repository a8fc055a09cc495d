use super::*;

/// Pulls numbered lines from a line source until the first empty (or
/// whitespace-only) line or the end of the stream, whichever comes first.
/// Nothing past the terminating line is ever read.
pub struct UntilBlank<I> {
    lines: I,
    line_num: usize,
    done: bool,
}

impl<I> UntilBlank<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        UntilBlank {
            lines,
            line_num: 0,
            done: false,
        }
    }
}

impl<I> Iterator for UntilBlank<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<(usize, String), Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.line_num += 1;
        match self.lines.next() {
            Some(Ok(line)) if !line.trim().is_empty() => Some(Ok((self.line_num, line))),
            Some(Err(e)) => {
                self.done = true;
                Some(Err(line_err!(self.line_num, ErrorKind::IO, "read failed: {}", e)))
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_lines(v: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        v.iter().map(|s| Ok(s.to_string())).collect::<Vec<_>>().into_iter()
    }
    #[test]
    fn stops_at_first_blank() {
        let got: Vec<(usize, String)> = UntilBlank::new(ok_lines(&["a", "b", "", "c"]))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(got, vec![(1, "a".to_string()), (2, "b".to_string())]);
    }
    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(UntilBlank::new(ok_lines(&["a", " \t ", "bogus"])).count(), 1);
    }
    #[test]
    fn stops_at_end_of_stream() {
        assert_eq!(UntilBlank::new(ok_lines(&["a", "b"])).count(), 2);
        assert_eq!(UntilBlank::new(ok_lines(&[])).count(), 0);
    }
    #[test]
    fn read_error_ends_iteration() {
        let lines = vec![
            Ok("a".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")),
            Ok("b".to_string()),
        ];
        let mut it = UntilBlank::new(lines.into_iter());
        assert!(it.next().unwrap().is_ok());
        let e = it.next().unwrap().unwrap_err();
        assert_eq!(e.kind, ErrorKind::IO);
        assert_eq!(e.line, Some(2));
        assert!(it.next().is_none());
    }
}
