// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

/// Join fields with `delim`. No quoting: report values never contain the delimiter, and
/// consumers of these files expect the raw text.
pub fn join_fields<S: AsRef<str>>(fields: &[S], delim: char) -> String {
    let mut out = String::new();
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            out.push(delim);
        }
        out.push_str(f.as_ref());
    }
    out
}

/// Write already-formatted lines, one per row, `\n` terminated.
pub fn write_lines<W: Write>(mut w: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(w, "{line}")?;
    }
    w.flush()
}

/* ---------------- Parsing ---------------- */

pub fn split_line(line: &str, delim: char) -> Vec<String> {
    line.split(delim).map(str::to_string).collect()
}

/// Read back an export. CRLF tolerant; blank lines are dropped.
pub fn parse_rows(text: &str, delim: char) -> Vec<Vec<String>> {
    text.lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.is_empty())
        .map(|l| split_line(l, delim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_then_split_is_verbatim() {
        let fields = ["01.01.0001", "09:30:00", "12,5", " 0.0", "3.1e2", ""];
        let line = join_fields(&fields, ';');
        assert_eq!(line, "01.01.0001;09:30:00;12,5; 0.0;3.1e2;");
        assert_eq!(split_line(&line, ';'), fields);
    }

    #[test]
    fn parse_rows_handles_crlf_and_blank_lines() {
        let rows = parse_rows("a;b\r\n\r\nc;d\n", ';');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn write_lines_terminates_each_row() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["x;1".to_string(), "y;2".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x;1\ny;2\n");
    }
}
