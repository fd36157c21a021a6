use std::io::{self, BufRead, Write};

use enrollment_core::error::{EnrollmentError, Result};
use enrollment_core::models::SchoolRecord;
use enrollment_core::selector::resolve_school;

pub const PROMPT: &str = "Please enter the school name or code:";
pub const PROMPT_MARKER: &str = " >";
pub const RETRY: &str = "You must enter a valid school name or code.";
pub const TRY_AGAIN: &str = "Please try again...";

/// Select a school, trying `preset` first and falling back to the prompt.
pub fn select_school<'a, R, W>(
    preset: Option<&str>,
    input: &mut R,
    out: &mut W,
    roster: &'a [SchoolRecord],
) -> Result<&'a SchoolRecord>
where
    R: BufRead,
    W: Write,
{
    if let Some(raw) = preset {
        match resolve_school(raw, roster) {
            Ok(school) => return Ok(school),
            Err(EnrollmentError::SchoolNotFound(_)) => write_retry(out)?,
            Err(e) => return Err(e),
        }
    }
    prompt_for_school(input, out, roster)
}

/// Ask for a school name or code until one resolves.
///
/// Fails with an `UnexpectedEof` I/O error when input ends first.
pub fn prompt_for_school<'a, R, W>(
    input: &mut R,
    out: &mut W,
    roster: &'a [SchoolRecord],
) -> Result<&'a SchoolRecord>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", PROMPT)?;
        write!(out, "{}", PROMPT_MARKER)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(EnrollmentError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a school was selected",
            )));
        }

        match resolve_school(&line, roster) {
            Ok(school) => return Ok(school),
            Err(EnrollmentError::SchoolNotFound(_)) => write_retry(out)?,
            Err(e) => return Err(e),
        }
    }
}

fn write_retry<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RETRY)?;
    writeln!(out, "{}", TRY_AGAIN)?;
    writeln!(out)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roster() -> Vec<SchoolRecord> {
        vec![
            SchoolRecord::new("Centennial High School", 1224),
            SchoolRecord::new("Bowness High School", 9847),
        ]
    }

    // ── prompt_for_school ─────────────────────────────────────────────────────

    #[test]
    fn test_prompt_accepts_first_valid_line() {
        let roster = roster();
        let mut input = Cursor::new("bowness high school\n");
        let mut out = Vec::new();

        let school = prompt_for_school(&mut input, &mut out, &roster).unwrap();

        assert_eq!(school.code, 9847);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n{}", PROMPT, PROMPT_MARKER));
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let roster = roster();
        let mut input = Cursor::new("nowhere\n\n1224\n");
        let mut out = Vec::new();

        let school = prompt_for_school(&mut input, &mut out, &roster).unwrap();

        assert_eq!(school.code, 1224);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 3);
        assert_eq!(text.matches(RETRY).count(), 2);
        assert_eq!(text.matches(TRY_AGAIN).count(), 2);
    }

    #[test]
    fn test_prompt_accepts_last_line_without_newline() {
        let roster = roster();
        let mut input = Cursor::new("9847");
        let mut out = Vec::new();
        let school = prompt_for_school(&mut input, &mut out, &roster).unwrap();
        assert_eq!(school.code, 9847);
    }

    #[test]
    fn test_prompt_fails_on_eof() {
        let roster = roster();
        let mut input = Cursor::new("not a real school\n");
        let mut out = Vec::new();

        let err = prompt_for_school(&mut input, &mut out, &roster).unwrap_err();

        match err {
            EnrollmentError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected EOF error, got {other:?}"),
        }
    }

    // ── select_school ─────────────────────────────────────────────────────────

    #[test]
    fn test_select_uses_preset_without_prompting() {
        let roster = roster();
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let school = select_school(Some("9847"), &mut input, &mut out, &roster).unwrap();

        assert_eq!(school.code, 9847);
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_falls_back_to_prompt_on_unknown_preset() {
        let roster = roster();
        let mut input = Cursor::new("centennial high school\n");
        let mut out = Vec::new();

        let school = select_school(Some("0000"), &mut input, &mut out, &roster).unwrap();

        assert_eq!(school.code, 1224);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(RETRY));
        assert!(text.contains(PROMPT));
    }

    #[test]
    fn test_select_without_preset_prompts() {
        let roster = roster();
        let mut input = Cursor::new("1224\n");
        let mut out = Vec::new();
        let school = select_school(None, &mut input, &mut out, &roster).unwrap();
        assert_eq!(school.code, 1224);
    }
}
