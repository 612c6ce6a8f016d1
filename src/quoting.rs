// 🔍 Quote structure check
// The csv crate reads stray quotes leniently; an unterminated quote swallows
// every following row. This pass rejects such input up front:
//
// - a `"` inside an unquoted field is a bare quote
// - a closing `"` must be followed by `,`, a line ending or end of input
// - a quoted field still open at end of input is unterminated
//
// `""` inside a quoted field is an escaped quote. Line breaks inside quoted
// fields are allowed.

use crate::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a `"` inside a quoted field: either escape or close
    QuoteInQuoted,
}

/// Scan raw CSV bytes and report the first quoting violation
///
/// Line numbers are 1-based and count physical lines, header included.
pub fn check_quotes(bytes: &[u8]) -> Result<(), QuoteError> {
    let mut state = State::FieldStart;
    let mut line = 1u64;
    let mut opened_on = 1u64;

    for &b in bytes {
        state = match (state, b) {
            (State::FieldStart, b'"') => {
                opened_on = line;
                State::Quoted
            }
            (State::FieldStart, b',') => State::FieldStart,
            (State::FieldStart, b'\n') => {
                line += 1;
                State::FieldStart
            }
            (State::FieldStart, _) => State::Unquoted,

            (State::Unquoted, b'"') => return Err(QuoteError::Bare { line }),
            (State::Unquoted, b',') => State::FieldStart,
            (State::Unquoted, b'\n') => {
                line += 1;
                State::FieldStart
            }
            (State::Unquoted, _) => State::Unquoted,

            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, b'\n') => {
                line += 1;
                State::Quoted
            }
            (State::Quoted, _) => State::Quoted,

            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::QuoteInQuoted, b',') => State::FieldStart,
            // \r\n: the \n is counted from FieldStart
            (State::QuoteInQuoted, b'\r') => State::FieldStart,
            (State::QuoteInQuoted, b'\n') => {
                line += 1;
                State::FieldStart
            }
            (State::QuoteInQuoted, _) => return Err(QuoteError::Extraneous { line }),
        };
    }

    if state == State::Quoted {
        return Err(QuoteError::Unterminated { line: opened_on });
    }

    Ok(())
}
