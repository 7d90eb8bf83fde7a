//! Splitting whole documents into lines

use serde::{Deserialize, Serialize};

/// Line terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// One line of source text and the terminator that ended it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    /// `None` for a last line with no terminator.
    pub ending: Option<LineEnding>,
}

/// A document split into lines, plus what is needed to put it back together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText<'a> {
    pub lines: Vec<SourceLine<'a>>,
    /// Ending for lines added later: the more common terminator, `\n` on a tie.
    pub line_ending: LineEnding,
    /// Whether the last line was terminated.
    pub final_newline: bool,
}

impl<'a> SourceText<'a> {
    /// Split like a line reader: a terminator ends a line, so a trailing
    /// terminator does not produce an extra empty line.
    ///
    /// Each line keeps its own terminator. Only a `\r` directly before `\n`
    /// belongs to the terminator; any other `\r` stays in the line text.
    pub fn split(source: &'a str) -> Self {
        let lines: Vec<SourceLine<'a>> = source
            .split_inclusive('\n')
            .map(|piece| match piece.strip_suffix('\n') {
                Some(body) => match body.strip_suffix('\r') {
                    Some(text) => SourceLine {
                        text,
                        ending: Some(LineEnding::CrLf),
                    },
                    None => SourceLine {
                        text: body,
                        ending: Some(LineEnding::Lf),
                    },
                },
                None => SourceLine {
                    text: piece,
                    ending: None,
                },
            })
            .collect();

        let crlf = lines
            .iter()
            .filter(|line| line.ending == Some(LineEnding::CrLf))
            .count();
        let lf = lines
            .iter()
            .filter(|line| line.ending == Some(LineEnding::Lf))
            .count();
        let line_ending = if crlf > lf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };

        Self {
            final_newline: source.ends_with('\n'),
            lines,
            line_ending,
        }
    }

    /// The line texts without their terminators.
    pub fn texts(&self) -> Vec<&'a str> {
        self.lines.iter().map(|line| line.text).collect()
    }
}
