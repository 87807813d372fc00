//! Line-driven selection surface.
//!
//! Stands in for an interactive key handler: each input line moves the
//! selection (next, previous, or a named algorithm), after which the
//! session re-renders and hands the frame to the presenter.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rgb_dither::{Algorithm, DitherSession, ParseAlgorithmError, Presenter};

use crate::error::AppError;

/// One command read from the selection input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Select(Algorithm),
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "n" | "next" | "" => Ok(BrowseCommand::Next),
            "p" | "prev" | "previous" => Ok(BrowseCommand::Previous),
            "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
            name => name.parse().map(BrowseCommand::Select),
        }
    }
}

/// Present the current selection, then apply commands from `input` until
/// it ends or a quit command arrives.
///
/// The label of every presented frame is echoed to `output`. Unknown
/// commands are reported on `output` and do not change the selection.
/// Returns the number of frames presented.
pub fn run_browser<P, R, W>(
    session: &mut DitherSession,
    presenter: &mut P,
    input: R,
    mut output: W,
) -> Result<usize, AppError>
where
    P: Presenter,
    AppError: From<P::Error>,
    R: BufRead,
    W: Write,
{
    session.show(presenter)?;
    writeln!(output, "{}", session.current())?;
    let mut presented = 1;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Next => {
                session.next();
            }
            BrowseCommand::Previous => {
                session.previous();
            }
            BrowseCommand::Select(algorithm) => session.select(algorithm),
        }

        tracing::debug!(algorithm = %session.current(), "Selection changed");
        session.show(presenter)?;
        writeln!(output, "{}", session.current())?;
        presented += 1;
    }

    Ok(presented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb_dither::{Palette, PixelBuffer, Rgb, SourceImage};

    #[derive(Default)]
    struct Labels(Vec<Algorithm>);

    impl Presenter for Labels {
        type Error = AppError;

        fn present(&mut self, algorithm: Algorithm, _frame: &PixelBuffer) -> Result<(), AppError> {
            self.0.push(algorithm);
            Ok(())
        }
    }

    fn session() -> DitherSession {
        let source = SourceImage::new(vec![Rgb::new(90, 160, 30); 4], 2, 2).unwrap();
        DitherSession::new(source, Palette::default())
    }

    #[test]
    fn test_parse_commands() {
        let parse = |s: &str| s.parse::<BrowseCommand>();
        assert_eq!(parse("n"), Ok(BrowseCommand::Next));
        assert_eq!(parse(""), Ok(BrowseCommand::Next));
        assert_eq!(parse(" prev "), Ok(BrowseCommand::Previous));
        assert_eq!(parse("q"), Ok(BrowseCommand::Quit));
        assert_eq!(
            parse("palette ordered 8x8"),
            Ok(BrowseCommand::Select(Algorithm::PaletteOrdered8x8))
        );
        assert!("zoom".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_browser_cycles_and_wraps() {
        let mut s = session();
        let mut labels = Labels::default();
        let mut out = Vec::new();

        let input = "p\nn\nn\nmonochrome ordered halftone\nbogus\nq\nn\n";
        let presented = run_browser(&mut s, &mut labels, input.as_bytes(), &mut out).unwrap();

        assert_eq!(presented, 5);
        assert_eq!(
            labels.0,
            vec![
                Algorithm::Normal,
                Algorithm::PaletteOrderedHalftone,
                Algorithm::Normal,
                Algorithm::Monochrome,
                Algorithm::MonochromeOrderedHalftone,
            ]
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "normal");
        assert_eq!(lines[1], "palette ordered halftone");
        assert!(lines[5].contains("bogus"));
        assert_eq!(lines.len(), 6);
    }
}
