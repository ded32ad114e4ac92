//! Interactive command loop.
//!
//! Each command is a single letter on its own line, followed by a prompt
//! for its arguments:
//!
//! ```text
//! Command? d
//! City codes: NYC PHI
//! The minimum distance between New York and Philadelphia is 500 through the route: NYC, BOS, PHI.
//! ```
//!
//! Commands run strictly one at a time. Errors are printed and the loop
//! carries on; only `E` or the end of input stops it.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::OutputFormat;
use crate::dto::ReplyDto;
use crate::query::{Command, CommandKind, Reply, RouteFinder};

/// Help text printed by the `H` command.
pub const HELP: &str = "\
\tQ\tQuery the city information by entering the city code.
\tD\tFind the minimum distance between two cities.
\tI\tInsert a road by entering two city codes and distance.
\tR\tRemove an existing road by entering two city codes.
\tH\tDisplay this message.
\tE\tExit.";

/// What the first letter of a command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Query(CommandKind),
    Help,
    Exit,
    Ignore,
}

impl Action {
    fn from_line(line: &str) -> Self {
        match line.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Q') => Action::Query(CommandKind::Lookup),
            Some('D') => Action::Query(CommandKind::Route),
            Some('I') => Action::Query(CommandKind::Insert),
            Some('R') => Action::Query(CommandKind::Remove),
            Some('H') => Action::Help,
            Some('E') => Action::Exit,
            _ => Action::Ignore,
        }
    }
}

fn argument_prompt(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Lookup => "City code: ",
        CommandKind::Route | CommandKind::Insert | CommandKind::Remove => "City codes: ",
    }
}

/// A command loop reading from `input` and writing replies to `output`.
pub struct Repl<R, W> {
    input: R,
    output: W,
    finder: RouteFinder,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a new command loop.
    pub fn new(input: R, output: W, finder: RouteFinder, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            finder,
            format,
        }
    }

    /// Run until `E` or end of input.
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt("Command? ")? else {
                break;
            };

            match Action::from_line(&line) {
                Action::Query(kind) => {
                    let Some(args) = self.prompt(argument_prompt(kind))? else {
                        break;
                    };
                    let reply = match Command::parse(kind, &args) {
                        Ok(command) => {
                            let reply = self.finder.execute(&command);
                            debug!(?command, failed = reply.is_error(), "Ran command");
                            reply
                        }
                        Err(e) => Reply::Error(e),
                    };
                    self.emit(&reply)?;
                }
                Action::Help => writeln!(self.output, "{HELP}")?,
                Action::Exit => break,
                Action::Ignore => {}
            }
        }

        self.output.flush()
    }

    /// Consume the loop and return the route finder, with any mutations
    /// made during the session.
    pub fn into_finder(self) -> RouteFinder {
        self.finder
    }

    /// Print a prompt and read one line. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// answered like any other bad input instead of ending the session.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn emit(&mut self, reply: &Reply) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{reply}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, &ReplyDto::from(reply))?;
                writeln!(self.output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_support::east_coast;
    use std::io::Cursor;

    fn run(input: &str, format: OutputFormat) -> (String, RouteFinder) {
        run_bytes(input.as_bytes(), format)
    }

    fn run_bytes(input: &[u8], format: OutputFormat) -> (String, RouteFinder) {
        let mut output = Vec::new();
        let mut repl = Repl::new(
            Cursor::new(input),
            &mut output,
            RouteFinder::new(east_coast()),
            format,
        );
        repl.run().unwrap();
        let finder = repl.into_finder();
        (String::from_utf8(output).unwrap(), finder)
    }

    fn replies(output: &str) -> Vec<String> {
        output
            .split("Command? ")
            .filter_map(|chunk| {
                let reply = chunk
                    .trim_start_matches("City codes: ")
                    .trim_start_matches("City code: ")
                    .trim_end();
                (!reply.is_empty()).then(|| reply.to_string())
            })
            .collect()
    }

    #[test]
    fn lookup() {
        let (out, _) = run("Q\nNYC\nE\n", OutputFormat::Text);
        assert_eq!(
            out,
            "Command? City code: 1 NYC New York 1000 10\nCommand? "
        );
    }

    #[test]
    fn lookup_unknown() {
        let (out, _) = run("q\nXYZ\n", OutputFormat::Text);
        assert_eq!(replies(&out), vec!["City code XYZ doesn't exist."]);
    }

    #[test]
    fn full_scenario() {
        let input = "D\nNYC PHI\nI\nNYC PHI 100\nd\nNYC PHI\n\
                     R\nNYC PHI\nD\nNYC PHI\nr\nNYC PHI\ne\n";
        let via_boston = "The minimum distance between New York and Philadelphia is 500 \
                          through the route: NYC, BOS, PHI.";
        let direct = "The minimum distance between New York and Philadelphia is 100 \
                      through the route: NYC, PHI.";
        let (out, finder) = run(input, OutputFormat::Text);
        assert_eq!(
            replies(&out),
            vec![
                via_boston,
                "You have inserted a road from New York to Philadelphia with a distance of 100.",
                direct,
                "You have removed the road from New York to Philadelphia.",
                via_boston,
                "The road between New York and Philadelphia doesn't exist.",
            ]
        );
        assert_eq!(finder.network().road_count(), 2);
    }

    #[test]
    fn invalid_input() {
        let (out, _) = run("D\nNYC\nI\nNYC PHI x\nR\n\nE\n", OutputFormat::Text);
        assert_eq!(
            replies(&out),
            vec!["Invalid input.", "Invalid input.", "Invalid input."]
        );
    }

    #[test]
    fn unreachable_route_does_not_end_session() {
        let (out, _) = run("D\nPHI NYC\nQ\nBOS\n", OutputFormat::Text);
        assert_eq!(
            replies(&out),
            vec![
                "There is no route from Philadelphia to New York.",
                "2 BOS Boston 500 20",
            ]
        );
    }

    #[test]
    fn invalid_utf8_does_not_end_session() {
        let (out, _) = run_bytes(b"Q\nNY\xffC\nQ\nBOS\nE\n", OutputFormat::Text);
        assert_eq!(
            replies(&out),
            vec!["City code NY\u{FFFD}C doesn't exist.", "2 BOS Boston 500 20"]
        );
    }

    #[test]
    fn help() {
        let (out, _) = run("h\nE\n", OutputFormat::Text);
        assert!(out.contains("\tQ\tQuery the city information by entering the city code.\n"));
        assert!(out.contains("\tE\tExit.\n"));
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        let (out, _) = run("\n   \nxyz\nE\n", OutputFormat::Text);
        assert_eq!(out, "Command? ".repeat(4));
    }

    #[test]
    fn exit_stops_reading() {
        let (out, _) = run("E\nQ\nNYC\n", OutputFormat::Text);
        assert_eq!(out, "Command? ");
    }

    #[test]
    fn end_of_input_while_waiting_for_arguments() {
        let (out, _) = run("Q\n", OutputFormat::Text);
        assert_eq!(out, "Command? City code: ");
    }

    #[test]
    fn json_output() {
        let (out, _) = run("D\nNYC PHI\nQ\nXYZ\n", OutputFormat::Json);
        let lines: Vec<serde_json::Value> = replies(&out)
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "route");
        assert_eq!(lines[0]["distance"], 500);
        assert_eq!(lines[1]["type"], "error");
        assert_eq!(lines[1]["message"], "City code XYZ doesn't exist.");
    }
}
