//! Console presentation
//!
//! The conversion loop talks to the user only through [`Presenter`], so it
//! can be driven headless in tests. [`TerminalPresenter`] draws the colored
//! boxes seen in the interactive binary.

use crate::converter::Conversion;
use crate::error::Result;
use colored::{Color, Colorize};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const HEADER_WIDTH: usize = 70;
const MESSAGE_WIDTH: usize = 50;

pub const FAREWELL_TITLE: &str = " GOODBYE! ";
pub const FAREWELL_SUBTITLE: &str = "Thank you for using Currency Converter";

/// Everything the session needs from the console
pub trait Presenter {
    /// Clear the screen before a new iteration
    fn clear(&mut self) -> Result<()>;

    fn show_header(&mut self, title: &str, subtitle: &str) -> Result<()>;

    /// Unboxed hint line, e.g. how to quit
    fn show_hint(&mut self, text: &str) -> Result<()>;

    fn show_info(&mut self, text: &str) -> Result<()>;

    fn show_error(&mut self, text: &str) -> Result<()>;

    fn show_success(&mut self, text: &str) -> Result<()>;

    /// Ask for one line of input. Returns `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>>;

    /// Block until the user acknowledges the last message
    fn wait_for_ack(&mut self) -> Result<()>;

    fn show_conversion(&mut self, conversion: &Conversion) -> Result<()> {
        self.show_success(&conversion.to_string())
    }

    fn show_farewell(&mut self) -> Result<()> {
        self.show_header(FAREWELL_TITLE, FAREWELL_SUBTITLE)
    }
}

/// Presenter for a real terminal
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Presenter over the process's stdin and stdout
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_screen)
    }
}

impl TerminalPresenter<io::Empty, io::Stdout> {
    /// Presenter that can only write; prompts see end of input.
    ///
    /// Used where stdin may already be locked by a running session.
    pub fn output_only() -> Self {
        Self::new(io::empty(), io::stdout(), false)
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_block(&mut self, block: &str) -> Result<()> {
        writeln!(self.output, "{}", block)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn show_header(&mut self, title: &str, subtitle: &str) -> Result<()> {
        let rule = "═".repeat(20);
        let mut text = format!("{} {} {}", rule, title, rule)
            .white()
            .bold()
            .to_string();
        if !subtitle.is_empty() {
            text.push('\n');
            text.push_str(&subtitle.cyan().to_string());
        }
        let block = render_box(&text, HEADER_WIDTH, Color::White, Color::Blue);
        self.write_block(&block)
    }

    fn show_hint(&mut self, text: &str) -> Result<()> {
        let line = format!("\n{}\n", text.cyan());
        self.write_block(&line)
    }

    fn show_info(&mut self, text: &str) -> Result<()> {
        let text = format!("INFO: {}", text.blue());
        let block = render_box(&text, MESSAGE_WIDTH, Color::Blue, Color::Blue);
        self.write_block(&block)
    }

    fn show_error(&mut self, text: &str) -> Result<()> {
        let text = format!("ERROR: {}", text.red());
        let block = render_box(&text, MESSAGE_WIDTH, Color::Red, Color::Red);
        self.write_block(&block)
    }

    fn show_success(&mut self, text: &str) -> Result<()> {
        let text = format!("SUCCESS: {}", text.green());
        let block = render_box(&text, MESSAGE_WIDTH, Color::Green, Color::Green);
        self.write_block(&block)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label.yellow())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn wait_for_ack(&mut self) -> Result<()> {
        write!(self.output, "\n{}", "Press Enter to continue...".cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn show_conversion(&mut self, conversion: &Conversion) -> Result<()> {
        let text = format!(
            "{} {} {}",
            format!("{} {}", conversion.amount, conversion.from).yellow(),
            "is equal to".white(),
            format!("{:.2} {}", conversion.result, conversion.to).green()
        );
        let block = render_box(
            &format!("SUCCESS: {}", text),
            MESSAGE_WIDTH,
            Color::Green,
            Color::Green,
        );
        self.write_block(&block)
    }
}

/// Draw a double-lined box around `text`
///
/// The box is at least `min_width` columns wide and grows to fit the longest
/// line. Widths are measured on visible characters, ignoring color escapes.
pub fn render_box(text: &str, min_width: usize, text_color: Color, border_color: Color) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let longest = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let box_width = min_width.max(longest + 4);
    let rule = "═".repeat(box_width - 2);
    let side = "║".color(border_color);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("╔{}╗", rule).color(border_color).to_string());
    for line in &lines {
        let padding = " ".repeat(box_width - visible_width(line) - 3);
        out.push(format!(
            "{} {}{}{}",
            side,
            line.color(text_color),
            padding,
            side
        ));
    }
    out.push(format!("╚{}╝", rule).color(border_color).to_string());

    out.join("\n")
}

/// Remove ANSI SGR escape sequences
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1B' {
            // ESC [ params final-byte
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Width of `text` in terminal columns, ignoring escape sequences
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
