use std::io::{self, Write};

use br_core::config::PrinterConfig;
use br_core::traits::Font;

use crate::buffer::ScanlineBuffer;

/// Imprimante de lignes : pousse les bitmaps d'une police dans un
/// [`ScanlineBuffer`] et écrit les scanlines dans un sink.
///
/// A line is flushed automatically once it holds `line_width` cells. Each
/// flushed line is followed by an empty separator line.
///
/// # Example
/// ```
/// use br_core::{BrailleEncoder, FontConfig, PrinterConfig};
/// use br_glyph::BrailleFont;
/// use br_render::printer::LinePrinter;
///
/// let font = BrailleFont::new(&FontConfig::default(), &BrailleEncoder);
/// let mut printer = LinePrinter::new(font, Vec::new(), &PrinterConfig::default());
/// printer.print_str("ab").unwrap();
/// printer.flush().unwrap();
/// let out = String::from_utf8(printer.into_inner()).unwrap();
/// assert_eq!(out, "o. o.\n.. o.\n.. ..\n\n");
/// ```
pub struct LinePrinter<F, W> {
    font: F,
    sink: W,
    buffer: ScanlineBuffer,
    line_width: usize,
    spacing: usize,
}

impl<F: Font, W: Write> LinePrinter<F, W> {
    #[must_use]
    pub fn new(font: F, sink: W, config: &PrinterConfig) -> Self {
        Self {
            font,
            sink,
            buffer: ScanlineBuffer::new(),
            line_width: config.line_width.max(1),
            spacing: config.spacing,
        }
    }

    /// Buffer every character of `text`, flushing full lines.
    ///
    /// # Errors
    /// Propagates write errors of the sink.
    pub fn print_str(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.print_char(ch)?;
        }
        Ok(())
    }

    /// Buffer one character, flushing if the line is full.
    ///
    /// # Errors
    /// Propagates write errors of the sink.
    pub fn print_char(&mut self, ch: char) -> io::Result<()> {
        self.buffer.push(self.font.bitmap(ch).clone());
        if self.buffer.len() >= self.line_width {
            self.flush()?;
        }
        Ok(())
    }

    /// Write the buffered line and clear the buffer. No-op when empty.
    ///
    /// # Errors
    /// Propagates write errors of the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        let Some(lines) = self.buffer.render_scanlines(self.spacing) else {
            return Ok(());
        };
        log::debug!("Impression d'une ligne de {} cellule(s)", self.buffer.len());
        for line in &lines {
            writeln!(self.sink, "{line}")?;
        }
        writeln!(self.sink)?;
        self.buffer.clear_buffer();
        self.sink.flush()
    }

    /// Cells waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Give the sink back. Pending cells are discarded.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_core::Bitmap;

    /// 1×1 font printing the character itself.
    struct EchoFont {
        cells: Vec<Bitmap>,
    }

    impl EchoFont {
        fn new() -> Self {
            let cells = (b'a'..=b'z')
                .map(|b| Bitmap::from_rows(&[String::from(char::from(b))]))
                .collect();
            Self { cells }
        }
    }

    impl Font for EchoFont {
        fn bitmap(&self, character: char) -> &Bitmap {
            let index = if character.is_ascii_lowercase() {
                (character as u8 - b'a') as usize
            } else {
                0
            };
            &self.cells[index]
        }
        fn height(&self) -> usize {
            1
        }
        fn width(&self) -> usize {
            1
        }
    }

    fn printer(line_width: usize, spacing: usize) -> LinePrinter<EchoFont, Vec<u8>> {
        LinePrinter::new(EchoFont::new(), Vec::new(), &PrinterConfig { line_width, spacing })
    }

    fn output(printer: LinePrinter<EchoFont, Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn full_lines_flush_automatically() {
        let mut p = printer(3, 0);
        p.print_str("abcde").unwrap();
        assert_eq!(p.pending(), 2);
        p.flush().unwrap();
        assert_eq!(output(p), "abc\n\nde\n\n");
    }

    #[test]
    fn flushing_empty_buffer_writes_nothing() {
        let mut p = printer(4, 1);
        p.flush().unwrap();
        p.print_str("ab").unwrap();
        p.flush().unwrap();
        p.flush().unwrap();
        assert_eq!(output(p), "a b\n\n");
    }

    #[test]
    fn exact_fill_leaves_nothing_pending() {
        let mut p = printer(2, 2);
        p.print_str("xy").unwrap();
        assert_eq!(p.pending(), 0);
        assert_eq!(output(p), "x  y\n\n");
    }
}
