//! TerminalSurface: the crossterm-backed [`Surface`].
//!
//! Frames are encoded into one byte buffer and written with a single
//! `write_all` + `flush`, so the terminal never shows a partial frame.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use log::{trace, warn};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::Surface;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// ASCII BEL. Terminals cannot play a given pitch, only their bell.
const BELL: &[u8] = b"\x07";

pub struct TerminalSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn setup_display(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;

        match terminal::size() {
            Ok((w, h)) if w < BOARD_WIDTH || h < BOARD_HEIGHT => {
                warn!(
                    "terminal is {w}x{h}, the board needs {BOARD_WIDTH}x{BOARD_HEIGHT}; output will be clipped"
                );
            }
            Ok(_) => {}
            Err(e) => warn!("could not query terminal size: {e}"),
        }
        Ok(())
    }

    fn teardown_display(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn write_frame(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        let rung = self
            .stdout
            .write_all(BELL)
            .and_then(|_| self.stdout.flush());
        if let Err(e) = rung {
            trace!("tone {frequency_hz}Hz/{duration_ms}ms dropped: {e}");
        }
    }
}

/// Encode a full frame into `out`, starting at the top-left corner.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn rgb_maps_to_crossterm_color() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn frame_encoding_contains_every_row_in_order() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("AB\r\nCD"));
        // One style switch for a uniformly styled frame.
        assert_eq!(text.matches("\x1b[38;2;").count(), 1);
    }

    #[test]
    fn frame_encoding_switches_style_only_on_change() {
        let plain = CellStyle::default();
        let bold = plain.bolded();
        let mut fb = FrameBuffer::new(3, 1);
        fb.set(1, 0, Cell { ch: 'X', style: bold });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[38;2;").count(), 3);
    }
}
