use std::io;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use tui::backend::CrosstermBackend;
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Modifier, Style};
use tui::symbols::Marker;
use tui::text::{Span, Spans};
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;

use crate::framebuffer::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::interpreter::Chip8Vm;
use crate::monitor;

/// Renderers consume machine snapshots on their own cadence and never
/// mutate the machine. Abstracting the screen keeps the interpreter
/// testable without a terminal.
pub trait Display {
    fn draw(&mut self, vm: &Chip8Vm) -> Result<(), io::Error>;
}

/// expand lit pixels into canvas coords; y is negated so row 0 renders at
/// the top
fn lit_points(pixels: &[u8]) -> Vec<(f64, f64)> {
    pixels
        .iter()
        .enumerate()
        .filter(|(_, &px)| px != 0)
        .map(|(i, _)| ((i % SCREEN_WIDTH) as f64, -((i / SCREEN_WIDTH) as f64)))
        .collect()
}

/// a text pane window that keeps the interesting line in view
fn window(len: usize, interesting: usize, height: usize) -> usize {
    if len <= height {
        return 0;
    }
    interesting.saturating_sub(height / 2).min(len - height)
}

const HELP_LINE: &str = "space step   c continue   s stop   x reset   q quit";

/// The workbench screen: framebuffer canvas, register pane, disassembly
/// listing and a memory dump, rendered with TUI over crossterm.
pub struct TermWorkbench {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TermWorkbench {
    pub fn new() -> Result<TermWorkbench, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(TermWorkbench { terminal })
    }
}

impl Drop for TermWorkbench {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

impl Display for TermWorkbench {
    fn draw(&mut self, vm: &Chip8Vm) -> Result<(), io::Error> {
        let pc = vm.registers().pc();
        let coords = lit_points(vm.framebuffer().pixels());
        let mut registers = monitor::register_summary(vm);
        registers.push(String::new());
        registers.push(HELP_LINE.to_string());
        let listing = monitor::disassembly(vm.memory());
        let dump = monitor::hex_dump(vm.memory(), pc.saturating_sub(16), 64);

        self.terminal.draw(|f| {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(2 + SCREEN_WIDTH as u16), Constraint::Min(30)].as_ref())
                .split(f.size());
            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2 + SCREEN_HEIGHT as u16), Constraint::Min(8)].as_ref())
                .split(cols[0]);
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
                .split(cols[1]);

            // 1:1 between chip8 pixels and canvas cells, as blocky points
            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds([0.0, (SCREEN_WIDTH - 1) as f64])
                .y_bounds([-1.0 * (SCREEN_HEIGHT - 1) as f64, 0.0])
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &coords,
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, left[0]);

            let reg_text: Vec<Spans> = registers.iter().map(|l| Spans::from(l.as_str())).collect();
            f.render_widget(
                Paragraph::new(reg_text)
                    .block(Block::default().title("registers").borders(Borders::ALL)),
                left[1],
            );

            let height = right[0].height.saturating_sub(2) as usize;
            let at = listing.iter().position(|(addr, _)| *addr == pc).unwrap_or(0);
            let from = window(listing.len(), at, height);
            let listing_text: Vec<Spans> = listing
                .iter()
                .skip(from)
                .take(height)
                .map(|(addr, line)| {
                    if *addr == pc {
                        Spans::from(Span::styled(
                            line.as_str(),
                            Style::default().add_modifier(Modifier::REVERSED),
                        ))
                    } else {
                        Spans::from(line.as_str())
                    }
                })
                .collect();
            f.render_widget(
                Paragraph::new(listing_text)
                    .block(Block::default().title("disassembly").borders(Borders::ALL)),
                right[0],
            );

            let height = right[1].height.saturating_sub(2) as usize;
            let dump_text: Vec<Spans> = dump
                .iter()
                .take(height)
                .map(|l| Spans::from(l.as_str()))
                .collect();
            f.render_widget(
                Paragraph::new(dump_text)
                    .block(Block::default().title("memory").borders(Borders::ALL)),
                right[1],
            );
        })?;
        Ok(())
    }
}

/// useful for driving the machine in tests
pub struct DummyDisplay;

impl DummyDisplay {
    pub fn new() -> Result<DummyDisplay, io::Error> {
        Ok(DummyDisplay {})
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, _vm: &Chip8Vm) -> Result<(), io::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_points_for_a_dark_screen() {
        let pixels = [0u8; SCREEN_WIDTH * SCREEN_HEIGHT];
        assert!(lit_points(&pixels).is_empty());
    }

    #[test]
    fn test_lit_points_map_row_major() {
        let mut pixels = [0u8; SCREEN_WIDTH * SCREEN_HEIGHT];
        pixels[3] = 1; // (3, 0)
        pixels[2 * SCREEN_WIDTH + 5] = 1; // (5, 2)
        assert_eq!(lit_points(&pixels), vec![(3.0, 0.0), (5.0, -2.0)]);
    }

    #[test]
    fn test_window_centres_when_it_can() {
        assert_eq!(window(100, 50, 10), 45);
        // near the ends the window pins instead of centring
        assert_eq!(window(100, 2, 10), 0);
        assert_eq!(window(100, 99, 10), 90);
        // short lists never scroll
        assert_eq!(window(5, 4, 10), 0);
    }

    #[test]
    fn test_dummy_display_accepts_any_machine() {
        let vm = Chip8Vm::new();
        let mut d = DummyDisplay::new().unwrap();
        assert!(d.draw(&vm).is_ok());
    }
}
