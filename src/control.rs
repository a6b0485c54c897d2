use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// What the user asked the machine to do. Commands map straight onto the
/// interpreter's run-state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// run exactly one instruction, then hold
    Step,
    /// free-run until stopped
    Continue,
    Stop,
    /// back to power-on state, image reloaded
    Reset,
    /// leave the workbench
    Quit,
}

/// key table for the workbench controls
const WORKBENCH_KEYMAP: [(char, Command); 5] = [
    (' ', Command::Step),
    ('c', Command::Continue),
    ('s', Command::Stop),
    ('x', Command::Reset),
    ('q', Command::Quit),
];

/// Sources of workbench commands.
pub trait Controls {
    /// drain whatever the user has asked for since the last poll
    fn poll_commands(&mut self) -> Result<Vec<Command>, io::Error>;
}

/// keyboard-driven implementation, reading crossterm events
pub struct TermControls {
    keymap: HashMap<char, Command>,
}

impl TermControls {
    pub fn new() -> Self {
        terminal::enable_raw_mode().unwrap();
        TermControls {
            keymap: HashMap::from(WORKBENCH_KEYMAP),
        }
    }
}

impl Drop for TermControls {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

impl Controls for TermControls {
    fn poll_commands(&mut self) -> Result<Vec<Command>, io::Error> {
        let mut commands = Vec::new();
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(command) => commands.push(*command),
                        None => {
                            eprintln!("Warning: no workbench binding for {:?}", key);
                        }
                    },
                    KeyCode::Esc => commands.push(Command::Quit),
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(commands)
    }
}

/// dummy Controls implementation for testing
pub struct DummyControls {
    pending: Vec<Command>,
}

impl DummyControls {
    pub fn new(commands: &[Command]) -> Self {
        DummyControls {
            pending: Vec::from(commands),
        }
    }
}

impl Controls for DummyControls {
    fn poll_commands(&mut self) -> Result<Vec<Command>, io::Error> {
        Ok(std::mem::take(&mut self.pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_has_no_duplicate_keys() {
        let map = HashMap::from(WORKBENCH_KEYMAP);
        assert_eq!(map.len(), WORKBENCH_KEYMAP.len());
    }

    #[test]
    fn test_dummy_controls_drain_once() {
        let mut c = DummyControls::new(&[Command::Step, Command::Quit]);
        assert_eq!(c.poll_commands().unwrap(), vec![Command::Step, Command::Quit]);
        assert!(c.poll_commands().unwrap().is_empty());
    }
}
