use std::io::{self, Read};

use aho_corasick::{AhoCorasick, BuildError};
use lib_2048::{Command, Direction};

/// A key press the shell cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

const KEY_PATTERNS: [&[u8]; 10] = [
    b"\x1b[A", b"\x1b[B", b"\x1b[C", b"\x1b[D", b"r", b"R", b"q", b"Q", b"\x03", b"\x04",
];

const KEY_INPUTS: [Input; 10] = [
    Input::Command(Command::Move(Direction::Up)),
    Input::Command(Command::Move(Direction::Down)),
    Input::Command(Command::Move(Direction::Right)),
    Input::Command(Command::Move(Direction::Left)),
    Input::Command(Command::Restart),
    Input::Command(Command::Restart),
    Input::Quit,
    Input::Quit,
    Input::Quit,
    Input::Quit,
];

/// Turns raw terminal bytes into [`Input`]s, dropping everything unrecognised.
///
/// An escape sequence split across two reads is carried over to the next one.
pub struct InputDecoder {
    searcher: AhoCorasick,
    buf: [u8; 128],
    buf_len: usize,
}

impl InputDecoder {
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self {
            searcher: AhoCorasick::new(KEY_PATTERNS)?,
            buf: [0; 128],
            buf_len: 0,
        })
    }

    /// Blocks for the next chunk of input. End of input reads as [`Input::Quit`].
    pub fn read_from(&mut self, input: &mut impl Read) -> io::Result<Vec<Input>> {
        let mut chunk = [0; 64];
        let read = input.read(&mut chunk)?;

        if read == 0 {
            return Ok(vec![Input::Quit]);
        }

        Ok(self.feed(&chunk[..read]))
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Input> {
        let mut inputs = Vec::new();

        for chunk in bytes.chunks(self.buf.len() - 2) {
            self.buf[self.buf_len..self.buf_len + chunk.len()].copy_from_slice(chunk);
            self.buf_len += chunk.len();

            inputs.extend(self.drain());
        }

        inputs
    }

    fn drain(&mut self) -> Vec<Input> {
        let inputs = self
            .searcher
            .find_iter(&self.buf[..self.buf_len])
            .map(|m| KEY_INPUTS[m.pattern().as_usize()])
            .collect();

        self.buf_len = match &self.buf[..self.buf_len] {
            [.., 0x1b, b'['] => {
                self.buf[..2].copy_from_slice(b"\x1b[");
                2
            }
            [.., 0x1b] => {
                self.buf[0] = 0x1b;
                1
            }
            _ => 0,
        };

        inputs
    }
}
