use std::io::{self, Read, Write};

use clap::Parser;
use lib_2048::{DefaultSource, RandomSource};

mod app;
mod input;
mod render;
mod terminal;

use app::{App, AppError, Config};
use input::InputDecoder;
use terminal::RawTerminal;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Number of rows on the board
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    rows: u8,

    /// Number of columns on the board
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    cols: u8,

    /// Seed for tile placement (defaults to the current time)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Draw without colours
    #[arg(long)]
    plain: bool,
}

fn run<R: RandomSource, W: Write>(
    app: &mut App<R, W>,
    input: &mut impl Read,
) -> Result<(), AppError> {
    let mut decoder = InputDecoder::new()?;

    loop {
        for key in decoder.read_from(input)? {
            if app.event(key).is_break() {
                return Ok(());
            }
        }

        app.iterate()?;
    }
}

/// Runs the input loop, then restores the cursor however the loop ended.
fn play<R: RandomSource, W: Write>(
    mut app: App<R, W>,
    input: &mut impl Read,
) -> Result<(), AppError> {
    let result = run(&mut app, input);
    let restored = app.quit().and_then(|mut out| out.write_all(b"\n"));

    result?;
    Ok(restored?)
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    env_logger::init();

    let config = Config {
        rows: cli.rows.into(),
        cols: cli.cols.into(),
        colour: !cli.plain,
    };
    let rng = cli
        .seed
        .map_or_else(DefaultSource::from_clock, DefaultSource::seeded);

    let stdout = io::stdout().lock();
    let mut stdin = io::stdin().lock();

    let _raw_terminal = RawTerminal::enable(&stdin)?;

    let app = App::init(&config, rng, stdout)?;

    play(app, &mut stdin)
}

#[cfg(test)]
mod tests {
    use lib_2048::RngSource;

    use super::*;

    const CONFIG: Config = Config {
        rows: 4,
        cols: 4,
        colour: false,
    };

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        }
    }

    #[test]
    fn quitting_shows_the_cursor() {
        let mut out = Vec::new();
        let app = App::init(&CONFIG, RngSource::seeded(4), &mut out).unwrap();

        play(app, &mut &b"\x1b[Aq"[..]).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\x1b[?25l"));
        assert!(out.ends_with("\x1b[?25h\n"));
    }

    #[test]
    fn read_error_still_shows_the_cursor() {
        let mut out = Vec::new();
        let app = App::init(&CONFIG, RngSource::seeded(4), &mut out).unwrap();

        let result = play(app, &mut BrokenInput);

        assert!(matches!(result, Err(AppError::Io(_))));
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("\x1b[?25h\n"));
    }
}
