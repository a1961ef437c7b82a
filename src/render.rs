use std::io::{self, Write};

use lib_2048::{
    palette::{self, Rgb},
    Snapshot, Tile,
};

const SQUARE_HEIGHT: usize = 3;
const SQUARE_WIDTH: usize = 7;

fn border_row(cols: usize, left: &str, middle: &str, right: &str) -> String {
    let segment = "━".repeat(SQUARE_WIDTH);
    let inner = vec![segment; cols].join(middle);

    format!("{left}{inner}{right}")
}

/// Draws a session snapshot as a box-drawn board, overwriting the previous frame in place.
pub struct Renderer {
    colour: bool,
    drawn_lines: usize,
}

impl Renderer {
    pub const fn new(colour: bool) -> Self {
        Self {
            colour,
            drawn_lines: 0,
        }
    }

    fn write_cell(&self, out: &mut impl Write, tile: &Tile, show_value: bool) -> io::Result<()> {
        let text = if show_value && !tile.is_empty() {
            tile.value().to_string()
        } else {
            String::new()
        };

        if self.colour {
            let Rgb(r, g, b) = palette::tile_colour(tile.value());
            let Rgb(fr, fg, fb) = palette::text_colour(tile.value());

            write!(
                out,
                "┃\x1b[48;2;{r};{g};{b}m\x1b[38;2;{fr};{fg};{fb}m{text:^SQUARE_WIDTH$}\x1b[m"
            )
        } else {
            write!(out, "┃{text:^SQUARE_WIDTH$}")
        }
    }

    fn write_board_row(&self, out: &mut impl Write, row: &[Tile]) -> io::Result<usize> {
        for line in 0..SQUARE_HEIGHT {
            for tile in row {
                self.write_cell(out, tile, line == SQUARE_HEIGHT / 2)?;
            }

            writeln!(out, "┃\x1b[K")?;
        }

        Ok(SQUARE_HEIGHT)
    }

    fn status_line(snapshot: &Snapshot<'_>) -> String {
        if snapshot.has_legal_move {
            format!(
                "Best tile {}. Arrows move, R restarts, Q quits.",
                snapshot.max_value()
            )
        } else {
            String::from("Game over. R restarts, Q quits.")
        }
    }

    /// Draws one frame and returns the number of lines it occupies.
    pub fn draw(&mut self, out: &mut impl Write, snapshot: &Snapshot<'_>) -> io::Result<usize> {
        if self.drawn_lines != 0 {
            write!(out, "\x1b[{}F", self.drawn_lines)?;
        }

        writeln!(
            out,
            "Score: {}    Best: {}\x1b[K",
            snapshot.score, snapshot.high_score
        )?;
        let mut lines = 1;

        writeln!(out, "{}", border_row(snapshot.cols, "┏", "┳", "┓"))?;
        lines += 1;

        for (i, row) in snapshot.tiles.chunks(snapshot.cols).enumerate() {
            if i != 0 {
                writeln!(out, "{}", border_row(snapshot.cols, "┣", "╋", "┫"))?;
                lines += 1;
            }

            lines += self.write_board_row(out, row)?;
        }

        writeln!(out, "{}", border_row(snapshot.cols, "┗", "┻", "┛"))?;
        lines += 1;

        writeln!(out, "{}\x1b[K", Self::status_line(snapshot))?;
        lines += 1;

        out.flush()?;
        self.drawn_lines = lines;

        Ok(lines)
    }
}
