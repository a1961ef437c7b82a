/// An sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(205, 193, 180);

const COLOUR_TABLE: [Rgb; 7] = [
    Rgb(238, 228, 218),
    Rgb(237, 224, 200),
    Rgb(242, 177, 121),
    Rgb(245, 149, 99),
    Rgb(246, 124, 95),
    Rgb(246, 94, 59),
    Rgb(237, 207, 114),
];

const DARK_TEXT: Rgb = Rgb(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb(249, 246, 242);

/// Fill colour for a cell holding `value`. Everything from 128 upwards shares one colour.
pub fn tile_colour(value: u32) -> Rgb {
    match value {
        0 => BACKGROUND,
        _ => {
            let exponent = value.trailing_zeros() as usize;

            COLOUR_TABLE[exponent.saturating_sub(1).min(COLOUR_TABLE.len() - 1)]
        }
    }
}

/// Colour for the number printed on a tile.
pub fn text_colour(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
