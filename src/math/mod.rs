mod color;

pub use color::{hex_rgb, linear_to_srgb, parse_color, srgb_to_linear, to_hex, Rgb, BLACK};
