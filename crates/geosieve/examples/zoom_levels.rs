//! Zoom level to address rank conversion
//!
//! Prints the address rank every zoom level translates to, including
//! out-of-range values which are clamped.

use geosieve::{MAX_ZOOM, zoom_band, zoom_to_rank};

fn main() {
    println!("{:>6} | {:>4} | band", "zoom", "rank");
    for zoom in 0..=MAX_ZOOM {
        println!("{zoom:>6} | {:>4} | {}", zoom_to_rank(zoom), zoom_band(zoom));
    }

    println!("\nOut of range:");
    for zoom in [-3, 25] {
        println!("{zoom:>6} | {:>4} | {}", zoom_to_rank(zoom), zoom_band(zoom));
    }
}
