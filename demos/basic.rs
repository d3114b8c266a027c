//! Basic example: the direct colorizer, the solid writer and the encoding.
//!
//! Run with: `cargo run --example basic`

use std::io::{self, Write};

use hue_ansi::{encode, Color};
use hue_writer::{Hue, SolidWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Print a string in color
    let red = Hue::new(Color::Red, Color::White);
    red.println("Red string is red with a white background")?;

    // Bind a hue to stdout with a writer
    let green = Hue::new(Color::Green, Color::Default);
    let blue = Hue::new(Color::Blue, Color::Default);

    let mut writer = SolidWriter::new(io::stdout(), green);
    writer.write_all(b"Write some green bytes to stdout\n")?;

    // Change the hue for later writes
    writer.set_hue(blue);
    writer.write_str_colored("Write this blue string to stdout\n")?;
    writer.flush()?;

    // Keep an encoded string around and print it with the usual macros
    let hs = encode(&blue.pair(), "Always be diligent and see your work through");
    println!("Colored, even with println!(): {}", hs);

    // And get the plain text back
    println!("Uncolored: {}", hs.decode()?);

    Ok(())
}
