//! Print the canonical form of each color literal given on the command line.
//!
//! ```text
//! $ cargo run --example normalize -- '#1234' 'hsla(0.5turn, 40%, 30%, 50%)'
//! #1234                        rgb(17 34 51/0.267)  #11223344
//! hsla(0.5turn, 40%, 30%, 50%) hsl(180 40% 30%/0.5) #2e6b6b80
//! ```

use colorlit::parse_color;

fn main() {
    let literals: Vec<String> = std::env::args().skip(1).collect();
    let width = literals.iter().map(String::len).max().unwrap_or(0);
    let mut failed = false;

    for literal in &literals {
        match parse_color(literal) {
            Ok(color) => println!(
                "{:width$} {:20} {}",
                literal,
                color.format(),
                color.to_rgb().format_hex(),
                width = width
            ),
            Err(error) => {
                failed = true;
                eprintln!("{:width$} error: {}", literal, error, width = width);
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
