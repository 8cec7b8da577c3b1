use std::io::{self, BufRead};

use clap::Parser;
use numera::{ConversionRequest, convert};

/// numera converts a number from one positional numeral system to another,
/// supporting radices from 1 (unary) to 36.
///
/// Pass the three values as arguments, or pass nothing and supply them as
/// three lines on standard input: source radix, number, target radix.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Radix the input number is written in (1-36).
    source_radix: Option<u32>,

    /// The number to convert, with an optional fractional part.
    number: Option<String>,

    /// Radix to convert the number into (1-36).
    target_radix: Option<u32>,
}

fn main() {
    let args = Args::parse();

    let request = match build_request(args) {
        Ok(request) => request,
        Err(message) => {
            println!("error : {message}");
            return;
        },
    };

    match convert(&request) {
        Ok(result) => println!("{result}"),
        Err(e) => println!("error : {e}"),
    }
}

fn build_request(args: Args) -> Result<ConversionRequest, String> {
    match (args.source_radix, args.number, args.target_radix) {
        (Some(source_radix), Some(number), Some(target_radix)) => {
            Ok(ConversionRequest::new(source_radix, number, target_radix))
        },
        (None, None, None) => read_from_stdin(),
        _ => Err("expected either all three arguments or none".to_owned()),
    }
}

/// The console protocol: one line each for the source radix, the number, and
/// the target radix.
fn read_from_stdin() -> Result<ConversionRequest, String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let source_radix = parse_radix(&next_line(&mut lines)?)?;
    let number = next_line(&mut lines)?;
    let target_radix = parse_radix(&next_line(&mut lines)?)?;

    Ok(ConversionRequest::new(source_radix, number, target_radix))
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, String> {
    lines.next()
         .ok_or_else(|| "unexpected end of input: expected three lines".to_owned())?
         .map(|line| line.trim().to_owned())
         .map_err(|e| e.to_string())
}

fn parse_radix(text: &str) -> Result<u32, String> {
    text.parse()
        .map_err(|_| format!("'{text}' is not a valid radix"))
}
