//! Runs every field operation once on fixed operands and reports timings.

use onb233_algorithms::{FieldElement, FieldParams, Result};
use std::time::Instant;

const A: &str = "10111100000011111110110111100101101100100111011101101000001011110001001110001110110001011101100110100001001110101101011011100100000110011010111110010000001010100101111101010100000010011001001001110100110011101111100101011110010111010";
const B: &str = "10010100100111000111100100011001111101000111000010110011001110000101100000111110101110000100000001101110110001110001100101000111011010110111001101110111001000000101100101110011000001011010010101110111100111001010001000001111010001010";
const N: &str = "00101001011111011010001010001101011000100101011011001110100011100111010111101101011000010111000100110011110011100100001001011101101110110101111111001010010001101011010100010010110001011001101100111111111011111100010010100011101000111";

fn timed<T>(label: &str, op: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let value = op();
    let elapsed = start.elapsed();
    println!("Time ({}): {} microseconds", label, elapsed.as_micros());
    value
}

fn main() -> Result<()> {
    let a: FieldElement = A.parse()?;
    let b: FieldElement = B.parse()?;

    // Build the shared matrix up front so the multiplication timing excludes it
    timed("parameters", FieldParams::onb233);
    println!();

    let sum = timed("addition", || a + b);
    println!("Addition: {}\n", sum);

    let squared = timed("squaring", || a.square());
    println!("a^2: {}\n", squared);

    let trace = timed("trace", || a.trace());
    println!("Trace of a: {}\n", u8::from(trace));

    let product = timed("multiplication", || a * b);
    println!("Multiplication: {}\n", product);

    let inverse = timed("inversion", || a.invert())?;
    println!("Inverse of a: {}\n", inverse);

    let power = timed("exponentiation", || a.pow(N))?;
    println!("a^N : {}", power);

    Ok(())
}
