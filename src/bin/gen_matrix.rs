//! Generates a random matrix file for exercising the multiplier.

use std::{path::PathBuf, process};

use rand::Rng;

use parmul::{common::Float, matrix::Matrix};

const USAGE: &str = "Usage: gen_matrix <output_file> <rows> <columns> <max_value>";

fn main() {
    let mut args = std::env::args().skip(1);
    if args.len() != 4 {
        eprintln!("{USAGE}");
        return;
    }

    let parsed = (|| {
        let out = PathBuf::from(args.next()?);
        let rows: usize = args.next()?.parse().ok().filter(|&n| n >= 1)?;
        let cols: usize = args.next()?.parse().ok().filter(|&n| n >= 1)?;
        let max_value: u32 = args.next()?.parse().ok().filter(|&n| n >= 1)?;
        Some((out, rows, cols, max_value))
    })();
    let Some((out, rows, cols, max_value)) = parsed else {
        eprintln!("{USAGE}");
        return;
    };

    let mut rng = rand::thread_rng();
    let mat = Matrix::from_fn(rows, cols, |_, _| rng.gen_range(0..max_value) as Float);

    if let Err(err) = mat.store(&out) {
        eprintln!("{err}");
        process::exit(1);
    }
    println!("Generated {rows}x{cols} matrix in {}", out.display());
}
