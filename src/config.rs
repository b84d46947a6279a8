use std::path::PathBuf;

/// Run configuration taken from the command line.
#[derive(Debug)]
pub struct Config {
    pub a: PathBuf,
    pub b: PathBuf,
    pub workers: usize,
    pub out: PathBuf,
}

impl Config {
    pub const USAGE: &'static str = "Usage: parmul <A_file> <B_file> <num_workers> <output_file>";

    /// Parses the four positional arguments. Returns `None` on a wrong
    /// argument count or a worker count that is not a positive integer.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Option<Self> {
        args.next()?; // program name

        let a = PathBuf::from(args.next()?);
        let b = PathBuf::from(args.next()?);
        let workers = args.next()?.parse().ok().filter(|&k| k >= 1)?;
        let out = PathBuf::from(args.next()?);

        if args.next().is_some() {
            return None;
        }

        Some(Config { a, b, workers, out })
    }

    /// Worker count actually used for a result with `nrows` rows: a
    /// partition holds at least one row, so the requested count is clamped
    /// to the row count.
    pub fn effective_workers(&self, nrows: usize) -> usize {
        self.workers.min(nrows)
    }
}
