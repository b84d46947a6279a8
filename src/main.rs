use parmul::{config::Config, error::Error, matrix::Matrix, multi, single};

fn main() {
    let Some(config) = Config::from_args(std::env::args()) else {
        eprintln!("{}", Config::USAGE);
        return;
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let a = Matrix::load(&config.a)?;
    let b = Matrix::load(&config.b)?;

    let (n, m) = a.shape();
    let (m_check, p) = b.shape();
    if m != m_check {
        return Err(Error::DimensionMismatch(n, m, m_check, p));
    }

    let workers = config.effective_workers(n);
    if workers < config.workers {
        println!(
            "Warning: worker count ({}) exceeds number of rows ({}). Using {} workers",
            config.workers, n, workers
        );
    }

    println!("Matrix dimensions: A({n}x{m}) × B({m}x{p}) = C({n}x{p})");

    let (c_seq, seq_time) = parmul::measure_time(|| single::multiply(&a, &b));
    println!(
        "Sequential multiplication time: {:.6} seconds",
        seq_time.as_secs_f64()
    );

    let (c_par, par_time) = parmul::measure_time(|| multi::multiply(&a, &b, workers));
    println!(
        "Parallel multiplication time ({} workers): {:.6} seconds",
        workers,
        par_time.as_secs_f64()
    );
    println!(
        "Speedup: {:.2}x",
        seq_time.as_secs_f64() / par_time.as_secs_f64()
    );

    if c_seq == c_par {
        println!("Verification: sequential and parallel results match.");
    } else {
        println!("Verification: sequential and parallel results DO NOT match!");
    }

    c_par.store(&config.out)?;
    println!("Result written to {}", config.out.display());

    Ok(())
}
