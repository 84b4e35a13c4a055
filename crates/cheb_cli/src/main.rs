mod config;
mod logger;

use clap::{Args, Parser, Subcommand};

use config::{CliError, EvalConfig, Series, SeriesKind, sample_points};

#[derive(Parser)]
#[command(name = "cheb", about = "Evaluate Chebyshev and Legendre series")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SeriesArgs {
    /// Comma-separated coefficients, lowest degree first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    coeffs: Vec<f64>,
    /// Polynomial basis of the coefficients
    #[arg(long, value_enum, default_value_t = SeriesKind::Chebyshev)]
    kind: SeriesKind,
    /// Lower bound of the domain (default -1)
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<f64>,
    /// Upper bound of the domain (default 1)
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<f64>,
}

impl SeriesArgs {
    fn into_config(self) -> EvalConfig {
        EvalConfig {
            kind: self.kind,
            coefficients: self.coeffs,
            lower: self.lower,
            upper: self.upper,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show order, coefficients and domain of a series
    Info {
        #[command(flatten)]
        series: SeriesArgs,
    },
    /// Evaluate a series at the given points
    #[command(allow_negative_numbers = true)]
    Eval {
        #[command(flatten)]
        series: SeriesArgs,
        /// Evaluation points
        #[arg(required = true)]
        x: Vec<f64>,
    },
    /// Evaluate a series on evenly spaced points across its domain
    Sample {
        #[command(flatten)]
        series: SeriesArgs,
        /// Number of points, endpoints included
        #[arg(long, default_value = "11")]
        points: usize,
    },
    /// Find the real points where a series equals a value
    Roots {
        #[command(flatten)]
        series: SeriesArgs,
        /// Target value of the series
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        value: f64,
        /// Only report roots inside the domain
        #[arg(long)]
        in_domain: bool,
    },
}

fn build_series(args: SeriesArgs) -> Series {
    args.into_config().build().unwrap_or_else(|e| exit_with(&e))
}

fn exit_with(e: &CliError) -> ! {
    tracing::debug!(error = ?e, "aborting");
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn print_table(series: &Series, xs: &[f64]) {
    let f = series.function();
    for &x in xs {
        if !f.is_inside(x) {
            tracing::warn!(x, "point outside domain, extrapolating");
        }
        println!("{x:>24.15e}  {:>24.15e}", f.evaluate(x));
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Info { series } => {
            let kind = series.kind;
            let series = build_series(series);
            let domain = series.function().domain();
            println!("kind:         {}", kind.name());
            println!("order:        {}", series.order());
            println!("coefficients: {}", series.coefficients().len());
            for (k, c) in series.coefficients().iter().enumerate() {
                println!("  c[{k}] = {c:.15e}");
            }
            println!("domain:       [{}, {}]", domain.lower(), domain.upper());
        }

        Commands::Eval { series, x } => {
            let series = build_series(series);
            print_table(&series, &x);
        }

        Commands::Sample { series, points } => {
            let series = build_series(series);
            let xs = sample_points(series.function().domain(), points)
                .unwrap_or_else(|e| exit_with(&e));
            tracing::debug!(points = xs.len(), "sampling domain");
            print_table(&series, &xs);
        }

        Commands::Roots {
            series,
            value,
            in_domain,
        } => {
            let series = build_series(series);
            let roots = series.roots(value, in_domain);
            tracing::debug!(count = roots.len(), value, in_domain, "roots found");
            if roots.is_empty() {
                println!("No real roots");
            }
            for root in roots {
                println!("{root:>24.15e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coefficients_and_points() {
        let cli = Cli::try_parse_from([
            "cheb",
            "eval",
            "--coeffs",
            "-11.5,14.75,-3.5,0.25",
            "--",
            "-1",
            "0",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Eval { series, x } => {
                assert_eq!(series.coeffs, vec![-11.5, 14.75, -3.5, 0.25]);
                assert_eq!(series.kind, SeriesKind::Chebyshev);
                assert_eq!(x, vec![-1.0, 0.0, 1.0]);
            }
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn parses_domain_and_kind() {
        let cli = Cli::try_parse_from([
            "cheb", "sample", "--coeffs", "1,2", "--kind", "legendre", "--lower", "-5", "--upper",
            "5", "--points", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Sample { series, points } => {
                let cfg = series.into_config();
                assert_eq!(cfg.kind, SeriesKind::Legendre);
                assert_eq!(cfg.lower, Some(-5.0));
                assert_eq!(cfg.upper, Some(5.0));
                assert_eq!(points, 3);
            }
            _ => panic!("expected sample"),
        }
    }

    #[test]
    fn parses_roots_with_negative_value() {
        let cli = Cli::try_parse_from([
            "cheb",
            "roots",
            "--coeffs",
            "-11.5,14.75,-3.5,0.25",
            "--value",
            "-8",
            "--in-domain",
        ])
        .unwrap();
        match cli.command {
            Commands::Roots {
                value, in_domain, ..
            } => {
                assert_eq!(value, -8.0);
                assert!(in_domain);
            }
            _ => panic!("expected roots"),
        }
    }

    #[test]
    fn eval_requires_points() {
        assert!(Cli::try_parse_from(["cheb", "eval", "--coeffs", "1"]).is_err());
    }
}
