mod display;
mod repl;

use {
    clap::{arg, Command},
    executor::{Error as ExecutionError, Executor, Session},
    repl::Repl,
    snafu::prelude::*,
    std::{
        env,
        io::{self, Write},
        path::PathBuf,
        process,
    },
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("cannot open data directory {}: {}", path.display(), source))]
    OpenDataDirectory {
        path: PathBuf,
        #[snafu(backtrace)]
        source: ExecutionError,
    },

    #[snafu(display("terminal i/o failed: {}", source))]
    Terminal { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

const BRANCHDB_DATADIR: &str = "BRANCHDB_DATADIR";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!(-d --data_dir <PATH> "data directory, defaults to $BRANCHDB_DATADIR or the working directory").required(false))
        .arg(arg!(-c --command <SQL> "run the statements and exit").required(false))
        .arg(arg!(-v --verbose "log every statement"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let path = match matches.get_one::<String>("data_dir") {
        Some(dir) => PathBuf::from(dir),
        None => env::var_os(BRANCHDB_DATADIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let executor = Executor::open(&path).context(OpenDataDirectorySnafu { path })?;

    match matches.get_one::<String>("command") {
        Some(sql) => {
            let mut out = io::stdout().lock();
            repl::run_statements(&executor, &mut Session::new(), sql, &mut out)
                .and_then(|_| out.flush())
                .context(TerminalSnafu)
        }
        None => Repl::new(&executor, io::stdout().lock())
            .run(io::stdin().lock())
            .context(TerminalSnafu),
    }
}

/// `RUST_LOG` applies unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
