mod classpath;
mod probe;
mod resolve;
mod roots;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "classglob",
    version,
    about = "Classpath resource pattern resolver",
    long_about = "Classglob expands classpath roots, including archives referenced through JAR \
                  manifest Class-Path attributes, and resolves glob patterns against them. \
                  Patterns support `*`, `?` and recursive `**` segments."
)]
pub struct Cli {
    /// Classpath entries as a platform path-separator list. Defaults to the
    /// CLASSPATH environment variable, then the current directory.
    #[arg(long, global = true, value_name = "PATHS")]
    classpath: Option<String>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a glob pattern against the classpath
    Resolve {
        /// Pattern such as `**/*.class` or `org/**/*.xml`
        #[arg(value_name = "PATTERN")]
        pattern: String,
        /// Print a JSON array instead of one URI per line
        #[arg(long)]
        json: bool,
        /// Print only the number of matches
        #[arg(long)]
        count: bool,
    },
    /// List the collected classpath roots, including manifest-referenced ones
    Roots {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compare empty-root and package-prefix resolution of the same suffix
    #[command(
        long_about = "Resolves `**/<suffix>` and `<prefix>/**/<suffix>` and compares the counts. \
                      Everything the prefixed pattern finds must also be found by the empty-root \
                      pattern, so a smaller empty-root count means roots were dropped. Exits 1 \
                      when the shortfall exceeds the tolerance, 0 otherwise."
    )]
    Probe {
        /// Package prefix for the second pattern
        #[arg(long, default_value = "org")]
        prefix: String,
        /// Resource suffix matched by both patterns
        #[arg(long, default_value = "*.class")]
        suffix: String,
        /// Allowed count shortfall before the verdict flips
        #[arg(long, default_value_t = 0)]
        tolerance: usize,
        /// Print the verdict as JSON instead of the full report
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = classglob_core::logging::init_logging("cli", cli.verbose);

    let resolver = classpath::build_resolver(cli.classpath.as_deref());

    match cli.command {
        Commands::Resolve {
            pattern,
            json,
            count,
        } => resolve::run(&resolver, &pattern, json, count),
        Commands::Roots { json } => roots::run(&resolver, json),
        Commands::Probe {
            prefix,
            suffix,
            tolerance,
            json,
        } => {
            let verdict = probe::run(&resolver, &prefix, &suffix, tolerance, json)?;
            if verdict.bug_observed() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
