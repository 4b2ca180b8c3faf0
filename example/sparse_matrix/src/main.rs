use anyhow::{anyhow, bail, Context, Result};
use sparse_matrix::{Operation, SparseMatrix};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use structopt::StructOpt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sparse-matrix",
    about = "Add, subtract or multiply two sparse matrices stored as text files"
)]
struct Opt {
    /// add, subtract or multiply (or 1/2/3). Prompted for when omitted
    operation: Option<Operation>,

    /// Path to the first matrix file
    #[structopt(parse(from_os_str))]
    first: Option<PathBuf>,

    /// Path to the second matrix file
    #[structopt(parse(from_os_str))]
    second: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Result format: text or json
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[structopt(short, long)]
    verbose: bool,
}

/// A fully specified run: the operation and both operand sources.
#[derive(Debug, PartialEq)]
struct Request {
    operation: Operation,
    first: PathBuf,
    second: PathBuf,
}

impl Request {
    /// Fills in whatever the command line left out by asking on `input`.
    fn resolve<R: BufRead, W: Write>(opt: &Opt, input: &mut R, out: &mut W) -> Result<Self> {
        let operation = match opt.operation {
            Some(op) => op,
            None => {
                writeln!(out, "Choose the operation:")?;
                for (i, op) in Operation::ALL.iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, op.title())?;
                }
                let choice = prompt(input, out, "Enter your choice (1/2/3): ")?;
                choice
                    .parse()
                    .map_err(|_| anyhow!("Invalid choice '{}'. Please enter 1, 2, or 3.", choice))?
            }
        };

        let first = match &opt.first {
            Some(path) => path.clone(),
            None => prompt(input, out, "Enter the path to the first matrix file: ")?.into(),
        };
        let second = match &opt.second {
            Some(path) => path.clone(),
            None => prompt(input, out, "Enter the path to the second matrix file: ")?.into(),
        };

        Ok(Self {
            operation,
            first,
            second,
        })
    }

    fn execute(&self) -> Result<SparseMatrix> {
        let a = load(&self.first)?;
        let b = load(&self.second)?;

        let result = self
            .operation
            .apply(&a, &b)
            .with_context(|| format!("Failed to {} matrices", self.operation))?;
        info!(
            operation = %self.operation,
            rows = result.rows(),
            cols = result.cols(),
            nnz = result.nnz(),
            "computed result"
        );
        Ok(result)
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input while reading answer");
    }
    Ok(line.trim().to_string())
}

fn load(path: &Path) -> Result<SparseMatrix> {
    let matrix = SparseMatrix::from_path(path)
        .with_context(|| format!("Failed to load matrix from {}", path.display()))?;
    for e in matrix.out_of_bounds() {
        warn!(
            path = %path.display(),
            row = e.row,
            col = e.col,
            rows = matrix.rows(),
            cols = matrix.cols(),
            "entry lies outside the declared dimensions"
        );
    }
    info!(path = %path.display(), nnz = matrix.nnz(), "loaded matrix");
    Ok(matrix)
}

fn render(matrix: &SparseMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(matrix)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes a rendered result for a terminal: text gets a heading naming the
/// operation, JSON is written bare so it stays machine-readable.
fn write_result<W: Write>(
    out: &mut W,
    operation: Operation,
    format: OutputFormat,
    rendered: &str,
) -> io::Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "\nResult of {}:", operation.title())?;
    }
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_tracing(opt.verbose);
    debug!(?opt, "parsed arguments");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let request = Request::resolve(&opt, &mut stdin.lock(), &mut stdout)?;
    let result = request.execute()?;
    let rendered = render(&result, opt.format)?;

    match &opt.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
            info!(path = %path.display(), "wrote result");
        }
        None => write_result(&mut stdout, request.operation, opt.format, &rendered)?,
    }

    Ok(())
}
