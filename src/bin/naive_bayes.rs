//! Naive-Bayes training and classification over delimited text files.
//!
//! Same record format and output contract as `decision_tree`: one predicted
//! label per TEST record written to OUT, then an accuracy summary.
//!
//! ```bash
//! naive_bayes [OPTIONS] TRAIN TEST OUT
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use treeclass::bayes::{BayesClassifier, BayesParams};
use treeclass::config::DataConfig;
use treeclass::data::Dataset;
use treeclass::predict::Classifier;

struct Args {
    config: DataConfig,
    params: BayesParams,
    time: bool,
    train: PathBuf,
    test: PathBuf,
    out: PathBuf,
}

fn parse_args() -> Args {
    let mut config = DataConfig::default();
    let mut params = BayesParams::default();
    let mut time = false;
    let mut paths: Vec<PathBuf> = Vec::new();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-s" | "--delim" => {
                config.delimiter = it.next().expect("--delim requires a value");
            }
            "-h" | "--header" => config.has_header = true,
            "-w" | "--label" => {
                let v = it.next().expect("--label requires a value");
                config.label_column = v.parse().expect("--label expects an integer");
            }
            "-t" | "--time" => time = true,
            "--laplace" => {
                let v = it.next().expect("--laplace requires a value");
                params.laplace = v.parse().expect("--laplace expects a non-negative integer");
            }
            "--help" => print_help_and_exit(0),
            other => paths.push(PathBuf::from(other)),
        }
    }

    if paths.len() != 3 {
        print_help_and_exit(1);
    }
    let out = paths.pop().unwrap();
    let test = paths.pop().unwrap();
    let train = paths.pop().unwrap();

    Args {
        config,
        params,
        time,
        train,
        test,
        out,
    }
}

fn print_help_and_exit(code: i32) -> ! {
    eprintln!(
        "naive_bayes [OPTIONS] TRAIN TEST OUT\n\n  Options:\n    -s, --delim <s>   field delimiter (default: single space)\n    -h, --header      skip a header line in TRAIN and TEST\n    -w, --label <i>   class-label column, negative counts from the end (default: 0)\n    -t, --time        print elapsed wall time\n        --laplace <k> smoothing constant (default: 1)"
    );
    std::process::exit(code)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    let train = Dataset::from_path(&args.train, &args.config)?;
    let model = BayesClassifier::train(&train, &args.params);

    let test = Dataset::from_path(&args.test, &args.config)?;
    let eval = model.evaluate(test.rows());

    let mut out = BufWriter::new(File::create(&args.out)?);
    eval.write_to(&mut out)?;
    out.flush()?;

    if args.time {
        println!("Execution time: {} ms", start.elapsed().as_millis());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
