//! Decision-tree training and classification over delimited text files.
//!
//! Trains on TRAIN, classifies every record of TEST and writes one predicted
//! label per line to OUT, followed by an accuracy summary.
//!
//! ```bash
//! decision_tree [OPTIONS] TRAIN TEST OUT
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use treeclass::config::DataConfig;
use treeclass::data::Dataset;
use treeclass::predict::{Classifier, TreeClassifier};
use treeclass::tree::TreeBuilder;

struct Args {
    config: DataConfig,
    time: bool,
    dump_tree: bool,
    train: PathBuf,
    test: PathBuf,
    out: PathBuf,
}

fn parse_args() -> Args {
    let mut config = DataConfig::default();
    let mut time = false;
    let mut dump_tree = false;
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
            "--dump-tree" => dump_tree = true,
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
        time,
        dump_tree,
        train,
        test,
        out,
    }
}

fn print_help_and_exit(code: i32) -> ! {
    eprintln!(
        "decision_tree [OPTIONS] TRAIN TEST OUT\n\n  Options:\n    -s, --delim <s>   field delimiter (default: single space)\n    -h, --header      skip a header line in TRAIN and TEST\n    -w, --label <i>   class-label column, negative counts from the end (default: 0)\n    -t, --time        print elapsed wall time\n        --dump-tree   print the trained tree to stderr"
    );
    std::process::exit(code)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    let train = Dataset::from_path(&args.train, &args.config)?;
    let tree = TreeBuilder::build(train);
    if args.dump_tree {
        eprint!("{tree}");
    }

    let test = Dataset::from_path(&args.test, &args.config)?;
    let eval = TreeClassifier::new(&tree).evaluate(test.rows());

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
