use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ordered_tree::person::{self, ParseRecordError};
use ordered_tree::{SearchTree, TreeError};

/// How many records go into the person tree.
const RECORDS_ADDED: usize = 20;
/// How many of those are removed again.
const RECORDS_REMOVED: usize = 10;

/// Walks through the operations of a binary search tree.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Table of person records to load: a header line, then `first last age checking savings`
    /// per line.
    #[arg(short, long, value_name = "PATH")]
    records: Option<PathBuf>,

    /// Turn on debug output (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("cannot open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Records(#[from] ParseRecordError),
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    debug!(?filter, "logging initialised");
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    integer_demo();
    match &cli.records {
        Some(path) => person_demo(path),
        None => {
            info!("no records file given, skipping the person tree");
            Ok(())
        }
    }
}

fn integer_demo() {
    let mut tree = SearchTree::new();
    for x in [1, 8, 3, 4, 5, 6, 7, 9, 2] {
        tree.add(x);
    }

    println!("Inorder before removal:");
    tree.inorder_traverse(print_item);
    println!("Height: {}", tree.height());
    println!("Contains 3: {}", tree.contains(&3));
    println!("Contains 9: {}", tree.contains(&9));

    for x in [1, 4, 2, 3, 5, 9] {
        tree.remove(&x);
    }

    println!("\nInorder:");
    tree.inorder_traverse(print_item);
    println!("Preorder:");
    tree.preorder_traverse(print_item);
    println!("Postorder:");
    tree.postorder_traverse(print_item);
    println!("Contains 4: {}", tree.contains(&4));

    for x in 10..20 {
        tree.add(x);
    }
    println!("\nHeight after adding 10..20: {}", tree.height());
    tree.rebuild_balanced();
    println!("Height after rebuilding: {}", tree.height());
    println!("Sorted: {:?}", tree.to_sorted_vec());
}

fn person_demo(path: &Path) -> Result<(), DemoError> {
    let file = File::open(path).map_err(|source| DemoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let people = person::parse_records(BufReader::new(file))?;
    info!(records = people.len(), "loaded person records");

    let mut tree: SearchTree<_> = people.iter().take(RECORDS_ADDED).cloned().collect();

    println!("\nPeople in order of age:\n");
    tree.inorder_traverse(print_record);

    for person in people.iter().take(RECORDS_REMOVED) {
        tree.remove(person);
    }

    println!("\nAfter removing the first {} records:\n", RECORDS_REMOVED);
    tree.inorder_traverse(print_record);
    println!("Preorder:\n");
    tree.preorder_traverse(print_record);
    println!("Postorder:\n");
    tree.postorder_traverse(print_record);

    let mut copy = SearchTree::new();
    copy.clone_from(&tree);
    println!("Copy, postorder:\n");
    copy.postorder_traverse(print_record);

    tree.clear();
    if let Err(e @ TreeError::PreconditionViolated(_)) = tree.root_data() {
        println!("Reading the root of the cleared tree: {}", e);
    }
    println!("The copy still holds {} records", copy.len());
    Ok(())
}

fn print_item(item: &i32) {
    println!("{}", item);
}

fn print_record(person: &person::Person) {
    println!("{}\n", person);
}
