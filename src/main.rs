use clap::Parser;
use itertools::Itertools;

use dotdot::{SequenceLookup, StaticCatalog, classify, parse_expr};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence expression, e.g. "1, 2, .., 9"
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Show the kind of every position in the expression
    #[arg(short, long)]
    partition: bool,

    /// Look up the terms around the last gap in the built-in catalogue
    #[arg(short, long)]
    lookup: bool,
}

fn main() {
    let args = Args::parse();

    let items = parse_expr(&args.expr).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });
    let classification = classify(&items);

    if args.partition {
        for (position, item) in items.iter().enumerate() {
            println!("{position}: {:?} {item}", item.kind());
        }
    }

    if classification.runs().is_empty() {
        println!("no gap marker in expression");
    }
    for (position, runs) in classification.runs() {
        println!(
            "gap at position {position}: before [{}], after [{}]",
            runs.before.iter().join(", "),
            runs.after.iter().join(", "),
        );
    }

    if args.lookup {
        let terms: Vec<i64> = classification
            .before()
            .iter()
            .chain(classification.after())
            .copied()
            .collect();
        if terms.is_empty() {
            println!("no terms around a gap to look up");
            return;
        }
        let candidates = StaticCatalog.lookup_by_terms(&terms).unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(1);
        });
        if candidates.is_empty() {
            println!("no catalogue match for [{}]", terms.iter().join(", "));
        }
        for candidate in &candidates {
            println!(
                "{} {} ({}): {}, ...",
                candidate.id,
                candidate.name,
                candidate.author,
                candidate.leading(10).iter().join(", "),
            );
        }
    }
}
