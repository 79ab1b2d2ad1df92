use anyhow::{Context, Result};
use clap::Parser;

use twite::group::PermutationGroup;
use twite::table::MultiplicationTable;

/// Generators of the pentagon's dihedral group, used when none are given.
const DEFAULT_GENERATORS: [&str; 2] = ["(1 2 3 4 5)", "(1)(2 5)(3 4)"];

#[derive(Parser, Debug)]
#[command(
    name = "twite",
    about = "Generate the permutation group spanned by cycle-notation generators and print it."
)]
struct Cli {
    /// Generators in cycle notation, e.g. "(1 2 3 4 5)" or the compact
    /// "(12345)". Defaults to the dihedral group of the pentagon.
    generators: Vec<String>,
    /// Also print the order of every member.
    #[arg(long)]
    orders: bool,
    /// Also print the multiplication table as a text grid.
    #[arg(long)]
    table: bool,
    /// Also print the multiplication table as a LaTeX tabular.
    #[arg(long)]
    latex: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let generators: Vec<&str> = if cli.generators.is_empty() {
        DEFAULT_GENERATORS.to_vec()
    } else {
        cli.generators.iter().map(String::as_str).collect()
    };

    let group = PermutationGroup::generate_from_notation(&generators)
        .with_context(|| format!("generating the group of {}", generators.join(" ")))?;
    println!("{group}");

    if cli.orders {
        println!();
        for member in &group {
            println!("{member} has order {}", member.order());
        }
    }
    if cli.table || cli.latex {
        let table = MultiplicationTable::new(&group);
        if cli.table {
            println!();
            println!("{table}");
        }
        if cli.latex {
            println!();
            println!("{}", table.to_latex());
        }
    }
    Ok(())
}
