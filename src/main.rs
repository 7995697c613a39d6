use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use rbtree::graph::Graph;
use rbtree::red_black::{Color, Tree};
use rbtree::tsv;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Keys inserted into the demonstration tree, in insertion order.
const DEMO_KEYS: [i32; 7] = [19, 20, 25, 12, 17, 23, 24];
const DEFAULT_DATA_PATH: &str = "IMDBDataset.tsv";
const LOG_LEVEL_VAR: &str = "RBTREE_LOG";
const PROBE: &str = "Anne Hathaway";

fn initialize_logging() {
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn);

    // Only fails when a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn render(visited: &[(&i32, Color)]) -> String {
    visited
        .iter()
        .map(|(key, color)| format!("({}{})", key, color))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints each key's color, in the order the keys were inserted.
fn print_color_table(tree: &Tree<i32>) {
    println!("\n{:<5} | {:>5}", "Node", "Color");
    println!("-------------");
    for key in &DEMO_KEYS {
        if let Some(node) = tree.find(key) {
            println!("{:<5} | {:>5}", node.key(), node.color());
        }
    }
}

fn main() {
    initialize_logging();

    let tree: Tree<i32> = DEMO_KEYS.iter().copied().collect();
    println!("Inorder: {}", render(&tree.in_order()));
    println!("Preorder: {}", render(&tree.pre_order()));
    print_color_table(&tree);

    let data_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    info!("reading casts from {}", data_path.display());

    let rows = tsv::read_or_empty(&data_path);
    let graph = Graph::new(&tsv::cast_lists(&rows));
    info!("{} people in the graph", graph.len());

    println!();
    match graph.degree_of(PROBE) {
        Ok(degree) => println!("{} has a degree of {}", PROBE, degree),
        Err(err) => println!("{}", err),
    }
    match graph.max_degree() {
        Some(max) => println!("{}", max),
        None => println!("The graph is empty"),
    }
}
