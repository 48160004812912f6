//! tour: walk through every dsakit container and algorithm.
//!
//! Prints each step's Display output so the behavior of a structure can be
//! followed operation by operation. Set `RUST_LOG=dsakit=trace` to also see
//! array resizes and hash-map events.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use dsakit::algorithms::{searching, sorting};
use dsakit::io::{
    format_slice, random_sorted_vec, random_vec, read_ints, read_ints_from_file, time_it,
};
use dsakit::prelude::*;

#[derive(Parser)]
#[command(name = "tour")]
#[command(version)]
#[command(about = "Guided tour of the dsakit data structures and algorithms")]
struct Cli {
    /// Which part of the tour to run
    #[arg(value_enum, default_value_t = Section::All)]
    section: Section,

    /// File of whitespace-separated integers used by the sort and search
    /// sections; `-` reads one line from stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed for generated inputs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Array,
    List,
    Stack,
    Queue,
    Tree,
    Hash,
    Sort,
    Search,
    All,
}

impl Section {
    const TOUR: [Section; 8] = [
        Section::Array,
        Section::List,
        Section::Stack,
        Section::Queue,
        Section::Tree,
        Section::Hash,
        Section::Sort,
        Section::Search,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Array => "Dynamic Array",
            Section::List => "Linked List",
            Section::Stack => "Stack",
            Section::Queue => "Queue",
            Section::Tree => "Binary Search Tree",
            Section::Hash => "Hash Table",
            Section::Sort => "Sorting Algorithms",
            Section::Search => "Searching Algorithms",
            Section::All => "All",
        }
    }
}

struct Tour {
    input: Option<Vec<i64>>,
    rng: SmallRng,
}

impl Tour {
    fn run(&mut self, section: Section) -> anyhow::Result<()> {
        match section {
            Section::Array => array(),
            Section::List => list(),
            Section::Stack => stack(),
            Section::Queue => queue(),
            Section::Tree => tree(),
            Section::Hash => hash(),
            Section::Sort => self.sort()?,
            Section::Search => self.search()?,
            Section::All => {
                for (i, part) in Section::TOUR.into_iter().enumerate() {
                    println!("\n{}. {}:", i + 1, part.title());
                    self.run(part)?;
                }
            },
        }
        Ok(())
    }

    fn sort(&mut self) -> anyhow::Result<()> {
        let values = match &self.input {
            Some(values) => values.clone(),
            None => random_vec(10, 1, 100, &mut self.rng)?,
        };
        println!("{}", format_slice("Original array", &values));

        let sorts: [(&str, fn(&[i64]) -> Vec<i64>); 6] = [
            ("Bubble Sort", sorting::bubble_sort::<i64>),
            ("Selection Sort", sorting::selection_sort::<i64>),
            ("Insertion Sort", sorting::insertion_sort::<i64>),
            ("Merge Sort", sorting::merge_sort::<i64>),
            ("Quick Sort", sorting::quick_sort::<i64>),
            ("Heap Sort", sorting::heap_sort::<i64>),
        ];
        for (name, sort) in sorts {
            let mut sorted = Vec::new();
            time_it(name, || sorted = sort(&values));
            println!("{}", format_slice(&format!("{name} result"), &sorted));
        }

        match sorting::counting_sort(&values) {
            Ok(sorted) => println!("{}", format_slice("Counting Sort result", &sorted)),
            Err(err) => println!("Counting Sort skipped: {err}"),
        }
        Ok(())
    }

    fn search(&mut self) -> anyhow::Result<()> {
        let values = match &self.input {
            Some(values) => sorting::merge_sort(values),
            None => random_sorted_vec(20, 1, 100, true, &mut self.rng)?,
        };
        println!("{}", format_slice("Sorted array for searching", &values));
        let Some(&target) = values.get(values.len() / 2) else {
            println!("Nothing to search");
            return Ok(());
        };
        println!("Searching for target: {target}");

        let searches: [(&str, fn(&[i64], i64) -> Option<usize>); 9] = [
            ("Linear Search", |v, t| searching::linear_search(v, &t)),
            ("Binary Search", |v, t| searching::binary_search(v, &t)),
            ("Binary Search Recursive", |v, t| {
                searching::binary_search_recursive(v, &t)
            }),
            ("Interpolation Search", searching::interpolation_search),
            ("Exponential Search", |v, t| searching::exponential_search(v, &t)),
            ("Jump Search", |v, t| searching::jump_search(v, &t)),
            ("Ternary Search", |v, t| searching::ternary_search(v, &t)),
            ("Find First", |v, t| searching::find_first(v, &t)),
            ("Find Last", |v, t| searching::find_last(v, &t)),
        ];
        for (name, search) in searches {
            match search(&values, target) {
                Some(index) => println!("{name}: Found at index {index}"),
                None => println!("{name}: Not found"),
            }
        }
        Ok(())
    }
}

fn array() {
    let mut array = DynamicArray::new(5);
    for i in 1..=5 {
        array.append(i * 10);
    }
    println!("After adding elements: {array}");

    array.append(60);
    println!("After growing past capacity: {array}");

    if array.insert(2, 25).is_ok() {
        println!("After inserting 25 at index 2: {array}");
    }
    if let Ok(value) = array.get(2) {
        println!("Element at index 2: {value}");
    }
    if let Err(err) = array.get(42) {
        println!("Element at index 42: {err}");
    }
    if let Ok(removed) = array.delete(2) {
        println!("After deleting {removed} at index 2: {array}");
    }
}

fn list() {
    let mut list: LinkedList<i64> = (1..=5).map(|i| i * 5).collect();
    println!("After adding elements: {list}");

    list.prepend(0);
    println!("After prepending 0: {list}");

    match list.find(&15) {
        Some(index) => println!("Index of element 15: {index}"),
        None => println!("Element 15 not found"),
    }

    list.reverse();
    println!("After reversing: {list}");

    let merged = LinkedList::merge_sorted(
        [1, 4, 9].into_iter().collect(),
        [2, 3, 10].into_iter().collect(),
    );
    println!("Merging [1 -> 4 -> 9] and [2 -> 3 -> 10]: {merged}");
}

fn stack() {
    let mut stack = ArrayStack::new();
    for i in 1..=5 {
        stack.push(i);
        println!("Pushed {i}: {stack}");
    }
    while let Ok(value) = stack.pop() {
        println!("Popped {value}: {stack}");
    }

    let mut linked = LinkedStack::new();
    for c in "abc".chars() {
        linked.push(c);
    }
    println!("Linked stack: {linked}");
}

fn queue() {
    let mut queue = ArrayQueue::new();
    for i in 1..=5 {
        queue.enqueue(i * 2);
        println!("Enqueued {}: {queue}", i * 2);
    }
    while let Ok(value) = queue.dequeue() {
        println!("Dequeued {value}: {queue}");
    }

    let mut ring = CircularQueue::new(3);
    for i in 1..=4 {
        match ring.enqueue(i) {
            Ok(()) => println!("Ring enqueued {i}: {ring}"),
            Err(err) => println!("Ring rejected {i}: {err}"),
        }
    }
}

fn tree() {
    let mut tree = BinarySearchTree::new();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(v);
    }
    print!("{tree}");
    println!("Inorder: {}", format_slice("", &tree.inorder()));
    println!("Preorder: {}", format_slice("", &tree.preorder()));
    println!("Postorder: {}", format_slice("", &tree.postorder()));
    if let Some(height) = tree.height() {
        println!("Height: {height}");
    }

    tree.delete(&50);
    println!("After deleting 50:");
    print!("{tree}");
}

fn hash() {
    let mut map = ChainedHashMap::new(16);
    for (key, value) in [("a", 1), ("b", 2), ("q", 3)] {
        map.put(key, value);
    }
    println!("{map}");
    println!("'a' and 'q' share bucket {}", map.bucket_index("a"));

    map.put("a", 10);
    if let Some(value) = map.get("a") {
        println!("After overwriting a: a = {value}, count = {}", map.count());
    }
    map.delete("q");
    println!("After deleting q: {map}");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) if path.as_os_str() == "-" => {
            println!("Enter integers separated by spaces:");
            Some(read_ints(std::io::stdin().lock()).context("failed to read integers from stdin")?)
        },
        Some(path) => Some(
            read_ints_from_file(path)
                .with_context(|| format!("failed to load integers from {}", path.display()))?,
        ),
        None => None,
    };
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    println!("=== dsakit tour ===");
    Tour { input, rng }.run(cli.section)
}
