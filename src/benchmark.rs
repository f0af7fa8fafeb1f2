use anyhow::{Context, Result, bail};
use clap::Parser;
use fixed_heap::Heap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heap-benchmark")]
#[command(about = "A binary heap performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    /// Capacity ceiling; defaults to `size`
    #[arg(long)]
    capacity: Option<usize>,

    /// Number of elements used for the find and change_priority passes
    #[arg(long, default_value = "1000")]
    sample: usize,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let capacity = args.capacity.unwrap_or(args.size);
    if capacity < args.size {
        bail!(
            "capacity {} is smaller than size {}",
            capacity,
            args.size
        );
    }

    println!(
        "Running with {} elements, capacity {} and seed {}",
        args.size, capacity, args.seed
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut numbers: Vec<i64> = (0..args.size as i64).collect();
    numbers.shuffle(&mut rng);

    let mut heap = Heap::new(capacity);
    let sample = args.sample.min(args.size);

    let start = Instant::now();
    for (i, &number) in numbers.iter().enumerate() {
        assert_eq!(heap.len(), i);
        heap.insert(number)
            .with_context(|| format!("inserting element {}", i))?;
    }
    let inserted = Instant::now();
    for number in &numbers[..sample] {
        assert!(heap.find(number).is_some());
    }
    let found = Instant::now();
    for number in &numbers[..sample] {
        let index = heap
            .find(number)
            .with_context(|| format!("{} missing from heap", number))?;
        // Negating keeps values distinct and pushes them toward the leaves.
        heap.change_priority(index, -number - 1)?;
    }
    let changed = Instant::now();
    let mut previous = None;
    while !heap.is_empty() {
        let top = heap.extract_top()?;
        if let Some(previous) = previous {
            assert!(top <= previous, "extracted {} after {}", top, previous);
        }
        previous = Some(top);
    }
    let end = Instant::now();

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Finding {} elements took {} seconds",
        sample,
        found.saturating_duration_since(inserted).as_secs_f32()
    );
    println!(
        "Changing {} priorities took {} seconds",
        sample,
        changed.saturating_duration_since(found).as_secs_f32()
    );
    println!(
        "Extractions took {} seconds",
        end.saturating_duration_since(changed).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
    Ok(())
}
