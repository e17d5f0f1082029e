#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

use plotters::prelude::*;
use rand::Rng;
use sifthash::{CapacityExceeded, ChainedHashMap, Heap, KeyValueMap, ProbingHashMap, is_heap};

// Key counts to load into fresh maps, up to the bucket count and past it
const KEY_COUNTS: [usize; 10] = [16, 32, 64, 96, 128, 160, 192, 224, 256, 320];
const MAX_KEY_LEN: usize = 8;
const HEAP_VALUES: usize = 1_000;
const CHART_PATH: &str = "collision_report.png";

#[derive(Debug, Clone, Copy)]
struct LoadStats {
    keys: usize,
    longest_chain: usize,
    mean_probe_distance: f64,
    rejected: usize,
}

fn random_key<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(1..=MAX_KEY_LEN);
    (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}

fn load_maps<R: Rng>(rng: &mut R, keys: usize) -> Result<LoadStats, CapacityExceeded> {
    let mut chained = ChainedHashMap::new();
    let mut probing = ProbingHashMap::new();
    let mut rejected = 0;
    let mut stored = Vec::with_capacity(keys);

    for index in 0..keys {
        let key = random_key(rng);
        chained.set(key.clone(), index.to_string())?;
        match probing.set(key.clone(), index.to_string()) {
            Ok(_) => stored.push(key),
            Err(_) => rejected += 1,
        }
    }

    let distances: Vec<usize> =
        stored.iter().filter_map(|key| probing.probe_distance(key)).collect();
    let mean_probe_distance = if distances.is_empty() {
        0.0
    } else {
        distances.iter().sum::<usize>() as f64 / distances.len() as f64
    };

    Ok(LoadStats { keys, longest_chain: chained.longest_chain(), mean_probe_distance, rejected })
}

fn check_heap<R: Rng>(rng: &mut R, is_max: bool) -> Result<(), Box<dyn std::error::Error>> {
    let values: Vec<i64> = (0..HEAP_VALUES).map(|_| rng.random_range(-500..500)).collect();
    let mut heap = Heap::new(is_max, values.iter().copied());

    // Remove a random half of the values again, one interior value at a time
    let mut kept = Vec::with_capacity(values.len());
    for &value in &values {
        if rng.random_bool(0.5) {
            heap.remove(value);
            if !is_heap(heap.output(), is_max) {
                return Err(format!("heap property broken after removing {value}").into());
            }
        } else {
            kept.push(value);
        }
    }

    kept.sort_unstable();
    if is_max {
        kept.reverse();
    }
    if heap.into_sorted_vec() != kept {
        return Err("polled values are out of order".into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    println!("Checking heap invariants with {HEAP_VALUES} random values");
    check_heap(&mut rng, false)?;
    check_heap(&mut rng, true)?;
    println!("  min-heap and max-heap ok");

    println!("Loading maps with key counts: {KEY_COUNTS:?}");
    let results = KEY_COUNTS
        .iter()
        .map(|&keys| load_maps(&mut rng, keys))
        .collect::<Result<Vec<_>, _>>()?;
    for stats in &results {
        println!(
            "  {} keys: longest chain = {}, mean probe distance = {:.2}, rejected = {}",
            stats.keys, stats.longest_chain, stats.mean_probe_distance, stats.rejected
        );
    }

    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];

    let root = BitMapBackend::new(CHART_PATH, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = results
        .iter()
        .map(|stats| {
            (stats.longest_chain as f64).max(stats.mean_probe_distance).max(stats.rejected as f64)
        })
        .fold(1.0, f64::max) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Collisions in 256-bucket maps", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(results.len() - 1), 0.0..max_y)?;

    let x_labels: Vec<String> = results.iter().map(|stats| stats.keys.to_string()).collect();
    chart
        .configure_mesh()
        .x_labels(results.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Set")
        .y_desc("Buckets")
        .axis_desc_style((font_family, 16))
        .draw()?;

    let series: [(&str, fn(&LoadStats) -> f64); 3] = [
        ("Chaining: longest chain", |stats| stats.longest_chain as f64),
        ("Probing: mean probe distance", |stats| stats.mean_probe_distance),
        ("Probing: rejected sets", |stats| stats.rejected as f64),
    ];

    for (color, (label, value)) in colors.iter().zip(series.iter()) {
        let line_style = ShapeStyle::from(color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                results.iter().enumerate().map(|(index, stats)| (index, value(stats))),
                line_style,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Chart written to {CHART_PATH}");
    Ok(())
}
