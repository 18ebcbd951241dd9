//! A CLI tool for inspecting the arrays of an image file:
//! shape, element kind, tags and per-component statistics.
use std::path::PathBuf;

use arrio_codec_jpeg::JPEG;
use arrio_core::{ArrayContainer, TagList};
use arrio_format::FormatEntry;
use clap::Parser;
use ndarray::Axis;
use snafu::{Report, ResultExt, Whatever};
use tracing::{error, Level};

/// The formats known to this tool.
const FORMATS: &[&FormatEntry] = &[&JPEG];

/// Inspect the arrays of an image file
#[derive(Debug, Parser)]
struct App {
    /// Path to the image file to inspect
    file: PathBuf,

    /// Print per-component minimum, maximum and mean
    #[arg(short = 's', long = "stats")]
    stats: bool,

    /// Print more information about the decoding process
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        file,
        stats,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let entry = FORMATS
        .iter()
        .find(|format| format.matches_path(&file))
        .unwrap_or_else(|| {
            error!("No known format can read {}", file.display());
            std::process::exit(-1);
        });

    if verbose {
        println!("Format: {}", entry.name());
    }

    let mut adapter = entry.create();
    adapter
        .open_read(&file, &TagList::new())
        .unwrap_or_else(|e| {
            error!("{}", Report::from_error(e));
            std::process::exit(-2);
        });

    let count = adapter.array_count();
    if count >= 0 {
        println!("{}: {} array(s)", file.display(), count);
    } else {
        println!("{}: unknown number of arrays", file.display());
    }

    let array = adapter.read_array(0).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-3);
    });

    let dims = array
        .dims()
        .iter()
        .map(|dim| dim.to_string())
        .collect::<Vec<_>>()
        .join("x");
    println!(
        "#0: {} array of {}-component {} elements ({} samples)",
        dims,
        array.components(),
        array.element_kind(),
        array.sample_count()
    );
    for (key, value) in array.tags().iter() {
        println!("  {} = {}", key, value);
    }
    for component in 0..array.components() {
        if let Some(component_tags) = array.component_tags(component) {
            for (key, value) in component_tags.iter() {
                println!("  [{}] {} = {}", component, key, value);
            }
        }
    }

    if stats {
        print_stats(&array);
    }

    if verbose && adapter.has_more() {
        println!("The file has more content after the first array");
    }

    adapter.close().unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-4);
    });
}

/// Print per-component sample statistics of an 8-bit array.
fn print_stats(array: &ArrayContainer) {
    let Some(samples) = array.to_ndarray() else {
        println!("  (no statistics for {} samples)", array.element_kind());
        return;
    };
    let component_axis = Axis(samples.ndim() - 1);
    for component in 0..array.components() {
        let lane = samples.index_axis(component_axis, component as usize);
        let min = lane.iter().copied().min().unwrap_or(0);
        let max = lane.iter().copied().max().unwrap_or(0);
        let sum: u64 = lane.iter().map(|&sample| u64::from(sample)).sum();
        let mean = sum as f64 / lane.len().max(1) as f64;
        println!(
            "  [{}] min {} / max {} / mean {:.1}",
            component, min, max, mean
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
