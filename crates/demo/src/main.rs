use std::error::Error;
use std::process::ExitCode;

use log::{LevelFilter, error, info};
use sort::{SortAlgorithm, algorithm_name, all_algorithms, parse_sequence, sort_with};

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let outcome = if args.is_empty() {
        textbook_scenarios()
    } else {
        sort_arguments(&args)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn sort_arguments(args: &[String]) -> Result<(), Box<dyn Error>> {
    for arg in args {
        let data = parse_sequence::<i64>(arg)?;
        for &algo in all_algorithms() {
            let mut sorted = data.clone();
            sort_with(algo, &mut sorted);
            info!("{:<22} {data:?} -> {sorted:?}", algorithm_name(algo));
        }
    }
    Ok(())
}

fn textbook_scenarios() -> Result<(), Box<dyn Error>> {
    let merge_inputs: [&[i64]; 5] = [
        &[38, 27, 43, 3, 9, 82, 10],
        &[5, 2, 8, 1, 9],
        &[1, 2, 3, 4, 5],
        &[],
        &[42],
    ];
    for input in merge_inputs {
        info!("merge sort   {input:?} -> {:?}", sort::merge_sorted(input.iter().copied()));
    }

    let mut bubble = vec![64, 34, 25, 12, 22, 11, 90];
    let original = bubble.clone();
    sort_with(SortAlgorithm::BubbleSort, &mut bubble);
    info!("bubble sort  {original:?} -> {bubble:?}");

    let floats = [3.5, f64::NAN, 1.0];
    match sort::try_merge_sorted(floats) {
        Ok(sorted) => info!("merge sort   {floats:?} -> {sorted:?}"),
        Err(err) => info!("merge sort   {floats:?} rejected: {err}"),
    }
    if let Err(err) = parse_sequence::<i64>("42") {
        info!("parse        \"42\" rejected: {err}");
    }

    let haystack = [2, 3, 4, 10, 40];
    for target in [10, 2, 40, 100] {
        match search::binary_search(&haystack, &target)? {
            Some(idx) => info!("search       {target} found at index {idx}"),
            None => info!("search       {target} not found"),
        }
    }

    for n in [0, 1, 5, 10] {
        info!(
            "factorial    {n}! = {} (iterative {})",
            factorial::factorial(n)?,
            factorial::factorial_iterative(n)?
        );
    }
    if let Err(err) = factorial::factorial(-5) {
        info!("factorial    -5 rejected: {err}");
    }

    Ok(())
}
