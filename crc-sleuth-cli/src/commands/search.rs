use indicatif::{ProgressBar, ProgressStyle};

use crc_sleuth_lib::{
    AlgorithmRegistry, Corpus, Report, SearchOptions, Settings, SweepOptions, aggregate,
    sweep_with,
};

use crate::CliError;
use crate::cli_types::SearchArgs;

/// Run the search command: a single index, or every index with `--auto`.
pub(crate) fn run_search(args: SearchArgs, quiet: bool) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let registry = match &args.algorithms {
        Some(names) => AlgorithmRegistry::select(names.as_slice())?,
        None => settings.registry()?,
    };
    let limit = args.limit.or(settings.search.threshold);
    let skip_single_byte = args.skip || settings.search.skip_single_byte;

    let corpus = Corpus::load(&args.file)?;
    log::info!(
        "Loaded {} blocks ({} bytes wide) from {}",
        corpus.len(),
        corpus.width(),
        args.file.display()
    );
    log::debug!("Algorithms: {}", registry.names().join(", "));

    if args.auto {
        let options = SweepOptions {
            threshold: limit,
            skip_single_byte,
        };
        run_sweep(&corpus, &registry, &options, args.json, quiet)
    } else {
        let options = SearchOptions::new(args.index)
            .threshold(limit.unwrap_or(0))
            .skip_single_byte(skip_single_byte);
        let report = aggregate(&corpus, &registry, &options)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{report}");
        }
        log::info!("{} hypotheses reported", report.len());
        Ok(())
    }
}

fn run_sweep(
    corpus: &Corpus,
    registry: &AlgorithmRegistry,
    options: &SweepOptions,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    log::info!(
        "Sweeping {} indices, threshold {}",
        corpus.width(),
        options.effective_threshold(corpus.len())
    );

    let pb = if quiet || json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(corpus.width() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} index {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        pb
    };

    let mut reports: Vec<Report> = Vec::new();
    let mut reported = 0;
    sweep_with(corpus, registry, options, |report| {
        reported += report.len();
        if json {
            reports.push(report.clone());
        } else if !report.is_empty() {
            pb.suspend(|| print!("{report}"));
        }
        pb.set_message(report.checksum_index.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    log::info!("{} hypotheses reported", reported);
    Ok(())
}
