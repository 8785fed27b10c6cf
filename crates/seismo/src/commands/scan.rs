use std::io::{BufRead, IsTerminal, Write};
use std::process::ExitCode;

use seismo_core::{filter_by_magnitude, report, Config, Snapshot};
use seismo_export::{ensure_output_dir, export_events, ExportFile};
use seismo_feed::FeedClient;

use crate::cli::ScanArgs;

pub fn run(args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let config = args.to_config();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}", report::banner(config.min_magnitude))?;
    let fetched = fetch(&config);
    let succeeded = execute(fetched, &config, &mut stdout)?;

    if !args.no_wait && std::io::stdin().is_terminal() {
        writeln!(stdout, "{}", report::CLOSE_PROMPT)?;
        stdout.flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn fetch(config: &Config) -> anyhow::Result<Snapshot> {
    let client = FeedClient::from_config(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(client.fetch())?)
}

/// What a successful scan produced
#[derive(Debug)]
struct ScanOutcome {
    matches: usize,
    export: Option<ExportFile>,
}

/// Report the scan, folding every failure into one critical-error line.
///
/// Returns whether the scan succeeded.
fn execute<W: Write>(
    fetched: anyhow::Result<Snapshot>,
    config: &Config,
    out: &mut W,
) -> std::io::Result<bool> {
    match scan(fetched, config, out) {
        Ok(outcome) => {
            tracing::info!(
                matches = outcome.matches,
                exported = outcome.export.is_some(),
                "scan finished"
            );
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "scan failed");
            writeln!(out, "{}", report::critical_error_line(&e))?;
            Ok(false)
        }
    }
}

fn scan<W: Write>(
    fetched: anyhow::Result<Snapshot>,
    config: &Config,
    out: &mut W,
) -> anyhow::Result<ScanOutcome> {
    let snapshot = fetched?;
    writeln!(out, "{}", report::raw_total_line(snapshot.reported_count))?;

    let matches = filter_by_magnitude(&snapshot.events, config.min_magnitude);
    for (i, event) in matches.iter().enumerate() {
        writeln!(out, "{}", report::alert_block(i + 1, event, config.time_format))?;
    }

    writeln!(out, "{}", report::separator())?;
    writeln!(out, "{}", report::summary_line(matches.len()))?;

    if matches.is_empty() {
        return Ok(ScanOutcome {
            matches: 0,
            export: None,
        });
    }

    if ensure_output_dir(&config.output_dir)? {
        writeln!(out, "{}", report::dir_created_line(&config.output_dir))?;
    }
    let export = export_events(&matches, &config.output_dir, config.time_format)?;
    writeln!(out, "{}", report::saved_line(&export.path))?;

    Ok(ScanOutcome {
        matches: matches.len(),
        export: Some(export),
    })
}
