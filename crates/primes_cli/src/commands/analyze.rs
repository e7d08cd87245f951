use miette::{IntoDiagnostic, Result};
use primes_core::{Analysis, DisplayConfig, PrimeAnalyzer, PrimesError};

use crate::{output::Output, report};

/// How to present a finished analysis
#[derive(Debug, Clone)]
pub enum Format {
    Human(DisplayConfig),
    Json,
}

/// Analyse `{1..x}` or `{x..y}` and print the result.
///
/// Returns `Ok(false)` when the bounds were rejected; the violations have
/// already been printed by then.
pub fn run(analyzer: &PrimeAnalyzer, bounds: &[String], format: &Format) -> Result<bool> {
    let Some(result) = dispatch(analyzer, bounds) else {
        return Ok(true);
    };

    let analysis = match result {
        Ok(analysis) => analysis,
        Err(err) if err.is_validation() => {
            report_violations(&err);
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    print(&analysis, format)?;
    Ok(true)
}

/// `[last]` analyses `{1..last}`, `[first, last]` analyses `{first..last}`
fn dispatch(analyzer: &PrimeAnalyzer, bounds: &[String]) -> Option<primes_core::Result<Analysis>> {
    match bounds {
        [last] => Some(analyzer.analyze_up_to(last)),
        [first, last] => Some(analyzer.analyze(first, last)),
        _ => None,
    }
}

fn print(analysis: &Analysis, format: &Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(analysis).into_diagnostic()?;
            println!("{}", json);
        }
        Format::Human(display) => report::render(analysis, display),
    }
    Ok(())
}

fn report_violations(err: &PrimesError) {
    let output = Output::new();
    for message in err.messages() {
        output.error(&message);
    }
}
