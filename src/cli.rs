use clap::Parser;

/// Estimates the speed of the International Space Station by polling its position.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Total sampling duration in seconds [default: 15]
    #[arg(value_parser = parse_duration_secs, allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// Polling interval in seconds [default: 5]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

fn parse_duration_secs(value: &str) -> Result<f64, String> {
    let secs = value.parse::<f64>().map_err(|e| format!("'{}' is not a number of seconds: {}", value, e))?;
    if !secs.is_finite() {
        return Err(format!("'{}' is not a finite number of seconds", value));
    }
    Ok(secs)
}
