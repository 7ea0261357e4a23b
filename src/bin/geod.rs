//! geod: Geodesic computations on the command line.
//!
//! Reads lines of `lat lon azimuth distance` (or, with `-I`,
//! `lat1 lon1 lat2 lon2`) from the files given, or from stdin, and writes
//! `lat2 lon2 back_azimuth` (or `azimuth back_azimuth distance`).
//! Angles in degrees, distances in meters.
use anyhow::Context;
use clap::Parser;
use geod::prelude::*;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::str::FromStr;

/// GEOD: Direct and inverse geodesic computations on the ellipsoid.
/// Input lines starting with '#' are copied to the output unchanged.
#[derive(Parser, Debug)]
#[clap(name = "geod")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Inverse geodesic: read "lat1 lon1 lat2 lon2", write "az12 az21 dist"
    #[clap(short = 'I', long)]
    inverse: bool,

    /// Ellipsoid: catalogue name, or definition such as "+a=6378137 +rf=298.257"
    #[clap(short, long, default_value = "+ellps=WGS84")]
    ellps: String,

    /// Echo the input in front of the results
    #[clap(short, long)]
    full: bool,

    /// Report azimuths in [0, 360) rather than (-180, 180]
    #[clap(short, long)]
    positive: bool,

    /// Number of decimals in the angular output
    #[clap(short = 'd', long, default_value_t = 6)]
    decimals: usize,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on, stdin if none
    args: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    trace!("This is geod");
    debug!("{options:#?}");

    let ellipsoid = Ellipsoid::from_str(&options.ellps)
        .with_context(|| format!("Cannot set up ellipsoid '{}'", options.ellps))?;
    let geod = Geod::new(ellipsoid);
    debug!("{ellipsoid:?}");

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    if options.args.is_empty() {
        let stdin = io::stdin();
        process(&options, &geod, stdin.lock(), &mut output)?;
    }
    for name in &options.args {
        let file = File::open(name).with_context(|| format!("Cannot open '{name}'"))?;
        process(&options, &geod, BufReader::new(file), &mut output)?;
    }

    output.flush()?;
    Ok(())
}

fn process(
    options: &Cli,
    geod: &Geod,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), anyhow::Error> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            writeln!(output, "{line}")?;
            continue;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let Some(args) = parse(&tokens) else {
            warn!("Line {}: expected 4 numbers, got '{text}'", index + 1);
            continue;
        };

        let result = if options.inverse {
            inverse_row(geod, args)?
        } else {
            forward_row(geod, args)?
        };

        if options.full {
            write!(output, "{}  ", tokens[..4].join(" "))?;
        }
        let d = options.decimals;
        let azimuth = |a: f64| if options.positive { a.rem_euclid(360.) } else { a };
        if options.inverse {
            write!(
                output,
                "{:.d$} {:.d$} {:.3}",
                azimuth(result[0]),
                azimuth(result[1]),
                result[2]
            )?;
        } else {
            write!(
                output,
                "{:.d$} {:.d$} {:.d$}",
                result[0],
                result[1],
                azimuth(result[2])
            )?;
        }

        // Trailing text is passed through
        if tokens.len() > 4 {
            write!(output, " {}", tokens[4..].join(" "))?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn parse(tokens: &[&str]) -> Option<[f64; 4]> {
    if tokens.len() < 4 {
        return None;
    }
    let mut args = [0.; 4];
    for (arg, token) in args.iter_mut().zip(tokens) {
        *arg = token.parse().ok()?;
    }
    Some(args)
}

/// lat lon azimuth distance -> lat2 lon2 back_azimuth
fn forward_row(geod: &Geod, args: [f64; 4]) -> Result<[f64; 3], Error> {
    let [lat, lon, azimuth, distance] = args;
    let (mut lons, mut lats, mut azimuths) = ([lon], [lat], [azimuth]);
    geod.fwd(&mut lons, &mut lats, &mut azimuths, &[distance], false)?;
    Ok([lats[0], lons[0], azimuths[0]])
}

/// lat1 lon1 lat2 lon2 -> azimuth back_azimuth distance
fn inverse_row(geod: &Geod, args: [f64; 4]) -> Result<[f64; 3], Error> {
    let [lat1, lon1, lat2, lon2] = args;
    let (mut lons1, mut lats1, mut lons2) = ([lon1], [lat1], [lon2]);
    geod.inv(&mut lons1, &mut lats1, &mut lons2, &[lat2], false)?;
    Ok([lons1[0], lats1[0], lons2[0]])
}
