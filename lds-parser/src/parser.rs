use crate::constants::{END_TOKEN, START_TOKEN};
use crate::error::LdsError;
use crate::record::parse_record;
use lds_data::{AngularUnit, LinearUnit, Scan};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Builds [`Scan`]s from LDS log text.
pub struct ScanParser;

impl ScanParser {
    /// Splits a log file into scan strings, one per block found between
    /// [`START_TOKEN`] and [`END_TOKEN`] lines.
    pub fn file_to_strings<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LdsError> {
        let file = File::open(path.as_ref())?;
        ScanParser::strings_from_reader(BufReader::new(file))
    }

    /// Same as [`ScanParser::file_to_strings`], reading from any buffered source.
    ///
    /// A start line always opens a fresh block, dropping whatever an earlier
    /// unterminated block collected. Marker lines are never part of a block, and
    /// a block still open at the end of input is discarded.
    pub fn strings_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<String>, LdsError> {
        let mut scan_strings = Vec::new();
        let mut scan_string: Option<String> = None;
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            // device logs occasionally carry garbage bytes
            let text = String::from_utf8_lossy(&line);

            if text.contains(START_TOKEN) {
                scan_string = Some(String::new());
            } else if text.contains(END_TOKEN) {
                if let Some(s) = scan_string.take() {
                    scan_strings.push(s);
                }
            } else if let Some(s) = scan_string.as_mut() {
                s.push_str(&text);
            }
        }

        if scan_string.is_some() {
            trace!("Dropping unterminated scan block at end of input.");
        }
        Ok(scan_strings)
    }

    /// Parses one scan string.
    ///
    /// Records are whitespace separated `angle,distance,intensity,error_code`
    /// entries in degrees and millimeters, with strictly increasing angles. The
    /// first invalid record aborts the whole string.
    pub fn from_string(scan_string: &str) -> Result<Scan, LdsError> {
        let mut scan = Scan::new();
        let mut previous_angle: Option<f64> = None;

        for token in scan_string.split_whitespace() {
            let record = parse_record(token)?;

            if let Some(previous) = previous_angle {
                if record.angle <= previous {
                    return Err(LdsError::OutOfOrder {
                        angle: record.angle,
                        previous,
                    });
                }
            }
            previous_angle = Some(record.angle);

            scan.add_measurement(
                record.distance,
                record.angle,
                record.intensity,
                record.error_code,
                LinearUnit::Millimeters,
                AngularUnit::Degrees,
            );
        }

        Ok(scan)
    }

    /// Reads every scan of a log file.
    ///
    /// Scan strings that fail to parse are skipped, so the result may hold
    /// fewer scans than the file has blocks. Only I/O errors are returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Scan>, LdsError> {
        let path = path.as_ref();
        let scan_strings = ScanParser::file_to_strings(path)?;
        let n_blocks = scan_strings.len();

        let scans: Vec<Scan> = scan_strings
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match ScanParser::from_string(s) {
                Ok(scan) => Some(scan),
                Err(e) => {
                    debug!(block = i, "Skipping scan: {e}");
                    None
                }
            })
            .collect();

        debug!(
            "Parsed {} of {} scan blocks in {}.",
            scans.len(),
            n_blocks,
            path.display()
        );
        Ok(scans)
    }
}
