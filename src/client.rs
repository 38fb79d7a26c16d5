use log::LevelFilter;
use rand::{Rng, thread_rng};
use serde_json::Value;
use std::convert::TryFrom;
use std::io::{self, Write};
use std::str::FromStr;

use crate::disjoint_set::DisjointSet;
use crate::error::{ClientError, ClientRes, UnionFindError};
use crate::stats::{PercolationStats, seeded_rng};

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_LOG_FILE: &str = "quick-union.log";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Connectivity,
    Percolation,
}

/// Settings read from the JSON constants line that opens the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub n: usize,
    pub mode: Mode,
    pub trials: usize,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_file: String,
}

fn config_err<T>(msg: String) -> ClientRes<T> {
    Err(ClientError::Config(msg))
}

fn read_count(constants: &Value, key: &str) -> ClientRes<Option<u64>> {
    match &constants[key] {
        Value::Null => Ok(None),
        v => match v.as_u64() {
            Some(x) => Ok(Some(x)),
            None => config_err(format!("{} must be a non-negative integer, got {}", key, v)),
        },
    }
}

fn read_str<'a>(constants: &'a Value, key: &str) -> ClientRes<Option<&'a str>> {
    match &constants[key] {
        Value::Null => Ok(None),
        v => match v.as_str() {
            Some(s) => Ok(Some(s)),
            None => config_err(format!("{} must be a string, got {}", key, v)),
        },
    }
}

fn to_usize(key: &str, x: u64) -> ClientRes<usize> {
    usize::try_from(x).or_else(|_| config_err(format!("{} = {} does not fit in memory", key, x)))
}

impl ClientConfig {
    pub fn parse(line: &str) -> ClientRes<ClientConfig> {
        let constants: Value = serde_json::from_str(line)?;
        ClientConfig::from_json(&constants)
    }

    pub fn from_json(constants: &Value) -> ClientRes<ClientConfig> {
        if !constants.is_object() {
            return config_err(format!("expected a JSON object, got {}", constants));
        }

        let n = match &constants["N"] {
            Value::Null => return config_err("N is required".to_string()),
            v if v.as_i64().map_or(false, |x| x < 0) => {
                return Err(UnionFindError::InvalidArgument(format!("size must be non-negative, got {}", v)).into());
            }
            _ => match read_count(constants, "N")? {
                Some(n) => to_usize("N", n)?,
                None => return config_err("N is required".to_string()),
            },
        };

        let mode = match read_str(constants, "MODE")? {
            None | Some("connectivity") => Mode::Connectivity,
            Some("percolation") => Mode::Percolation,
            Some(other) => return config_err(format!("unknown MODE {:?}", other)),
        };

        let trials = match read_count(constants, "TRIALS")? {
            Some(t) => to_usize("TRIALS", t)?,
            None => DEFAULT_TRIALS,
        };

        let log_level = match read_str(constants, "LOG_LEVEL")? {
            Some(level) => match LevelFilter::from_str(level) {
                Ok(level) => level,
                Err(_) => return config_err(format!("unknown LOG_LEVEL {:?}", level)),
            },
            None => LevelFilter::Info,
        };

        Ok(ClientConfig {
            n,
            mode,
            trials,
            seed: read_count(constants, "SEED")?,
            log_level,
            log_file: read_str(constants, "LOG_FILE")?.unwrap_or(DEFAULT_LOG_FILE).to_string(),
        })
    }
}

/// Reads `p q` from a line; anything else is rejected.
pub fn parse_pair(text: &str) -> Option<(i64, i64)> {
    let mut nums = text.split_whitespace().map(str::parse::<i64>);
    match (nums.next(), nums.next(), nums.next()) {
        (Some(Ok(p)), Some(Ok(q)), None) => Some((p, q)),
        _ => None,
    }
}

/// Runs the client over the input lines that follow the constants line.
pub fn run<I, W>(config: &ClientConfig, lines: I, out: &mut W) -> ClientRes
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    match config.mode {
        Mode::Connectivity => {
            run_connectivity(config.n, lines, out)?;
        }
        Mode::Percolation => match config.seed {
            Some(seed) => report_percolation(config, &mut seeded_rng(seed), out)?,
            None => report_percolation(config, &mut thread_rng(), out)?,
        },
    }
    Ok(())
}

/// Unions every pair read from `lines`, echoing the pairs that joined two
/// different sets, and finishes with the number of sets left.
pub fn run_connectivity<I, W>(n: usize, lines: I, out: &mut W) -> ClientRes<DisjointSet>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let mut set = DisjointSet::new(n);
    let mut pairs = 0;
    for (i, line) in lines.enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        // the constants line is line 1
        let (p, q) = parse_pair(text).ok_or_else(|| ClientError::BadPair { line: i + 2, text: text.to_string() })?;
        pairs += 1;
        if set.union(p, q)? {
            writeln!(out, "{} {}", p, q)?;
        }
    }
    writeln!(out, "{} components", set.count())?;
    info!("{} pairs over {} elements left {} components", pairs, n, set.count());
    Ok(set)
}

fn report_percolation<R: Rng, W: Write>(config: &ClientConfig, rng: &mut R, out: &mut W) -> ClientRes {
    let stats = PercolationStats::run(config.n, config.trials, rng)?;
    writeln!(out, "mean                    = {}", stats.mean())?;
    writeln!(out, "stddev                  = {}", stats.stddev())?;
    writeln!(out, "95% confidence interval = [{}, {}]", stats.confidence_lo(), stats.confidence_hi())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
        text.lines().map(|l| Ok(l.to_string()))
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let config = ClientConfig::parse(r#"{"N": 10}"#).unwrap();
        assert_eq!(config, ClientConfig {
            n: 10,
            mode: Mode::Connectivity,
            trials: DEFAULT_TRIALS,
            seed: None,
            log_level: LevelFilter::Info,
            log_file: DEFAULT_LOG_FILE.to_string(),
        });
    }

    #[test]
    fn percolation_keys_are_read() {
        let config = ClientConfig::parse(
            r#"{"N": 50, "MODE": "percolation", "TRIALS": 7, "SEED": 3, "LOG_LEVEL": "debug", "LOG_FILE": "p.log"}"#).unwrap();
        assert_eq!(config.mode, Mode::Percolation);
        assert_eq!(config.trials, 7);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, "p.log");
    }

    #[test]
    fn bad_constants_are_rejected() {
        match ClientConfig::parse("{\"N\": 10") {
            Err(ClientError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
        match ClientConfig::parse(r#"{"MODE": "connectivity"}"#) {
            Err(ClientError::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
        match ClientConfig::parse(r#"{"N": -4}"#) {
            Err(ClientError::UnionFind(UnionFindError::InvalidArgument(_))) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(ClientConfig::parse(r#"{"N": "ten"}"#).is_err());
        assert!(ClientConfig::parse(r#"{"N": 4, "MODE": "sideways"}"#).is_err());
        assert!(ClientConfig::parse(r#"{"N": 4, "LOG_LEVEL": "loud"}"#).is_err());
        assert!(ClientConfig::parse("[4]").is_err());
    }

    #[test]
    fn pairs_need_exactly_two_integers() {
        assert_eq!(parse_pair("4 3"), Some((4, 3)));
        assert_eq!(parse_pair("  -1\t0 "), Some((-1, 0)));
        assert_eq!(parse_pair("4"), None);
        assert_eq!(parse_pair("4 3 2"), None);
        assert_eq!(parse_pair("a b"), None);
    }

    #[test]
    fn echoes_only_new_connections() {
        let input = "4 3\n3 8\n6 5\n9 4\n2 1\n8 9\n\n5 0\n7 2\n6 1\n1 0\n6 7\n";
        let mut out = Vec::new();
        let set = run_connectivity(10, lines(input), &mut out).unwrap();
        assert_eq!(output(out), "4 3\n3 8\n6 5\n9 4\n2 1\n5 0\n7 2\n6 1\n2 components\n");
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let mut out = Vec::new();
        match run_connectivity(5, lines("0 1\nzero one\n"), &mut out) {
            Err(ClientError::BadPair { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a bad pair, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_pair_fails() {
        let mut out = Vec::new();
        match run_connectivity(5, lines("0 1\n-1 0\n"), &mut out) {
            Err(ClientError::UnionFind(e)) => assert!(e.is_out_of_range()),
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn seeded_percolation_report() {
        let config = ClientConfig::parse(r#"{"N": 5, "MODE": "percolation", "TRIALS": 4, "SEED": 9}"#).unwrap();
        let mut first = Vec::new();
        run(&config, lines(""), &mut first).unwrap();
        let mut second = Vec::new();
        run(&config, lines(""), &mut second).unwrap();
        let report = output(first);
        assert!(report.starts_with("mean"));
        assert_eq!(report.lines().count(), 3);
        assert_eq!(report, output(second));
    }
}
