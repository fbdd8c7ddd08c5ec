use colored::{ColoredString, Colorize};

use crate::{
    Sample,
    Booster,
    WeakLearner,
    BaseHypothesis,
    CombinedHypothesis,
};
use crate::error::Result;
use super::loss_functions::zero_one_loss;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

const PRINT_INTERVAL: usize = 100;
const NO_TIME_LIMIT: u128 = u128::MAX;
const COLUMN: usize = 10;
const DIGITS: usize = 5;
const BANNER_WIDTH: usize = 60;
const KEY_WIDTH: usize = 24;
const CSV_HEADER: &str = "Round,Alpha,Energy,TrainLoss,TestLoss,Time";


/// A booster that can report the ensemble it has built so far.
pub trait CurrentHypothesis {
    /// The ensemble type.
    type Output;

    /// Returns the ensemble of the rounds run so far,
    /// without finishing the training.
    fn current_hypothesis(&self) -> Self::Output;
}


/// One line of the training log.
#[derive(Debug, Clone, Copy)]
struct Record {
    round: usize,
    alpha: f64,
    energy: f64,
    train: f64,
    test: f64,
    millis: u128,
}


impl Record {
    fn csv(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.round,
            self.alpha,
            self.energy,
            self.train,
            self.test,
            self.millis,
        )
    }


    fn print(&self, tag: ColoredString) {
        println!(
            "{tag} {}  {}  {}  {}  {}",
            format!("{:>COLUMN$}", self.round).red(),
            format!("{:>COLUMN$.DIGITS$}", self.energy).blue(),
            format!("{:>COLUMN$.DIGITS$}", self.train).green(),
            format!("{:>COLUMN$.DIGITS$}", self.test).yellow(),
            time_format(self.millis).cyan(),
        );
    }
}


/// Runs a booster round by round and records, for each round,
/// `alpha` and energy of the newest base hypothesis,
/// the zero-one loss on a training and a test sample,
/// and the accumulated running time.
///
/// Every round becomes one line of a CSV file;
/// every `print_every` rounds a colored line is also printed.
///
/// ```no_run
/// use mhboost::prelude::*;
/// # let train = Sample::from_rows(&[vec![0.0]], &["a"]).unwrap();
/// # let test = train.clone();
/// let booster = AdaBoostMH::init(&train)
///     .iterations(100);
/// let weak_learner = booster.default_weak_learner();
/// let f = Logger::new(booster, weak_learner, &train, &test)
///     .print_every(10)
///     .time_limit_as_secs(60)
///     .run("adaboost_mh.csv")
///     .unwrap();
/// ```
pub struct Logger<'a, B, W> {
    booster: B,
    weak_learner: W,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, B, W> Logger<'a, B, W> {
    /// Wraps `booster` and `weak_learner`.
    /// Losses are measured on `train` and `test`.
    pub fn new(
        booster: B,
        weak_learner: W,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            train,
            test,
            time_limit: NO_TIME_LIMIT,
            round: PRINT_INTERVAL,
        }
    }


    /// Stop once the accumulated boosting time exceeds
    /// `time_limit` milliseconds.
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Same as [`Logger::time_limit_as_millis`], in seconds.
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Print a line every `round` rounds (default `100`).
    /// `usize::MAX` silences the console.
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "`print_every` needs a positive interval.");
        self.round = round;
        self
    }


    fn quiet(&self) -> bool {
        self.round == usize::MAX
    }
}


impl<H, B, W> Logger<'_, B, W>
    where B: Booster<H, Output = CombinedHypothesis<H>>
            + CurrentHypothesis<Output = CombinedHypothesis<H>>,
          H: BaseHypothesis,
          W: WeakLearner<Hypothesis = H>,
{
    fn print_banner(&self) {
        let limit = if self.time_limit == NO_TIME_LIMIT {
            "none".to_string()
        } else {
            time_format(self.time_limit).trim().to_string()
        };

        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("{:^BANNER_WIDTH$}", "SETTINGS".bold());
        println!("{}", "-".repeat(BANNER_WIDTH));
        print_entry("Booster", self.booster.name());
        print_info(self.booster.info());
        print_entry("Weak learner", self.weak_learner.name());
        print_info(self.weak_learner.info());
        print_entry("Time limit", &limit);
        println!("{}\n", "=".repeat(BANNER_WIDTH));

        println!(
            "      {:>COLUMN$}  {:>COLUMN$}  {:>COLUMN$}  {:>COLUMN$}  {:>COLUMN$}",
            "ROUND".bold().red(),
            "ENERGY".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// Trains like [`Booster::run`] and writes one CSV line
    /// per round to `filename`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<CombinedHypothesis<H>>
    {
        let mut csv = BufWriter::new(File::create(filename)?);
        writeln!(csv, "{CSV_HEADER}")?;

        self.booster.preprocess()?;
        if !self.quiet() { self.print_banner(); }

        let mut millis = 0_u128;
        for round in 1.. {
            let start = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, round);
            millis += start.elapsed().as_millis();

            let f = self.booster.current_hypothesis();
            let (alpha, energy) = f.hypotheses.last()
                .map_or((0f64, 1f64), |h| (h.alpha(), h.energy()));
            let record = Record {
                round,
                alpha,
                energy,
                train: zero_one_loss(self.train, &f),
                test: zero_one_loss(self.test, &f),
                millis,
            };
            writeln!(csv, "{}", record.csv())?;

            if millis > self.time_limit {
                if !self.quiet() {
                    record.print("[TLE]".bold().bright_red());
                }
                break;
            }
            if flow.is_break() {
                if !self.quiet() {
                    record.print("[FIN]".bold().bright_green());
                }
                break;
            }
            if !self.quiet() && round % self.round == 0 {
                record.print("[LOG]".bold().magenta());
            }
        }
        csv.flush()?;

        Ok(self.booster.postprocess())
    }
}


fn print_entry(key: &str, value: &str) {
    println!("+ {:<KEY_WIDTH$}{:>KEY_WIDTH$}", key.bold(), value.bold().green());
}


fn print_info(info: Option<Vec<(&str, String)>>) {
    for (key, value) in info.into_iter().flatten() {
        println!("    + {:<KEY_WIDTH$}{:>w$}", key, value.yellow(), w = KEY_WIDTH - 4);
    }
}


/// Formats a duration given in milliseconds with its largest two units.
fn time_format(millis: u128) -> String {
    let (secs, millis) = (millis / 1_000, millis % 1_000);
    let (mins, secs) = (secs / 60, secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);

    if hours > 0 {
        format!(" {hours:0>2}h {mins:0>2}m")
    } else if mins > 0 {
        format!(" {mins:0>2}m {secs:0>2}s")
    } else {
        format!("{secs:>3}.{millis:0>3}s")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdaBoostMH;

    #[test]
    fn time_format_units() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(12_345), " 12.345s");
        assert_eq!(time_format(61_000), " 01m 01s");
        assert_eq!(time_format(3_600_000), " 01h 00m");
    }

    #[test]
    fn one_csv_line_per_round() {
        let rows = (0..8).map(|i| vec![i as f64]).collect::<Vec<_>>();
        let labels = ["a", "a", "b", "b", "c", "c", "a", "b"];
        let sample = Sample::from_rows(&rows, &labels).unwrap();

        let booster = AdaBoostMH::init(&sample)
            .iterations(3)
            .product_size(2);
        let weak_learner = booster.default_weak_learner();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let f = Logger::new(booster, weak_learner, &sample, &sample)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();
        assert_eq!(f.len(), 3);

        let csv = std::fs::read_to_string(&path).unwrap();
        // Header, three rounds, and the round that breaks.
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.starts_with("Round,Alpha"));
    }

    #[test]
    fn quiet_run_stops_at_the_time_limit() {
        let rows = (0..40).map(|i| vec![(i % 13) as f64]).collect::<Vec<_>>();
        let labels = (0..40).map(|i| ["a", "b", "c"][i % 3]).collect::<Vec<_>>();
        let sample = Sample::from_rows(&rows, &labels).unwrap();

        let booster = AdaBoostMH::init(&sample)
            .iterations(50)
            .product_size(2);
        let weak_learner = booster.default_weak_learner();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let f = Logger::new(booster, weak_learner, &sample, &sample)
            .print_every(usize::MAX)
            .time_limit_as_millis(0)
            .run(&path)
            .unwrap();
        assert!(f.len() <= 50);

        let csv = std::fs::read_to_string(&path).unwrap();
        let n_lines = csv.lines().count();
        assert!(n_lines >= 2);
        assert!(n_lines <= 52);
        assert!(csv.starts_with("Round,Alpha"));
    }
}
