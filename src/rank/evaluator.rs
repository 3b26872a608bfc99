use std::fmt::{self, Display};
use std::time::Instant;

use log::debug;

#[cfg(feature = "rational")]
use super::strategies::RationalStrategy;
use super::strategies::{GaussJordanStrategy, SvdStrategy};
use super::{RankError, RankResult, RankStrategy, VectorSet};

/// One RankResult per evaluated strategy, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryReport {
    results: Vec<RankResult>,
}

impl SummaryReport {
    pub fn get(&self, name: &str) -> Option<&RankResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Result with the smallest elapsed time. On a tie the strategy
    /// registered first wins.
    pub fn fastest(&self) -> Option<&RankResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.elapsed <= r.elapsed => Some(b),
            _ => Some(r),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Linear Dependence Summary ===")?;
        for r in &self.results {
            let status = if r.independent {
                "Independent"
            } else {
                "Dependent"
            };
            writeln!(
                f,
                "{:<12} => {:<11} | Time: {:.6}s",
                r.name,
                status,
                r.elapsed.as_secs_f64()
            )?;
        }
        if let Some(best) = self.fastest() {
            writeln!(f)?;
            write!(
                f,
                "Fastest: {} ({:.6}s)",
                best.name,
                best.elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    }
}

/// Runs every registered strategy once per evaluation and collects the
/// verdicts and timings.
pub struct DependencyEvaluator {
    strategies: Vec<Box<dyn RankStrategy>>,
    report: SummaryReport,
}

impl DependencyEvaluator {
    /// Registers the built-in strategies. The rational strategy joins
    /// only when the crate was built with the `rational` feature; its
    /// absence is a configuration state, not an error.
    pub fn new() -> DependencyEvaluator {
        let mut strategies: Vec<Box<dyn RankStrategy>> =
            vec![Box::new(GaussJordanStrategy), Box::new(SvdStrategy)];
        #[cfg(feature = "rational")]
        strategies.push(Box::new(RationalStrategy));
        #[cfg(not(feature = "rational"))]
        debug!("rational strategy not compiled in, skipping");

        DependencyEvaluator::with_strategies(strategies)
    }

    pub fn with_strategies(strategies: Vec<Box<dyn RankStrategy>>) -> DependencyEvaluator {
        DependencyEvaluator {
            strategies,
            report: SummaryReport::default(),
        }
    }

    /// Invokes each strategy once, timing the rank computation, and
    /// rebuilds the report from scratch. Verdict: independent iff
    /// rank == N and N <= D.
    pub fn evaluate(&mut self, vectors: &VectorSet) -> Result<&SummaryReport, RankError> {
        let mut report = SummaryReport::default();
        for strategy in &self.strategies {
            let start = Instant::now();
            let rank = strategy.rank(vectors)?;
            let elapsed = start.elapsed();

            let independent = rank == vectors.len() && vectors.len() <= vectors.dim();
            debug!(
                "{}: rank {} of {} vectors in {:?}",
                strategy.name(),
                rank,
                vectors.len(),
                elapsed
            );
            report.results.push(RankResult {
                name: strategy.name(),
                independent,
                elapsed,
            });
        }
        self.report = report;
        Ok(&self.report)
    }

    pub fn summarize(&self) -> String {
        self.report.to_string()
    }

    pub fn results(&self) -> &SummaryReport {
        &self.report
    }
}

impl Default for DependencyEvaluator {
    fn default() -> DependencyEvaluator {
        DependencyEvaluator::new()
    }
}
