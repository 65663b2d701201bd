//! Aggregate statistics over a batch of simulated matches.

use std::fmt;

use serde::Serialize;

use infl_battle::round::MatchResult;

use crate::runner::{MatchOutcome, StrategyCounts};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyUsage {
    pub dominate: u32,
    pub prepare: u32,
}

impl StrategyUsage {
    fn add(&mut self, counts: StrategyCounts) {
        self.dominate += counts.dominate;
        self.prepare += counts.prepare;
    }

    fn prepare_share(&self) -> f64 {
        ratio(self.prepare, self.dominate + self.prepare)
    }
}

/// Results from the player seat's point of view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub matches: u32,
    pub victories: u32,
    pub defeats: u32,
    pub draws: u32,
    pub rounds: u32,
    pub tiebreaks: u32,
    /// Share of rounds decided by tier rank
    pub tiebreak_rate: f64,
    pub player_points: u32,
    pub ai_points: u32,
    pub player_strategies: StrategyUsage,
    pub ai_strategies: StrategyUsage,
}

fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole)
    }
}

impl Report {
    pub fn from_outcomes(outcomes: &[MatchOutcome]) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            report.matches += 1;
            match outcome.result {
                MatchResult::Victory => report.victories += 1,
                MatchResult::Defeat => report.defeats += 1,
                MatchResult::Draw => report.draws += 1,
            }
            report.rounds += outcome.rounds;
            report.tiebreaks += outcome.tiebreaks;
            report.player_points += u32::from(outcome.player_points);
            report.ai_points += u32::from(outcome.ai_points);
            report.player_strategies.add(outcome.player_strategies);
            report.ai_strategies.add(outcome.ai_strategies);
        }
        report.tiebreak_rate = ratio(report.tiebreaks, report.rounds);
        report
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u32| 100.0 * ratio(n, self.matches);
        writeln!(f, "=== SIMULATION REPORT ({} matches) ===", self.matches)?;
        writeln!(f, "  Victories: {:>6} ({:.1}%)", self.victories, pct(self.victories))?;
        writeln!(f, "  Defeats:   {:>6} ({:.1}%)", self.defeats, pct(self.defeats))?;
        writeln!(f, "  Draws:     {:>6} ({:.1}%)", self.draws, pct(self.draws))?;
        writeln!(
            f,
            "  Points:    player {} / ai {}",
            self.player_points, self.ai_points
        )?;
        writeln!(
            f,
            "  Tie-breaks: {} of {} rounds ({:.1}%)",
            self.tiebreaks,
            self.rounds,
            100.0 * self.tiebreak_rate
        )?;
        for (seat, usage) in [("player", &self.player_strategies), ("ai", &self.ai_strategies)] {
            writeln!(
                f,
                "  {seat:<6} strategies: dominate {} / prepare {} ({:.1}% prepare)",
                usage.dominate,
                usage.prepare,
                100.0 * usage.prepare_share()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: MatchResult, player_points: u8, ai_points: u8, tiebreaks: u32) -> MatchOutcome {
        MatchOutcome {
            result,
            player_points,
            ai_points,
            rounds: 6,
            tiebreaks,
            player_strategies: StrategyCounts { dominate: 4, prepare: 2 },
            ai_strategies: StrategyCounts { dominate: 5, prepare: 1 },
        }
    }

    #[test]
    fn test_report_tallies_results() {
        let report = Report::from_outcomes(&[
            outcome(MatchResult::Victory, 4, 2, 0),
            outcome(MatchResult::Defeat, 1, 5, 3),
            outcome(MatchResult::Draw, 3, 3, 0),
            outcome(MatchResult::Victory, 3, 2, 1),
        ]);

        assert_eq!(report.matches, 4);
        assert_eq!((report.victories, report.defeats, report.draws), (2, 1, 1));
        assert_eq!(report.rounds, 24);
        assert_eq!(report.tiebreaks, 4);
        assert!((report.tiebreak_rate - 4.0 / 24.0).abs() < 1e-9);
        assert_eq!(report.player_points, 11);
        assert_eq!(report.ai_strategies, StrategyUsage { dominate: 20, prepare: 4 });
    }

    #[test]
    fn test_empty_report_has_zero_rates() {
        let report = Report::from_outcomes(&[]);
        assert_eq!(report.matches, 0);
        assert_eq!(report.tiebreak_rate, 0.0);
        assert!(report.to_string().contains("0 matches"));
    }

    #[test]
    fn test_report_json_is_camel_case() {
        let report = Report::from_outcomes(&[outcome(MatchResult::Draw, 3, 3, 2)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["draws"], 1);
        assert_eq!(json["tiebreaks"], 2);
        assert_eq!(json["aiStrategies"]["dominate"], 5);
        assert!(json.get("tiebreakRate").is_some());
    }
}
