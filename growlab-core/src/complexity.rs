//! ## growlab-core::complexity
//! **Time and space profiles for each exercise**
//!
//! Every exercise ships with an analysis of its best, worst and average
//! case, its space use, and whether a better approach exists.

use std::fmt;
use std::str::FromStr;

use crate::SimulationError;

/// The five exercises of the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    MostFrequent,
    RemoveDuplicates,
    FindPairs,
    GrowableArray,
    RunningTotal,
}

impl Exercise {
    pub const ALL: [Exercise; 5] = [
        Exercise::MostFrequent,
        Exercise::RemoveDuplicates,
        Exercise::FindPairs,
        Exercise::GrowableArray,
        Exercise::RunningTotal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::MostFrequent => "most-frequent",
            Exercise::RemoveDuplicates => "remove-duplicates",
            Exercise::FindPairs => "find-pairs",
            Exercise::GrowableArray => "growable-array",
            Exercise::RunningTotal => "running-total",
        }
    }

    pub fn profile(&self) -> ComplexityProfile {
        match self {
            Exercise::MostFrequent => ComplexityProfile {
                best: "O(n): one pass to count frequencies",
                worst: "O(n): every element must be counted",
                average: "O(n)",
                space: "O(n): one counter per distinct element",
                rationale: "A hash map of counts gives direct access to the most common value",
                optimization: "Only marginal; sorting first trades the map for O(n log n) time",
            },
            Exercise::RemoveDuplicates => ComplexityProfile {
                best: "O(n): all elements unique",
                worst: "O(n): all elements duplicates of one value",
                average: "O(n)",
                space: "O(n): a set of seen values",
                rationale: "Set membership avoids nested loops while preserving order",
                optimization: "An ordered-insertion map is equivalent but less flexible",
            },
            Exercise::FindPairs => ComplexityProfile {
                best: "O(n): single scan with constant-time lookups",
                worst: "O(n): every element must be scanned",
                average: "O(n)",
                space: "O(n): seen values and found pairs",
                rationale: "Hashing the complement avoids the O(n^2) nested loop",
                optimization: "Sorting plus two pointers is O(n log n) time without the extra set",
            },
            Exercise::GrowableArray => ComplexityProfile {
                best: "O(1) per append when capacity remains",
                worst: "O(n) for a single append that triggers a resize and copy",
                average: "O(1) amortized per append, O(n) for n appends",
                space: "O(n): final capacity is below 2n",
                rationale: "Doubling makes resizes logarithmic in n, and their copy costs \
                            form a geometric series dominated by the last resize",
                optimization: "Pre-sizing the store when n is known removes every resize",
            },
            Exercise::RunningTotal => ComplexityProfile {
                best: "O(n): single pass",
                worst: "O(n)",
                average: "O(n)",
                space: "O(n): one output slot per input",
                rationale: "Carrying the total forward avoids recomputing each prefix",
                optimization: "Writing in place reduces extra space to O(1) when mutation is allowed",
            },
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::ALL
            .into_iter()
            .find(|exercise| exercise.name() == s)
            .ok_or_else(|| SimulationError::InvalidArgument(format!("unknown exercise '{s}'")))
    }
}

/// Asymptotic analysis of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityProfile {
    pub best: &'static str,
    pub worst: &'static str,
    pub average: &'static str,
    pub space: &'static str,
    pub rationale: &'static str,
    pub optimization: &'static str,
}

impl fmt::Display for ComplexityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best case:    {}", self.best)?;
        writeln!(f, "Worst case:   {}", self.worst)?;
        writeln!(f, "Average case: {}", self.average)?;
        writeln!(f, "Space:        {}", self.space)?;
        writeln!(f, "Why:          {}", self.rationale)?;
        write!(f, "Improvements: {}", self.optimization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_names_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(exercise.name().parse::<Exercise>().unwrap(), exercise);
        }
    }

    #[test]
    fn test_unknown_exercise() {
        let err = "bubble-sort".parse::<Exercise>().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidArgument(_)));
    }

    #[test]
    fn test_growable_array_profile_mentions_amortized() {
        let profile = Exercise::GrowableArray.profile();
        assert!(profile.average.contains("amortized"));
        assert!(profile.to_string().starts_with("Best case:"));
    }
}
