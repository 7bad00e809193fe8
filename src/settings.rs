use serde::{Deserialize, Serialize};

/// How a trial picks the next site to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingPolicy {
    /// Draw uniformly from all n^2 coordinates; open sites are simply redrawn
    #[default]
    AllSites,
    /// Draw only from closed sites (random permutation, never redraws)
    ClosedSites,
}

impl SamplingPolicy {
    pub fn name(&self) -> &str {
        match self {
            SamplingPolicy::AllSites => "all-sites",
            SamplingPolicy::ClosedSites => "closed-sites",
        }
    }

    /// Parse a command-line spelling, None when unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all-sites" | "all" | "uniform" => Some(SamplingPolicy::AllSites),
            "closed-sites" | "closed" | "permutation" => Some(SamplingPolicy::ClosedSites),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(SamplingPolicy::parse("ALL"), Some(SamplingPolicy::AllSites));
        assert_eq!(SamplingPolicy::parse("closed"), Some(SamplingPolicy::ClosedSites));
        assert_eq!(SamplingPolicy::parse("sideways"), None);
    }

    #[test]
    fn test_name_parses_back() {
        for policy in [SamplingPolicy::AllSites, SamplingPolicy::ClosedSites] {
            assert_eq!(SamplingPolicy::parse(policy.name()), Some(policy));
        }
    }
}
