/// One of the three scoring iterations. Later passes let terraforming pull
/// sampled planets further towards the tolerance centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Baseline,
    Partial,
    Full,
}

impl Pass {
    pub const ALL: [Pass; 3] = [Pass::Baseline, Pass::Partial, Pass::Full];

    pub fn index(self) -> usize {
        match self {
            Pass::Baseline => 0,
            Pass::Partial => 1,
            Pass::Full => 2,
        }
    }

    /// Units of correction terraforming buys on each axis during this pass.
    pub fn terraform_factor(self, total_terraforming: bool) -> i32 {
        match (self, total_terraforming) {
            (Pass::Baseline, _) => 0,
            (Pass::Partial, false) => 5,
            (Pass::Partial, true) => 8,
            (Pass::Full, false) => 15,
            (Pass::Full, true) => 17,
        }
    }

    pub fn weight(self) -> i64 {
        match self {
            Pass::Baseline => 7,
            Pass::Partial => 5,
            Pass::Full => 6,
        }
    }

    pub fn is_baseline(self) -> bool {
        self == Pass::Baseline
    }
}
