use crate::domain::result_point::ResultPoint;

/// The two designs a comparison runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Design {
    Proposed,
    Baseline,
}

impl Design {
    pub fn label(&self) -> &'static str {
        match self {
            Design::Proposed => "proposed",
            Design::Baseline => "baseline",
        }
    }
}

/// Named ordered sequence of result points. Ordering is whatever the
/// modeling service returned; matching is a linear scan, so no sortedness
/// is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSeries {
    pub design: Design,
    pub points: Vec<ResultPoint>,
}

impl ResultSeries {
    pub fn new(design: Design) -> Self {
        Self {
            design,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Raw draws for one scenario category, used for box-plot summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDraws {
    pub name: String,
    pub draws: Vec<f64>,
}

/// Everything one modeling request produces, decoded and validated. A new
/// applied response replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPayload {
    pub proposed: ResultSeries,
    pub baseline: ResultSeries,
    pub scenarios: Vec<ScenarioDraws>,
}

impl ResultsPayload {
    pub fn new() -> Self {
        Self {
            proposed: ResultSeries::new(Design::Proposed),
            baseline: ResultSeries::new(Design::Baseline),
            scenarios: Vec::new(),
        }
    }
}

impl Default for ResultsPayload {
    fn default() -> Self {
        Self::new()
    }
}
