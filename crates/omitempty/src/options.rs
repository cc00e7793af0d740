/// Order of the emptiness check for sequence elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceCheck {
    /// Test the raw element, then prune it if kept. An element such as
    /// `{"a": ""}` survives as `{}` because it was non-empty before pruning.
    #[default]
    BeforePrune,
    /// Prune the element first, then test the result, the same way object
    /// values are handled. `{"a": ""}` inside a sequence is dropped.
    AfterPrune,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Treat `false` booleans as empty
    pub omit_false_booleans: bool,
    pub sequence_check: SequenceCheck,
    /// Maximum container nesting accepted by `try_prune` (None = unlimited).
    /// The root container sits at depth 0.
    pub max_depth: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_omit_false_booleans(mut self, omit: bool) -> Self {
        self.omit_false_booleans = omit;
        self
    }

    pub fn with_sequence_check(mut self, check: SequenceCheck) -> Self {
        self.sequence_check = check;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
