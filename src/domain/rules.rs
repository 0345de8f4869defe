/// Position of an ancestor among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentKind {
    /// Final child of its parent
    Last,
    /// Followed by at least one sibling
    Continuous,
}

impl IndentKind {
    pub fn for_position(index: usize, sibling_count: usize) -> Self {
        if index + 1 == sibling_count {
            IndentKind::Last
        } else {
            IndentKind::Continuous
        }
    }
}

/// Which prefix algorithm the connector strings drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStyle {
    /// Distinguishes last children and draws vertical rules only where a
    /// sibling still follows.
    #[default]
    Branching,
    /// Repeats `vertical` once per ancestor level below the root, then one
    /// `continuous` marker. Every non-root node gets the same connector.
    DepthOnly,
}

/// Connector strings used to draw the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRules {
    pub style: RuleStyle,
    /// Ancestor level with more siblings below, e.g. `│  `
    pub vertical: String,
    /// Node followed by a sibling, e.g. `├──`
    pub continuous: String,
    /// Final node of its parent, e.g. `└──`
    pub last: String,
    /// Ancestor level that was a last child
    pub blank: String,
    /// Width hint forwarded to payloads, minus the prefix width
    pub max_width: Option<usize>,
}

pub const DEFAULT_BLANK: &str = "   ";

impl Default for RenderRules {
    fn default() -> Self {
        Self::unicode()
    }
}

impl RenderRules {
    pub fn branching(
        vertical: impl Into<String>,
        continuous: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            style: RuleStyle::Branching,
            vertical: vertical.into(),
            continuous: continuous.into(),
            last: last.into(),
            blank: DEFAULT_BLANK.to_string(),
            max_width: None,
        }
    }

    pub fn unicode() -> Self {
        Self::branching("│  ", "├──", "└──")
    }

    pub fn ascii() -> Self {
        Self::branching("|  ", "|--", "`--")
    }

    /// `last` mirrors `continuous` since this style cannot tell them apart.
    pub fn depth_only(vertical: impl Into<String>, continuous: impl Into<String>) -> Self {
        let continuous = continuous.into();
        Self {
            style: RuleStyle::DepthOnly,
            vertical: vertical.into(),
            last: continuous.clone(),
            continuous,
            blank: DEFAULT_BLANK.to_string(),
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    /// Indentation a node at `kind` leaves for its descendants.
    pub fn segment(&self, kind: IndentKind) -> &str {
        match (self.style, kind) {
            (RuleStyle::DepthOnly, _) => &self.vertical,
            (RuleStyle::Branching, IndentKind::Last) => &self.blank,
            (RuleStyle::Branching, IndentKind::Continuous) => &self.vertical,
        }
    }

    /// Connector drawn directly before a node at `kind`.
    pub fn connector(&self, kind: IndentKind) -> &str {
        match (self.style, kind) {
            (RuleStyle::DepthOnly, _) => &self.continuous,
            (RuleStyle::Branching, IndentKind::Last) => &self.last,
            (RuleStyle::Branching, IndentKind::Continuous) => &self.continuous,
        }
    }

    /// Connector prefix for a node whose ancestor-kind stack is `kinds`.
    ///
    /// `kinds` holds one entry per level below the root; the final entry is the
    /// node's own position under its parent. An empty stack is the root.
    pub fn prefix(&self, kinds: &[IndentKind]) -> String {
        let Some((&own, ancestors)) = kinds.split_last() else {
            return String::new();
        };
        let mut prefix: String = ancestors.iter().map(|&kind| self.segment(kind)).collect();
        prefix.push_str(self.connector(own));
        prefix
    }
}
