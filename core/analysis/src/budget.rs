/// Caps the number of nodes a single walk visits.
pub(crate) struct NodeBudget {
    remaining: Option<usize>,
    exhausted: bool,
}

impl NodeBudget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            remaining: limit,
            exhausted: false,
        }
    }

    /// Accounts for one visited node. Returns `false` once the budget is spent.
    pub(crate) fn spend(&mut self) -> bool {
        match self.remaining.as_mut() {
            None => true,
            Some(0) => {
                self.exhausted = true;
                false
            }
            Some(remaining) => {
                *remaining -= 1;
                true
            }
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
