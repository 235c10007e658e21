//! # Data Category
//!
//! Selector for nation-level vs. state-level population data. The category
//! drives both the request target (its label is substituted into the URL
//! template) and the filter implementation applied to search text.

use std::fmt;

use clap::ValueEnum;

/// Which slice of the population data set to fetch and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Nation,
    State,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 2] = [Category::Nation, Category::State];

    /// Canonical label used by the remote API (`drilldowns` parameter)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nation => "Nation",
            Category::State => "State",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
