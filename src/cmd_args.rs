use std::ffi::OsString;

pub use clap::Parser;

use crate::models::Category;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Data category
    /// Optional. Which slice of the data set to fetch. Default is 'state'.
    #[clap(short = 'c', long, value_enum, default_value = "state", help = "data category")]
    category: Category,

    /// Search text
    /// Optional. Free-text filter applied to the name field of the category.
    #[clap(short = 's', long, help = "filter results by name")]
    search: Option<String>,

    /// Year
    /// Optional. Show a specific year instead of the most recent one.
    #[clap(short = 'y', long, help = "year to display")]
    year: Option<String>,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    category: Category,
    search: Option<String>,
    year: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            category: args.category,
            search: args.search,
            year: args.year,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.category(), Category::State);
        assert_eq!(args.search(), None);
        assert_eq!(args.year(), None);
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_category() {
        let args = CommandLineArgs::parse_from(["program", "--category", "nation"]);
        assert_eq!(args.category(), Category::Nation);
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-c", "state", "-s", "New", "-y", "2020"]);
        assert_eq!(args.category(), Category::State);
        assert_eq!(args.search(), Some("New"));
        assert_eq!(args.year(), Some("2020"));
    }
}
