//! A person's bank account summary, used as a sample item type for the trees.
//!
//! Records are ordered by age first, so a [`SearchTree`][crate::SearchTree] of people keeps them
//! sorted youngest first. People of the same age are told apart by last name, then first name,
//! then the checking and savings balances. Two records are equal only when every field matches,
//! so [`remove`][crate::Tree::remove] takes out that exact person.
//!
//! Records are read from a plain text table: one header line followed by one record per line,
//! each with five whitespace separated fields.
//!
//! ```text
//! First   Last      Age  Checking  Savings
//! Ada     Lovelace  36   1200.50   9000
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::BufRead;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;

/// A problem with a single record's fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The record ended before this field.
    #[error("missing field `{0}`")]
    Missing(&'static str),

    /// The age isn't a non-negative whole number.
    #[error("invalid age")]
    Age(#[source] ParseIntError),

    /// A balance isn't a number.
    #[error("invalid amount in field `{field}`")]
    Amount {
        /// Which balance was malformed.
        field: &'static str,
        /// Why it didn't parse.
        #[source]
        source: ParseFloatError,
    },

    /// There was more on the line than the five fields.
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

/// Error reading a table of records.
#[derive(Debug, Error)]
pub enum ParseRecordError {
    /// The underlying reader failed.
    #[error("failed to read records")]
    Io(#[from] std::io::Error),

    /// A line couldn't be parsed into a [`Person`].
    #[error("malformed record on line {line}")]
    Record {
        /// 1-based line number, counting the header.
        line: usize,
        /// What was wrong with it.
        #[source]
        source: FieldError,
    },
}

/// A person's name, age and account balances.
#[derive(Debug, Clone, Default)]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years. This is the only field used for comparisons.
    pub age: u32,
    /// Checking account balance.
    pub checking: f64,
    /// Savings account balance.
    pub savings: f64,
}

impl Person {
    /// Construct a new `Person`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        checking: f64,
        savings: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            checking,
            savings,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Person {}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    /// Balances are compared with [`f64::total_cmp`], so this is a total order even for `NaN`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.last_name.cmp(&other.last_name))
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.checking.total_cmp(&other.checking))
            .then_with(|| self.savings.total_cmp(&other.savings))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First Name: {}", self.first_name)?;
        writeln!(f, "Last Name: {}", self.last_name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Checking: {}", self.checking)?;
        write!(f, "Savings: {}", self.savings)
    }
}

impl FromStr for Person {
    type Err = FieldError;

    /// Parses `first last age checking savings`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let mut next = |name| fields.next().ok_or(FieldError::Missing(name));

        let first_name = next("first name")?.to_string();
        let last_name = next("last name")?.to_string();
        let age = next("age")?.parse().map_err(FieldError::Age)?;
        let checking = next("checking")?
            .parse()
            .map_err(|source| FieldError::Amount {
                field: "checking",
                source,
            })?;
        let savings = next("savings")?
            .parse()
            .map_err(|source| FieldError::Amount {
                field: "savings",
                source,
            })?;

        let rest: Vec<&str> = fields.collect();
        if !rest.is_empty() {
            return Err(FieldError::Trailing(rest.join(" ")));
        }

        Ok(Self {
            first_name,
            last_name,
            age,
            checking,
            savings,
        })
    }
}

/// Reads a table of records: the first line is a header and is skipped, blank lines are ignored
/// and every other line must hold one record.
pub fn parse_records(reader: impl BufRead) -> Result<Vec<Person>, ParseRecordError> {
    let mut people = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let person = line.parse().map_err(|source| ParseRecordError::Record {
            line: index + 1,
            source,
        })?;
        people.push(person);
    }
    Ok(people)
}
