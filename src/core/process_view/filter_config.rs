//! Filter clause configuration.
//!
//! Every clause is an immutable value. Edits made by the filter overlay go
//! through the `with_*` builders, which return a new configuration and leave
//! the previous one untouched.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::ProcessStatus;
use crate::error::{ProcviewError, Result};

/// Threshold comparison operator of a numeric clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComparisonOperator {
    #[default]
    Greater,
    Less,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    /// Operator text this version does not know; always passes
    Unknown(String),
}

impl ComparisonOperator {
    pub fn parse(symbol: &str) -> Self {
        match symbol.trim() {
            ">" => ComparisonOperator::Greater,
            "<" => ComparisonOperator::Less,
            "=" => ComparisonOperator::Equal,
            ">=" => ComparisonOperator::GreaterOrEqual,
            "<=" => ComparisonOperator::LessOrEqual,
            other => ComparisonOperator::Unknown(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            ComparisonOperator::Greater => ">",
            ComparisonOperator::Less => "<",
            ComparisonOperator::Equal => "=",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Unknown(symbol) => symbol,
        }
    }

    /// Evaluate `value <op> target`
    pub fn compare(&self, value: f64, target: f64) -> bool {
        match self {
            ComparisonOperator::Greater => value > target,
            ComparisonOperator::Less => value < target,
            ComparisonOperator::Equal => value == target,
            ComparisonOperator::GreaterOrEqual => value >= target,
            ComparisonOperator::LessOrEqual => value <= target,
            ComparisonOperator::Unknown(_) => true,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComparisonOperator::parse(s))
    }
}

impl From<String> for ComparisonOperator {
    fn from(symbol: String) -> Self {
        ComparisonOperator::parse(&symbol)
    }
}

impl From<ComparisonOperator> for String {
    fn from(op: ComparisonOperator) -> Self {
        op.symbol().to_string()
    }
}

/// Threshold clause for cpu (percent), ram (MiB) or runtime (minutes)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericClause {
    #[serde(default)]
    pub operator: ComparisonOperator,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub enabled: bool,
}

impl NumericClause {
    pub fn new(operator: ComparisonOperator, value: f64) -> Self {
        Self {
            operator,
            value,
            enabled: true,
        }
    }

    /// Parse a command-line expression such as `">50"`, `"<= 1.5"` or `"=0"`
    pub fn parse_expression(expr: &str) -> Result<Self> {
        let trimmed = expr.trim();
        let split_at = trimmed
            .find(|c: char| !matches!(c, '<' | '>' | '='))
            .unwrap_or(trimmed.len());
        let (symbol, number) = trimmed.split_at(split_at);

        let operator = ComparisonOperator::parse(symbol);
        if symbol.is_empty() || matches!(operator, ComparisonOperator::Unknown(_)) {
            return Err(ProcviewError::invalid_filter_expression(expr));
        }

        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| ProcviewError::invalid_filter_expression(expr))?;

        Ok(Self::new(operator, value))
    }

    /// Does `value` satisfy this clause? A disabled clause passes everything.
    pub fn accepts(&self, value: f64) -> bool {
        !self.enabled || self.operator.compare(value, self.value)
    }

    pub fn with_operator(&self, operator: ComparisonOperator) -> Self {
        Self {
            operator,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    pub fn enabled(&self) -> Self {
        Self {
            enabled: true,
            ..self.clone()
        }
    }

    pub fn disabled(&self) -> Self {
        Self {
            enabled: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for NumericClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.value)
    }
}

/// Status set clause; enabled exactly when at least one status is selected
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawStatusClause", into = "RawStatusClause")]
pub struct StatusClause {
    values: BTreeSet<ProcessStatus>,
}

impl StatusClause {
    pub fn new<I: IntoIterator<Item = ProcessStatus>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn values(&self) -> &BTreeSet<ProcessStatus> {
        &self.values
    }

    pub fn is_enabled(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn contains(&self, status: ProcessStatus) -> bool {
        self.values.contains(&status)
    }

    pub fn accepts(&self, status: ProcessStatus) -> bool {
        !self.is_enabled() || self.contains(status)
    }

    /// Add the status if absent, remove it if present
    pub fn toggled(&self, status: ProcessStatus) -> Self {
        let mut values = self.values.clone();
        if !values.remove(&status) {
            values.insert(status);
        }
        Self { values }
    }
}

#[derive(Serialize, Deserialize)]
struct RawStatusClause {
    #[serde(default)]
    values: BTreeSet<ProcessStatus>,
    #[serde(default)]
    enabled: Option<bool>,
}

impl From<RawStatusClause> for StatusClause {
    fn from(raw: RawStatusClause) -> Self {
        if raw.enabled == Some(true) && raw.values.is_empty() {
            log::debug!("Status clause enabled with no values, treating as disabled");
        }
        Self { values: raw.values }
    }
}

impl From<StatusClause> for RawStatusClause {
    fn from(clause: StatusClause) -> Self {
        let enabled = clause.is_enabled();
        Self {
            values: clause.values,
            enabled: Some(enabled),
        }
    }
}

/// Complete filter state of the process view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub cpu: NumericClause,
    #[serde(default)]
    pub ram: NumericClause,
    #[serde(default)]
    pub runtime: NumericClause,
    #[serde(default)]
    pub status: StatusClause,
}

impl FilterConfig {
    /// True if at least one clause constrains the result
    pub fn has_active_clause(&self) -> bool {
        self.cpu.enabled || self.ram.enabled || self.runtime.enabled || self.status.is_enabled()
    }

    pub fn with_cpu(&self, cpu: NumericClause) -> Self {
        Self {
            cpu,
            ..self.clone()
        }
    }

    pub fn with_ram(&self, ram: NumericClause) -> Self {
        Self {
            ram,
            ..self.clone()
        }
    }

    pub fn with_runtime(&self, runtime: NumericClause) -> Self {
        Self {
            runtime,
            ..self.clone()
        }
    }

    pub fn with_status_values<I: IntoIterator<Item = ProcessStatus>>(&self, values: I) -> Self {
        Self {
            status: StatusClause::new(values),
            ..self.clone()
        }
    }

    pub fn with_status_toggled(&self, status: ProcessStatus) -> Self {
        Self {
            status: self.status.toggled(status),
            ..self.clone()
        }
    }

    /// Disable every clause, keeping stored operators and values
    pub fn cleared(&self) -> Self {
        Self {
            cpu: self.cpu.disabled(),
            ram: self.ram.disabled(),
            runtime: self.runtime.disabled(),
            status: StatusClause::default(),
        }
    }
}
