//! Aggregate and date functions.
//!
//! Functions wrap a single field and can be selected like a field, used as
//! the operand of a predicate, or grouped and ordered by.

use super::field::FieldRef;
use crate::render::{Render, RenderContext};

/// SOQL functions taking at most one field argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionName {
    Avg,
    Count,
    CountDistinct,
    Min,
    Max,
    Sum,
    CalendarMonth,
    CalendarQuarter,
    CalendarYear,
    DayInMonth,
    DayInWeek,
    DayInYear,
    DayOnly,
    FiscalMonth,
    FiscalQuarter,
    FiscalYear,
    HourInDay,
    WeekInMonth,
    WeekInYear,
}

impl FunctionName {
    /// Returns the SOQL keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::CountDistinct => "COUNT_DISTINCT",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::CalendarMonth => "CALENDAR_MONTH",
            Self::CalendarQuarter => "CALENDAR_QUARTER",
            Self::CalendarYear => "CALENDAR_YEAR",
            Self::DayInMonth => "DAY_IN_MONTH",
            Self::DayInWeek => "DAY_IN_WEEK",
            Self::DayInYear => "DAY_IN_YEAR",
            Self::DayOnly => "DAY_ONLY",
            Self::FiscalMonth => "FISCAL_MONTH",
            Self::FiscalQuarter => "FISCAL_QUARTER",
            Self::FiscalYear => "FISCAL_YEAR",
            Self::HourInDay => "HOUR_IN_DAY",
            Self::WeekInMonth => "WEEK_IN_MONTH",
            Self::WeekInYear => "WEEK_IN_YEAR",
        }
    }

    /// Returns true for aggregate functions.
    #[must_use]
    pub const fn is_aggregate(self) -> bool {
        matches!(
            self,
            Self::Avg | Self::Count | Self::CountDistinct | Self::Min | Self::Max | Self::Sum
        )
    }
}

/// A function call, optionally aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: FunctionName,
    argument: Option<FieldRef>,
    alias: Option<String>,
}

macro_rules! function_constructors {
    ($($(#[$doc:meta])* $method:ident => $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method(field: impl Into<FieldRef>) -> Self {
                Self::new(FunctionName::$name, field)
            }
        )+
    };
}

impl Function {
    /// Creates a call of `name` over `field`.
    #[must_use]
    pub fn new(name: FunctionName, field: impl Into<FieldRef>) -> Self {
        Self {
            name,
            argument: Some(field.into()),
            alias: None,
        }
    }

    /// Creates `COUNT()`, the number of rows matching the query.
    #[must_use]
    pub const fn count_all() -> Self {
        Self {
            name: FunctionName::Count,
            argument: None,
            alias: None,
        }
    }

    function_constructors! {
        /// Average of a numeric field.
        avg => Avg,
        /// Number of rows with a non-null value.
        count => Count,
        /// Number of distinct non-null values.
        count_distinct => CountDistinct,
        /// Minimum value.
        min => Min,
        /// Maximum value.
        max => Max,
        /// Sum of a numeric field.
        sum => Sum,
        calendar_month => CalendarMonth,
        calendar_quarter => CalendarQuarter,
        calendar_year => CalendarYear,
        day_in_month => DayInMonth,
        day_in_week => DayInWeek,
        day_in_year => DayInYear,
        /// Date part of a date-time field.
        day_only => DayOnly,
        fiscal_month => FiscalMonth,
        fiscal_quarter => FiscalQuarter,
        fiscal_year => FiscalYear,
        hour_in_day => HourInDay,
        week_in_month => WeekInMonth,
        week_in_year => WeekInYear,
    }

    /// Names the result column.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the function name.
    #[must_use]
    pub const fn name(&self) -> FunctionName {
        self.name
    }
}

impl Render for Function {
    fn render(&self, ctx: &RenderContext) -> String {
        let argument = self
            .argument
            .as_ref()
            .map(|field| field.render(ctx))
            .unwrap_or_default();
        let call = format!("{}({argument})", self.name.keyword());
        match &self.alias {
            Some(alias) => ctx.join(&[call.as_str(), alias.as_str()]),
            None => call,
        }
    }
}

/// Convenience function to create an AVG(field) call.
#[must_use]
pub fn avg(field: impl Into<FieldRef>) -> Function {
    Function::avg(field)
}

/// Convenience function to create a COUNT(field) call.
#[must_use]
pub fn count(field: impl Into<FieldRef>) -> Function {
    Function::count(field)
}

/// Convenience function to create a COUNT() call.
#[must_use]
pub const fn count_all() -> Function {
    Function::count_all()
}

/// Convenience function to create a COUNT_DISTINCT(field) call.
#[must_use]
pub fn count_distinct(field: impl Into<FieldRef>) -> Function {
    Function::count_distinct(field)
}

/// Convenience function to create a MIN(field) call.
#[must_use]
pub fn min(field: impl Into<FieldRef>) -> Function {
    Function::min(field)
}

/// Convenience function to create a MAX(field) call.
#[must_use]
pub fn max(field: impl Into<FieldRef>) -> Function {
    Function::max(field)
}

/// Convenience function to create a SUM(field) call.
#[must_use]
pub fn sum(field: impl Into<FieldRef>) -> Function {
    Function::sum(field)
}
