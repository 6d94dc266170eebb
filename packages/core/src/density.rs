//! Responsive column policy for the queue table.
//!
//! Narrow displays fold secondary fields into a compact cell under the
//! queue name instead of dropping them. Every field is shown exactly once,
//! either as its own column or as a folded line.

use std::str::FromStr;

use thiserror::Error;

/// Width at which available/running counts get their own columns.
pub const MEDIUM_MIN_WIDTH: f64 = 640.0;
/// Width at which the created time gets its own column.
pub const FULL_MIN_WIDTH: f64 = 768.0;

/// A table column, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Created,
    Available,
    Running,
    Status,
    Controls,
}

impl Column {
    /// Header text; the controls column has a screen-reader-only header.
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Created => "Created",
            Column::Available => "Available",
            Column::Running => "Running",
            Column::Status => "Status",
            Column::Controls => "Controls",
        }
    }

    /// Numeric and time columns are right aligned.
    pub fn is_right_aligned(self) -> bool {
        matches!(self, Column::Created | Column::Available | Column::Running)
    }
}

/// A secondary field that can move into the compact cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldedField {
    Created,
    Available,
    Running,
}

impl FoldedField {
    /// The column this field occupies when it is not folded.
    pub fn column(self) -> Column {
        match self {
            FoldedField::Created => Column::Created,
            FoldedField::Available => Column::Available,
            FoldedField::Running => Column::Running,
        }
    }
}

/// How many columns the queue table can afford.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayDensity {
    /// Name, status and the action control only.
    Compact,
    /// Counts get columns; created time stays folded.
    Medium,
    /// Every field has its own column.
    Full,
}

impl DisplayDensity {
    pub const ALL: [DisplayDensity; 3] = [
        DisplayDensity::Compact,
        DisplayDensity::Medium,
        DisplayDensity::Full,
    ];

    /// Pick a density for a container of the given width in CSS pixels.
    pub fn for_width(width: f64) -> Self {
        if width >= FULL_MIN_WIDTH {
            DisplayDensity::Full
        } else if width >= MEDIUM_MIN_WIDTH {
            DisplayDensity::Medium
        } else {
            DisplayDensity::Compact
        }
    }

    /// Columns rendered at this density, in order.
    pub fn columns(self) -> &'static [Column] {
        match self {
            DisplayDensity::Compact => &[Column::Name, Column::Status, Column::Controls],
            DisplayDensity::Medium => &[
                Column::Name,
                Column::Available,
                Column::Running,
                Column::Status,
                Column::Controls,
            ],
            DisplayDensity::Full => &[
                Column::Name,
                Column::Created,
                Column::Available,
                Column::Running,
                Column::Status,
                Column::Controls,
            ],
        }
    }

    /// Fields folded into the compact cell at this density, in order.
    pub fn folded_fields(self) -> &'static [FoldedField] {
        match self {
            DisplayDensity::Compact => &[
                FoldedField::Created,
                FoldedField::Available,
                FoldedField::Running,
            ],
            DisplayDensity::Medium => &[FoldedField::Created],
            DisplayDensity::Full => &[],
        }
    }

    pub fn shows_column(self, column: Column) -> bool {
        self.columns().contains(&column)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayDensity::Compact => "compact",
            DisplayDensity::Medium => "medium",
            DisplayDensity::Full => "full",
        }
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self::Full
    }
}

impl std::fmt::Display for DisplayDensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown density name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display density '{0}', expected compact, medium or full")]
pub struct ParseDensityError(pub String);

impl FromStr for DisplayDensity {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(DisplayDensity::Compact),
            "medium" => Ok(DisplayDensity::Medium),
            "full" => Ok(DisplayDensity::Full),
            other => Err(ParseDensityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_breakpoints() {
        assert_eq!(DisplayDensity::for_width(0.0), DisplayDensity::Compact);
        assert_eq!(DisplayDensity::for_width(639.9), DisplayDensity::Compact);
        assert_eq!(DisplayDensity::for_width(640.0), DisplayDensity::Medium);
        assert_eq!(DisplayDensity::for_width(767.0), DisplayDensity::Medium);
        assert_eq!(DisplayDensity::for_width(768.0), DisplayDensity::Full);
        assert_eq!(DisplayDensity::for_width(1920.0), DisplayDensity::Full);
    }

    #[test]
    fn essentials_always_visible() {
        for density in DisplayDensity::ALL {
            for column in [Column::Name, Column::Status, Column::Controls] {
                assert!(density.shows_column(column), "{density} hides {column:?}");
            }
        }
    }

    #[test]
    fn every_field_shown_exactly_once() {
        let fields = [
            FoldedField::Created,
            FoldedField::Available,
            FoldedField::Running,
        ];
        for density in DisplayDensity::ALL {
            for field in fields {
                let as_column = density.shows_column(field.column());
                let folded = density.folded_fields().contains(&field);
                assert!(as_column ^ folded, "{density}: {field:?}");
            }
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("Compact".parse(), Ok(DisplayDensity::Compact));
        assert_eq!(" full ".parse(), Ok(DisplayDensity::Full));
        assert_eq!(
            "wide".parse::<DisplayDensity>(),
            Err(ParseDensityError("wide".to_string()))
        );
        for density in DisplayDensity::ALL {
            assert_eq!(density.to_string().parse(), Ok(density));
        }
    }
}
