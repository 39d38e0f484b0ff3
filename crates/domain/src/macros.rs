//! Macro for the string forms of closed wire enumerations
//!
//! The backend speaks snake_case strings for every enumeration (task status,
//! priority, email action). Serde covers JSON bodies; this macro covers the
//! places where the same strings travel outside a JSON body: query
//! parameters, CLI arguments and log fields.
//!
//! # Example
//!
//! ```rust
//! use deskmate_domain::impl_wire_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Column {
//!     Todo,
//!     Done,
//! }
//!
//! impl_wire_str_conversions!(Column {
//!     Todo => "todo",
//!     Done => "done",
//! });
//!
//! assert_eq!(Column::Todo.as_str(), "todo");
//! assert_eq!("DONE".parse::<Column>().unwrap(), Column::Done);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for a wire enumeration.
///
/// Parsing is case-insensitive; output is always the canonical wire string.
#[macro_export]
macro_rules! impl_wire_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire string for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Lane {
        Backlog,
        InReview,
    }

    impl_wire_str_conversions!(Lane {
        Backlog => "backlog",
        InReview => "in_review",
    });

    #[test]
    fn display_uses_wire_string() {
        assert_eq!(Lane::Backlog.to_string(), "backlog");
        assert_eq!(Lane::InReview.to_string(), "in_review");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Lane::from_str("IN_REVIEW").unwrap(), Lane::InReview);
        assert_eq!(Lane::from_str(" Backlog ").unwrap(), Lane::Backlog);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = Lane::from_str("archived").unwrap_err();
        assert!(err.contains("Invalid Lane: archived"));
    }
}
