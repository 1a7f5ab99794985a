//! Horizontal clusters of the bottom bar.

use std::fmt;
use std::str::FromStr;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cluster a tab is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TabGroup {
    /// Left side group; used when no group is given.
    #[default]
    Left,
    /// Fixed-width middle group.
    Center,
    /// Right side group.
    Right,
}

impl TabGroup {
    /// Every group in left-to-right order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Return the group as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Report whether this is a side group.
    #[must_use]
    pub const fn is_side(self) -> bool {
        !matches!(self, Self::Center)
    }

    /// Parse an optional group tag, falling back to [`TabGroup::Left`].
    ///
    /// Unknown tags are logged and never fail.
    ///
    /// # Examples
    /// ```
    /// use monastery_tabbar::TabGroup;
    ///
    /// assert_eq!(TabGroup::parse_or_default(Some("Right")), TabGroup::Right);
    /// assert_eq!(TabGroup::parse_or_default(Some("top")), TabGroup::Left);
    /// assert_eq!(TabGroup::parse_or_default(None), TabGroup::Left);
    /// ```
    #[must_use]
    pub fn parse_or_default(tag: Option<&str>) -> Self {
        let Some(raw) = tag else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|err: String| {
            warn!("{err}; placing tab in the left group");
            Self::default()
        })
    }
}

impl fmt::Display for TabGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown tab group: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("left", TabGroup::Left)]
    #[case(" CENTER ", TabGroup::Center)]
    #[case("centre", TabGroup::Center)]
    #[case("Right", TabGroup::Right)]
    fn parses_known_tags(#[case] raw: &str, #[case] expected: TabGroup) {
        assert_eq!(raw.parse::<TabGroup>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_tags() {
        assert_eq!(
            "bottom".parse::<TabGroup>(),
            Err("unknown tab group: bottom".to_owned())
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("floating"))]
    fn falls_back_to_left(#[case] tag: Option<&str>) {
        assert_eq!(TabGroup::parse_or_default(tag), TabGroup::Left);
    }

    #[rstest]
    fn display_round_trips() {
        for group in TabGroup::ALL {
            assert_eq!(group.to_string().parse::<TabGroup>(), Ok(group));
        }
    }
}
