//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Which tab of the main screen is selected

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Main,
}

/// Tabs of the main screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Contribute,
    Loans,
    Discussions,
    Activities,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Contribute,
        Tab::Loans,
        Tab::Discussions,
        Tab::Activities,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Contribute => 1,
            Tab::Loans => 2,
            Tab::Discussions => 3,
            Tab::Activities => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Contribute => "Contribute",
            Tab::Loans => "Loans",
            Tab::Discussions => "Discussions",
            Tab::Activities => "Activities",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Home",
            Tab::Contribute => "Pay",
            Tab::Loans => "Loans",
            Tab::Discussions => "Talk",
            Tab::Activities => "Events",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// `'1'..='5'` to the matching tab.
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }

    /// Whether this tab is a form rather than a fetched list.
    pub fn is_form(self) -> bool {
        self == Tab::Contribute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Tab::Activities.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Activities);
        assert_eq!(Tab::Contribute.next(), Tab::Loans);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Tab::from_digit('1'), Some(Tab::Dashboard));
        assert_eq!(Tab::from_digit('5'), Some(Tab::Activities));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('6'), None);
        assert_eq!(Tab::from_digit('x'), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
