#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum EdgeDirection {
    Forward,
    Backward,
}

impl EdgeDirection {
    pub fn opposite(&self) -> Self {
        match self {
            EdgeDirection::Forward => EdgeDirection::Backward,
            EdgeDirection::Backward => EdgeDirection::Forward,
        }
    }

    /// Traversing the edge from its end node to its start node
    pub fn is_reverse(&self) -> bool {
        matches!(self, EdgeDirection::Backward)
    }

    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            EdgeDirection::Backward
        } else {
            EdgeDirection::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(EdgeDirection::Forward.opposite(), EdgeDirection::Backward);
        assert_eq!(EdgeDirection::Backward.opposite(), EdgeDirection::Forward);
    }

    #[test]
    fn test_reverse_flag() {
        assert!(EdgeDirection::from_reverse(true).is_reverse());
        assert!(!EdgeDirection::from_reverse(false).is_reverse());
    }
}
