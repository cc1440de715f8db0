/// Directedness of a graph.
///
/// Chosen once when the graph is constructed and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeType {
    Directed,
    #[default]
    Undirected,
}

pub use EdgeType::*;

impl EdgeType {
    #[inline]
    pub fn is_directed(&self) -> bool {
        matches!(self, Directed)
    }
}

impl From<bool> for EdgeType {
    fn from(directed: bool) -> Self {
        if directed {
            Directed
        } else {
            Undirected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_by_default() {
        assert_eq!(EdgeType::default(), Undirected);
        assert_eq!(EdgeType::from(true), Directed);
        assert!(!EdgeType::default().is_directed());
    }
}
