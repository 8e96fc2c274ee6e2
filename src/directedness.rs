/// Whether the edges of a graph have a direction.  Chosen when the graph is
/// created and fixed for its lifetime.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

impl From<bool> for Directedness {
    /// Maps `true` to [`Directedness::Directed`].
    fn from(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        bool::arbitrary(g).into()
    }
}
