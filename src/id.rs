use std::{fmt::Debug, marker::PhantomData};

use derivative::Derivative;

use crate::{graph_id::GraphId, slot_vec::SlotKey};

/// Tag type for vertex handles.
pub enum VertexTag {}

/// Tag type for edge handles.
pub enum EdgeTag {}

/// A stable handle to an entity owned by a graph.
///
/// Two handles are equal only if they were issued for the same entity by the
/// same store; the name, data, weight or endpoints of the entity play no part
/// in the comparison.  A handle stays valid until its entity is removed, and
/// handles are never recycled, so a stale handle is simply reported as
/// absent.
///
/// Handles order by issue order, which is also the insertion order of the
/// entities they refer to.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = "")
)]
pub struct Id<T> {
    key: SlotKey,
    graph_id: GraphId,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore", Ord = "ignore", Hash = "ignore")]
    tag: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub(crate) fn new(key: SlotKey, graph_id: GraphId) -> Self {
        Self {
            key,
            graph_id,
            tag: PhantomData,
        }
    }

    pub(crate) fn key(&self) -> SlotKey {
        self.key
    }

    pub(crate) fn graph_id(&self) -> GraphId {
        self.graph_id
    }
}

/// Handle to a [`Vertex`](crate::entity::Vertex) owned by a graph.
pub type VertexId = Id<VertexTag>;

/// Handle to an [`Edge`](crate::entity::Edge) owned by a graph.
pub type EdgeId = Id<EdgeTag>;

impl Debug for Id<VertexTag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexId({:?})", self.key)
    }
}

impl Debug for Id<EdgeTag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeId({:?})", self.key)
    }
}
