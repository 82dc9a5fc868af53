//! Model node domain types

use crate::features::parsing::domain::NodeId;

/// An object literal recognized as a model
///
/// Only meaningful together with the document it was matched in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNode {
    pub(crate) object: NodeId,
    pub(crate) namespace: String,
}

impl ModelNode {
    pub fn new(object: NodeId, namespace: impl Into<String>) -> Self {
        Self {
            object,
            namespace: namespace.into(),
        }
    }

    /// The object literal node
    pub fn object(&self) -> NodeId {
        self.object
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// The closed set of top-level model properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProperty {
    Namespace,
    State,
    Reducers,
    Effects,
    Subscriptions,
}

impl ModelProperty {
    pub const ALL: [ModelProperty; 5] = [
        ModelProperty::Namespace,
        ModelProperty::State,
        ModelProperty::Reducers,
        ModelProperty::Effects,
        ModelProperty::Subscriptions,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelProperty::Namespace => "namespace",
            ModelProperty::State => "state",
            ModelProperty::Reducers => "reducers",
            ModelProperty::Effects => "effects",
            ModelProperty::Subscriptions => "subscriptions",
        }
    }

    /// Keys that, besides `namespace`, make an object a model
    pub fn is_shape_key(&self) -> bool {
        !matches!(self, ModelProperty::Namespace)
    }

    pub fn container(&self) -> Option<EntryContainer> {
        match self {
            ModelProperty::Reducers => Some(EntryContainer::Reducers),
            ModelProperty::Effects => Some(EntryContainer::Effects),
            ModelProperty::Subscriptions => Some(EntryContainer::Subscriptions),
            _ => None,
        }
    }
}

/// Named-entry containers of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryContainer {
    Reducers,
    Effects,
    Subscriptions,
}

impl EntryContainer {
    /// Property key of the container
    pub fn key(&self) -> &'static str {
        match self {
            EntryContainer::Reducers => "reducers",
            EntryContainer::Effects => "effects",
            EntryContainer::Subscriptions => "subscriptions",
        }
    }

    /// Singular noun used in messages
    pub fn label(&self) -> &'static str {
        match self {
            EntryContainer::Reducers => "reducer",
            EntryContainer::Effects => "effect",
            EntryContainer::Subscriptions => "subscription",
        }
    }

    /// Value used when an entry is added without source
    pub fn default_snippet(&self) -> &'static str {
        match self {
            EntryContainer::Reducers => "function(state) {\n  return state;\n}",
            EntryContainer::Effects => "function* (action, { call, put }) {}",
            EntryContainer::Subscriptions => "function ({ dispatch, history }) {}",
        }
    }

    /// Whether entries carry dispatch edges when extracted
    pub fn tracks_dispatches(&self) -> bool {
        !matches!(self, EntryContainer::Reducers)
    }
}
