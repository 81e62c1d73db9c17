//! Stabile Handles für alle Elemente des Graph-Dokuments.
//!
//! Rückverweise (Connector → Node, Connection → Connector, Joint → Connection)
//! werden ausschließlich über diese IDs aufgelöst, nie über Zeiger.

use std::fmt;

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl $name {
            /// Gibt den rohen Zahlenwert zurück.
            pub fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

element_id!(
    /// ID eines Nodes
    NodeId,
    "node"
);
element_id!(
    /// ID eines Connectors
    ConnectorId,
    "connector"
);
element_id!(
    /// ID einer Connection
    ConnectionId,
    "connection"
);
element_id!(
    /// ID eines Joints
    JointId,
    "joint"
);
