//! Segment-Parität orthogonaler Pfade.

use crate::core::{ConnectionId, GraphDocument};

/// Segment `index` ist horizontal, genau wenn die Source links/rechts sitzt
/// und der Index gerade ist (oder beides nicht zutrifft).
#[inline]
pub fn is_segment_horizontal(source_horizontal: bool, index: usize) -> bool {
    source_horizontal == (index % 2 == 0)
}

/// Orientierung des ersten Segments einer Connection (Seite des Source-Connectors).
pub fn source_is_horizontal(doc: &GraphDocument, connection: ConnectionId) -> Option<bool> {
    let connection = doc.connection(connection)?;
    doc.connector(connection.source())
        .map(|c| c.side().is_horizontal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_alternates_from_source_side() {
        for source_horizontal in [true, false] {
            assert_eq!(is_segment_horizontal(source_horizontal, 0), source_horizontal);
            for i in 0..10 {
                assert_ne!(
                    is_segment_horizontal(source_horizontal, i),
                    is_segment_horizontal(source_horizontal, i + 1)
                );
            }
        }
    }
}
