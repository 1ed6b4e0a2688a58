//! Wire types for backend responses that are not full records.

use serde::Deserialize;

use crate::domain::ProductId;

/// The part of a mutation response the catalog needs: the identifier
/// the backend confirmed. Update responses may echo the whole record;
/// any extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationAck {
    pub id: ProductId,
}
