use std::sync::Arc;

use futures::future::join_all;

use crate::error::LedgerError;
use crate::rpc::{LedgerGateway, OnChainObject};
use crate::session::SessionSnapshot;

/// Finds the expense-group objects owned by the session's wallet.
pub struct ObjectDiscoverer {
    gateway: Arc<dyn LedgerGateway>,
    expense_group_type: String,
}

impl ObjectDiscoverer {
    pub fn new(gateway: Arc<dyn LedgerGateway>, expense_group_type: String) -> Self {
        Self {
            gateway,
            expense_group_type,
        }
    }

    /// One owned-objects round trip, an exact type-tag filter, then one
    /// content fetch per surviving group. The per-group fetches are
    /// independent reads and run concurrently; callers must treat the result
    /// as a set.
    ///
    /// A disconnected session yields an empty list without touching the
    /// gateway: "nothing to show" is a normal outcome, distinct from
    /// [`LedgerError::Discovery`].
    pub async fn discover(
        &self,
        session: &SessionSnapshot,
    ) -> Result<Vec<OnChainObject>, LedgerError> {
        if !session.connected {
            return Ok(Vec::new());
        }

        let owned = self.gateway.owned_objects(&session.address).await?;
        let total = owned.len();
        let groups: Vec<OnChainObject> = owned
            .into_iter()
            .filter(|object| object.type_tag == self.expense_group_type)
            .collect();
        log::debug!(
            "{} of {} objects owned by {} are expense groups",
            groups.len(),
            total,
            session.address
        );

        let fetches = groups
            .iter()
            .map(|group| self.gateway.object_content(&group.object_id));

        let mut detailed = Vec::with_capacity(groups.len());
        for result in join_all(fetches).await {
            detailed.push(result?);
        }
        Ok(detailed)
    }
}
