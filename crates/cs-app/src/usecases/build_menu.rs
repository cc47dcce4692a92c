use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use crate::models::MenuModel;
use crate::services::{HistoryStore, PinnedClipsStore};

/// Projects the current history and pinned clips into a [`MenuModel`].
pub struct BuildMenu {
    history: Arc<HistoryStore>,
    pinned: Arc<PinnedClipsStore>,
}

impl BuildMenu {
    pub fn new(history: Arc<HistoryStore>, pinned: Arc<PinnedClipsStore>) -> Self {
        Self { history, pinned }
    }

    pub async fn execute(&self) -> MenuModel {
        let span = info_span!("usecase.build_menu.execute");

        async {
            let entries = self.history.entries().await;
            let pinned = self.pinned.pinned().await;
            let menu = MenuModel::build(&entries, &pinned);
            debug!(items = menu.items.len(), "Built menu");
            menu
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;
    use crate::services::HistoryPolicy;
    use crate::test_support::MockStore;

    fn quiet_store() -> Arc<MockStore> {
        let mut store = MockStore::new();
        store.expect_load().returning(|_| Ok(None));
        store.expect_save().returning(|_, _| Ok(()));
        Arc::new(store)
    }

    #[tokio::test]
    async fn menu_reflects_history_and_pins() {
        let history = Arc::new(HistoryStore::new(quiet_store(), HistoryPolicy::default()));
        let pinned = Arc::new(PinnedClipsStore::new(quiet_store()));
        let use_case = BuildMenu::new(history.clone(), pinned.clone());

        let empty = use_case.execute().await;
        assert!(matches!(empty.items[0], MenuItem::Placeholder { .. }));

        history.record("copied".into()).await;
        pinned.edit_slot(2, "pin".into()).await.unwrap();
        let menu = use_case.execute().await;

        assert_eq!(
            menu.items[0],
            MenuItem::HistoryEntry {
                index: 0,
                title: "copied".into()
            }
        );
        assert!(menu
            .items
            .contains(&MenuItem::PinnedClip {
                slot: 2,
                title: "pin".into()
            }));
    }
}
