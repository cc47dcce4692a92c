//! mockall doubles for the `cs-core` ports.

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use cs_core::clipboard::{ChangeCount, ClipboardSnapshot};
use cs_core::ports::{
    PasteKeystrokePort, StorageKey, StringListStorePort, SystemClipboardPort, WatcherControlError,
    WatcherControlPort,
};

mock! {
    pub Store {}

    #[async_trait]
    impl StringListStorePort for Store {
        async fn load(&self, key: StorageKey) -> Result<Option<Vec<String>>>;
        async fn save(&self, key: StorageKey, values: &[String]) -> Result<()>;
    }
}

mock! {
    pub Clipboard {}

    impl SystemClipboardPort for Clipboard {
        fn change_count(&self) -> Result<ChangeCount>;
        fn read_text(&self) -> Result<Option<String>>;
        fn write_text(&self, text: &str) -> Result<()>;
        fn snapshot(&self) -> Result<ClipboardSnapshot>;
    }
}

mock! {
    pub Paste {}

    impl PasteKeystrokePort for Paste {
        fn send_paste(&self) -> Result<()>;
    }
}

mock! {
    pub WatcherControl {}

    #[async_trait]
    impl WatcherControlPort for WatcherControl {
        async fn start_watcher(&self) -> Result<(), WatcherControlError>;
        async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
        fn is_running(&self) -> bool;
    }
}
