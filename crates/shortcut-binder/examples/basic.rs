// Console walkthrough of a mount/unmount cycle
//
// Stands in for the desktop host: the "shortcut" is pressed three times
// by hand and the host command just prints.

use async_trait::async_trait;
use shortcut_binder::{
    BinderConfig, Capabilities, CapabilityProvider, LifecycleBinder, ShortcutService,
    TriggerCallback, ViewLifecycle, WindowService,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ConsoleShortcuts {
    bound: Mutex<Option<TriggerCallback>>,
}

#[async_trait]
impl ShortcutService for ConsoleShortcuts {
    async fn register(&self, combination: &str, on_trigger: TriggerCallback) -> Result<(), String> {
        println!("⌨️  Bound {}", combination);
        *self.bound.lock().map_err(|e| e.to_string())? = Some(on_trigger);
        Ok(())
    }

    async fn unregister_all(&self) -> Result<(), String> {
        println!("⌨️  Released all shortcuts");
        *self.bound.lock().map_err(|e| e.to_string())? = None;
        Ok(())
    }
}

struct ConsoleWindow;

#[async_trait]
impl WindowService for ConsoleWindow {
    async fn invoke_command(&self, name: &str) -> Result<(), String> {
        println!("🪟 Host command: {}", name);
        Ok(())
    }
}

struct ConsoleHost {
    shortcuts: Arc<ConsoleShortcuts>,
}

#[async_trait]
impl CapabilityProvider for ConsoleHost {
    async fn resolve(&self) -> Result<Capabilities, String> {
        Ok(Capabilities {
            shortcuts: self.shortcuts.clone(),
            window: Arc::new(ConsoleWindow),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let shortcuts = Arc::new(ConsoleShortcuts::default());
    let host = Arc::new(ConsoleHost {
        shortcuts: shortcuts.clone(),
    });
    let view = ViewLifecycle::new(LifecycleBinder::new(BinderConfig::default(), host));

    view.mount().await;

    for _ in 0..3 {
        let callback = shortcuts.bound.lock().map_err(|e| e.to_string())?.clone();
        match callback {
            Some(callback) => callback().await,
            None => return Err("Shortcut was not bound".to_string()),
        }
    }

    view.unmount().await;
    println!("✅ Done");
    Ok(())
}
