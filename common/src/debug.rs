use crossbeam_channel::{unbounded, Receiver, Sender};
use lazy_static::lazy_static;
use std::{collections::BTreeMap, sync::RwLock};

lazy_static! {
    static ref DEBUG_INFO: RwLock<Option<Sender<DebugInfoUnit>>> = RwLock::new(None);
}

#[derive(Debug, Clone)]
struct DebugInfoUnit {
    pub section: String,
    pub id: String,
    pub message: String,
}

/// Latest message of every debug id, grouped by section
pub type DebugSections = BTreeMap<String, BTreeMap<String, String>>;

/// Helper struct collecting the values the simulation wants to show on a debug overlay.
/// There can only be one active `DebugInfo` at any time.
pub struct DebugInfo {
    receiver: Receiver<DebugInfoUnit>,
    sections: DebugSections,
}

impl DebugInfo {
    /// Create a new `DebugInfo` struct and make it the current one.
    pub fn new_current() -> Self {
        let (sender, receiver) = unbounded();
        if let Ok(mut current) = DEBUG_INFO.write() {
            *current = Some(sender);
        }
        Self {
            receiver,
            sections: BTreeMap::new(),
        }
    }

    /// Get the debug info, including everything sent since the last call
    pub fn get_debug_info(&mut self) -> &DebugSections {
        while let Ok(diu) = self.receiver.try_recv() {
            self.sections
                .entry(diu.section)
                .or_insert_with(BTreeMap::new)
                .insert(diu.id, diu.message);
        }
        &self.sections
    }
}

/// Send debug info to the current `DebugInfo` if there is one
pub fn send_debug_info(section: impl ToString, id: impl ToString, message: impl ToString) {
    if let Ok(current) = DEBUG_INFO.read() {
        if let Some(sender) = current.as_ref() {
            // The receiver may be gone, the message is simply lost then
            let _ = sender.send(DebugInfoUnit {
                section: section.to_string(),
                id: id.to_string(),
                message: message.to_string(),
            });
        }
    }
}
