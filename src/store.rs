use crate::content;
use crate::error::ProofsheetError;
use crate::proofing::ProofingBlock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Everything the app remembers between sessions: where the reader was and
/// the proofing blocks they built. Axis positions and feature toggles belong
/// to the loaded font and are deliberately not kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofState {
    #[serde(default)]
    pub page_index: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ProofingBlock>,
}

/// Disk-backed [`ProofState`]. Every mutation writes straight through; a
/// failed write is logged and the in-memory state stays authoritative, so a
/// read-only disk degrades to session-only persistence.
#[derive(Debug)]
pub struct ProofStore {
    path: PathBuf,
    state: ProofState,
}

impl ProofStore {
    /// Per-user location of the state blob, with a relative fallback when no
    /// config directory can be determined.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("proofsheet").join("state.json")
        } else {
            PathBuf::from("proofsheet-state.json")
        }
    }

    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Load state from `path`. A missing file is a fresh start; an unreadable
    /// blob is discarded with a warning rather than wedging startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("Discarding unreadable proof state {:?}: {}", path, e);
                    ProofState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ProofState::default(),
            Err(e) => {
                log::warn!("Failed to read proof state {:?}: {}", path, e);
                ProofState::default()
            }
        };
        ProofStore { path, state }
    }

    pub fn state(&self) -> &ProofState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    pub fn blocks(&self) -> &[ProofingBlock] {
        &self.state.blocks
    }

    pub fn set_page_index(&mut self, index: usize) {
        if self.state.page_index != index {
            self.state.page_index = index;
            self.write_through();
        }
    }

    /// Append a new block and return its id. With no text given the block
    /// starts from the first adhesion word.
    pub fn add_block(&mut self, text: Option<&str>) -> Uuid {
        let block = ProofingBlock::new(text.unwrap_or(content::ADHESION_WORDS[0]));
        let id = block.id;
        self.state.blocks.push(block);
        self.write_through();
        id
    }

    pub fn update_block_text(&mut self, id: Uuid, text: &str) {
        if let Some(block) = self.block_mut(id) {
            block.text = text.to_string();
            self.write_through();
        }
    }

    pub fn toggle_block_feature(&mut self, id: Uuid, tag: &str) {
        if let Some(block) = self.block_mut(id) {
            block.toggle_feature(tag);
            self.write_through();
        }
    }

    pub fn set_block_axis_override(&mut self, id: Uuid, tag: &str, value: f32) {
        if let Some(block) = self.block_mut(id) {
            block.set_axis_override(tag, value);
            self.write_through();
        }
    }

    pub fn clear_block_axis_override(&mut self, id: Uuid, tag: &str) {
        if let Some(block) = self.block_mut(id) {
            block.clear_axis_override(tag);
            self.write_through();
        }
    }

    /// Insert a copy of the block right after the original, returning the
    /// copy's id.
    pub fn duplicate_block(&mut self, id: Uuid) -> Option<Uuid> {
        let position = self.state.blocks.iter().position(|b| b.id == id)?;
        let copy = self.state.blocks[position].duplicate();
        let copy_id = copy.id;
        self.state.blocks.insert(position + 1, copy);
        self.write_through();
        Some(copy_id)
    }

    pub fn remove_block(&mut self, id: Uuid) -> bool {
        let before = self.state.blocks.len();
        self.state.blocks.retain(|b| b.id != id);
        let removed = self.state.blocks.len() != before;
        if removed {
            self.write_through();
        }
        removed
    }

    /// Push the same text into every block, for the synced-editing mode
    /// where one input drives the whole sheet.
    pub fn sync_all_text(&mut self, text: &str) {
        if self.state.blocks.is_empty() {
            return;
        }
        for block in &mut self.state.blocks {
            block.text = text.to_string();
        }
        self.write_through();
    }

    fn block_mut(&mut self, id: Uuid) -> Option<&mut ProofingBlock> {
        self.state.blocks.iter_mut().find(|b| b.id == id)
    }

    fn write_through(&self) {
        if let Err(e) = self.flush() {
            log::warn!("Failed to write proof state {:?}: {}", self.path, e);
        }
    }

    /// Write the current state out, creating the parent directory if needed.
    pub fn flush(&self) -> Result<(), ProofsheetError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, contents)?;
        log::debug!("Wrote proof state to {:?}", self.path);
        Ok(())
    }
}
