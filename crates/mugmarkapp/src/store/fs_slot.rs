use super::{SnapshotSlot, SLOT_KEY};
use crate::error::{MugmarkError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsSlot {
    root: PathBuf,
}

impl FsSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(format!("{}.json", SLOT_KEY))
    }

}

/// Writes `content` to a tmp file in `dir`, then renames it onto `target`.
///
/// The tmp file is removed again if either step fails.
pub(crate) fn write_atomic(dir: &Path, target: &Path, prefix: &str, content: &str) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(MugmarkError::Io)?;
    }
    let tmp = dir.join(format!(".{}-{}.tmp", prefix, Uuid::new_v4()));
    let written = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, target));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(MugmarkError::Io(e));
    }
    Ok(())
}

impl SnapshotSlot for FsSlot {
    fn read(&self) -> Result<Option<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(MugmarkError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, payload: &str) -> Result<()> {
        write_atomic(&self.root, &self.path(), SLOT_KEY, payload)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
