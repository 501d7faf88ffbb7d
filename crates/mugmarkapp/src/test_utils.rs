use crate::api::MugmarkApi;
use crate::commands::MugmarkPaths;
use crate::config::MugmarkConfig;
use crate::model::Kind;
use crate::store::{DocumentStore, MemSlot};
use std::path::PathBuf;

/// An API over an empty in-memory slot with default settings.
pub fn mem_api(kind: Kind) -> MugmarkApi<MemSlot> {
    let paths = MugmarkPaths {
        data: PathBuf::from("/tmp/mugmark-test"),
        config_files: Vec::new(),
    };
    MugmarkApi::new(
        DocumentStore::init(MemSlot::new(), kind),
        MugmarkConfig::default(),
        paths,
    )
}
