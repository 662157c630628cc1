//! Test helpers for laying out preferences, catalogs and vocabularies on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory with UTF-8 paths for CLI inputs.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// A two-product catalog in the Fake Store shape: a men's wallet followed by
/// a women's scarf.
pub(super) const WALLET_AND_SCARF_JSON: &[u8] = br#"[
    {"id": 1, "title": "Men's Leather Wallet", "category": "Accessories", "price": 25.0},
    {"id": 2, "title": "Women's Pink Scarf", "category": "accessories", "price": "19.5"}
]"#;

/// Preferences for a shopper who declares as female and likes pink scarves.
pub(super) const SCARF_SHOPPER_JSON: &[u8] =
    br#"{"interests": "pink scarf", "gender": "Female"}"#;
