// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MEETING_NOTE: &str = "\
# Weekly sync
## Decisions
We agreed the release is great. Release planning went well!
## Follow ups
- [ ] Email @dana about the [launch checklist]
- [x] Book the room
* [ ] Draft the announcement #comms
TODO: fix the flaky build before the deadline
FIXME: broken link in the docs
Links: https://example.com/roadmap
";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "meeting.md", MEETING_NOTE)?;
    create_test_file(
        temp_dir.path(),
        "groceries.txt",
        "Buy milk #errands\nTODO: pick up bread\n- [ ] call the bank",
    )?;
    create_test_file(temp_dir.path(), "journal/day1.markdown", "# Day one\nFelt happy.")?;
    create_test_file(temp_dir.path(), "archive/old.md", "# Old\nstale #archived")?;
    create_test_file(temp_dir.path(), "data.json", r#"{"not": "a note"}"#)?;
    create_test_file(temp_dir.path(), ".hidden.md", "# Hidden")?;
    create_test_file(temp_dir.path(), "blank.md", "\n   \n")?;

    Ok(temp_dir)
}
