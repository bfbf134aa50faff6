use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::CueError;

use super::sheet::CueSheet;

/// Write `sheet` to `path`, replacing any existing file.
///
/// New files are created `rw-r--r--` on Unix.
pub fn write_sheet(path: &Path, sheet: &CueSheet) -> Result<(), CueError> {
    let text = sheet.to_string();
    write_text(path, text.as_bytes()).map_err(|source| CueError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.flush()
}
