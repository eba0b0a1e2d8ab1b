// regenchoice-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Replaces `path` with `content` in one step: the bytes go to a temp file
/// next to the target which is then renamed over it. Missing parent
/// directories are created. Returns the number of bytes written.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<usize, InfrastructureError> {
    let path = path.as_ref();
    let content = content.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.as_file().sync_all()?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(content.len())
}

/// Copies `from` to the first free name among `base`, `base-1`, `base-2`...
pub fn copy_to_free_name(from: &Path, base: &Path) -> Result<std::path::PathBuf, InfrastructureError> {
    let mut candidate = base.to_path_buf();
    let mut n = 1;
    while candidate.exists() {
        candidate = base.with_file_name(format!(
            "{}-{}",
            base.file_name().unwrap_or_default().to_string_lossy(),
            n
        ));
        n += 1;
    }
    std::fs::copy(from, &candidate)?;
    Ok(candidate)
}
