use fdns_sqlite_domain::{output_file_name, output_stem, DomainError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pick a store path in `output_dir` that does not exist yet.
///
/// Candidates are `<stem>.<ext>`, `<stem>-1.<ext>`, `<stem>-2.<ext>`, ...
/// where `<stem>` is the input file name without its extension. Only
/// metadata is probed; nothing is created. A probe error other than
/// "not found" is returned as-is rather than treated as an existing file.
pub async fn resolve_output_path(
    input: &Path,
    output_dir: &Path,
    extension: &str,
) -> Result<PathBuf, DomainError> {
    let stem = output_stem(input)
        .ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "cannot derive an output name from '{}'",
                input.display()
            ))
        })?
        .to_string_lossy();

    for attempt in 0..=u32::MAX {
        let candidate = output_dir.join(output_file_name(&stem, attempt, extension));

        // symlink_metadata so a dangling link still counts as taken
        match tokio::fs::symlink_metadata(&candidate).await {
            Ok(_) => {
                debug!(path = %candidate.display(), "Output candidate exists");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(candidate);
            }
            Err(e) => {
                return Err(DomainError::OutputProbe(format!(
                    "{}: {}",
                    candidate.display(),
                    e
                )));
            }
        }
    }

    Err(DomainError::OutputProbe(format!(
        "no free output name for '{}' in '{}'",
        stem,
        output_dir.display()
    )))
}
