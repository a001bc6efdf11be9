//! Writing `ComicInfo.xml` next to the pages of an unpacked archive

use crate::document::{ComicInfo, COMIC_INFO_FILE_NAME};
use crate::encoder;
use crate::error::{ComicInfoError, Result};
use crate::validate::Validator;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `ComicInfo.xml` into `dir` with the default validator
pub fn write_comicinfo_file<D>(doc: &D, dir: impl AsRef<Path>) -> Result<PathBuf>
where
    D: ComicInfo + ?Sized,
{
    write_comicinfo_file_with(doc, dir, &Validator::default())
}

/// Write `ComicInfo.xml` into `dir`
///
/// The directory is checked before the document is validated. The document
/// is encoded in memory and written to a temp file that is then renamed, so
/// an existing `ComicInfo.xml` is only replaced by a complete one.
pub fn write_comicinfo_file_with<D>(
    doc: &D,
    dir: impl AsRef<Path>,
    validator: &Validator,
) -> Result<PathBuf>
where
    D: ComicInfo + ?Sized,
{
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(ComicInfoError::Precondition(
            "output directory must not be empty".to_string(),
        ));
    }
    if !dir.is_dir() {
        return Err(ComicInfoError::Precondition(format!(
            "output directory does not exist: {}",
            dir.display()
        )));
    }

    let mut buffer = Vec::new();
    encoder::encode(doc, validator, &mut buffer)?;

    let path = dir.join(COMIC_INFO_FILE_NAME);
    let temp_path = path.with_extension("xml.tmp");
    if let Err(err) = fs::write(&temp_path, &buffer).and_then(|()| fs::rename(&temp_path, &path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    tracing::debug!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        buffer.len(),
        doc.revision()
    );
    Ok(path)
}
