use std::fs;
use std::io;
use std::path::{Component, Path};

////////////////////////////////////////////////////////////////////////////////
// #region ManifestValidation

pub(crate) fn validate_manifest_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name must not be empty.".to_string());
    }

    let path_name = Path::new(name);
    if path_name.is_absolute() {
        return Err("Name must be relative.".to_string());
    }

    let mut iter_components = path_name.components();
    match (iter_components.next(), iter_components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err("Name must be a single path component.".to_string()),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileSystem

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        apply_metadata_linux(path_file_src, path_file_dst)?;
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn apply_metadata_linux(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

pub(crate) fn list_directory_names(path_dir: &Path) -> Result<Vec<String>, io::Error> {
    let mut l_names: Vec<String> = Vec::new();
    for entry_res in fs::read_dir(path_dir)? {
        let entry = entry_res?;
        l_names.push(entry.file_name().to_string_lossy().to_string());
    }
    l_names.sort();
    Ok(l_names)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
