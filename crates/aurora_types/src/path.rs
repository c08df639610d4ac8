//! Extension handling on resource paths.
//!
//! Resource names come out of archives as plain strings, with either `/`
//! or `\` as separator, so these helpers work on `&str` rather than
//! [`std::path::Path`].

/// Byte offset where the final path component starts
fn file_name_start(path: &str) -> usize {
    path.rfind(['/', '\\']).map_or(0, |i| i + 1)
}

/// Byte offset of the dot starting the extension of the final component
fn extension_start(path: &str) -> Option<usize> {
    let start = file_name_start(path);
    path[start..].rfind('.').map(|i| start + i)
}

/// Return the extension of a path, including the leading dot.
///
/// `"/path/to/file.ext"` gives `".ext"`, a path without extension gives `""`.
pub fn extension(path: &str) -> &str {
    extension_start(path).map_or("", |i| &path[i..])
}

/// Return the path with its final extension (if any) removed
pub fn strip_extension(path: &str) -> &str {
    extension_start(path).map_or(path, |i| &path[..i])
}

/// Replace the extension of a path.
///
/// `extension` may be given with or without its leading dot. An empty
/// extension removes the current one.
pub fn change_extension(path: &str, extension: &str) -> String {
    let stem = strip_extension(path);
    if extension.is_empty() {
        return stem.to_owned();
    }

    let mut result = String::with_capacity(stem.len() + extension.len() + 1);
    result.push_str(stem);
    if !extension.starts_with('.') {
        result.push('.');
    }
    result.push_str(extension);
    result
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extension_of_paths() {
        assert_eq!(extension("/path/to/file.ext"), ".ext");
        assert_eq!(extension("file.tar.gz"), ".gz");
        assert_eq!(extension("file"), "");
        assert_eq!(extension("file."), ".");
        assert_eq!(extension("dir.d/file"), "");
        assert_eq!(extension("C:\\games\\data\\m01aa.BZF"), ".BZF");
        assert_eq!(extension(""), "");
    }

    #[test]
    fn change_extension_of_paths() {
        assert_eq!(change_extension("/path/to/file.ext", ".bar"), "/path/to/file.bar");
        assert_eq!(change_extension("file", "wav"), "file.wav");
        assert_eq!(change_extension("file.", ".wav"), "file.wav");
        assert_eq!(change_extension("file.txt", ""), "file");
        assert_eq!(change_extension("dir.d/file", ".txt"), "dir.d/file.txt");
    }
}
