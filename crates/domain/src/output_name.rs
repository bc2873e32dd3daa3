use std::ffi::OsStr;
use std::path::Path;

pub const DEFAULT_STORE_EXTENSION: &str = "sqlite3";

/// Base name of the store for `input`: directory and last extension removed.
pub fn output_stem(input: &Path) -> Option<&OsStr> {
    input.file_stem()
}

/// File name for the given probe attempt.
///
/// Attempt 0 is `<stem>.<ext>`, attempt N is `<stem>-N.<ext>`.
pub fn output_file_name(stem: &str, attempt: u32, extension: &str) -> String {
    if attempt == 0 {
        format!("{stem}.{extension}")
    } else {
        format!("{stem}-{attempt}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_directory_and_extension() {
        assert_eq!(
            output_stem(Path::new("/data/dumps/fdns_a.json")),
            Some(OsStr::new("fdns_a"))
        );
        assert_eq!(
            output_stem(Path::new("fdns.json.gz")),
            Some(OsStr::new("fdns.json"))
        );
        assert_eq!(output_stem(Path::new("noext")), Some(OsStr::new("noext")));
        assert_eq!(output_stem(Path::new("/")), None);
    }

    #[test]
    fn test_file_name_per_attempt() {
        assert_eq!(output_file_name("foo", 0, "sqlite3"), "foo.sqlite3");
        assert_eq!(output_file_name("foo", 1, "sqlite3"), "foo-1.sqlite3");
        assert_eq!(output_file_name("foo", 12, "db"), "foo-12.db");
    }
}
