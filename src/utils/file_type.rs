//! File-type labels shown on download buttons and notifications.

/// 取得副檔名（小寫）。沒有副檔名時回傳 None。
///
/// Only the last path segment is considered, so `docs.v2/readme` has no
/// extension, and a leading dot (`.env`) does not start one either.
pub fn file_extension(reference: &str) -> Option<String> {
    let name = file_name(reference);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Last path segment of a reference, ignoring any query string or fragment.
pub fn file_name(reference: &str) -> &str {
    let without_query = reference
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(reference);
    without_query
        .rsplit('/')
        .next()
        .unwrap_or(without_query)
}

pub fn file_type_label(reference: &str) -> String {
    match file_extension(reference) {
        Some(ext) => match ext.as_str() {
            "pdf" => "PDF Document".to_string(),
            "zip" => "ZIP Archive".to_string(),
            "001" => "ZIP Part 1".to_string(),
            "002" => "ZIP Part 2".to_string(),
            "doc" | "docx" => "Word Document".to_string(),
            "txt" => "Text File".to_string(),
            other => format!("{} File", other.to_uppercase()),
        },
        None => "File".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(file_type_label("a.pdf"), "PDF Document");
        assert_eq!(file_type_label("documents/A.PDF"), "PDF Document");
        assert_eq!(file_type_label("a.zip"), "ZIP Archive");
        assert_eq!(file_type_label("bundle.zip.001"), "ZIP Part 1");
        assert_eq!(file_type_label("notes.docx"), "Word Document");
        assert_eq!(file_type_label("notes.txt"), "Text File");
    }

    #[test]
    fn unknown_extension_is_uppercased() {
        assert_eq!(file_type_label("a.xyz"), "XYZ File");
    }

    #[test]
    fn missing_extension_falls_back() {
        assert_eq!(file_type_label("a"), "File");
        assert_eq!(file_type_label(""), "File");
        assert_eq!(file_type_label("dir.v2/readme"), "File");
        assert_eq!(file_type_label(".env"), "File");
        assert_eq!(file_type_label("trailing."), "File");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(file_name("https://host/files/x.pdf?dl=1"), "x.pdf");
        assert_eq!(file_type_label("https://host/files/x.pdf#page=2"), "PDF Document");
        assert_eq!(file_extension("https://drive.google.com/file/d/abc/view"), None);
    }
}
