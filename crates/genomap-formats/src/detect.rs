use crate::FileFormat;

/// Auto-detect file format from content
pub fn detect_format(content: &str) -> FileFormat {
    if content.trim_start().starts_with("LOCUS") {
        FileFormat::GenBank
    } else {
        FileFormat::Unknown
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> FileFormat {
    let lower = path.to_lowercase();
    let is_genbank = [".gb", ".gbk", ".gbff", ".genbank"]
        .iter()
        .any(|ext| lower.ends_with(ext));

    if is_genbank {
        FileFormat::GenBank
    } else {
        FileFormat::Unknown
    }
}
