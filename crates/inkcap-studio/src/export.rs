//! Export artifacts

use inkcap_render::ExportFormat;

/// File name stem for exported composites
pub(crate) const EXPORT_FILE_STEM: &str = "creative-ai-studio-image";

/// A flattened composite ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub(crate) fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{EXPORT_FILE_STEM}.{}", format.extension()),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_carries_extension() {
        let file = ExportFile::new(ExportFormat::Png, vec![1, 2, 3]);
        assert_eq!(file.file_name, "creative-ai-studio-image.png");
        let file = ExportFile::new(ExportFormat::Jpeg, Vec::new());
        assert_eq!(file.file_name, "creative-ai-studio-image.jpeg");
    }
}
