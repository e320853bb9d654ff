use super::FileClassifier;

impl FileClassifier {
    /// Lowercase text after the last `.`; empty when there is none.
    pub fn extension_of(file_name: &str) -> String {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_last_segment() {
        assert_eq!(FileClassifier::extension_of("Report.PDF"), "pdf");
        assert_eq!(FileClassifier::extension_of("archive.tar.gz"), "gz");
        assert_eq!(FileClassifier::extension_of("Makefile"), "");
        assert_eq!(FileClassifier::extension_of("trailing."), "");
    }
}
