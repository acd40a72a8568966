pub const DEFAULT_UPLOAD_TEXT: &str = "Click to upload photos of your home's front and back";

/// Helper state of the photo upload area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Empty,
    Selected(u32),
}

impl UploadStatus {
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            UploadStatus::Empty
        } else {
            UploadStatus::Selected(count)
        }
    }

    pub fn helper_text(&self) -> String {
        match self {
            UploadStatus::Empty => DEFAULT_UPLOAD_TEXT.to_string(),
            UploadStatus::Selected(n) => format!("{} file(s) selected", n),
        }
    }

    pub fn area_class(&self) -> &'static str {
        match self {
            UploadStatus::Empty => "file-upload-area",
            UploadStatus::Selected(_) => "file-upload-area has-files",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_text_tracks_selection() {
        assert_eq!(UploadStatus::from_count(0), UploadStatus::Empty);
        assert_eq!(UploadStatus::from_count(3).helper_text(), "3 file(s) selected");
        assert_eq!(UploadStatus::Selected(1).area_class(), "file-upload-area has-files");
        assert_eq!(UploadStatus::default().helper_text(), DEFAULT_UPLOAD_TEXT);
    }
}
