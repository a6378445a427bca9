use actix_multipart::form::{MultipartForm, tempfile::TempFile};

/// Multipart upload carrying a CSV file under the `csv` field.
#[derive(MultipartForm)]
pub struct UploadCsvForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}
