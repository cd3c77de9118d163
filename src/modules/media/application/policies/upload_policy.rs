/// A file as selected in the admin form, before any upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What a validated file turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Image,
    Pdf,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file exceeds the {limit_bytes} byte limit")]
    TooLarge { limit_bytes: u64 },

    #[error("file name is too long")]
    FileNameTooLong,
}

/// Client-side upload rules, enforced before any upload attempt begins.
///
/// Anything with an `image/` MIME prefix is an image; resumes must be
/// exactly `application/pdf`. Everything else is rejected at selection
/// time and never staged.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_bytes: u64,
    pub max_pdf_bytes: u64,
    pub max_file_name_len: usize,
    pub bucket_name: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "folio-cms-upload";
    pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
    pub const MAX_PDF_BYTES: u64 = 5 * 1024 * 1024;

    /// Load policy with `bucket_name` from `CONTENT_UPLOAD_BUCKET`,
    /// falling back to the default bucket.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("CONTENT_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        Self::new(bucket_name)
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(bucket_name: String) -> Self {
        Self {
            max_image_bytes: Self::MAX_IMAGE_BYTES,
            max_pdf_bytes: Self::MAX_PDF_BYTES,
            max_file_name_len: 255,
            bucket_name,
        }
    }

    pub fn validate(&self, file: &LocalFile) -> Result<FileClass, UploadRejection> {
        if file.name.len() > self.max_file_name_len {
            return Err(UploadRejection::FileNameTooLong);
        }

        let (class, limit) = if file.content_type.starts_with("image/") {
            (FileClass::Image, self.max_image_bytes)
        } else if file.content_type == "application/pdf" {
            (FileClass::Pdf, self.max_pdf_bytes)
        } else {
            return Err(UploadRejection::UnsupportedType(file.content_type.clone()));
        };

        if file.bytes.len() as u64 > limit {
            return Err(UploadRejection::TooLarge { limit_bytes: limit });
        }

        Ok(class)
    }
}
