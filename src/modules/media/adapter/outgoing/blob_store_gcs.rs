use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::media::application::ports::outgoing::{
    BlobStore, BlobStoreError, ProgressSink,
};
use crate::modules::media::application::storage_path::public_url;

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_transport_error(msg: &str) -> BlobStoreError {
    let m = msg.to_lowercase();

    if m.contains("credential")
        || m.contains("unauthenticated")
        || m.contains("permission")
        || m.contains("forbidden")
        || m.contains("denied")
    {
        BlobStoreError::NotAuthenticated
    } else if m.contains("not set") || m.contains("config") || m.contains("project id") {
        BlobStoreError::NotConfigured
    } else {
        BlobStoreError::Transport(msg.to_string())
    }
}

/// Internal seam so tests can fake the GCS wire without mocking the SDK's
/// own types and streams.
#[async_trait]
trait GcsTransport: Send + Sync {
    async fn refresh_identity(&self) -> Result<(), String>;

    async fn write_object(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        bytes: Vec<u8>,
        on_progress: ProgressSink,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String>;
}

/// Production adapter: implements the BlobStore port over GCS.
#[derive(Clone)]
pub struct GcsBlobStore {
    transport: Arc<OnceCell<Box<dyn GcsTransport>>>,
    bucket: String,
}

impl GcsBlobStore {
    /// Synchronous constructor; the client is initialized lazily on first
    /// use so startup does not require GCS reachability.
    pub fn new(bucket: String) -> Self {
        Self {
            transport: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    async fn get_transport(&self) -> Result<&dyn GcsTransport, BlobStoreError> {
        self.transport
            .get_or_try_init(|| async {
                let real = RealGcsTransport::new().await.map_err(|e| {
                    tracing::error!("failed to initialize GCS transport: {e}");
                    BlobStoreError::NotConfigured
                })?;
                Ok(Box::new(real) as Box<dyn GcsTransport>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_transport(transport: Box<dyn GcsTransport>, bucket: String) -> Self {
        let once = OnceCell::new();
        let _ = once.set(transport);
        Self {
            transport: Arc::new(once),
            bucket,
        }
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn refresh_identity(&self) -> Result<(), BlobStoreError> {
        let transport = self.get_transport().await?;
        transport
            .refresh_identity()
            .await
            .map_err(|e| map_transport_error(&e))
    }

    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        on_progress: ProgressSink,
    ) -> Result<String, BlobStoreError> {
        let transport = self.get_transport().await?;
        let bucket = bucket_resource(&self.bucket);

        transport
            .write_object(&bucket, path, content_type, bytes, on_progress)
            .await
            .map_err(|e| map_transport_error(&e))?;

        Ok(public_url(&self.bucket, path))
    }

    async fn delete(&self, path: &str) -> Result<(), BlobStoreError> {
        let transport = self.get_transport().await?;
        let bucket = bucket_resource(&self.bucket);

        transport
            .delete_object(&bucket, path)
            .await
            .map_err(|e| map_transport_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage transport (google-cloud-storage)
// ============================================================================

struct RealGcsTransport {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsTransport {
    async fn new() -> Result<Self, anyhow::Error> {
        tracing::info!("Initializing GCS transport...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                anyhow::anyhow!(e)
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                anyhow::anyhow!(e)
            })?;

        tracing::info!("GCS transport ready");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsTransport for RealGcsTransport {
    async fn refresh_identity(&self) -> Result<(), String> {
        // Rebuilding credentials forces a token refresh; an expired or
        // missing identity surfaces here instead of mid-upload.
        google_cloud_auth::credentials::Builder::default()
            .build()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn write_object(
        &self,
        bucket: &str,
        object: &str,
        _content_type: &str,
        bytes: Vec<u8>,
        on_progress: ProgressSink,
    ) -> Result<(), String> {
        on_progress(0);

        self.storage
            .write_object(
                bucket.to_string(),
                object.to_string(),
                actix_web::web::Bytes::from(bytes),
            )
            .send_buffered()
            .await
            .map_err(|e| e.to_string())?;

        // The buffered writer exposes no mid-flight callbacks; progress is
        // start/end at this seam. Granular events come from test fakes.
        on_progress(100);
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket.to_string())
            .set_object(object.to_string())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
