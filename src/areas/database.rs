//! Blob store
//!
//! Stores one zlib-compressed copy of each committed file under
//! `<blobs>/<commit-id>/<filename>`. Commits record the returned
//! [`BlobLocation`] and hand it back on retrieval; the store itself never
//! checks content against the commit's recorded hash.

use crate::artifacts::database::blob_location::BlobLocation;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::SprigError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn blobs_path(&self) -> &Path {
        &self.path
    }

    /// Store `blob` as the version of `file` introduced by `commit_id`
    pub fn store(
        &self,
        commit_id: &ObjectId,
        file: &Path,
        blob: &Blob,
    ) -> anyhow::Result<BlobLocation> {
        let location = BlobLocation::new(commit_id, file);
        let blob_path = self.path.join(location.as_path());

        std::fs::create_dir_all(
            blob_path
                .parent()
                .context(format!("Invalid blob path {}", blob_path.display()))?,
        )
        .context(format!(
            "Unable to create blob directory {}",
            blob_path.display()
        ))?;

        self.write_blob(blob_path, blob.data().clone())?;
        tracing::debug!(%location, "stored blob");

        Ok(location)
    }

    /// Read back the blob stored at `location`
    ///
    /// A location that is gone or unreadable means the repository is corrupt
    /// and is reported as [`SprigError::MissingBlob`].
    pub fn retrieve(&self, location: &BlobLocation) -> anyhow::Result<Blob> {
        let blob_path = self.path.join(location.as_path());
        let missing = || SprigError::MissingBlob {
            location: location.to_string(),
        };

        if !blob_path.is_file() {
            return Err(missing().into());
        }

        let content = std::fs::read(&blob_path).map_err(|_| missing())?;
        let content = Self::decompress(content.into()).map_err(|_| missing())?;

        Ok(Blob::new(content))
    }

    fn write_blob(&self, blob_path: PathBuf, content: Bytes) -> anyhow::Result<()> {
        let blob_dir = blob_path
            .parent()
            .context(format!("Invalid blob path {}", blob_path.display()))?;
        let temp_blob_path = blob_dir.join(Self::generate_temp_name());

        let content = Self::compress(content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_blob_path)
            .context(format!(
                "Unable to open blob file {}",
                temp_blob_path.display()
            ))?;

        file.write_all(&content).context(format!(
            "Unable to write blob file {}",
            temp_blob_path.display()
        ))?;

        // rename the temp file to the blob file to make it atomic
        std::fs::rename(&temp_blob_path, &blob_path).context(format!(
            "Unable to rename blob file to {}",
            blob_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress blob content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing blob content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress blob content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!(".tmp-blob-{}", rand::random::<u32>())
    }
}
