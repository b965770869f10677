//! File content snapshot
//!
//! A blob is the raw content of one file. Its identity is the SHA-1 of the
//! bytes, which is what commits record in their tracked-file index.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn object_id(&self) -> ObjectId {
        ObjectId::for_content(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Blob::new(data.into())
    }
}
