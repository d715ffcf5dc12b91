//! Multipart upload construction
//!
//! Builds the file part for object creation. The file is opened before any
//! network activity, streamed into the part, and the handle is owned by the
//! part's stream, so it is closed on every exit path: open failure, send
//! failure, or normal completion.

use std::path::Path;

use futures::TryStreamExt as _;
use reqwest::Body;
use reqwest::multipart::Part;
use tokio_util::codec::{BytesCodec, FramedRead};

use rp_core::{Error, Result};

/// Open a local file and wrap it in a streaming multipart part
///
/// The part's filename is the base name of the path; the content type is
/// guessed from the extension, falling back to application/octet-stream.
/// An open failure is a transport error raised before any request is sent.
pub(crate) async fn file_part(path: &Path) -> Result<Part> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidArgument(format!("Not a file path: {}", path.display())))?;

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| Error::Transport(format!("Cannot open {}: {e}", path.display())))?;
    let length = file
        .metadata()
        .await
        .map_err(|e| Error::Transport(format!("Cannot stat {}: {e}", path.display())))?
        .len();

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let stream = FramedRead::new(file, BytesCodec::new()).map_ok(bytes::BytesMut::freeze);

    Part::stream_with_length(Body::wrap_stream(stream), length)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(|e| Error::Transport(format!("Invalid content type for upload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[tokio::test]
    async fn test_file_part_from_existing_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(b"hello").unwrap();

        assert!(file_part(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_file_part_missing_file_is_transport_error() {
        let err = file_part(Path::new("/no/such/file.bin")).await.unwrap_err();
        assert!(err.is_transport());
    }
}
