//! JSON output with all-or-nothing replacement of the destination.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::error::ConvertError;
use crate::core::telemetry::TRACING_TARGET_WRITER;
use crate::graph::model::GraphDocument;

/// Serializes `doc` to JSON bytes. Non-ASCII text is emitted literally.
pub fn render_graph(doc: &GraphDocument, pretty: bool) -> Result<Vec<u8>, ConvertError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    Ok(bytes)
}

/// Creates the staging file next to the destination.
///
/// On unix the file is opened with mode `0o666`, which the process umask
/// narrows exactly as a plain `File::create` would.
fn create_staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".csv2graph-").suffix(".json.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Writes `doc` to `path`, overwriting any existing file. Returns bytes written.
///
/// The document goes to a temporary sibling first and is renamed into place
/// once fully flushed, so a failed run never leaves a truncated file behind.
/// An overwritten destination keeps its permissions.
pub fn write_graph(doc: &GraphDocument, path: &Path, pretty: bool) -> Result<u64, ConvertError> {
    let output_err = |source| ConvertError::OutputError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let bytes = render_graph(doc, pretty)?;

    let mut tmp = create_staging_file(parent).map_err(output_err)?;
    tmp.write_all(&bytes).map_err(output_err)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(output_err)?;
    }
    tmp.as_file().sync_all().map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;

    tracing::info!(
        target: TRACING_TARGET_WRITER,
        path = %path.display(),
        bytes = bytes.len(),
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        "wrote graph document"
    );
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{Edge, Node};
    use tempfile::tempdir;

    fn sample() -> GraphDocument {
        GraphDocument {
            nodes: vec![Node::new("東京", "関東"), Node::new("B", "default")],
            edges: vec![Edge::new("東京", "B", "1")],
        }
    }

    #[test]
    fn test_render_emits_non_ascii_literally() {
        let text = String::from_utf8(render_graph(&sample(), false).unwrap()).unwrap();
        assert!(text.contains("東京"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_render_pretty_parses_to_same_document() {
        let pretty = render_graph(&sample(), true).unwrap();
        assert!(pretty.contains(&b'\n'));
        let back: GraphDocument = serde_json::from_slice(&pretty).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.json");
        fs::write(&path, "stale contents that are longer than nothing").unwrap();

        let written = write_graph(&sample(), &path, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.len() as u64, written);
        let back: GraphDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("no/such/dir/out.json");
        let err = write_graph(&sample(), &path, false).unwrap_err();
        assert!(matches!(err, ConvertError::OutputError { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.json");
        write_graph(&sample(), &path, true).unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_mode_of_overwritten_file() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_graph(&sample(), &path, false).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_fresh_file_gets_umask_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let reference = tmp.path().join("reference.json");
        fs::write(&reference, "{}").unwrap();
        let path = tmp.path().join("out.json");

        write_graph(&sample(), &path, false).unwrap();
        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }
}
