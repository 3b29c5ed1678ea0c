use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{CallSite, DumpArtifact, DumpError, TensorDesc};

/// Writes descriptor and data files under a root directory:
///
/// ```text
/// <root>/<unique_id>/<arg_role>/<arg_name>_<address>.txt
/// <root>/<unique_id>/<arg_role>/<arg_name>_<address>.bin
/// ```
///
/// Files are overwritten without locking; concurrent dumps to the same path
/// leave whichever write landed last.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write(
        &self,
        site: &CallSite,
        address: &str,
        descriptor: &TensorDesc,
        payload: &[u8],
    ) -> Result<DumpArtifact, DumpError> {
        let directory = site.directory(&self.root);
        fs::create_dir_all(&directory).map_err(|source| DumpError::CreateDirectory {
            path: directory.clone(),
            source,
        })?;

        let stem = site.file_stem(address);
        let descriptor_path = directory.join(format!("{stem}.txt"));
        let data_path = directory.join(format!("{stem}.bin"));

        tracing::debug!(
            "Dumping kernel<{}> tensor <{}> to file: {}",
            site.op_name,
            address,
            descriptor_path.display()
        );
        write_file(&descriptor_path, descriptor.to_file_contents().as_bytes())?;
        write_file(&data_path, payload)?;

        Ok(DumpArtifact {
            descriptor_path,
            data_path,
        })
    }
}

fn write_file(
    path: &Path,
    contents: &[u8],
) -> Result<(), DumpError> {
    let mut file = File::create(path).map_err(|source| DumpError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents).map_err(|source| DumpError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
