use std::io::{self, Read};

use anyhow::{ensure, Context, Result};
use zip::{read::ZipFile, ZipArchive};

// Word's "web page" export is usually shipped zipped together with its
// *_files directory.
pub struct ZipReader<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + io::Seek> ZipReader<R> {
    pub fn new(reader: R) -> Result<ZipReader<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open")?;
        Ok(ZipReader { archive })
    }

    fn len(&self) -> usize {
        self.archive.len()
    }

    fn get_by_index(&mut self, index: usize) -> Result<ZipEntry> {
        self.archive
            .by_index(index)
            .with_context(|| format!("Failed to open at {}", index))
            .map(|file| ZipEntry { file })
    }

    /// Bytes of the only entry whose name ends with one of `extensions`.
    pub fn read_single(&mut self, extensions: &[&str]) -> Result<Vec<u8>> {
        let mut found = None;
        for i in 0..self.len() {
            let mut entry = self.get_by_index(i)?;
            let name = entry.name().to_lowercase();
            if !extensions.iter().any(|ext| name.ends_with(ext)) {
                continue;
            }

            ensure!(
                found.is_none(),
                "More than one {:?} file in archive",
                extensions
            );
            found = Some(entry.as_bytes()?);
        }

        found.with_context(|| format!("No {:?} file in archive", extensions))
    }
}

pub struct ZipEntry<'a> {
    file: ZipFile<'a>,
}

impl ZipEntry<'_> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn as_bytes(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::<u8>::new();
        self.file
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", self.name()))?;

        Ok(data)
    }
}
