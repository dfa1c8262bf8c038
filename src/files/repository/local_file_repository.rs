use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use crate::core::library::{LibraryError, LibraryResult};
use crate::files::dto::{FileContentDto, StoredFileDto};
use crate::files::repository::FileRepository;

// LocalFileRepository keeps every file directly under one directory, named by
// its upload name. Writes are serialized; reads go straight to the filesystem.
#[derive(Debug)]
pub struct LocalFileRepository {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalFileRepository {
    pub(crate) fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    // a name must be a single plain path component inside the root
    fn resolve(&self, name: &str) -> LibraryResult<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == name => Ok(self.root.join(part)),
            _ => Err(LibraryError::malformed_name(format!("cannot resolve file name {:?}", name).as_str())),
        }
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn list_files(&self) -> LibraryResult<Vec<StoredFileDto>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(LibraryError::from(err)),
        };
        let mut files = vec![];
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                files.push(StoredFileDto::new(name, metadata.len()));
            }
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    async fn store(&self, name: &str, content: &[u8]) -> LibraryResult<StoredFileDto> {
        let path = self.resolve(name)?;
        let _guard = self.write_lock.lock().await;
        fs::create_dir_all(&self.root).await?;
        fs::write(&path, content).await?;
        Ok(StoredFileDto::new(name, content.len() as u64))
    }

    async fn load(&self, name: &str) -> LibraryResult<FileContentDto> {
        let path = self.resolve(name)?;
        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(LibraryError::not_found(format!("file not found for {}", name).as_str())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LibraryError::not_found(format!("file not found for {}", name).as_str()));
            }
            Err(err) => return Err(LibraryError::from(err)),
        }
        let content = fs::read(&path).await?;
        Ok(FileContentDto::new(name, content))
    }
}
