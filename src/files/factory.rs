use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::files::domain::FileService;
use crate::files::domain::service::FileServiceImpl;
use crate::files::repository::FileRepository;
use crate::files::repository::local_file_repository::LocalFileRepository;
use crate::files::repository::memory_file_repository::MemoryFileRepository;
use crate::gateway::factory::create_publisher;

pub(crate) fn create_file_repository(config: &Configuration) -> Box<dyn FileRepository> {
    match config.store {
        RepositoryStore::Memory => {
            Box::new(MemoryFileRepository::new())
        }
        RepositoryStore::LocalFs => {
            Box::new(LocalFileRepository::new(config.files_dir.as_path()))
        }
    }
}

pub(crate) fn create_file_service(config: &Configuration) -> Box<dyn FileService> {
    let file_repo = create_file_repository(config);
    let publisher = create_publisher(config);
    Box::new(FileServiceImpl::new(config, file_repo, publisher))
}
