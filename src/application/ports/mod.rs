mod file_gateways;
mod property_gateway;

pub use file_gateways::{
    DeleteFileGateway, FileReader, GetFileGateway, StorageError, UploadFileGateway,
};
pub use property_gateway::{PropertyGateway, RepositoryError};

#[cfg(test)]
pub use file_gateways::{MockDeleteFileGateway, MockGetFileGateway, MockUploadFileGateway};
#[cfg(test)]
pub use property_gateway::MockPropertyGateway;
