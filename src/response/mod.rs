mod load;
mod response;
mod result;

pub use load::LoadError;
pub use load::load;
pub use response::ErrorResponse;
pub use response::Response;
pub use response::ServerError;
pub use response::ServerErrorLocation;
pub use result::NoValueForField;
pub use result::ResultObject;
pub use result::ResultValue;
