mod direct;
mod remote;

pub use direct::DirectGateway;
pub use remote::RemoteGateway;
