//! Git repository provisioning

mod provisioner;

pub use provisioner::RepositoryProvisioner;
