pub mod init_global;
pub mod update_global;
pub mod claim;
pub mod emergency_withdrawal;

pub use init_global::*;
pub use update_global::*;
pub use claim::*;
pub use emergency_withdrawal::*;
