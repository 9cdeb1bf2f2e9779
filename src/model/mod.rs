pub mod profile;
pub mod request;

pub use profile::{select_profile, Profile, ProfileChoice, ProfileFlags};
pub use request::{positive_dpi, resolve_output_path, InvocationRequest, SizeSample};
