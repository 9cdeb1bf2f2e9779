//! External PDF optimization engine
//!
//! The engine is an opaque collaborator: it is told which profile to apply
//! (and optionally an image DPI) and then either writes a new file or
//! rewrites the input in place.

pub mod ghostscript;

use std::num::NonZeroU32;
use std::path::Path;

use crate::error::EngineError;
use crate::model::Profile;

pub use ghostscript::Ghostscript;

/// Settings handed to the engine for a single run; starts on the screen profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive {
    profile: Profile,
    image_dpi: Option<NonZeroU32>,
}

impl Directive {
    pub fn for_screen(mut self) -> Self {
        self.profile = Profile::Screen;
        self
    }

    pub fn for_ebook(mut self) -> Self {
        self.profile = Profile::Ebook;
        self
    }

    pub fn for_print(mut self) -> Self {
        self.profile = Profile::Print;
        self
    }

    pub fn for_prepress(mut self) -> Self {
        self.profile = Profile::Prepress;
        self
    }

    /// Downsample images to the given resolution instead of the profile default
    pub fn with_image_dpi(mut self, dpi: NonZeroU32) -> Self {
        self.image_dpi = Some(dpi);
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn image_dpi(&self) -> Option<NonZeroU32> {
        self.image_dpi
    }
}

impl From<Profile> for Directive {
    fn from(profile: Profile) -> Self {
        let directive = Directive::default();
        match profile {
            Profile::Screen => directive.for_screen(),
            Profile::Ebook => directive.for_ebook(),
            Profile::Print => directive.for_print(),
            Profile::Prepress => directive.for_prepress(),
        }
    }
}

/// Black-box PDF optimizer
pub trait OptimizationEngine {
    /// Optimize `input` and write the result to `output`
    fn optimize(&self, directive: &Directive, input: &Path, output: &Path)
        -> Result<(), EngineError>;

    /// Optimize `path` and replace it with the result
    fn optimize_in_place(&self, directive: &Directive, path: &Path) -> Result<(), EngineError>;
}
