use std::fmt;

use crate::error::OptimizeError;

/// Named optimization preset understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Low resolution output for on-screen viewing
    #[default]
    Screen,
    /// Medium resolution output for e-readers
    Ebook,
    /// High resolution output for desktop printing
    Print,
    /// Print output that also preserves color for prepress work
    Prepress,
}

impl Profile {
    /// Lower-case name used on the command line, in generated file names and by the engine
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Screen => "screen",
            Profile::Ebook => "ebook",
            Profile::Print => "print",
            Profile::Prepress => "prepress",
        }
    }

    /// Exact, case-sensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "screen" => Some(Profile::Screen),
            "ebook" => Some(Profile::Ebook),
            "print" => Some(Profile::Print),
            "prepress" => Some(Profile::Prepress),
            _ => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw profile-selecting inputs as they arrive from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFlags<'a> {
    pub style: Option<&'a str>,
    pub screen: bool,
    pub ebook: bool,
    pub print: bool,
    pub prepress: bool,
}

/// The single profile-selecting input that was supplied, if any.
///
/// Built from [`ProfileFlags`] so that at most one variant can ever be
/// active; supplying several selectors is rejected during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChoice {
    Unset,
    Named(Profile),
    ScreenFlag,
    EbookFlag,
    PrintFlag,
    PrepressFlag,
}

impl ProfileChoice {
    pub fn from_flags(flags: ProfileFlags<'_>) -> Result<Self, OptimizeError> {
        let named = match flags.style {
            Some(style) => Some(Profile::from_name(style).ok_or_else(|| {
                OptimizeError::invalid(format!(
                    "invalid style '{}': must be one of screen, ebook, print, prepress",
                    style
                ))
            })?),
            None => None,
        };

        // Shorthands in resolution priority order
        let candidates = [
            (named.map(ProfileChoice::Named), "--style"),
            (flags.print.then_some(ProfileChoice::PrintFlag), "--print"),
            (flags.ebook.then_some(ProfileChoice::EbookFlag), "--ebook"),
            (flags.screen.then_some(ProfileChoice::ScreenFlag), "--screen"),
            (
                flags.prepress.then_some(ProfileChoice::PrepressFlag),
                "--prepress",
            ),
        ];

        let active: Vec<(ProfileChoice, &str)> = candidates
            .into_iter()
            .filter_map(|(choice, name)| choice.map(|c| (c, name)))
            .collect();

        match active.as_slice() {
            [] => Ok(ProfileChoice::Unset),
            [(choice, _)] => Ok(*choice),
            many => {
                let names: Vec<&str> = many.iter().map(|(_, name)| *name).collect();
                Err(OptimizeError::invalid(format!(
                    "conflicting profile flags {}: only one of --style, --print, --ebook, --screen, --prepress may be given",
                    names.join(", ")
                )))
            }
        }
    }

    /// Collapse the choice into the profile handed to the engine
    pub fn resolve(self) -> Profile {
        match self {
            ProfileChoice::Unset => Profile::default(),
            ProfileChoice::Named(profile) => profile,
            ProfileChoice::ScreenFlag => Profile::Screen,
            ProfileChoice::EbookFlag => Profile::Ebook,
            ProfileChoice::PrintFlag => Profile::Print,
            ProfileChoice::PrepressFlag => Profile::Prepress,
        }
    }
}

/// Resolve the raw flag set into exactly one profile
pub fn select_profile(flags: ProfileFlags<'_>) -> Result<Profile, OptimizeError> {
    ProfileChoice::from_flags(flags).map(ProfileChoice::resolve)
}
