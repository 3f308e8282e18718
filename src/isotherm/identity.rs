use std::fmt;

/// Type tag for every model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum IsothermKind {
    Henry,
    Langmuir,
    Freundlich,
    Jovanovic,
    DubininRadushkevich,
    Elovich,
    Sips,
    Toth,
    RedlichPeterson,
    Khan,
    Kiselev,
    FowlerGuggenheim,
    BiLangmuir,
    FritzSchlunder,
}

/// The human-readable name and type tag of an isotherm model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    pub name: &'static str,
    pub kind: IsothermKind,
}

impl Identity {
    #[must_use]
    pub const fn new(name: &'static str, kind: IsothermKind) -> Self {
        Self { name, kind }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
