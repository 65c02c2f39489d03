//! Error types for recipe definition, selection and loading.

use std::path::PathBuf;

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural problems found while registering a recipe.
///
/// These are fatal to recipe loading: a recipe that fails validation is
/// never registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The recipe has an empty name.
    #[error("Recipe name must not be empty")]
    EmptyName,

    /// The same axis name appears twice in `variants`.
    #[error("Recipe '{recipe}' declares variant axis '{axis}' more than once")]
    DuplicateAxis { recipe: String, axis: String },

    /// The same value appears twice on one axis.
    #[error("Recipe '{recipe}' declares value '{value}' more than once on axis '{axis}'")]
    DuplicateValue {
        recipe: String,
        axis: String,
        value: String,
    },

    /// `defaultVariants` names an axis that does not exist.
    #[error("Recipe '{recipe}' has a default for undeclared axis '{axis}'")]
    UnknownDefaultAxis { recipe: String, axis: String },

    /// `defaultVariants` picks a value the axis does not declare.
    #[error("Recipe '{recipe}' defaults axis '{axis}' to undeclared value '{value}'")]
    UnknownDefaultValue {
        recipe: String,
        axis: String,
        value: String,
    },

    /// A compound variant has no conditions at all.
    #[error("Compound variant #{index} of recipe '{recipe}' has no conditions")]
    EmptyCompoundRule { recipe: String, index: usize },

    /// A compound variant conditions on an undeclared axis.
    #[error("Compound variant #{index} of recipe '{recipe}' references undeclared axis '{axis}'")]
    UnknownCompoundAxis {
        recipe: String,
        index: usize,
        axis: String,
    },

    /// A compound variant conditions on a value the axis does not declare.
    #[error("Compound variant #{index} of '{recipe}' expects undeclared '{axis}' value '{value}'")]
    UnknownCompoundValue {
        recipe: String,
        index: usize,
        axis: String,
        value: String,
    },

    /// A compound variant lists the same axis twice.
    #[error("Compound variant #{index} of recipe '{recipe}' conditions on axis '{axis}' twice")]
    DuplicateCompoundAxis {
        recipe: String,
        index: usize,
        axis: String,
    },

    /// A registry already holds a recipe with this name.
    #[error("A recipe named '{name}' is already registered")]
    DuplicateRecipe { name: String },

    /// The resolution cache was enabled with no room for entries.
    #[error("Cache capacity must be greater than zero when caching is enabled")]
    InvalidCacheCapacity,
}

/// A caller asked for a variant combination the recipe does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The axis is not part of the recipe.
    #[error("Recipe '{recipe}' has no variant axis '{axis}'")]
    UnknownAxis { recipe: String, axis: String },

    /// The value is not declared on the axis.
    #[error("Recipe '{recipe}' has no value '{value}' on axis '{axis}'")]
    UnknownValue {
        recipe: String,
        axis: String,
        value: String,
    },

    /// A native boolean was given for an axis that is not boolean.
    #[error("Axis '{axis}' of recipe '{recipe}' does not accept boolean selections")]
    NotBoolean { recipe: String, axis: String },
}

/// Failures while reading a recipe or configuration document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed but does not describe a recipe.
    #[error("Malformed recipe in {origin}: {message}")]
    Malformed { origin: String, message: String },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported recipe format for '{path}'")]
    UnsupportedFormat { path: PathBuf },
}

impl LoadError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-document error.
    pub fn malformed(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur anywhere in the recipe system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Recipe failed structural validation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Caller selection was rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Recipe or config document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Lookup by name found nothing.
    #[error("No recipe named '{name}' is registered")]
    UnknownRecipe { name: String },
}

impl Error {
    /// Create an unknown-recipe error.
    pub fn unknown_recipe(name: impl Into<String>) -> Self {
        Self::UnknownRecipe { name: name.into() }
    }

    /// Whether this error was caused by the caller's selection.
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Selection(_))
    }

    /// Whether this error was caused by an invalid recipe or config.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
