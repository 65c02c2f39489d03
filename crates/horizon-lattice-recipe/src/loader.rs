//! Loading recipe definitions from JSON and TOML documents.
//!
//! Documents mirror the shape of a recipe declaration:
//!
//! ```toml
//! name = "menuButton"
//!
//! [base]
//! width = "40px"
//! background = "{colors.surface}"
//!
//! [base."&:hover"]
//! transform = "scale(1.05)"
//!
//! [variants.size.sm]
//! width = "32px"
//!
//! [[compoundVariants]]
//! size = "sm"
//! isOpen = true
//! css = { boxShadow = "none" }
//!
//! [defaultVariants]
//! size = "md"
//! ```
//!
//! Declaration order is preserved. String values written as `{name}` become
//! theme tokens, numbers and booleans become literals, and nested tables
//! become nested selector blocks. Every loaded definition still has to pass
//! [`define_recipe`](crate::recipe::define_recipe).

use std::path::Path;

use serde_json::{Map, Value};

use crate::Result;
use crate::error::LoadError;
use crate::logging::targets;
use crate::recipe::{
    CompoundVariant, Recipe, RecipeDefinition, VariantAxis, VariantValue, define_recipe,
};
use crate::style::{PropertyValue, StyleBlock};

/// Key holding the style block of a compound variant. Every other key is a
/// condition, so an axis may itself be called `style`.
const COMPOUND_STYLE_KEY: &str = "css";

/// Field name `toml` uses when a datetime is deserialized into a map.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Document formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl RecipeFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// Parse a recipe definition from JSON text.
pub fn from_json_str(text: &str) -> std::result::Result<RecipeDefinition, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    definition_from_value(&document, "JSON document")
}

/// Parse a recipe definition from TOML text.
pub fn from_toml_str(text: &str) -> std::result::Result<RecipeDefinition, LoadError> {
    let document: Value = toml::from_str(text)?;
    definition_from_value(&document, "TOML document")
}

/// Parse a recipe definition from text in the given format.
pub fn from_str(
    text: &str,
    format: RecipeFormat,
) -> std::result::Result<RecipeDefinition, LoadError> {
    match format {
        RecipeFormat::Json => from_json_str(text),
        RecipeFormat::Toml => from_toml_str(text),
    }
}

/// Read a recipe definition from a `.json` or `.toml` file.
pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<RecipeDefinition, LoadError> {
    let path = path.as_ref();
    let format = RecipeFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

    let definition = from_str(&text, format).map_err(|err| match err {
        LoadError::Malformed { message, .. } => {
            LoadError::malformed(path.display().to_string(), message)
        }
        other => other,
    });
    match &definition {
        Ok(def) => tracing::debug!(
            target: targets::LOADER,
            path = %path.display(),
            recipe = def.name(),
            "Loaded recipe definition"
        ),
        Err(err) => tracing::warn!(
            target: targets::LOADER,
            path = %path.display(),
            "Failed to load recipe: {}",
            err
        ),
    }
    definition
}

/// Read a recipe file and validate it into a [`Recipe`].
pub fn load_recipe(path: impl AsRef<Path>) -> Result<Recipe> {
    let definition = from_file(path)?;
    Ok(define_recipe(definition)?)
}

fn definition_from_value(
    document: &Value,
    origin: &str,
) -> std::result::Result<RecipeDefinition, LoadError> {
    let root = document
        .as_object()
        .ok_or_else(|| LoadError::malformed(origin, "top level must be a table"))?;

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| LoadError::malformed(origin, "missing string field 'name'"))?;
    let mut definition = RecipeDefinition::new(name);

    if let Some(base) = root.get("base") {
        definition = definition.base(block_from_value(base, origin, "base")?);
    }

    if let Some(variants) = root.get("variants") {
        let variants = table(variants, origin, "variants")?;
        for (axis_name, values) in variants {
            let context = format!("variants.{axis_name}");
            let mut axis = VariantAxis::new(axis_name.as_str());
            for (value, block) in table(values, origin, &context)? {
                let block = block_from_value(block, origin, &format!("{context}.{value}"))?;
                axis = axis.value(value.as_str(), block);
            }
            definition = definition.variant(axis);
        }
    }

    if let Some(rules) = field(root, &["compoundVariants", "compound_variants"]) {
        let rules = rules
            .as_array()
            .ok_or_else(|| LoadError::malformed(origin, "'compoundVariants' must be an array"))?;
        for (index, rule) in rules.iter().enumerate() {
            definition = definition.compound(compound_from_value(rule, origin, index)?);
        }
    }

    if let Some(defaults) = field(root, &["defaultVariants", "default_variants"]) {
        for (axis, value) in table(defaults, origin, "defaultVariants")? {
            let value = variant_value(value).ok_or_else(|| {
                LoadError::malformed(
                    origin,
                    format!("defaultVariants.{axis} must be a string or boolean"),
                )
            })?;
            definition = definition.default_variant(axis.as_str(), value);
        }
    }

    Ok(definition)
}

fn compound_from_value(
    rule: &Value,
    origin: &str,
    index: usize,
) -> std::result::Result<CompoundVariant, LoadError> {
    let context = format!("compoundVariants[{index}]");
    let mut compound = CompoundVariant::new();
    for (key, value) in table(rule, origin, &context)? {
        if key == COMPOUND_STYLE_KEY {
            let block = block_from_value(value, origin, &format!("{context}.{key}"))?;
            compound = compound.style(block);
            continue;
        }
        let value = variant_value(value).ok_or_else(|| {
            LoadError::malformed(origin, format!("{context}.{key} must be a string or boolean"))
        })?;
        compound = compound.when(key.as_str(), value);
    }
    Ok(compound)
}

fn block_from_value(
    value: &Value,
    origin: &str,
    context: &str,
) -> std::result::Result<StyleBlock, LoadError> {
    let mut block = StyleBlock::new();
    for (key, value) in table(value, origin, context)? {
        match value {
            Value::Object(fields) => {
                if let Some(datetime) = toml_datetime(fields) {
                    block.insert(key.as_str(), PropertyValue::literal(datetime));
                    continue;
                }
                let nested = block_from_value(value, origin, &format!("{context}.{key}"))?;
                block.insert_nested(key.as_str(), nested);
            }
            Value::String(raw) => block.insert(key.as_str(), PropertyValue::parse(raw)),
            Value::Number(number) => block.insert(key.as_str(), number.to_string()),
            Value::Bool(flag) => block.insert(key.as_str(), flag.to_string()),
            Value::Null | Value::Array(_) => {
                return Err(LoadError::malformed(
                    origin,
                    format!("{context}.{key} must be a value or a nested table"),
                ));
            }
        }
    }
    Ok(block)
}

/// Text of a TOML datetime, which reaches us as a single-field map.
fn toml_datetime(fields: &Map<String, Value>) -> Option<&str> {
    if fields.len() != 1 {
        return None;
    }
    fields.get(TOML_DATETIME_KEY).and_then(Value::as_str)
}

fn variant_value(value: &Value) -> Option<VariantValue> {
    match value {
        Value::String(value) => Some(VariantValue::from(value.as_str())),
        Value::Bool(flag) => Some(VariantValue::Bool(*flag)),
        Value::Number(number) => Some(VariantValue::Str(number.to_string())),
        _ => None,
    }
}

fn table<'a>(
    value: &'a Value,
    origin: &str,
    context: &str,
) -> std::result::Result<&'a Map<String, Value>, LoadError> {
    value
        .as_object()
        .ok_or_else(|| LoadError::malformed(origin, format!("'{context}' must be a table")))
}

fn field<'a>(root: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| root.get(*name))
}
